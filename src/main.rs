use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use bookshelf::cli::handlers::{
    CommandContext, handle_mutate, handle_query, handle_schema, handle_serve,
};
use bookshelf::cli::{Cli, Commands};
use bookshelf::config::BookshelfConfig;
use bookshelf::logging;

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose, cli.log_file.as_ref().map(PathBuf::from));

    let mut config = load_config(cli.config.as_deref())?;
    if let Some(mode) = cli.id_mode {
        config.store.id_mode = mode.into();
    }
    if cli.no_seed {
        config.store.seed = false;
    }

    config.server = cli.command.server_settings(&config.server);
    let ctx = CommandContext::new(config);

    match cli.command {
        Commands::Serve { .. } => handle_serve(ctx),
        Commands::Query { query, variables } => handle_query(ctx, query, variables),
        Commands::Mutate {
            mutation,
            variables,
        } => handle_mutate(ctx, mutation, variables),
        Commands::Schema => handle_schema(ctx),
    }
}

fn load_config(explicit: Option<&str>) -> Result<BookshelfConfig> {
    match explicit {
        Some(path) => BookshelfConfig::load(Path::new(path))
            .with_context(|| format!("Failed to load config from {}", path)),
        None => {
            let cwd = std::env::current_dir()?;
            BookshelfConfig::discover(&cwd).context("Failed to load bookshelf configuration")
        }
    }
}
