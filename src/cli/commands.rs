use crate::config::{IdMode, ServerSettings};
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "bookshelf")]
#[command(author, version, about = "An in-memory books and authors GraphQL API")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file (searches upward for .bookshelf.yml by default)
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// How new ids are assigned (overrides config)
    #[arg(long, global = true, value_enum)]
    pub id_mode: Option<IdModeArg>,

    /// Start with empty collections instead of the seed data
    #[arg(long, global = true)]
    pub no_seed: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Also write JSON logs to this file (rotated daily)
    #[arg(long, global = true)]
    pub log_file: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the GraphQL server
    Serve {
        /// Address to bind
        #[arg(long, env = "BOOKSHELF_HOST")]
        host: Option<String>,

        /// Port to listen on
        #[arg(short, long, env = "BOOKSHELF_PORT")]
        port: Option<u16>,
    },

    /// Execute a GraphQL query against a fresh store
    Query {
        /// GraphQL query string
        query: String,

        /// Variables as JSON
        #[arg(long)]
        variables: Option<String>,
    },

    /// Execute a GraphQL mutation against a fresh store
    Mutate {
        /// Mutation body (without 'mutation' keyword)
        mutation: String,

        /// Variables as JSON
        #[arg(long)]
        variables: Option<String>,
    },

    /// Print the GraphQL schema (SDL)
    Schema,
}

impl Commands {
    /// Server settings with command-line overrides applied.
    pub fn server_settings(&self, base: &ServerSettings) -> ServerSettings {
        let mut settings = base.clone();
        if let Commands::Serve { host, port } = self {
            if let Some(h) = host {
                settings.host = h.clone();
            }
            if let Some(p) = port {
                settings.port = *p;
            }
        }
        settings
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum IdModeArg {
    Random,
    Sequential,
}

impl From<IdModeArg> for IdMode {
    fn from(m: IdModeArg) -> Self {
        match m {
            IdModeArg::Random => IdMode::Random,
            IdModeArg::Sequential => IdMode::Sequential,
        }
    }
}
