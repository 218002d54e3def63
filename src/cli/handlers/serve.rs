use anyhow::Result;
use colored::Colorize;

use super::CommandContext;
use crate::graphql::run_server;

pub fn handle_serve(ctx: CommandContext) -> Result<()> {
    let addr = ctx.config.server.socket_addr()?;
    let schema = ctx.schema();

    println!(
        "{} GraphQL server on {}",
        "Starting".green(),
        format!("http://{}", addr).cyan()
    );
    println!("GraphiQL: http://{}", addr);

    tokio::runtime::Runtime::new()?.block_on(async { run_server(schema, addr).await })?;
    Ok(())
}
