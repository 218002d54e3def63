use anyhow::Result;

use super::{CommandContext, execute};

pub fn handle_query(ctx: CommandContext, query: String, variables: Option<String>) -> Result<()> {
    let output = execute(&ctx.schema(), &query, variables)?;
    println!("{}", output);
    Ok(())
}
