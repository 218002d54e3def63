use anyhow::Result;

use super::{CommandContext, execute};

pub fn handle_mutate(
    ctx: CommandContext,
    mutation: String,
    variables: Option<String>,
) -> Result<()> {
    // Auto-wrap in mutation { } unless a full operation was given
    let query = if mutation.trim_start().starts_with("mutation") {
        mutation
    } else {
        format!("mutation {{ {} }}", mutation)
    };
    let output = execute(&ctx.schema(), &query, variables)?;
    println!("{}", output);
    Ok(())
}
