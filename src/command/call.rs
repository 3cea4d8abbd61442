use anyhow::{Context, Result};
use serde_json::Value;

use crate::mcp::ToolContext;

pub async fn run_call(context: ToolContext, tool: &str, args: &str) -> Result<()> {
    let args: Value =
        serde_json::from_str(args).with_context(|| format!("--args is not valid JSON: {}", args))?;
    if !args.is_object() {
        anyhow::bail!("--args must be a JSON object, got: {}", args);
    }

    let result = context.invoke_by_name(tool, args).await;
    println!("{}", result);

    Ok(())
}
