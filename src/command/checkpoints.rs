use anyhow::Result;

use crate::contracts::checkpoints::parse_checkpoints;
use crate::mcp::types::ListCheckpointsArgs;
use crate::mcp::ToolContext;

pub async fn run_checkpoints(context: ToolContext, path: String, limit: i64) -> Result<()> {
    let text = context
        .invoke(ListCheckpointsArgs {
            path: path.clone(),
            limit,
        })
        .await;

    match parse_checkpoints(&text) {
        Some(records) if records.is_empty() => println!("No checkpoints for {}.", path),
        Some(records) => {
            // The backend reports the resolved repository path; fall back to the input
            let repo = records
                .iter()
                .find_map(|r| r.path.as_deref())
                .unwrap_or(path.as_str());
            println!("Checkpoints for {} (newest first):\n", repo);
            for (i, record) in records.iter().enumerate() {
                let marker = if i == 0 { "*" } else { " " };
                println!("{} {}", marker, record);
            }
        }
        None => println!("{}", text),
    }

    Ok(())
}
