use anyhow::Result;

use crate::contracts::agents::{parse_entries, PEEK_SIZE};
use crate::mcp::types::{PeekAgentsDbArgs, ReadAgentsDbArgs, SearchAgentsDbArgs};
use crate::mcp::ToolContext;

pub async fn run_log(
    context: ToolContext,
    limit: i64,
    search: Option<String>,
    peek: bool,
) -> Result<()> {
    let text = match search {
        Some(query) => {
            println!("Entries matching '{}' (newest first):\n", query);
            context.invoke(SearchAgentsDbArgs { query, limit }).await
        }
        None if peek => {
            println!("Latest {} entries:\n", PEEK_SIZE);
            context.invoke(PeekAgentsDbArgs {}).await
        }
        None => {
            println!("Latest {} entries (newest first):\n", limit);
            context.invoke(ReadAgentsDbArgs { limit }).await
        }
    };

    match parse_entries(&text) {
        Some(entries) if entries.is_empty() => println!("No entries."),
        Some(entries) => {
            for entry in &entries {
                println!("{}", entry);
            }
            let claims = entries.iter().filter(|e| e.holds_semaphore()).count();
            if claims > 0 {
                let noun = if claims == 1 { "entry" } else { "entries" };
                println!("\n🔒 {} {} with claimed resources", claims, noun);
            }
        }
        // Errors and unrecognised shapes are shown as the backend sent them
        None => println!("{}", text),
    }

    Ok(())
}
