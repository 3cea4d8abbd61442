use anyhow::Result;
use std::sync::Arc;

use crate::mcp::{ToolContext, ToolExecutorMcpServer};
use crate::registry::{ParamDefault, ToolId};

/// Parameter list as shown to a human, e.g. `query: text, limit?: integer = 20`
fn signature(tool: ToolId) -> String {
    tool.params()
        .iter()
        .map(|param| {
            let marker = if param.is_required() { "" } else { "?" };
            let typed = format!("{}{}: {}", param.name, marker, param.kind.as_str());
            match param.default {
                None => typed,
                Some(ParamDefault::Integer(n)) => format!("{} = {}", typed, n),
                Some(ParamDefault::Text(s)) => format!("{} = {:?}", typed, s),
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

pub async fn run_tools(context: ToolContext) -> Result<()> {
    let base_url = context.client().base_url().to_string();
    let server = ToolExecutorMcpServer::new(Arc::new(context));
    let advertised = server.tools();

    println!("Tool Executor: {}\n", base_url);

    for tool in ToolId::ALL {
        let summary = advertised
            .iter()
            .find(|t| t.name == tool.name())
            .and_then(|t| t.description.as_deref())
            .and_then(|d| d.lines().next())
            .unwrap_or_default();

        println!("{}({})", tool.name(), signature(tool));
        println!("    POST {}", tool.route());
        if !summary.is_empty() {
            println!("    {}", summary);
        }
    }

    println!("\n{} tools", ToolId::ALL.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signature() {
        assert_eq!(
            signature(ToolId::SearchAgentsDb),
            "query: text, limit?: integer = 20"
        );
        assert_eq!(signature(ToolId::PeekAgentsDb), "");
        assert_eq!(
            signature(ToolId::AgentCheckpoint),
            r#"path: path, alias: text, notes?: text = """#
        );
    }
}
