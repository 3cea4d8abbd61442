//! Stdio entry point for the MCP server.

use anyhow::{Context, Result};
use rmcp::{transport::stdio, ServiceExt};
use std::sync::Arc;
use tracing::info;

use super::server::ToolExecutorMcpServer;
use super::tools::ToolContext;

/// Serve the tool catalog on stdin/stdout until the client hangs up.
pub async fn run_mcp_server(context: ToolContext) -> Result<()> {
    let base_url = context.client().base_url().to_string();
    let server = ToolExecutorMcpServer::new(Arc::new(context));
    info!(
        "🔧 Tool Executor MCP server: {} tools -> {}",
        server.tools().len(),
        base_url
    );

    let service = server
        .serve(stdio())
        .await
        .context("MCP handshake on stdio failed")?;

    let reason = service
        .waiting()
        .await
        .context("MCP session ended abnormally")?;

    info!("👋 MCP client disconnected ({:?})", reason);
    Ok(())
}
