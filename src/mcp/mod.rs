//! MCP (Model Context Protocol) server implementation using rmcp.
//!
//! Exposes the Tool Executor's file, search, git checkpoint and agent
//! coordination operations as MCP tools over stdio. Each tool call is
//! forwarded to the executor and its reply returned as text.

mod handlers;
mod server;
pub mod tools;
pub mod types;

pub use handlers::run_mcp_server;
pub use server::ToolExecutorMcpServer;
pub use tools::ToolContext;
