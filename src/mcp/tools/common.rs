//! Common utilities for MCP tools.

use rmcp::model::{CallToolResult, Content};

/// Wrap tool output for the MCP client.
///
/// Failures are reported as text in a successful result; agents read the
/// text to tell a backend answer from an error.
pub fn tool_text(text: impl Into<String>) -> CallToolResult {
    CallToolResult::success(vec![Content::text(text.into())])
}
