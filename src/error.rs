//! Adapter error types.
//!
//! Every failure a tool call can hit ends up as text in the tool result.
//! Internally the failures stay structured until [`render`] flattens them.

use thiserror::Error;

/// Outcome of a single tool call: backend text or a local failure
pub type ToolOutcome = Result<String, AdapterError>;

#[derive(Debug, Error)]
pub enum AdapterError {
    /// A path argument could not be made absolute
    #[error("Invalid path for parameter '{param}' ({path}): {reason}")]
    InvalidPath {
        param: &'static str,
        path: String,
        reason: &'static str,
    },

    /// The backend could not be reached or gave nothing readable back
    #[error("Error connecting to Tool Executor at {url}: {cause}")]
    Transport { url: String, cause: String },

    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Invalid arguments for tool '{tool}': {reason}")]
    InvalidArguments { tool: &'static str, reason: String },
}

impl AdapterError {
    pub fn invalid_path(param: &'static str, path: &str, reason: &'static str) -> Self {
        Self::InvalidPath {
            param,
            path: path.escape_debug().to_string(),
            reason,
        }
    }

    pub fn transport(url: impl Into<String>, cause: impl ToString) -> Self {
        Self::Transport {
            url: url.into(),
            cause: cause.to_string(),
        }
    }

    /// True for failures detected before anything was sent
    pub fn is_local(&self) -> bool {
        !matches!(self, Self::Transport { .. })
    }
}

/// Flatten an outcome into the text handed back to the calling agent.
pub fn render(outcome: ToolOutcome) -> String {
    match outcome {
        Ok(text) => text,
        Err(err) => err.to_string(),
    }
}
