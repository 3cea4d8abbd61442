//! Request bodies for the file, search and git routes.
//!
//! Field names here are the wire names the Tool Executor expects, which
//! are not always the names agents use (`old_word` goes out as `old`).
//! Every `path` has already been made absolute.

use serde::Serialize;

/// Body for routes that only take a location
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathRequest {
    pub path: String,
}

/// Search and find-files body
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatternRequest {
    pub path: String,
    pub pattern: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WriteRequest {
    pub path: String,
    pub content: String,
}

/// Shared by whole-word and plain text replacement
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplaceRequest {
    pub path: String,
    pub old: String,
    pub new: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommitRequest {
    pub path: String,
    /// What the change was for; the backend writes the message from it
    pub context: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RmCachedRequest {
    pub path: String,
    pub file_path: String,
}
