//! Checkpoint workflow contract.
//!
//! A checkpoint snapshots a repository's whole working tree, staged and
//! unstaged, into a commit-like object kept apart from normal history.
//! Checkpoints are immutable. Rolling back restores a snapshot into the
//! working tree and leaves every checkpoint in place, so it can be
//! repeated safely.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Checkpoints returned by `list_checkpoints` when no limit is given
pub const DEFAULT_LIST_LIMIT: i64 = 10;

/// Body of `POST /git/checkpoint`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateCheckpoint {
    pub path: String,
    pub alias: String,
    pub notes: String,
}

/// Body of `POST /git/checkpoints/list`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListCheckpoints {
    pub path: String,
    pub limit: i64,
}

/// Body of `POST /git/diff`
///
/// `base` and `target` are forwarded in the order given. Either order is
/// valid; the backend reports unknown identifiers itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiffCheckpoints {
    pub path: String,
    pub base: String,
    pub target: String,
}

/// Body of `POST /git/rollback`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rollback {
    pub path: String,
    pub checkpoint_id: String,
}

/// One checkpoint as listed by the backend, newest first.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CheckpointRecord {
    #[serde(alias = "checkpoint_id")]
    pub id: String,
    #[serde(default, alias = "repo_path")]
    pub path: Option<String>,
    #[serde(default)]
    pub alias: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default, alias = "created_at")]
    pub timestamp: Option<String>,
    /// Underlying commit-like object
    #[serde(default, alias = "commit_hash", alias = "sha")]
    pub commit: Option<String>,
}

impl fmt::Display for CheckpointRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)?;
        if let Some(commit) = &self.commit {
            write!(f, " ({})", commit)?;
        }
        if let Some(ts) = &self.timestamp {
            write!(f, " {}", ts)?;
        }
        if !self.alias.is_empty() {
            write!(f, " by {}", self.alias)?;
        }
        if !self.notes.is_empty() {
            write!(f, " - {}", self.notes)?;
        }
        Ok(())
    }
}

/// Parse `list_checkpoints` output, if it has the record list shape.
pub fn parse_checkpoints(text: &str) -> Option<Vec<CheckpointRecord>> {
    super::parse_records(text)
}
