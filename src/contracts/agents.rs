//! Agent Coordination Log contract.
//!
//! The log is an append-only, time-ordered list of status entries that
//! agents use to announce what they are doing and which resources they
//! hold. Nothing here enforces exclusivity: a `semaphore` is a claim that
//! other agents are expected to respect.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Entries returned by `read_agents_db` when no limit is given
pub const DEFAULT_READ_LIMIT: i64 = 20;

/// Entries returned by `peek_agents_db`
pub const PEEK_SIZE: i64 = 5;

/// Body of `POST /agents/update`: one entry to append
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AgentUpdate {
    pub alias: String,
    pub intent: String,
    pub status: String,
    /// Claimed resources, empty when nothing is held
    pub semaphore: String,
    pub notes: String,
}

/// Body of `POST /agents/read`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReadLog {
    pub limit: i64,
}

/// Body of `POST /agents/peek` (always `{}`; the backend fixes the size)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PeekLog {}

/// Body of `POST /agents/search`
///
/// Matching is done by the backend over alias, intent and notes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchLog {
    pub query: String,
    pub limit: i64,
}

/// One log entry as returned by read, peek and search.
///
/// Reads are documented to callers as newest first. The adapter never
/// reorders what the backend returns.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AgentLogEntry {
    #[serde(default)]
    pub id: Option<serde_json::Value>,
    pub alias: String,
    #[serde(default)]
    pub intent: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub semaphore: String,
    #[serde(default)]
    pub notes: String,
    /// Assigned by the backend on append
    #[serde(default, alias = "created_at")]
    pub timestamp: Option<String>,
}

impl AgentLogEntry {
    pub fn holds_semaphore(&self) -> bool {
        !self.semaphore.trim().is_empty()
    }
}

impl fmt::Display for AgentLogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.id {
            Some(serde_json::Value::String(id)) => write!(f, "#{} ", id)?,
            Some(id) => write!(f, "#{} ", id)?,
            None => {}
        }
        if let Some(ts) = &self.timestamp {
            write!(f, "{} ", ts)?;
        }
        write!(f, "[{}] {}: {}", self.status, self.alias, self.intent)?;
        if self.holds_semaphore() {
            write!(f, " (holds: {})", self.semaphore)?;
        }
        if !self.notes.is_empty() {
            write!(f, " - {}", self.notes)?;
        }
        Ok(())
    }
}

/// Parse read/peek/search output into entries, if it has that shape.
pub fn parse_entries(text: &str) -> Option<Vec<AgentLogEntry>> {
    super::parse_records(text)
}
