//! Data contracts for the two stateful sub-protocols.
//!
//! The backend stores and interprets everything; this module owns the
//! field shapes the adapter sends, plus the record shapes it documents
//! to callers. Tool results are still passed through as raw text. The
//! record types are only used by the CLI renderers.

pub mod agents;
pub mod checkpoints;

use serde::de::DeserializeOwned;
use serde::Deserialize;

/// A record list as the backend may return it: a bare array, or an
/// object wrapping the array under a known key.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RecordList<T> {
    Bare(Vec<T>),
    Wrapped {
        #[serde(alias = "entries", alias = "checkpoints", alias = "results")]
        items: Vec<T>,
    },
}

/// Parse backend text into records, or `None` if it is not a record list.
pub(crate) fn parse_records<T: DeserializeOwned>(text: &str) -> Option<Vec<T>> {
    match serde_json::from_str::<RecordList<T>>(text).ok()? {
        RecordList::Bare(items) | RecordList::Wrapped { items } => Some(items),
    }
}
