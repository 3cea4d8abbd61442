//! Agent Coordination Log tools.

use crate::canonicalize::Canonicalizer;
use crate::contracts::agents::{AgentUpdate, PeekLog, ReadLog, SearchLog};
use crate::error::AdapterError;
use crate::mcp::types::*;
use crate::registry::ToolId;

use super::ToolArgs;

impl ToolArgs for UpdateAgentsDbArgs {
    const TOOL: ToolId = ToolId::UpdateAgentsDb;
    type Body = AgentUpdate;

    fn into_body(self, _canon: &Canonicalizer) -> Result<AgentUpdate, AdapterError> {
        Ok(AgentUpdate {
            alias: self.alias,
            intent: self.intent,
            status: self.status,
            semaphore: self.semaphore,
            notes: self.notes,
        })
    }
}

impl ToolArgs for ReadAgentsDbArgs {
    const TOOL: ToolId = ToolId::ReadAgentsDb;
    type Body = ReadLog;

    fn into_body(self, _canon: &Canonicalizer) -> Result<ReadLog, AdapterError> {
        Ok(ReadLog { limit: self.limit })
    }
}

impl ToolArgs for PeekAgentsDbArgs {
    const TOOL: ToolId = ToolId::PeekAgentsDb;
    type Body = PeekLog;

    fn into_body(self, _canon: &Canonicalizer) -> Result<PeekLog, AdapterError> {
        Ok(PeekLog {})
    }
}

impl ToolArgs for SearchAgentsDbArgs {
    const TOOL: ToolId = ToolId::SearchAgentsDb;
    type Body = SearchLog;

    fn into_body(self, _canon: &Canonicalizer) -> Result<SearchLog, AdapterError> {
        Ok(SearchLog {
            query: self.query,
            limit: self.limit,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_update_fills_optional_fields() {
        let args: UpdateAgentsDbArgs = serde_json::from_value(json!({
            "alias": "reviewer",
            "intent": "review parser changes",
            "status": "PLANNING"
        }))
        .unwrap();
        let body = args.into_body(&Canonicalizer::new("/work")).unwrap();
        assert_eq!(body.semaphore, "");
        assert_eq!(body.notes, "");
        assert_eq!(body.status, "PLANNING");
    }

    #[test]
    fn test_status_is_open_ended() {
        let args: UpdateAgentsDbArgs = serde_json::from_value(json!({
            "alias": "a",
            "intent": "i",
            "status": "WAITING_ON_HUMAN",
            "semaphore": "src/parser.rs"
        }))
        .unwrap();
        let body = args.into_body(&Canonicalizer::new("/work")).unwrap();
        assert_eq!(body.status, "WAITING_ON_HUMAN");
        assert_eq!(body.semaphore, "src/parser.rs");
    }

    #[test]
    fn test_limits_default_to_twenty() {
        let read: ReadAgentsDbArgs = serde_json::from_value(json!({})).unwrap();
        assert_eq!(read.limit, 20);

        let search: SearchAgentsDbArgs =
            serde_json::from_value(json!({"query": "rollback"})).unwrap();
        assert_eq!(search.limit, 20);

        let search: SearchAgentsDbArgs =
            serde_json::from_value(json!({"query": "rollback", "limit": 5})).unwrap();
        let body = search.into_body(&Canonicalizer::new("/work")).unwrap();
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"query": "rollback", "limit": 5})
        );
    }

    #[test]
    fn test_out_of_range_limit_is_forwarded() {
        let read: ReadAgentsDbArgs = serde_json::from_value(json!({"limit": -1})).unwrap();
        let body = read.into_body(&Canonicalizer::new("/work")).unwrap();
        assert_eq!(serde_json::to_value(&body).unwrap(), json!({"limit": -1}));

        let list: ListCheckpointsArgs =
            serde_json::from_value(json!({"path": "repo", "limit": 0})).unwrap();
        let body = list.into_body(&Canonicalizer::new("/work")).unwrap();
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"path": "/work/repo", "limit": 0})
        );
    }
}
