//! Git and checkpoint tools.

use crate::api::types::{CommitRequest, PathRequest, RmCachedRequest};
use crate::canonicalize::Canonicalizer;
use crate::contracts::checkpoints::{
    CreateCheckpoint, DiffCheckpoints, ListCheckpoints, Rollback,
};
use crate::error::AdapterError;
use crate::mcp::types::*;
use crate::registry::ToolId;

use super::ToolArgs;

impl ToolArgs for AgentCommitArgs {
    const TOOL: ToolId = ToolId::AgentCommit;
    type Body = CommitRequest;

    fn into_body(self, canon: &Canonicalizer) -> Result<CommitRequest, AdapterError> {
        Ok(CommitRequest {
            path: canon.absolute("path", &self.path)?,
            context: self.context,
        })
    }
}

impl ToolArgs for AgentPushArgs {
    const TOOL: ToolId = ToolId::AgentPush;
    type Body = PathRequest;

    fn into_body(self, canon: &Canonicalizer) -> Result<PathRequest, AdapterError> {
        Ok(PathRequest {
            path: canon.absolute("path", &self.path)?,
        })
    }
}

impl ToolArgs for AgentGitRmCachedArgs {
    const TOOL: ToolId = ToolId::AgentGitRmCached;
    type Body = RmCachedRequest;

    fn into_body(self, canon: &Canonicalizer) -> Result<RmCachedRequest, AdapterError> {
        Ok(RmCachedRequest {
            path: canon.absolute("path", &self.path)?,
            file_path: canon.absolute("file_path", &self.file_path)?,
        })
    }
}

impl ToolArgs for AgentCheckpointArgs {
    const TOOL: ToolId = ToolId::AgentCheckpoint;
    type Body = CreateCheckpoint;

    fn into_body(self, canon: &Canonicalizer) -> Result<CreateCheckpoint, AdapterError> {
        Ok(CreateCheckpoint {
            path: canon.absolute("path", &self.path)?,
            alias: self.alias,
            notes: self.notes,
        })
    }
}

impl ToolArgs for ListCheckpointsArgs {
    const TOOL: ToolId = ToolId::ListCheckpoints;
    type Body = ListCheckpoints;

    fn into_body(self, canon: &Canonicalizer) -> Result<ListCheckpoints, AdapterError> {
        Ok(ListCheckpoints {
            path: canon.absolute("path", &self.path)?,
            limit: self.limit,
        })
    }
}

impl ToolArgs for AgentDiffArgs {
    const TOOL: ToolId = ToolId::AgentDiff;
    type Body = DiffCheckpoints;

    fn into_body(self, canon: &Canonicalizer) -> Result<DiffCheckpoints, AdapterError> {
        Ok(DiffCheckpoints {
            path: canon.absolute("path", &self.path)?,
            base: self.base_checkpoint,
            target: self.target_checkpoint,
        })
    }
}

impl ToolArgs for AgentRollbackArgs {
    const TOOL: ToolId = ToolId::AgentRollback;
    type Body = Rollback;

    fn into_body(self, canon: &Canonicalizer) -> Result<Rollback, AdapterError> {
        Ok(Rollback {
            path: canon.absolute("path", &self.path)?,
            checkpoint_id: self.checkpoint_id,
        })
    }
}
