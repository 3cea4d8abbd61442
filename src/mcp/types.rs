//! MCP tool parameter types.
//!
//! These types are used with rmcp's `Parameters<T>` wrapper for automatic
//! deserialization and JSON schema generation. Field names are the names
//! agents call with; see `api::types` and `contracts` for what goes out.

use schemars::JsonSchema;
use serde::Deserialize;

use crate::contracts::{agents, checkpoints};

fn default_agent_limit() -> i64 {
    agents::DEFAULT_READ_LIMIT
}

fn default_checkpoint_limit() -> i64 {
    checkpoints::DEFAULT_LIST_LIMIT
}

/// Parameters for the clean_backups tool
#[derive(Debug, Deserialize, JsonSchema)]
pub struct CleanBackupsArgs {
    /// Directory to clean, searched recursively
    pub path: String,
}

/// Parameters for the search_text tool
#[derive(Debug, Deserialize, JsonSchema)]
pub struct SearchTextArgs {
    /// File or directory to search
    pub path: String,
    /// Text to look for in file contents
    pub pattern: String,
}

/// Parameters for the find_files tool
#[derive(Debug, Deserialize, JsonSchema)]
pub struct FindFilesArgs {
    /// Directory to search from
    pub path: String,
    /// File name pattern to match
    pub pattern: String,
}

/// Parameters for the read_directory tool
#[derive(Debug, Deserialize, JsonSchema)]
pub struct ReadDirectoryArgs {
    /// Directory to list
    pub path: String,
}

/// Parameters for the read_file tool
#[derive(Debug, Deserialize, JsonSchema)]
pub struct ReadFileArgs {
    /// File to read
    pub path: String,
}

/// Parameters for the write_file tool
#[derive(Debug, Deserialize, JsonSchema)]
pub struct WriteFileArgs {
    /// File to write
    pub path: String,
    /// Full new content of the file
    pub content: String,
}

/// Parameters for the replace_whole_word tool
#[derive(Debug, Deserialize, JsonSchema)]
pub struct ReplaceWholeWordArgs {
    /// File to edit
    pub path: String,
    /// Word to replace
    pub old_word: String,
    /// Replacement word
    pub new_word: String,
}

/// Parameters for the replace_text tool
#[derive(Debug, Deserialize, JsonSchema)]
pub struct ReplaceTextArgs {
    /// File to edit
    pub path: String,
    /// Exact text to replace, every occurrence
    pub old_text: String,
    /// Replacement text
    pub new_text: String,
}

/// Parameters for the update_agents_db tool
#[derive(Debug, Deserialize, JsonSchema)]
pub struct UpdateAgentsDbArgs {
    /// Your agent alias
    pub alias: String,
    /// What you are about to do or are doing
    pub intent: String,
    /// State label, e.g. PLANNING, EXECUTING, COMPLETED
    pub status: String,
    /// Resources you are claiming (files, directories), empty if none
    #[serde(default)]
    pub semaphore: String,
    /// Free-form notes for other agents
    #[serde(default)]
    pub notes: String,
}

/// Parameters for the read_agents_db tool
#[derive(Debug, Deserialize, JsonSchema)]
pub struct ReadAgentsDbArgs {
    /// Maximum number of entries to return
    #[serde(default = "default_agent_limit")]
    pub limit: i64,
}

/// Parameters for the peek_agents_db tool (no arguments needed)
#[derive(Debug, Deserialize, JsonSchema)]
pub struct PeekAgentsDbArgs {}

/// Parameters for the search_agents_db tool
#[derive(Debug, Deserialize, JsonSchema)]
pub struct SearchAgentsDbArgs {
    /// Keyword matched against alias, intent and notes
    pub query: String,
    /// Maximum number of entries to return
    #[serde(default = "default_agent_limit")]
    pub limit: i64,
}

/// Parameters for the agent_commit tool
#[derive(Debug, Deserialize, JsonSchema)]
pub struct AgentCommitArgs {
    /// Repository path
    pub path: String,
    /// What the change does and why, used to write the commit message
    pub context: String,
}

/// Parameters for the agent_push tool
#[derive(Debug, Deserialize, JsonSchema)]
pub struct AgentPushArgs {
    /// Repository path
    pub path: String,
}

/// Parameters for the agent_git_rm_cached tool
#[derive(Debug, Deserialize, JsonSchema)]
pub struct AgentGitRmCachedArgs {
    /// Repository path
    pub path: String,
    /// File to stop tracking, relative to the working directory or absolute
    pub file_path: String,
}

/// Parameters for the agent_checkpoint tool
#[derive(Debug, Deserialize, JsonSchema)]
pub struct AgentCheckpointArgs {
    /// Repository path
    pub path: String,
    /// Your agent alias
    pub alias: String,
    /// What state this checkpoint captures
    #[serde(default)]
    pub notes: String,
}

/// Parameters for the list_checkpoints tool
#[derive(Debug, Deserialize, JsonSchema)]
pub struct ListCheckpointsArgs {
    /// Repository path
    pub path: String,
    /// Maximum number of checkpoints to return
    #[serde(default = "default_checkpoint_limit")]
    pub limit: i64,
}

/// Parameters for the agent_diff tool
#[derive(Debug, Deserialize, JsonSchema)]
pub struct AgentDiffArgs {
    /// Repository path
    pub path: String,
    /// Checkpoint to diff from
    pub base_checkpoint: String,
    /// Checkpoint to diff to
    pub target_checkpoint: String,
}

/// Parameters for the agent_rollback tool
#[derive(Debug, Deserialize, JsonSchema)]
pub struct AgentRollbackArgs {
    /// Repository path
    pub path: String,
    /// Checkpoint to restore
    pub checkpoint_id: String,
}
