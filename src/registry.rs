//! Static catalog of the tools this server exposes.
//!
//! Tool names and backend routes are a published contract: agents learn
//! them and keep calling them. Entries may be added, descriptions and
//! optional parameters may grow, but a name or route never changes.

use crate::contracts::{agents, checkpoints};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolId {
    CleanBackups,
    SearchText,
    FindFiles,
    ReadDirectory,
    ReadFile,
    WriteFile,
    ReplaceWholeWord,
    ReplaceText,
    UpdateAgentsDb,
    ReadAgentsDb,
    PeekAgentsDb,
    SearchAgentsDb,
    AgentCommit,
    AgentPush,
    AgentGitRmCached,
    AgentCheckpoint,
    ListCheckpoints,
    AgentDiff,
    AgentRollback,
}

/// How a parameter is treated on the way out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    /// Resolved to an absolute path before sending
    Path,
    Text,
    Integer,
}

impl ParamKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Path => "path",
            Self::Text => "text",
            Self::Integer => "integer",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamDefault {
    Text(&'static str),
    Integer(i64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamSpec {
    pub name: &'static str,
    pub kind: ParamKind,
    /// `None` means the parameter is required
    pub default: Option<ParamDefault>,
}

impl ParamSpec {
    const fn required(name: &'static str, kind: ParamKind) -> Self {
        Self {
            name,
            kind,
            default: None,
        }
    }

    const fn optional(name: &'static str, kind: ParamKind, default: ParamDefault) -> Self {
        Self {
            name,
            kind,
            default: Some(default),
        }
    }

    pub fn is_required(&self) -> bool {
        self.default.is_none()
    }
}

mod params {
    use super::ParamKind::{Integer, Path, Text};
    use super::{agents, checkpoints, ParamDefault, ParamSpec};

    const PATH: ParamSpec = ParamSpec::required("path", Path);
    const NOTES: ParamSpec = ParamSpec::optional("notes", Text, ParamDefault::Text(""));
    const AGENT_LIMIT: ParamSpec = ParamSpec::optional(
        "limit",
        Integer,
        ParamDefault::Integer(agents::DEFAULT_READ_LIMIT),
    );

    pub(super) const PATH_ONLY: &[ParamSpec] = &[PATH];
    pub(super) const PATH_PATTERN: &[ParamSpec] =
        &[PATH, ParamSpec::required("pattern", Text)];
    pub(super) const WRITE_FILE: &[ParamSpec] = &[PATH, ParamSpec::required("content", Text)];
    pub(super) const REPLACE_WHOLE_WORD: &[ParamSpec] = &[
        PATH,
        ParamSpec::required("old_word", Text),
        ParamSpec::required("new_word", Text),
    ];
    pub(super) const REPLACE_TEXT: &[ParamSpec] = &[
        PATH,
        ParamSpec::required("old_text", Text),
        ParamSpec::required("new_text", Text),
    ];
    pub(super) const UPDATE_AGENTS_DB: &[ParamSpec] = &[
        ParamSpec::required("alias", Text),
        ParamSpec::required("intent", Text),
        ParamSpec::required("status", Text),
        ParamSpec::optional("semaphore", Text, ParamDefault::Text("")),
        NOTES,
    ];
    pub(super) const READ_AGENTS_DB: &[ParamSpec] = &[AGENT_LIMIT];
    pub(super) const SEARCH_AGENTS_DB: &[ParamSpec] =
        &[ParamSpec::required("query", Text), AGENT_LIMIT];
    pub(super) const AGENT_COMMIT: &[ParamSpec] = &[PATH, ParamSpec::required("context", Text)];
    pub(super) const AGENT_GIT_RM_CACHED: &[ParamSpec] =
        &[PATH, ParamSpec::required("file_path", Path)];
    pub(super) const AGENT_CHECKPOINT: &[ParamSpec] =
        &[PATH, ParamSpec::required("alias", Text), NOTES];
    pub(super) const LIST_CHECKPOINTS: &[ParamSpec] = &[
        PATH,
        ParamSpec::optional(
            "limit",
            Integer,
            ParamDefault::Integer(checkpoints::DEFAULT_LIST_LIMIT),
        ),
    ];
    pub(super) const AGENT_DIFF: &[ParamSpec] = &[
        PATH,
        ParamSpec::required("base_checkpoint", Text),
        ParamSpec::required("target_checkpoint", Text),
    ];
    pub(super) const AGENT_ROLLBACK: &[ParamSpec] =
        &[PATH, ParamSpec::required("checkpoint_id", Text)];
}

impl ToolId {
    /// Every published tool, in catalog order
    pub const ALL: [ToolId; 19] = [
        ToolId::CleanBackups,
        ToolId::SearchText,
        ToolId::FindFiles,
        ToolId::ReadDirectory,
        ToolId::ReadFile,
        ToolId::WriteFile,
        ToolId::ReplaceWholeWord,
        ToolId::ReplaceText,
        ToolId::UpdateAgentsDb,
        ToolId::ReadAgentsDb,
        ToolId::PeekAgentsDb,
        ToolId::SearchAgentsDb,
        ToolId::AgentCommit,
        ToolId::AgentPush,
        ToolId::AgentGitRmCached,
        ToolId::AgentCheckpoint,
        ToolId::ListCheckpoints,
        ToolId::AgentDiff,
        ToolId::AgentRollback,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::CleanBackups => "clean_backups",
            Self::SearchText => "search_text",
            Self::FindFiles => "find_files",
            Self::ReadDirectory => "read_directory",
            Self::ReadFile => "read_file",
            Self::WriteFile => "write_file",
            Self::ReplaceWholeWord => "replace_whole_word",
            Self::ReplaceText => "replace_text",
            Self::UpdateAgentsDb => "update_agents_db",
            Self::ReadAgentsDb => "read_agents_db",
            Self::PeekAgentsDb => "peek_agents_db",
            Self::SearchAgentsDb => "search_agents_db",
            Self::AgentCommit => "agent_commit",
            Self::AgentPush => "agent_push",
            Self::AgentGitRmCached => "agent_git_rm_cached",
            Self::AgentCheckpoint => "agent_checkpoint",
            Self::ListCheckpoints => "list_checkpoints",
            Self::AgentDiff => "agent_diff",
            Self::AgentRollback => "agent_rollback",
        }
    }

    /// Backend route, appended verbatim to the configured base URL
    pub fn route(self) -> &'static str {
        match self {
            Self::CleanBackups => "/clean-backups",
            Self::SearchText => "/search-text",
            Self::FindFiles => "/find-files",
            Self::ReadDirectory => "/read-directory",
            Self::ReadFile => "/read",
            Self::WriteFile => "/write",
            Self::ReplaceWholeWord => "/replace-word",
            Self::ReplaceText => "/replace-text",
            Self::UpdateAgentsDb => "/agents/update",
            Self::ReadAgentsDb => "/agents/read",
            Self::PeekAgentsDb => "/agents/peek",
            Self::SearchAgentsDb => "/agents/search",
            Self::AgentCommit => "/git/commit",
            Self::AgentPush => "/git/push",
            Self::AgentGitRmCached => "/git/rm-cached",
            Self::AgentCheckpoint => "/git/checkpoint",
            Self::ListCheckpoints => "/git/checkpoints/list",
            Self::AgentDiff => "/git/diff",
            Self::AgentRollback => "/git/rollback",
        }
    }

    /// Parameters as the calling agent sees them (not the wire key names)
    pub fn params(self) -> &'static [ParamSpec] {
        match self {
            Self::CleanBackups | Self::ReadDirectory | Self::ReadFile | Self::AgentPush => {
                params::PATH_ONLY
            }
            Self::SearchText | Self::FindFiles => params::PATH_PATTERN,
            Self::WriteFile => params::WRITE_FILE,
            Self::ReplaceWholeWord => params::REPLACE_WHOLE_WORD,
            Self::ReplaceText => params::REPLACE_TEXT,
            Self::UpdateAgentsDb => params::UPDATE_AGENTS_DB,
            Self::ReadAgentsDb => params::READ_AGENTS_DB,
            Self::PeekAgentsDb => &[],
            Self::SearchAgentsDb => params::SEARCH_AGENTS_DB,
            Self::AgentCommit => params::AGENT_COMMIT,
            Self::AgentGitRmCached => params::AGENT_GIT_RM_CACHED,
            Self::AgentCheckpoint => params::AGENT_CHECKPOINT,
            Self::ListCheckpoints => params::LIST_CHECKPOINTS,
            Self::AgentDiff => params::AGENT_DIFF,
            Self::AgentRollback => params::AGENT_ROLLBACK,
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tool| tool.name() == name)
    }
}

impl std::fmt::Display for ToolId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
