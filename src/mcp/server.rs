//! MCP server implementation.
//!
//! This module contains the ToolExecutorMcpServer struct and its tool
//! routing. Tool names and descriptions here are what agents see; the
//! matching routes live in the registry.

use rmcp::{
    handler::server::router::tool::ToolRouter, handler::server::wrapper::Parameters, model::*,
    tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler,
};
use std::sync::Arc;

use super::tools::{tool_text, ToolArgs, ToolContext};
use super::types::*;

/// Tool Executor MCP Server
#[derive(Clone)]
pub struct ToolExecutorMcpServer {
    context: Arc<ToolContext>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl ToolExecutorMcpServer {
    /// Create a new server around a shared tool context
    pub fn new(context: Arc<ToolContext>) -> Self {
        Self {
            context,
            tool_router: Self::tool_router(),
        }
    }

    /// Tools advertised to MCP clients
    pub fn tools(&self) -> Vec<Tool> {
        self.tool_router.list_all()
    }

    async fn run<A: ToolArgs>(&self, args: A) -> Result<CallToolResult, McpError> {
        Ok(tool_text(self.context.invoke(args).await))
    }

    #[tool(
        name = "clean_backups",
        description = "Recursively deletes all .bak files starting from a directory.\n\nThe Tool Executor keeps a .bak copy of every file it writes or edits. Use this to clear them out once you are satisfied with your changes. Relative paths are resolved against the server's working directory."
    )]
    async fn clean_backups(
        &self,
        Parameters(args): Parameters<CleanBackupsArgs>,
    ) -> Result<CallToolResult, McpError> {
        self.run(args).await
    }

    #[tool(
        name = "search_text",
        description = "Recursively searches for a text pattern in file contents.\n\nReturns the matching files and lines under the given path. Use this to find where an identifier or string is used before editing."
    )]
    async fn search_text(
        &self,
        Parameters(args): Parameters<SearchTextArgs>,
    ) -> Result<CallToolResult, McpError> {
        self.run(args).await
    }

    #[tool(
        name = "find_files",
        description = "Recursively finds files whose names match a pattern, starting from a directory."
    )]
    async fn find_files(
        &self,
        Parameters(args): Parameters<FindFilesArgs>,
    ) -> Result<CallToolResult, McpError> {
        self.run(args).await
    }

    #[tool(
        name = "read_directory",
        description = "Lists files and subdirectories within a directory (not recursive)."
    )]
    async fn read_directory(
        &self,
        Parameters(args): Parameters<ReadDirectoryArgs>,
    ) -> Result<CallToolResult, McpError> {
        self.run(args).await
    }

    #[tool(
        name = "read_file",
        description = "Reads the content of a file from the workspace."
    )]
    async fn read_file(
        &self,
        Parameters(args): Parameters<ReadFileArgs>,
    ) -> Result<CallToolResult, McpError> {
        self.run(args).await
    }

    #[tool(
        name = "write_file",
        description = "Writes content to a file with mandatory headers and backups.\n\nThe whole file is replaced. A .bak copy of the previous version is kept (see clean_backups). Check the coordination log for a semaphore on the file before writing to it."
    )]
    async fn write_file(
        &self,
        Parameters(args): Parameters<WriteFileArgs>,
    ) -> Result<CallToolResult, McpError> {
        self.run(args).await
    }

    #[tool(
        name = "replace_whole_word",
        description = "Replaces a whole word in a file, respecting alphanumeric boundaries.\n\nOnly standalone occurrences are replaced: replacing `id` leaves `identifier` alone. Prefer this over replace_text for renaming identifiers."
    )]
    async fn replace_whole_word(
        &self,
        Parameters(args): Parameters<ReplaceWholeWordArgs>,
    ) -> Result<CallToolResult, McpError> {
        self.run(args).await
    }

    #[tool(
        name = "replace_text",
        description = "Performs global text replacement in a file.\n\nEvery exact occurrence of old_text is replaced, including inside longer words."
    )]
    async fn replace_text(
        &self,
        Parameters(args): Parameters<ReplaceTextArgs>,
    ) -> Result<CallToolResult, McpError> {
        self.run(args).await
    }

    #[tool(
        name = "update_agents_db",
        description = "Updates the shared Agent Coordination Database with a new entry.\n\nEntries are append-only and visible to every agent sharing this Tool Executor. Post one when you start, change or finish a piece of work:\n* alias: a stable name for yourself\n* intent: what you are doing\n* status: a state label such as PLANNING, EXECUTING, BLOCKED or COMPLETED\n* semaphore: files or directories you are claiming, so other agents leave them alone (empty when you hold nothing)\n* notes: anything else other agents should know\n\nClaims are a convention, not a lock: release them by posting a new entry with an empty semaphore."
    )]
    async fn update_agents_db(
        &self,
        Parameters(args): Parameters<UpdateAgentsDbArgs>,
    ) -> Result<CallToolResult, McpError> {
        self.run(args).await
    }

    #[tool(
        name = "read_agents_db",
        description = "Reads the most recent entries from the Agent Coordination Database, newest first.\n\nRead this before starting work to see what other agents are doing and which resources they have claimed."
    )]
    async fn read_agents_db(
        &self,
        Parameters(args): Parameters<ReadAgentsDbArgs>,
    ) -> Result<CallToolResult, McpError> {
        self.run(args).await
    }

    #[tool(
        name = "peek_agents_db",
        description = "Peeks at the 5 most recent entries from the Agent Coordination Database, newest first."
    )]
    async fn peek_agents_db(
        &self,
        Parameters(args): Parameters<PeekAgentsDbArgs>,
    ) -> Result<CallToolResult, McpError> {
        self.run(args).await
    }

    #[tool(
        name = "search_agents_db",
        description = "Searches the Agent Coordination Database for specific keywords.\n\nMatches against alias, intent and notes. Useful to find who touched a file or when a checkpoint was taken."
    )]
    async fn search_agents_db(
        &self,
        Parameters(args): Parameters<SearchAgentsDbArgs>,
    ) -> Result<CallToolResult, McpError> {
        self.run(args).await
    }

    #[tool(
        name = "agent_commit",
        description = "Generates a high-integrity commit message and applies it.\n\nDescribe the change in context; the Tool Executor writes the message from it and the current diff, then commits."
    )]
    async fn agent_commit(
        &self,
        Parameters(args): Parameters<AgentCommitArgs>,
    ) -> Result<CallToolResult, McpError> {
        self.run(args).await
    }

    #[tool(
        name = "agent_push",
        description = "Pushes local commits to the remote repository."
    )]
    async fn agent_push(
        &self,
        Parameters(args): Parameters<AgentPushArgs>,
    ) -> Result<CallToolResult, McpError> {
        self.run(args).await
    }

    #[tool(
        name = "agent_git_rm_cached",
        description = "Removes a file from the git index without deleting it from disk (git rm --cached).\n\nUse this to stop tracking files that should be ignored, such as build output. Relative paths, including file_path, are resolved against the server's working directory."
    )]
    async fn agent_git_rm_cached(
        &self,
        Parameters(args): Parameters<AgentGitRmCachedArgs>,
    ) -> Result<CallToolResult, McpError> {
        self.run(args).await
    }

    #[tool(
        name = "agent_checkpoint",
        description = "Creates a temporary checkpoint commit and logs it to the database.\n\nThe checkpoint captures the whole working tree, staged and unstaged changes alike, without touching the branch history. Take one before any risky change so you can return to it with agent_rollback. The event is recorded in the Agent Coordination Database under your alias."
    )]
    async fn agent_checkpoint(
        &self,
        Parameters(args): Parameters<AgentCheckpointArgs>,
    ) -> Result<CallToolResult, McpError> {
        self.run(args).await
    }

    #[tool(
        name = "list_checkpoints",
        description = "Retrieves a list of recent checkpoints for a specific repository, newest first."
    )]
    async fn list_checkpoints(
        &self,
        Parameters(args): Parameters<ListCheckpointsArgs>,
    ) -> Result<CallToolResult, McpError> {
        self.run(args).await
    }

    #[tool(
        name = "agent_diff",
        description = "Shows the difference between two checkpoints of a repository.\n\nThe checkpoints may be given in either order. Use list_checkpoints to find their identifiers."
    )]
    async fn agent_diff(
        &self,
        Parameters(args): Parameters<AgentDiffArgs>,
    ) -> Result<CallToolResult, McpError> {
        self.run(args).await
    }

    #[tool(
        name = "agent_rollback",
        description = "Restores the repository to a previous checkpoint state.\n\nThe working tree is replaced with the checkpoint's snapshot. Checkpoints are never deleted, so rolling back is safe to repeat and you can still roll forward to a later checkpoint."
    )]
    async fn agent_rollback(
        &self,
        Parameters(args): Parameters<AgentRollbackArgs>,
    ) -> Result<CallToolResult, McpError> {
        self.run(args).await
    }
}

#[tool_handler]
impl ServerHandler for ToolExecutorMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "tool_executor".to_string(),
                title: None,
                version: env!("CARGO_PKG_VERSION").to_string(),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Tool Executor MCP Server provides file, search, git checkpoint and agent coordination tools. Every tool returns text; errors are reported as text starting with 'Error' or 'Invalid'."
                    .to_string(),
            ),
        }
    }
}
