use clap::{Parser, Subcommand};

use crate::config::{DEFAULT_SERVER_URL, SERVER_URL_ENV, TIMEOUT_ENV};

/// Tool Executor MCP server - file, search, git and agent coordination tools
#[derive(Parser, Debug)]
#[command(name = "tool-executor-mcp")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Tool Executor base URL
    #[arg(long, env = SERVER_URL_ENV, default_value = DEFAULT_SERVER_URL, global = true)]
    pub server_url: String,

    /// Per-request timeout in seconds (no timeout when unset)
    #[arg(long, env = TIMEOUT_ENV, global = true)]
    pub timeout_secs: Option<u64>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run as MCP server over stdio (default)
    Serve,
    /// List the tools this server exposes
    Tools,
    /// Invoke a single tool and print its result
    Call {
        /// Tool name, e.g. read_file
        tool: String,

        /// Arguments as a JSON object
        #[arg(long, default_value = "{}")]
        args: String,
    },
    /// Show recent Agent Coordination Database entries
    Log {
        /// Maximum number of entries
        #[arg(short, long, default_value_t = crate::contracts::agents::DEFAULT_READ_LIMIT)]
        limit: i64,

        /// Only entries matching this keyword
        #[arg(short, long)]
        search: Option<String>,

        /// Show only the latest few entries
        #[arg(long, conflicts_with_all = ["limit", "search"])]
        peek: bool,
    },
    /// Show recent checkpoints for a repository
    Checkpoints {
        /// Repository path
        #[arg(default_value = ".")]
        path: String,

        /// Maximum number of checkpoints
        #[arg(short, long, default_value_t = crate::contracts::checkpoints::DEFAULT_LIST_LIMIT)]
        limit: i64,
    },
}
