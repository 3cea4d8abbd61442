use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod api;
mod canonicalize;
mod cli;
mod command;
mod config;
mod contracts;
mod error;
mod mcp;
mod registry;

use cli::{Cli, Commands};
use config::Config;
use mcp::ToolContext;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging. Stdout carries the MCP protocol, so logs go to stderr.
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_process(&cli.server_url, cli.timeout_secs)?;
    let context = ToolContext::new(&config)?;

    match cli.command {
        None | Some(Commands::Serve) => mcp::run_mcp_server(context).await,
        Some(Commands::Tools) => command::run_tools(context).await,
        Some(Commands::Call { tool, args }) => command::run_call(context, &tool, &args).await,
        Some(Commands::Log {
            limit,
            search,
            peek,
        }) => command::run_log(context, limit, search, peek).await,
        Some(Commands::Checkpoints { path, limit }) => {
            command::run_checkpoints(context, path, limit).await
        }
    }
}
