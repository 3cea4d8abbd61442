//! Process-wide adapter configuration.
//!
//! Built once at startup from CLI flags and environment, then shared by
//! reference. Nothing here changes for the lifetime of the process.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::time::Duration;
use url::Url;

/// Environment variable selecting the Tool Executor base URL
pub const SERVER_URL_ENV: &str = "TOOL_EXECUTOR_URL";

/// Environment variable for an optional per-request timeout
pub const TIMEOUT_ENV: &str = "TOOL_EXECUTOR_TIMEOUT_SECS";

/// Base URL used when `TOOL_EXECUTOR_URL` is unset
pub const DEFAULT_SERVER_URL: &str = "http://localhost:9091";

/// Immutable adapter configuration
#[derive(Debug, Clone)]
pub struct Config {
    server_url: String,
    working_dir: PathBuf,
    timeout: Option<Duration>,
}

impl Config {
    /// Build a configuration, validating the backend URL.
    ///
    /// A trailing `/` on the base URL is dropped so that routes (which all
    /// start with `/`) can be appended directly.
    pub fn new(server_url: &str, working_dir: PathBuf, timeout_secs: Option<u64>) -> Result<Self> {
        let parsed = Url::parse(server_url)
            .with_context(|| format!("Invalid Tool Executor URL: {}", server_url))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            anyhow::bail!(
                "Unsupported scheme '{}' in Tool Executor URL: {}",
                parsed.scheme(),
                server_url
            );
        }

        Ok(Self {
            server_url: server_url.trim_end_matches('/').to_string(),
            working_dir,
            timeout: timeout_secs.map(Duration::from_secs),
        })
    }

    /// Build a configuration anchored at the current process directory.
    pub fn from_process(server_url: &str, timeout_secs: Option<u64>) -> Result<Self> {
        let working_dir =
            std::env::current_dir().context("Failed to determine current working directory")?;
        Self::new(server_url, working_dir, timeout_secs)
    }

    pub fn server_url(&self) -> &str {
        &self.server_url
    }

    /// Directory relative paths are resolved against
    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}
