//! MCP tool implementations.
//!
//! Every tool goes through the same three steps: map the typed arguments
//! to a wire body (resolving paths on the way), POST it to the tool's
//! route, and render whatever came back as text.

mod agents;
mod common;
mod files;
mod git;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::time::Instant;
use tracing::info;

use crate::api::ExecutorClient;
use crate::canonicalize::Canonicalizer;
use crate::config::Config;
use crate::error::{render, AdapterError, ToolOutcome};
use crate::registry::ToolId;

use super::types::*;

pub use common::tool_text;

/// Typed arguments for one tool
pub trait ToolArgs: DeserializeOwned + Send {
    const TOOL: ToolId;

    /// Wire body sent to `TOOL.route()`
    type Body: Serialize + Send + Sync;

    /// Map arguments to the wire body. Only path resolution can fail.
    fn into_body(self, canon: &Canonicalizer) -> Result<Self::Body, AdapterError>;
}

/// Everything a tool call needs, shared by all calls
pub struct ToolContext {
    client: ExecutorClient,
    canonicalizer: Canonicalizer,
}

impl ToolContext {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        Ok(Self {
            client: ExecutorClient::new(config)?,
            canonicalizer: Canonicalizer::new(config.working_dir()),
        })
    }

    pub fn client(&self) -> &ExecutorClient {
        &self.client
    }

    /// Run one tool call without flattening the outcome
    pub async fn execute<A: ToolArgs>(&self, args: A) -> ToolOutcome {
        let body = args.into_body(&self.canonicalizer)?;
        self.client.post(A::TOOL.route(), &body).await
    }

    /// Run one tool call and return the text the agent sees
    pub async fn invoke<A: ToolArgs>(&self, args: A) -> String {
        let start_time = Instant::now();
        let outcome = self.execute(args).await;
        let duration_ms = start_time.elapsed().as_millis() as u64;

        match &outcome {
            Ok(text) => info!(
                "🔧 {} {} -> {} bytes in {}ms",
                A::TOOL,
                A::TOOL.route(),
                text.len(),
                duration_ms
            ),
            Err(e) if e.is_local() => info!("🔧 {} rejected locally: {}", A::TOOL, e),
            Err(_) => info!("🔧 {} {} failed after {}ms", A::TOOL, A::TOOL.route(), duration_ms),
        }

        render(outcome)
    }

    /// Invoke a tool by name with a JSON argument object
    pub async fn invoke_by_name(&self, name: &str, args: Value) -> String {
        let Some(tool) = ToolId::from_name(name) else {
            return render(Err(AdapterError::UnknownTool(name.to_string())));
        };

        match tool {
            ToolId::CleanBackups => self.invoke_json::<CleanBackupsArgs>(args).await,
            ToolId::SearchText => self.invoke_json::<SearchTextArgs>(args).await,
            ToolId::FindFiles => self.invoke_json::<FindFilesArgs>(args).await,
            ToolId::ReadDirectory => self.invoke_json::<ReadDirectoryArgs>(args).await,
            ToolId::ReadFile => self.invoke_json::<ReadFileArgs>(args).await,
            ToolId::WriteFile => self.invoke_json::<WriteFileArgs>(args).await,
            ToolId::ReplaceWholeWord => self.invoke_json::<ReplaceWholeWordArgs>(args).await,
            ToolId::ReplaceText => self.invoke_json::<ReplaceTextArgs>(args).await,
            ToolId::UpdateAgentsDb => self.invoke_json::<UpdateAgentsDbArgs>(args).await,
            ToolId::ReadAgentsDb => self.invoke_json::<ReadAgentsDbArgs>(args).await,
            ToolId::PeekAgentsDb => self.invoke_json::<PeekAgentsDbArgs>(args).await,
            ToolId::SearchAgentsDb => self.invoke_json::<SearchAgentsDbArgs>(args).await,
            ToolId::AgentCommit => self.invoke_json::<AgentCommitArgs>(args).await,
            ToolId::AgentPush => self.invoke_json::<AgentPushArgs>(args).await,
            ToolId::AgentGitRmCached => self.invoke_json::<AgentGitRmCachedArgs>(args).await,
            ToolId::AgentCheckpoint => self.invoke_json::<AgentCheckpointArgs>(args).await,
            ToolId::ListCheckpoints => self.invoke_json::<ListCheckpointsArgs>(args).await,
            ToolId::AgentDiff => self.invoke_json::<AgentDiffArgs>(args).await,
            ToolId::AgentRollback => self.invoke_json::<AgentRollbackArgs>(args).await,
        }
    }

    async fn invoke_json<A: ToolArgs>(&self, args: Value) -> String {
        // `null` is how a caller with nothing to pass usually says so
        let args = if args.is_null() {
            Value::Object(Default::default())
        } else {
            args
        };

        match serde_json::from_value::<A>(args) {
            Ok(args) => self.invoke(args).await,
            Err(e) => render(Err(AdapterError::InvalidArguments {
                tool: A::TOOL.name(),
                reason: e.to_string(),
            })),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn context(url: &str, working_dir: &Path) -> ToolContext {
        let config = Config::new(url, working_dir.to_path_buf(), None).unwrap();
        ToolContext::new(&config).unwrap()
    }

    fn unreachable_url() -> String {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);
        format!("http://127.0.0.1:{}", port)
    }

    /// Minimal valid arguments for each tool, with relative paths
    fn sample_args(tool: ToolId) -> Value {
        let mut args = serde_json::Map::new();
        for param in tool.params().iter().filter(|p| p.is_required()) {
            let value = match param.name {
                "path" => json!("work/repo"),
                "file_path" => json!("src/generated.rs"),
                other => json!(format!("{}-value", other)),
            };
            args.insert(param.name.to_string(), value);
        }
        Value::Object(args)
    }

    async fn echo_backend() -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"status":"ok"}"#))
            .mount(&server)
            .await;
        server
    }

    async fn last_body(server: &MockServer) -> (String, Value) {
        let requests = server.received_requests().await.unwrap();
        let request = requests.last().unwrap();
        (request.url.path().to_string(), request.body_json().unwrap())
    }

    #[tokio::test]
    async fn test_write_file_scenario() {
        let dir = TempDir::new().unwrap();
        let server = echo_backend().await;
        let ctx = context(&server.uri(), dir.path());

        let result = ctx
            .invoke(WriteFileArgs {
                path: "notes.txt".to_string(),
                content: "hello".to_string(),
            })
            .await;
        assert_eq!(result, r#"{"status":"ok"}"#);

        let (route, body) = last_body(&server).await;
        assert_eq!(route, "/write");
        let sent_path = body["path"].as_str().unwrap();
        assert!(Path::new(sent_path).is_absolute());
        assert!(sent_path.ends_with("notes.txt"));
        assert_eq!(PathBuf::from(sent_path), dir.path().join("notes.txt"));
        assert_eq!(body["content"], "hello");
    }

    #[tokio::test]
    async fn test_every_path_is_sent_absolute() {
        let dir = TempDir::new().unwrap();
        let server = echo_backend().await;
        let ctx = context(&server.uri(), dir.path());
        let expected = dir.path().join("work/repo");

        for tool in ToolId::ALL {
            let result = ctx.invoke_by_name(tool.name(), sample_args(tool)).await;
            assert_eq!(result, r#"{"status":"ok"}"#, "{tool}");

            let (route, body) = last_body(&server).await;
            assert_eq!(route, tool.route(), "{tool}");
            if tool.params().iter().any(|p| p.name == "path") {
                assert_eq!(
                    PathBuf::from(body["path"].as_str().unwrap()),
                    expected,
                    "{tool}"
                );
            } else {
                assert!(body.get("path").is_none(), "{tool}");
            }
        }
    }

    #[tokio::test]
    async fn test_unreachable_backend_for_every_tool() {
        let dir = TempDir::new().unwrap();
        let url = unreachable_url();
        let ctx = context(&url, dir.path());

        for tool in ToolId::ALL {
            let result = ctx.invoke_by_name(tool.name(), sample_args(tool)).await;
            let prefix = format!(
                "Error connecting to Tool Executor at {}{}: ",
                url,
                tool.route()
            );
            assert!(result.starts_with(&prefix), "{tool}: {result}");
        }
    }

    #[tokio::test]
    async fn test_search_agents_db_unreachable_scenario() {
        let dir = TempDir::new().unwrap();
        let url = unreachable_url();
        let ctx = context(&url, dir.path());

        let result = ctx
            .invoke(SearchAgentsDbArgs {
                query: "rollback".to_string(),
                limit: 5,
            })
            .await;
        assert!(result.starts_with(&format!(
            "Error connecting to Tool Executor at {}/agents/search: ",
            url
        )));
    }

    #[tokio::test]
    async fn test_invalid_path_never_reaches_backend() {
        let dir = TempDir::new().unwrap();
        let server = echo_backend().await;
        let ctx = context(&server.uri(), dir.path());

        let result = ctx
            .invoke(ReadFileArgs {
                path: "bad\0name".to_string(),
            })
            .await;
        assert!(result.starts_with("Invalid path for parameter 'path'"));
        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_tool_and_bad_arguments() {
        let dir = TempDir::new().unwrap();
        let server = echo_backend().await;
        let ctx = context(&server.uri(), dir.path());

        let result = ctx.invoke_by_name("format_disk", json!({})).await;
        assert_eq!(result, "Unknown tool: format_disk");

        let result = ctx.invoke_by_name("write_file", json!({"path": "x"})).await;
        assert!(result.starts_with("Invalid arguments for tool 'write_file'"));
        assert!(result.contains("content"));

        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_null_arguments_for_parameterless_tool() {
        let dir = TempDir::new().unwrap();
        let server = echo_backend().await;
        let ctx = context(&server.uri(), dir.path());

        let result = ctx.invoke_by_name("peek_agents_db", Value::Null).await;
        assert_eq!(result, r#"{"status":"ok"}"#);
        let (route, body) = last_body(&server).await;
        assert_eq!(route, "/agents/peek");
        assert_eq!(body, json!({}));
    }
}
