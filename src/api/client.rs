use anyhow::{Context, Result};
use reqwest::Client;
use serde::Serialize;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::config::Config;
use crate::error::{AdapterError, ToolOutcome};

/// HTTP client for the Tool Executor service.
///
/// One instance is shared by every tool call. It carries no per-call state,
/// so concurrent calls never wait on each other here.
pub struct ExecutorClient {
    client: Client,
    base_url: String,
    session_id: String,
}

impl ExecutorClient {
    /// Create a new executor client
    pub fn new(config: &Config) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: config.server_url().to_string(),
            session_id: Uuid::new_v4().to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for a route: the base URL with the route appended as-is
    pub fn endpoint(&self, route: &str) -> String {
        format!("{}{}", self.base_url, route)
    }

    /// POST `body` as JSON to `route` and return the response body as text.
    ///
    /// The body is returned whatever the status code, as long as there is
    /// one. Failing to reach the backend, or a non-2xx status with nothing
    /// readable, becomes [`AdapterError::Transport`].
    pub async fn post<T>(&self, route: &str, body: &T) -> ToolOutcome
    where
        T: Serialize + ?Sized,
    {
        let url = self.endpoint(route);
        let request_id = Uuid::new_v4().to_string();

        debug!("=== Executor Request ===");
        debug!("URL: {}", url);
        debug!("Request ID: {}", request_id);

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .header("x-request-id", &request_id)
            .header("x-request-session-id", &self.session_id)
            .json(body)
            .send()
            .await
            .map_err(|e| {
                warn!("Request to {} failed: {}", url, e);
                AdapterError::transport(&url, e)
            })?;

        let status = response.status();
        debug!("Status: {}", status);

        let text = match response.text().await {
            Ok(text) => text,
            Err(e) if status.is_success() => {
                warn!("Failed to read response body from {}: {}", url, e);
                return Err(AdapterError::transport(&url, e));
            }
            Err(_) => String::new(),
        };

        if !status.is_success() && text.trim().is_empty() {
            warn!("Executor returned {} with no body for {}", status, url);
            return Err(AdapterError::transport(url, format!("HTTP {}", status)));
        }

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::path::PathBuf;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(url: &str) -> ExecutorClient {
        let config = Config::new(url, PathBuf::from("/work"), None).unwrap();
        ExecutorClient::new(&config).unwrap()
    }

    /// A local URL nothing is listening on
    fn unreachable_url() -> String {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);
        format!("http://127.0.0.1:{}", port)
    }

    #[test]
    fn test_endpoint_concatenation() {
        let client = client_for("http://localhost:9091/");
        assert_eq!(
            client.endpoint("/agents/search"),
            "http://localhost:9091/agents/search"
        );

        let client = client_for("http://gateway/executor");
        assert_eq!(client.endpoint("/read"), "http://gateway/executor/read");
    }

    #[tokio::test]
    async fn test_post_returns_body_verbatim() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/write"))
            .and(header("content-type", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"status":"ok"}"#))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server.uri());
        let text = client
            .post("/write", &json!({"path": "/x", "content": "hello"}))
            .await
            .unwrap();
        assert_eq!(text, r#"{"status":"ok"}"#);

        let requests = server.received_requests().await.unwrap();
        let body: serde_json::Value = requests[0].body_json().unwrap();
        assert_eq!(body, json!({"path": "/x", "content": "hello"}));
        assert!(requests[0].headers.contains_key("x-request-id"));
    }

    #[tokio::test]
    async fn test_non_success_body_is_passed_through() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(404).set_body_string("file not found: /x"))
            .mount(&server)
            .await;

        let client = client_for(&server.uri());
        let text = client.post("/read", &json!({"path": "/x"})).await.unwrap();
        assert_eq!(text, "file not found: /x");
    }

    #[tokio::test]
    async fn test_non_success_without_body_is_transport_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(502))
            .mount(&server)
            .await;

        let client = client_for(&server.uri());
        let err = client.post("/read", &json!({"path": "/x"})).await.unwrap_err();
        assert_eq!(
            err.to_string(),
            format!(
                "Error connecting to Tool Executor at {}/read: HTTP 502 Bad Gateway",
                server.uri()
            )
        );
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_transport_error() {
        let url = unreachable_url();
        let client = client_for(&url);
        let err = client
            .post("/agents/search", &json!({"query": "rollback", "limit": 5}))
            .await
            .unwrap_err();
        let prefix = format!("Error connecting to Tool Executor at {}/agents/search: ", url);
        let text = err.to_string();
        assert!(text.starts_with(&prefix), "unexpected error text: {text}");
        assert!(text.len() > prefix.len());
    }
}
