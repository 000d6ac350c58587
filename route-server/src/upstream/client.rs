//! Route-search service HTTP client.
//!
//! Issues a single `POST` per search and hands the decoded JSON body back
//! untouched; deciding whether it has the right shape is the orchestrator's
//! job, not the transport's.

use std::time::Duration;

use serde_json::Value;
use tracing::debug;

use super::error::{TransportError, server_message_from_body};
use super::types::FindRoutesBody;
use crate::domain::SearchRequest;

/// Default search endpoint (the service's local development address).
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8000/find_routes";

/// Fixed per-search timeout. Not configurable.
pub const SEARCH_TIMEOUT: Duration = Duration::from_millis(15_000);

/// Configuration for the search client.
#[derive(Debug, Clone)]
pub struct SearchClientConfig {
    /// Full URL of the find-routes endpoint
    pub endpoint: String,
}

impl SearchClientConfig {
    /// Create a config pointing at [`DEFAULT_ENDPOINT`].
    pub fn new() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }

    /// Set a custom endpoint URL.
    pub fn with_endpoint(mut self, url: impl Into<String>) -> Self {
        self.endpoint = url.into();
        self
    }
}

impl Default for SearchClientConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Route-search service client.
#[derive(Debug, Clone)]
pub struct SearchClient {
    http: reqwest::Client,
    endpoint: String,
}

impl SearchClient {
    /// Create a new client with the given configuration.
    pub fn new(config: SearchClientConfig) -> Result<Self, TransportError> {
        let http = reqwest::Client::builder().timeout(SEARCH_TIMEOUT).build()?;

        Ok(Self {
            http,
            endpoint: config.endpoint,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Run one search against the service.
    ///
    /// Returns the response body as JSON. A 2xx body that isn't valid JSON is
    /// returned as a JSON string so the caller sees it as a malformed
    /// payload rather than a transport failure.
    pub async fn find_routes(&self, request: &SearchRequest) -> Result<Value, TransportError> {
        let body = FindRoutesBody::from(request);

        let response = self.http.post(&self.endpoint).json(&body).send().await?;

        let status = response.status();

        if !status.is_success() {
            let text = response.text().await.unwrap_or_else(|e| {
                debug!(error = %e, status = status.as_u16(), "failed to read error response body");
                String::new()
            });
            return Err(TransportError::Status {
                status: status.as_u16(),
                server_message: server_message_from_body(&text),
            });
        }

        let text = response.text().await?;

        Ok(serde_json::from_str(&text).unwrap_or_else(|e| {
            debug!(error = %e, "search response is not JSON");
            Value::String(text)
        }))
    }
}
