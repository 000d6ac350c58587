//! Transport to the route-search service.
//!
//! The service itself (how it picks airports near each city and prices the
//! flights between them) is opaque to us. We send it one request per search
//! and get back a JSON array of route records in one of its historical
//! layouts.
//!
//! [`SearchTransport`] is the seam the orchestrator depends on. Two
//! implementations exist: [`SearchClient`] talks HTTP, [`MockSearchClient`]
//! serves a file for development. [`Upstream`] picks between them at
//! startup.

mod client;
mod error;
mod mock;
mod types;

use std::future::Future;

use serde_json::Value;

use crate::domain::SearchRequest;

pub use client::{DEFAULT_ENDPOINT, SEARCH_TIMEOUT, SearchClient, SearchClientConfig};
pub use error::{GENERIC_FAILURE_MESSAGE, TransportError, server_message_from_body};
pub use mock::MockSearchClient;
pub use types::FindRoutesBody;

/// Something that can run a route search and return the raw response body.
///
/// Implementations own their timeout; callers never wrap the future in one.
pub trait SearchTransport {
    fn find_routes(
        &self,
        request: &SearchRequest,
    ) -> impl Future<Output = Result<Value, TransportError>> + Send;
}

impl SearchTransport for SearchClient {
    async fn find_routes(&self, request: &SearchRequest) -> Result<Value, TransportError> {
        SearchClient::find_routes(self, request).await
    }
}

impl SearchTransport for MockSearchClient {
    async fn find_routes(&self, request: &SearchRequest) -> Result<Value, TransportError> {
        MockSearchClient::find_routes(self, request).await
    }
}

/// The transport chosen at startup.
#[derive(Debug, Clone)]
pub enum Upstream {
    Http(SearchClient),
    Mock(MockSearchClient),
}

impl Upstream {
    /// Human-readable description for startup logs.
    pub fn describe(&self) -> String {
        match self {
            Upstream::Http(client) => format!("search service at {}", client.endpoint()),
            Upstream::Mock(_) => "mock search data".to_string(),
        }
    }
}

impl SearchTransport for Upstream {
    async fn find_routes(&self, request: &SearchRequest) -> Result<Value, TransportError> {
        match self {
            Upstream::Http(client) => client.find_routes(request).await,
            Upstream::Mock(mock) => mock.find_routes(request).await,
        }
    }
}
