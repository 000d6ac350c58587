//! Mock search client for running without the route-search service.
//!
//! Loads a canned response body from a JSON file and returns it for every
//! search, whatever the request says.

use std::path::Path;
use std::sync::Arc;

use serde_json::Value;
use tokio::sync::RwLock;

use super::error::TransportError;
use crate::domain::SearchRequest;

/// Mock search client that serves a payload from disk.
#[derive(Debug, Clone)]
pub struct MockSearchClient {
    payload: Arc<RwLock<Value>>,
}

impl MockSearchClient {
    /// Create a mock by loading a JSON file.
    ///
    /// The file may hold any JSON value; a non-array payload is useful for
    /// exercising the malformed-response path.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, TransportError> {
        Ok(Self::from_value(load(path.as_ref())?))
    }

    /// Create a mock that serves the given payload.
    pub fn from_value(payload: Value) -> Self {
        Self {
            payload: Arc::new(RwLock::new(payload)),
        }
    }

    /// Mimics [`SearchClient::find_routes`](super::SearchClient::find_routes).
    pub async fn find_routes(&self, _request: &SearchRequest) -> Result<Value, TransportError> {
        Ok(self.payload.read().await.clone())
    }

    /// Reload the payload from disk (useful during development).
    pub async fn reload(&self, path: impl AsRef<Path>) -> Result<(), TransportError> {
        let fresh = load(path.as_ref())?;
        *self.payload.write().await = fresh;
        Ok(())
    }
}

fn load(path: &Path) -> Result<Value, TransportError> {
    let json = std::fs::read_to_string(path).map_err(|e| TransportError::Mock {
        message: format!("failed to read {}: {e}", path.display()),
    })?;

    serde_json::from_str(&json).map_err(|e| TransportError::Mock {
        message: format!("failed to parse {}: {e}", path.display()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn request() -> SearchRequest {
        SearchRequest::parse("Mangalore", "Ayodhya", "2025-11-01", 450.0).unwrap()
    }

    #[tokio::test]
    async fn load_mock_data() {
        let client = MockSearchClient::new("data/mock_routes.json").unwrap();
        let payload = client.find_routes(&request()).await.unwrap();

        let records = payload.as_array().expect("mock data is an array");
        assert!(!records.is_empty());
    }

    #[tokio::test]
    async fn serves_same_payload_for_any_request() {
        let client = MockSearchClient::from_value(serde_json::json!([{"from_airport": "BLR"}]));
        let other = SearchRequest::parse("Kochi", "Delhi", "2025-12-24", 100.0).unwrap();

        let a = client.find_routes(&request()).await.unwrap();
        let b = client.find_routes(&other).await.unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn missing_file_is_error() {
        let err = MockSearchClient::new("data/does_not_exist.json").unwrap_err();
        assert!(matches!(err, TransportError::Mock { .. }));
        assert!(err.to_string().contains("failed to read"));
    }

    #[test]
    fn invalid_json_is_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[{{not json").unwrap();

        let err = MockSearchClient::new(file.path()).unwrap_err();
        assert!(err.to_string().contains("failed to parse"));
    }

    #[tokio::test]
    async fn reload_replaces_payload() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{}}").unwrap();

        let client = MockSearchClient::from_value(serde_json::json!([]));
        client.reload(file.path()).await.unwrap();

        let payload = client.find_routes(&request()).await.unwrap();
        assert!(payload.is_object());
    }
}
