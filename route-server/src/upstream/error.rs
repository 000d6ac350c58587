//! Search transport error types.

use serde_json::Value;

/// Shown when neither the server nor the transport gave us anything better.
pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to fetch routes. Is the search service running?";

/// Errors from talking to the route-search service.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TransportError {
    /// Request failed before a response arrived (connect, DNS, body read)
    #[error("{message}")]
    Request { message: String },

    /// No response within the fixed search timeout
    #[error("request timed out after {timeout_ms} ms")]
    Timeout { timeout_ms: u64 },

    /// Service answered with a non-2xx status
    #[error("search service returned HTTP {status}")]
    Status {
        status: u16,
        /// Error text the service sent back, if any
        server_message: Option<String>,
    },

    /// Mock data could not be loaded
    #[error("mock data error: {message}")]
    Mock { message: String },
}

impl TransportError {
    /// The message to show the user.
    ///
    /// Priority: the server-provided error payload, then this error's own
    /// message, then [`GENERIC_FAILURE_MESSAGE`].
    pub fn user_message(&self) -> String {
        self.server_message()
            .map(str::to_string)
            .or_else(|| {
                let own = self.to_string();
                (!own.trim().is_empty()).then_some(own)
            })
            .unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_string())
    }

    pub fn server_message(&self) -> Option<&str> {
        match self {
            TransportError::Status { server_message, .. } => server_message.as_deref(),
            _ => None,
        }
    }
}

/// Extract a human-readable error from a non-2xx response body.
///
/// Understands `{"detail": ...}` (what FastAPI sends), `{"error": ...}` and
/// `{"message": ...}` objects, bare JSON strings, and plain text. Other JSON
/// is passed through in compact form.
pub fn server_message_from_body(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }

    let Ok(json) = serde_json::from_str::<Value>(trimmed) else {
        return Some(trimmed.chars().take(500).collect());
    };

    match &json {
        Value::Null => None,
        Value::String(s) => non_blank(s),
        Value::Object(obj) => ["detail", "error", "message"]
            .iter()
            .find_map(|key| obj.get(*key).and_then(Value::as_str).and_then(non_blank))
            .or_else(|| Some(json.to_string())),
        other => Some(other.to_string()),
    }
}

fn non_blank(s: &str) -> Option<String> {
    (!s.trim().is_empty()).then(|| s.to_string())
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::Timeout {
                timeout_ms: super::client::SEARCH_TIMEOUT.as_millis() as u64,
            }
        } else {
            TransportError::Request {
                message: err.to_string(),
            }
        }
    }
}
