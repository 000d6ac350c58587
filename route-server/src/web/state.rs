//! Application state for the web layer.

use std::sync::Arc;

use super::sessions::SessionStore;

/// Shared application state.
///
/// Holds the per-client search sessions the result views read from.
#[derive(Clone)]
pub struct AppState {
    /// Search sessions, keyed by session cookie
    pub sessions: Arc<SessionStore>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(sessions: SessionStore) -> Self {
        Self {
            sessions: Arc::new(sessions),
        }
    }
}
