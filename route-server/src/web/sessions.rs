//! Per-client search sessions.
//!
//! Each browser gets its own [`SearchSession`], found through a session-id
//! cookie, so one client's searches never mark another's as stale. The id
//! is always minted server-side; an id the store doesn't know is replaced,
//! never adopted. Sessions idle past the configured timeout are evicted.

use std::sync::Arc;
use std::time::Duration;

use axum::http::header::InvalidHeaderValue;
use axum::http::{HeaderMap, HeaderValue, header};
use moka::future::Cache as MokaCache;
use tracing::debug;
use uuid::Uuid;

use crate::search::{SearchOrchestrator, SearchSession};
use crate::upstream::Upstream;

/// Name of the cookie carrying the session id.
pub const SESSION_COOKIE: &str = "route_session";

/// A session shared between the handlers serving one client.
pub type SharedSession = Arc<SearchSession<Upstream>>;

/// Configuration for the session store.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Evict a session after this long without a lookup.
    pub idle_timeout: Duration,

    /// Maximum number of live sessions.
    pub max_sessions: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            idle_timeout: Duration::from_secs(30 * 60),
            max_sessions: 10_000,
        }
    }
}

/// A session looked up (or created) for one request.
#[derive(Clone)]
pub struct SessionHandle {
    pub id: String,
    pub session: SharedSession,
    /// True when the session was created for this request, so the client
    /// still needs the cookie.
    pub is_new: bool,
}

/// Search sessions keyed by session id.
pub struct SessionStore {
    upstream: Upstream,
    sessions: MokaCache<String, SharedSession>,
}

impl SessionStore {
    /// Create an empty store whose sessions all search through `upstream`.
    pub fn new(upstream: Upstream, config: &SessionConfig) -> Self {
        let sessions = MokaCache::builder()
            .time_to_idle(config.idle_timeout)
            .max_capacity(config.max_sessions)
            .build();

        Self { upstream, sessions }
    }

    /// Look up an existing session.
    pub async fn get(&self, id: &str) -> Option<SharedSession> {
        self.sessions.get(id).await
    }

    /// The session for `id`, or a fresh one under a new id when `id` is
    /// missing or unknown.
    pub async fn get_or_create(&self, id: Option<&str>) -> SessionHandle {
        if let Some(id) = id {
            if let Some(session) = self.get(id).await {
                return SessionHandle {
                    id: id.to_string(),
                    session,
                    is_new: false,
                };
            }
        }

        let id = Uuid::new_v4().to_string();
        let session = Arc::new(SearchSession::new(SearchOrchestrator::new(
            self.upstream.clone(),
        )));
        self.sessions.insert(id.clone(), session.clone()).await;
        debug!(session = %id, "created search session");

        SessionHandle {
            id,
            session,
            is_new: true,
        }
    }
}

/// Session id from the request's `Cookie` headers, if any.
pub fn session_id(headers: &HeaderMap) -> Option<&str> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .find_map(|pair| {
            let (name, value) = pair.trim().split_once('=')?;
            (name == SESSION_COOKIE && !value.is_empty()).then_some(value)
        })
}

/// `Set-Cookie` value handing `id` to the client.
pub fn session_cookie(id: &str) -> Result<HeaderValue, InvalidHeaderValue> {
    HeaderValue::from_str(&format!(
        "{SESSION_COOKIE}={id}; Path=/; HttpOnly; SameSite=Lax"
    ))
}
