//! Web layer for the route search.
//!
//! Serves the search page and a `/search` endpoint that answers with either
//! an HTML fragment or JSON.

mod dto;
mod routes;
mod sessions;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use sessions::{
    SESSION_COOKIE, SessionConfig, SessionHandle, SessionStore, SharedSession, session_cookie,
    session_id,
};
pub use state::AppState;
pub use templates::*;
