//! HTTP route handlers.

use askama::Template;
use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use chrono::Local;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{error, warn};

use crate::domain::DomainError;
use crate::search::SearchPhase;

use super::dto::*;
use super::sessions::{session_cookie, session_id};
use super::state::AppState;
use super::templates::*;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/search", post(search_routes))
        .route("/search/state", get(search_state))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Index page with search form.
async fn index_page() -> impl IntoResponse {
    let template = IndexTemplate {
        form: SearchFormView::with_date(Local::now().date_naive()),
    };
    Html(
        template
            .render()
            .unwrap_or_else(|e| format!("Template error: {}", e)),
    )
}

/// Check if request accepts HTML.
fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

/// Run a route search in the caller's session.
///
/// A failed search is not an `AppError`: the caller gets the message in the
/// same shape as a successful result so the page can show it in place.
/// A caller without a known session gets a new one and its cookie.
async fn search_routes(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, AppError> {
    let req: SearchRoutesRequest =
        serde_json::from_slice(&body).map_err(|e| AppError::BadRequest {
            message: format!("Invalid search request: {}", e),
        })?;
    let (request, params) = req.into_parts()?;

    let handle = state.sessions.get_or_create(session_id(&headers)).await;
    let outcome = handle.session.search(&request, &params).await;

    let mut response = if accepts_html(&headers) {
        let template = match &outcome {
            Ok(routes) => RouteResultsTemplate::success(routes),
            Err(e) => RouteResultsTemplate::failure(e.to_string()),
        };
        let html = template.render().map_err(|e| AppError::Internal {
            message: format!("Template error: {}", e),
        })?;

        Html(html).into_response()
    } else {
        match outcome {
            Ok(routes) => Json(SearchRoutesResponse::success(&routes)).into_response(),
            Err(e) => (
                StatusCode::BAD_GATEWAY,
                Json(SearchRoutesResponse::failure(e.to_string())),
            )
                .into_response(),
        }
    };

    if handle.is_new {
        let cookie = session_cookie(&handle.id).map_err(|e| AppError::Internal {
            message: format!("Invalid session cookie: {}", e),
        })?;
        response.headers_mut().insert(header::SET_COOKIE, cookie);
    }

    Ok(response)
}

/// Current phase of the caller's latest search.
///
/// Callers without a known session are idle; this never creates one.
async fn search_state(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let session = match session_id(&headers) {
        Some(id) => state.sessions.get(id).await,
        None => None,
    };
    let phase = match session {
        Some(session) => session.phase().await,
        None => SearchPhase::Idle,
    };
    Json(phase.snapshot()).into_response()
}

// ============================================================================
// Error Handling
// ============================================================================

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Internal { message: String },
}

impl From<DomainError> for AppError {
    fn from(e: DomainError) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => {
                warn!(%message, "rejected search request");
                (StatusCode::BAD_REQUEST, message)
            }
            AppError::Internal { message } => {
                error!(%message, "internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        };

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
