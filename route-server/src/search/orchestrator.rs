//! One search, end to end.

use serde_json::Value;
use tracing::{debug, info, warn};

use crate::domain::{RouteOption, SearchRequest};
use crate::pipeline::{ResultLimit, SortBy, normalize_all, rank_routes, window};
use crate::upstream::SearchTransport;

use super::error::SearchError;

/// Caller-chosen presentation parameters for a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchParams {
    pub sort_by: SortBy,
    pub limit: ResultLimit,
}

impl SearchParams {
    pub fn new(sort_by: SortBy, limit: ResultLimit) -> Self {
        Self { sort_by, limit }
    }
}

/// Turn one response payload into the routes to display.
///
/// Pure and deterministic: the same payload, request and params always give
/// the same list.
pub fn reconcile(
    payload: &Value,
    request: &SearchRequest,
    params: &SearchParams,
) -> Result<Vec<RouteOption>, SearchError> {
    let Some(records) = payload.as_array() else {
        warn!(
            payload_type = json_type_name(payload),
            "search response is not an array"
        );
        return Err(SearchError::Format);
    };

    let routes = normalize_all(records, request);
    let ranked = rank_routes(routes, params.sort_by);
    Ok(window(ranked, params.limit))
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Runs searches against a transport and reconciles the responses.
#[derive(Debug, Clone)]
pub struct SearchOrchestrator<T> {
    transport: T,
}

impl<T: SearchTransport> SearchOrchestrator<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Issue exactly one transport call and reconcile its payload.
    ///
    /// Suspends only while waiting on the transport.
    pub async fn search(
        &self,
        request: &SearchRequest,
        params: &SearchParams,
    ) -> Result<Vec<RouteOption>, SearchError> {
        debug!(
            origin = request.origin_city(),
            destination = request.destination_city(),
            date = %request.date(),
            max_ground_km = request.max_ground_km(),
            "searching routes"
        );

        let payload = self.transport.find_routes(request).await.map_err(|e| {
            warn!(error = %e, "route search transport failed");
            SearchError::from(e)
        })?;

        let routes = reconcile(&payload, request, params)?;

        info!(
            origin = request.origin_city(),
            destination = request.destination_city(),
            routes = routes.len(),
            sort_by = params.sort_by.as_str(),
            limit = params.limit.get(),
            "route search succeeded"
        );

        Ok(routes)
    }
}
