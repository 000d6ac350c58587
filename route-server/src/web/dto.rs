//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::{DomainError, RouteOption, SearchRequest};
use crate::pipeline::{ResultLimit, SortBy};
use crate::search::SearchParams;

/// Request to search for routes.
#[derive(Debug, Deserialize)]
pub struct SearchRoutesRequest {
    /// Origin city name (free text)
    pub origin_city: String,

    /// Destination city name (free text)
    pub destination_city: String,

    /// Travel date, `YYYY-MM-DD`
    pub date: String,

    /// Maximum ground transfer distance in km
    pub max_ground_km: f64,

    /// Optional maximum ground transfer time in minutes
    #[serde(default)]
    pub max_ground_minutes: Option<u32>,

    /// Sort selector; anything but "price" keeps upstream order
    #[serde(default)]
    pub sort_by: SortBy,

    /// Display limit; invalid values fall back to 10
    #[serde(default)]
    pub limit: ResultLimit,
}

impl SearchRoutesRequest {
    /// Split into the validated domain request and display parameters.
    pub fn into_parts(self) -> Result<(SearchRequest, SearchParams), DomainError> {
        let mut request = SearchRequest::parse(
            &self.origin_city,
            &self.destination_city,
            &self.date,
            self.max_ground_km,
        )?;
        if let Some(minutes) = self.max_ground_minutes {
            request = request.with_max_ground_minutes(minutes);
        }
        Ok((request, SearchParams::new(self.sort_by, self.limit)))
    }
}

/// A route in search results.
#[derive(Debug, Serialize)]
pub struct RouteResult {
    /// Origin-side airport code (or city)
    pub from_iata: String,

    /// Destination-side airport code (or city)
    pub to_iata: String,

    /// Price in INR; null when upstream gave nothing usable
    pub price: Option<f64>,

    /// Price formatted for display, e.g. "₹3,900"
    pub price_display: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ground_time_minutes: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub flight_duration_minutes: Option<f64>,

    /// Upstream record as received
    pub raw: Value,
}

/// Response for route search.
#[derive(Debug, Serialize)]
pub struct SearchRoutesResponse {
    /// Ranked, bounded routes (empty on failure)
    pub routes: Vec<RouteResult>,

    /// Number of routes returned
    pub count: usize,

    /// Error message to display, if the search failed
    pub error: Option<String>,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

// Conversion implementations

impl RouteResult {
    /// Create from a domain RouteOption.
    pub fn from_route(route: &RouteOption) -> Self {
        Self {
            from_iata: route.from_iata.clone(),
            to_iata: route.to_iata.clone(),
            price: route.price.amount(),
            price_display: route.price.to_string(),
            distance_km: route.distance_km,
            ground_time_minutes: route.ground_time_minutes,
            flight_duration_minutes: route.flight_duration_minutes,
            raw: route.raw.clone(),
        }
    }
}

impl SearchRoutesResponse {
    pub fn success(routes: &[RouteOption]) -> Self {
        Self {
            routes: routes.iter().map(RouteResult::from_route).collect(),
            count: routes.len(),
            error: None,
        }
    }

    pub fn failure(message: String) -> Self {
        Self {
            routes: Vec::new(),
            count: 0,
            error: Some(message),
        }
    }
}
