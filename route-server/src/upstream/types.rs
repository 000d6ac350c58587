//! Wire types for the route-search service.

use serde::Serialize;

use crate::domain::SearchRequest;

/// Body of a `POST /find_routes` request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FindRoutesBody<'a> {
    pub origin_city: &'a str,
    pub destination_city: &'a str,
    /// ISO `YYYY-MM-DD`
    pub date: String,
    pub max_ground_km: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_ground_minutes: Option<u32>,
}

impl<'a> From<&'a SearchRequest> for FindRoutesBody<'a> {
    fn from(req: &'a SearchRequest) -> Self {
        Self {
            origin_city: req.origin_city(),
            destination_city: req.destination_city(),
            date: req.date().format("%Y-%m-%d").to_string(),
            max_ground_km: req.max_ground_km(),
            max_ground_minutes: req.max_ground_minutes(),
        }
    }
}
