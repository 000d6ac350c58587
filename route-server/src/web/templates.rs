//! Askama templates for the web frontend.

use askama::Template;

use crate::domain::RouteOption;
use crate::pipeline::{DEFAULT_LIMIT, SortBy};

// ============================================================================
// Page Templates (extend base.html)
// ============================================================================

/// Home page with search form.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub form: SearchFormView,
}

// ============================================================================
// Fragment Templates (AJAX responses, no base.html)
// ============================================================================

/// Route results fragment.
#[derive(Template)]
#[template(path = "route_results.html")]
pub struct RouteResultsTemplate {
    pub routes: Vec<RouteView>,
    pub error: Option<String>,
}

impl RouteResultsTemplate {
    pub fn success(routes: &[RouteOption]) -> Self {
        Self {
            routes: routes
                .iter()
                .enumerate()
                .map(|(i, r)| RouteView::from_route(i + 1, r))
                .collect(),
            error: None,
        }
    }

    pub fn failure(message: String) -> Self {
        Self {
            routes: Vec::new(),
            error: Some(message),
        }
    }
}

// ============================================================================
// View Models (for templates)
// ============================================================================

/// Initial values for the search form.
#[derive(Debug, Clone)]
pub struct SearchFormView {
    pub origin_city: String,
    pub destination_city: String,
    pub date: String,
    pub max_ground_km: f64,
    pub sort_by: &'static str,
    pub limit: usize,
}

impl SearchFormView {
    /// Form prefilled with the example trip, searching on `date`.
    pub fn with_date(date: chrono::NaiveDate) -> Self {
        Self {
            origin_city: "Mangalore".to_string(),
            destination_city: "Ayodhya".to_string(),
            date: date.format("%Y-%m-%d").to_string(),
            max_ground_km: 450.0,
            sort_by: SortBy::default().as_str(),
            limit: DEFAULT_LIMIT,
        }
    }

    pub fn is_sorted_by_price(&self) -> bool {
        self.sort_by == SortBy::Price.as_str()
    }
}

/// Route card view model.
#[derive(Debug, Clone)]
pub struct RouteView {
    /// 1-based position in the result list
    pub rank: usize,
    pub from_iata: String,
    pub to_iata: String,
    pub price_display: String,
    pub price_available: bool,
    /// Optional extras from the upstream record (airport name, km, minutes)
    pub details: Vec<String>,
}

impl RouteView {
    /// Create from a domain RouteOption.
    pub fn from_route(rank: usize, route: &RouteOption) -> Self {
        let details = [
            route.raw_display("airport_name"),
            route
                .raw_display("airport_distance_km")
                .map(|km| format!("{km} km")),
            route
                .raw_display("flight_duration_minutes")
                .map(|mins| format!("{mins} min")),
        ]
        .into_iter()
        .flatten()
        .collect();

        Self {
            rank,
            from_iata: route.from_iata.clone(),
            to_iata: route.to_iata.clone(),
            price_display: route.price.to_string(),
            price_available: route.price.is_available(),
            details,
        }
    }

    /// Extras joined for display, e.g. "Mangalore International • 14 km".
    pub fn detail_line(&self) -> String {
        self.details.join(" • ")
    }
}
