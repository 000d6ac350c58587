//! Canonical route option.

use serde::Serialize;
use serde_json::Value;

use super::Price;

/// One candidate route, normalized from whatever shape upstream sent.
///
/// `from_iata` and `to_iata` are always populated; when upstream leaves them
/// out the request's city names stand in. The optional measurements are
/// only set for records in the detailed layout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteOption {
    /// Origin-side airport code (or city name fallback)
    pub from_iata: String,

    /// Destination-side airport code (or city name fallback)
    pub to_iata: String,

    pub price: Price,

    /// Ground transfer distance to the departure airport
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ground_time_minutes: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub flight_duration_minutes: Option<f64>,

    /// The upstream record exactly as received. Display-only.
    pub raw: Value,
}

impl RouteOption {
    /// Text field from the raw record, for display enrichment.
    ///
    /// Strings are returned as-is and numbers are rendered; anything else
    /// (including empty strings) is treated as absent.
    pub fn raw_display(&self, key: &str) -> Option<String> {
        match self.raw.get(key)? {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn option(raw: Value) -> RouteOption {
        RouteOption {
            from_iata: "IXE".into(),
            to_iata: "Mangalore".into(),
            price: Price::known(5100.0),
            distance_km: None,
            ground_time_minutes: None,
            flight_duration_minutes: None,
            raw,
        }
    }

    #[test]
    fn raw_display_strings_and_numbers() {
        let route = option(json!({
            "airport_name": "Mangalore International",
            "airport_distance_km": 14.5,
            "flight_duration_minutes": 130,
            "empty": "",
            "nested": {"a": 1}
        }));

        assert_eq!(
            route.raw_display("airport_name").as_deref(),
            Some("Mangalore International")
        );
        assert_eq!(route.raw_display("airport_distance_km").as_deref(), Some("14.5"));
        assert_eq!(route.raw_display("flight_duration_minutes").as_deref(), Some("130"));
        assert_eq!(route.raw_display("empty"), None);
        assert_eq!(route.raw_display("nested"), None);
        assert_eq!(route.raw_display("missing"), None);
    }

    #[test]
    fn raw_display_on_non_object() {
        let route = option(json!(42));
        assert_eq!(route.raw_display("airport_name"), None);
    }

    #[test]
    fn serialization_skips_absent_measurements() {
        let json = serde_json::to_value(option(json!({}))).unwrap();
        assert_eq!(json["from_iata"], "IXE");
        assert_eq!(json["price"], 5100.0);
        assert!(json.get("distance_km").is_none());
        assert!(json.get("ground_time_minutes").is_none());
    }
}
