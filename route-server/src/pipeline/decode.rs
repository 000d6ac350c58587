//! Shape detection for upstream route records.
//!
//! The search service has emitted two record layouts over time and carries
//! no version field. The only discriminant is whether `from_airport` is
//! present: if so, the record is the simplified layout, otherwise it is the
//! detailed one. "Present" means truthy: anything but a missing key,
//! `null`, `false`, `0` or `""`. A blank string still counts. Records with none of the known keys are tagged
//! [`RawRecord::Unrecognized`] so the normalizer can still degrade them to
//! empty detailed records while making the fact visible.

use serde_json::{Map, Value};

/// Keys that only make sense in the detailed layout (plus the price keys it
/// shares with the simplified one).
const DETAILED_KEYS: &[&str] = &[
    "airport_iata",
    "airport_name",
    "airport_city",
    "airport_distance_km",
    "ground_time_minutes",
    "flight_duration_minutes",
    "flight_price_inr",
    "total_cost_inr",
];

/// A record in the simplified layout:
/// `{ from_airport, to_airport?, flight_price_inr }`.
#[derive(Debug, Clone, PartialEq)]
pub struct SimplifiedRecord {
    pub from_airport: String,
    pub to_airport: Option<String>,
    /// `None` when missing or not coercible to a number
    pub flight_price_inr: Option<f64>,
}

/// A record in the detailed (legacy) layout. Every field is optional.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DetailedRecord {
    pub airport_iata: Option<String>,
    pub airport_name: Option<String>,
    pub airport_city: Option<String>,
    pub airport_distance_km: Option<f64>,
    pub ground_time_minutes: Option<f64>,
    pub flight_duration_minutes: Option<f64>,
    pub flight_price_inr: Option<f64>,
    pub total_cost_inr: Option<f64>,
}

/// One upstream record after shape detection.
#[derive(Debug, Clone, PartialEq)]
pub enum RawRecord {
    Simplified(SimplifiedRecord),
    Detailed(DetailedRecord),
    /// Not an object, or an object with none of the known keys
    Unrecognized,
}

impl RawRecord {
    /// Short name of the detected layout, for logging.
    pub fn shape_name(&self) -> &'static str {
        match self {
            RawRecord::Simplified(_) => "simplified",
            RawRecord::Detailed(_) => "detailed",
            RawRecord::Unrecognized => "unrecognized",
        }
    }
}

/// Detect the layout of one record and extract its fields.
pub fn decode(value: &Value) -> RawRecord {
    let Some(obj) = value.as_object() else {
        return RawRecord::Unrecognized;
    };

    if let Some(from_airport) = obj.get("from_airport").filter(|v| is_truthy(v)) {
        return RawRecord::Simplified(SimplifiedRecord {
            from_airport: verbatim_text(from_airport),
            to_airport: text_field(obj, "to_airport"),
            flight_price_inr: numeric_field(obj, "flight_price_inr"),
        });
    }

    if !DETAILED_KEYS.iter().any(|key| obj.contains_key(*key)) {
        return RawRecord::Unrecognized;
    }

    RawRecord::Detailed(DetailedRecord {
        airport_iata: text_field(obj, "airport_iata"),
        airport_name: text_field(obj, "airport_name"),
        airport_city: text_field(obj, "airport_city"),
        airport_distance_km: numeric_field(obj, "airport_distance_km"),
        ground_time_minutes: numeric_field(obj, "ground_time_minutes"),
        flight_duration_minutes: numeric_field(obj, "flight_duration_minutes"),
        flight_price_inr: numeric_field(obj, "flight_price_inr"),
        total_cost_inr: numeric_field(obj, "total_cost_inr"),
    })
}

/// Whether a JSON value counts as set when used as a flag.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Strings as-is, anything else as compact JSON.
fn verbatim_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// A usable text value: a non-blank string, or a number rendered as text.
fn text_field(obj: &Map<String, Value>, key: &str) -> Option<String> {
    match obj.get(key)? {
        Value::String(s) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// A usable numeric value: a JSON number, or a string that parses as a
/// finite float after trimming.
fn numeric_field(obj: &Map<String, Value>, key: &str) -> Option<f64> {
    coerce_number(obj.get(key)?)
}

pub(crate) fn coerce_number(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    n.is_finite().then_some(n)
}
