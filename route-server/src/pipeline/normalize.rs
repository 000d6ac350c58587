//! Mapping decoded records into [`RouteOption`]s.
//!
//! Normalization never fails. Missing or malformed fields fall back along a
//! fixed chain and end in a default, so a bad record degrades to a sparse
//! row rather than aborting the whole batch.

use serde_json::Value;
use tracing::warn;

use crate::domain::{Price, RouteOption, SearchRequest};

use super::decode::{DetailedRecord, RawRecord, SimplifiedRecord, decode};

/// Normalize one decoded record.
///
/// `raw` is the record as received and is stored verbatim on the result.
pub fn normalize(record: &RawRecord, raw: &Value, request: &SearchRequest) -> RouteOption {
    match record {
        RawRecord::Simplified(simple) => from_simplified(simple, raw, request),
        RawRecord::Detailed(detailed) => from_detailed(detailed, raw, request),
        RawRecord::Unrecognized => {
            warn!(record = %raw, "unrecognized route record shape, treating as empty detailed record");
            from_detailed(&DetailedRecord::default(), raw, request)
        }
    }
}

/// Decode and normalize every element of an upstream array, keeping order.
pub fn normalize_all(records: &[Value], request: &SearchRequest) -> Vec<RouteOption> {
    records
        .iter()
        .map(|raw| normalize(&decode(raw), raw, request))
        .collect()
}

fn from_simplified(record: &SimplifiedRecord, raw: &Value, request: &SearchRequest) -> RouteOption {
    RouteOption {
        from_iata: record.from_airport.clone(),
        to_iata: record
            .to_airport
            .clone()
            .unwrap_or_else(|| request.destination_city().to_string()),
        // No default here: a simplified record without a usable price is
        // surfaced as unavailable, not as free.
        price: record
            .flight_price_inr
            .map_or_else(Price::unavailable, Price::known),
        distance_km: None,
        ground_time_minutes: None,
        flight_duration_minutes: None,
        raw: raw.clone(),
    }
}

fn from_detailed(record: &DetailedRecord, raw: &Value, request: &SearchRequest) -> RouteOption {
    let amount = record
        .flight_price_inr
        .or(record.total_cost_inr)
        .unwrap_or(0.0);

    RouteOption {
        from_iata: record
            .airport_iata
            .clone()
            .unwrap_or_else(|| request.origin_city().to_string()),
        to_iata: record
            .airport_city
            .clone()
            .unwrap_or_else(|| request.destination_city().to_string()),
        price: Price::known(amount),
        distance_km: record.airport_distance_km,
        ground_time_minutes: record.ground_time_minutes,
        flight_duration_minutes: record.flight_duration_minutes,
        raw: raw.clone(),
    }
}
