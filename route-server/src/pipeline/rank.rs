//! Route ranking.
//!
//! Only one criterion exists: price. Any selector we don't recognize means
//! "leave the order alone", so a bad selector never hides results.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::domain::RouteOption;

/// How to order routes for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    /// Cheapest first; unknown prices last
    #[default]
    Price,
    /// Upstream order
    None,
}

impl SortBy {
    /// Parse a selector. Anything other than `"price"` is [`SortBy::None`].
    pub fn parse(s: &str) -> Self {
        match s.trim() {
            "price" => SortBy::Price,
            _ => SortBy::None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortBy::Price => "price",
            SortBy::None => "none",
        }
    }
}

impl<'de> Deserialize<'de> for SortBy {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(match value {
            Value::String(s) => SortBy::parse(&s),
            _ => SortBy::None,
        })
    }
}

/// Order routes by the given criterion.
///
/// Sorting by price is stable: routes with equal prices (and routes with
/// unavailable prices, which all sort last) keep their input order.
pub fn rank_routes(mut routes: Vec<RouteOption>, sort_by: SortBy) -> Vec<RouteOption> {
    match sort_by {
        SortBy::Price => routes.sort_by(|a, b| a.price.rank_cmp(&b.price)),
        SortBy::None => {}
    }
    routes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Price;
    use proptest::prelude::*;
    use serde_json::json;

    fn route(from: &str, price: Price) -> RouteOption {
        RouteOption {
            from_iata: from.to_string(),
            to_iata: "AYJ".to_string(),
            price,
            distance_km: None,
            ground_time_minutes: None,
            flight_duration_minutes: None,
            raw: json!({}),
        }
    }

    fn froms(routes: &[RouteOption]) -> Vec<&str> {
        routes.iter().map(|r| r.from_iata.as_str()).collect()
    }

    #[test]
    fn rank_by_price_ascending() {
        let routes = vec![
            route("BLR", Price::known(4200.0)),
            route("COK", Price::known(3900.0)),
            route("DEL", Price::known(5200.0)),
        ];

        let ranked = rank_routes(routes, SortBy::Price);
        assert_eq!(froms(&ranked), ["COK", "BLR", "DEL"]);
    }

    #[test]
    fn equal_prices_keep_input_order() {
        let routes = vec![
            route("LKO", Price::known(3600.0)),
            route("BLR", Price::known(3800.0)),
            route("COK", Price::known(3600.0)),
        ];

        let ranked = rank_routes(routes, SortBy::Price);
        assert_eq!(froms(&ranked), ["LKO", "COK", "BLR"]);
    }

    #[test]
    fn unavailable_prices_sort_last_in_input_order() {
        let routes = vec![
            route("XXA", Price::unavailable()),
            route("BLR", Price::known(4200.0)),
            route("XXB", Price::unavailable()),
            route("COK", Price::known(0.0)),
        ];

        let ranked = rank_routes(routes, SortBy::Price);
        assert_eq!(froms(&ranked), ["COK", "BLR", "XXA", "XXB"]);
    }

    #[test]
    fn none_is_identity() {
        let routes = vec![
            route("DEL", Price::known(5200.0)),
            route("COK", Price::known(3900.0)),
            route("XXA", Price::unavailable()),
        ];

        let ranked = rank_routes(routes.clone(), SortBy::None);
        assert_eq!(ranked, routes);
    }

    #[test]
    fn parse_is_fail_open() {
        assert_eq!(SortBy::parse("price"), SortBy::Price);
        assert_eq!(SortBy::parse(" price "), SortBy::Price);
        assert_eq!(SortBy::parse("none"), SortBy::None);
        assert_eq!(SortBy::parse("duration"), SortBy::None);
        assert_eq!(SortBy::parse(""), SortBy::None);
    }

    #[test]
    fn deserialize_is_lenient() {
        let parse = |v: Value| serde_json::from_value::<SortBy>(v).unwrap();
        assert_eq!(parse(json!("price")), SortBy::Price);
        assert_eq!(parse(json!("cheapest")), SortBy::None);
        assert_eq!(parse(json!(1)), SortBy::None);
        assert_eq!(parse(json!(null)), SortBy::None);
    }

    #[test]
    fn default_is_price() {
        assert_eq!(SortBy::default(), SortBy::Price);
        assert_eq!(SortBy::default().as_str(), "price");
    }

    fn arb_price() -> impl Strategy<Value = Price> {
        prop_oneof![
            // Small range so ties are common
            (0u32..20).prop_map(|p| Price::known(f64::from(p) * 100.0)),
            Just(Price::unavailable()),
        ]
    }

    proptest! {
        #[test]
        fn price_sort_is_stable_and_ordered(prices in prop::collection::vec(arb_price(), 0..40)) {
            let routes: Vec<RouteOption> = prices
                .iter()
                .enumerate()
                .map(|(i, p)| route(&i.to_string(), *p))
                .collect();

            let ranked = rank_routes(routes, SortBy::Price);
            prop_assert_eq!(ranked.len(), prices.len());

            for pair in ranked.windows(2) {
                let ord = pair[0].price.rank_cmp(&pair[1].price);
                prop_assert!(ord != std::cmp::Ordering::Greater);

                // Ties must keep input order (input index is the from_iata)
                if ord == std::cmp::Ordering::Equal {
                    let a: usize = pair[0].from_iata.parse().unwrap();
                    let b: usize = pair[1].from_iata.parse().unwrap();
                    prop_assert!(a < b);
                }
            }
        }
    }
}
