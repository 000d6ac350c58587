//! Bounding the ranked list for display.

use std::num::NonZeroUsize;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::domain::RouteOption;

/// Limit used whenever the caller's value isn't a positive integer.
pub const DEFAULT_LIMIT: usize = 10;

/// How many routes to show. Always a positive integer.
///
/// Every constructor is total: zero, negative, fractional, NaN, non-numeric
/// or missing input all become [`DEFAULT_LIMIT`].
///
/// # Examples
///
/// ```
/// use route_server::pipeline::ResultLimit;
///
/// assert_eq!(ResultLimit::parse("5").get(), 5);
/// assert_eq!(ResultLimit::parse("0").get(), 10);
/// assert_eq!(ResultLimit::parse("-1").get(), 10);
/// assert_eq!(ResultLimit::from_f64(f64::NAN).get(), 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultLimit(NonZeroUsize);

impl ResultLimit {
    pub fn new(limit: usize) -> Self {
        NonZeroUsize::new(limit).map_or_else(Self::default, ResultLimit)
    }

    pub fn from_i64(limit: i64) -> Self {
        usize::try_from(limit).map_or_else(|_| Self::default(), Self::new)
    }

    pub fn from_f64(limit: f64) -> Self {
        if limit.is_finite() && limit.fract() == 0.0 && limit >= 1.0 && limit <= usize::MAX as f64
        {
            Self::new(limit as usize)
        } else {
            Self::default()
        }
    }

    pub fn parse(s: &str) -> Self {
        let s = s.trim();
        if let Ok(n) = s.parse::<i64>() {
            return Self::from_i64(n);
        }
        s.parse::<f64>()
            .map_or_else(|_| Self::default(), Self::from_f64)
    }

    /// Interpret an arbitrary JSON value as a limit.
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::Number(n) => match (n.as_u64(), n.as_i64(), n.as_f64()) {
                (Some(u), _, _) => usize::try_from(u).map_or_else(|_| Self::default(), Self::new),
                (None, Some(i), _) => Self::from_i64(i),
                (None, None, Some(f)) => Self::from_f64(f),
                _ => Self::default(),
            },
            Value::String(s) => Self::parse(s),
            _ => Self::default(),
        }
    }

    pub fn get(&self) -> usize {
        self.0.get()
    }
}

impl Default for ResultLimit {
    fn default() -> Self {
        ResultLimit(NonZeroUsize::new(DEFAULT_LIMIT).unwrap_or(NonZeroUsize::MIN))
    }
}

impl Serialize for ResultLimit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(self.get() as u64)
    }
}

impl<'de> Deserialize<'de> for ResultLimit {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_json(&value))
    }
}

/// Keep the first `limit` routes, in order.
pub fn window(mut routes: Vec<RouteOption>, limit: ResultLimit) -> Vec<RouteOption> {
    routes.truncate(limit.get());
    routes
}
