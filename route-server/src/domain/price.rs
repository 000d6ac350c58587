//! Route price type.

use std::cmp::Ordering;
use std::fmt;

use serde::Serialize;

/// A route's cost in rupees, or the fact that upstream gave us nothing usable.
///
/// A known amount is always finite and non-negative. Coercion failures are
/// represented as [`Price::unavailable`] instead of a NaN, so ranking can put
/// them in a fixed place rather than relying on float comparison quirks.
///
/// Serializes as a bare number, or `null` when unavailable.
///
/// # Examples
///
/// ```
/// use route_server::domain::Price;
///
/// assert_eq!(Price::known(4200.0).amount(), Some(4200.0));
/// assert!(!Price::known(f64::NAN).is_available());
/// assert!(!Price::known(-1.0).is_available());
/// assert_eq!(Price::known(123456.0).to_string(), "₹1,23,456");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Price(Option<f64>);

impl Price {
    /// A price from a coerced amount. Negative and non-finite amounts are
    /// treated as unavailable.
    pub fn known(amount: f64) -> Self {
        if amount.is_finite() && amount >= 0.0 {
            // abs() folds -0.0 into 0.0
            Price(Some(amount.abs()))
        } else {
            Price(None)
        }
    }

    pub fn unavailable() -> Self {
        Price(None)
    }

    pub fn amount(&self) -> Option<f64> {
        self.0
    }

    pub fn is_available(&self) -> bool {
        self.0.is_some()
    }

    /// Ascending order with unavailable prices after every known one.
    pub fn rank_cmp(&self, other: &Price) -> Ordering {
        match (self.0, other.0) {
            (Some(a), Some(b)) => a.total_cmp(&b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(amount) => write!(f, "₹{}", format_en_in(amount)),
            None => f.write_str("Price unavailable"),
        }
    }
}

/// Format a non-negative amount with Indian digit grouping
/// (`12,34,567.5`), keeping at most two fraction digits.
///
/// Works on the decimal text rather than an integer paise count, so amounts
/// past `u64` keep every digit.
fn format_en_in(amount: f64) -> String {
    let fixed = format!("{amount:.2}");
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));

    let mut out = String::with_capacity(whole.len() + whole.len() / 2 + 3);
    if whole.len() <= 3 {
        out.push_str(whole);
    } else {
        let (head, last3) = whole.split_at(whole.len() - 3);
        // Groups of two, counted from the right of `head`
        for (i, digit) in head.chars().enumerate() {
            if i > 0 && (head.len() - i) % 2 == 0 {
                out.push(',');
            }
            out.push(digit);
        }
        out.push(',');
        out.push_str(last3);
    }

    let fraction = fraction.trim_end_matches('0');
    if !fraction.is_empty() {
        out.push('.');
        out.push_str(fraction);
    }

    out
}
