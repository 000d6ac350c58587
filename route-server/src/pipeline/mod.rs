//! Result reconciliation pipeline.
//!
//! Turns the loosely-typed array the search service returns into a bounded,
//! ranked list of [`RouteOption`](crate::domain::RouteOption)s:
//!
//! ```text
//! raw array -> decode -> normalize -> rank -> window
//! ```
//!
//! Every stage is a pure function; nothing here suspends or keeps state
//! between searches.

mod decode;
mod normalize;
mod rank;
mod window;

pub use decode::{DetailedRecord, RawRecord, SimplifiedRecord, decode};
pub use normalize::{normalize, normalize_all};
pub use rank::{SortBy, rank_routes};
pub use window::{DEFAULT_LIMIT, ResultLimit, window};
