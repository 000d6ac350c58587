//! Domain types for the route search.
//!
//! `SearchRequest` is validated at construction, so code that receives one
//! can trust its cities are non-empty and its date is a real calendar date.
//! `RouteOption` is the canonical shape every upstream record is normalized
//! into before ranking and display.

mod error;
mod price;
mod request;
mod route;

pub use error::DomainError;
pub use price::Price;
pub use request::SearchRequest;
pub use route::RouteOption;
