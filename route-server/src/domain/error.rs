//! Domain error types.
//!
//! These errors represent validation failures when building a search
//! request from user input. They are distinct from transport errors.

/// Domain-level errors for request validation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    /// A city field was blank after trimming
    #[error("{0} city must not be empty")]
    EmptyCity(&'static str),

    /// Date was not an ISO `YYYY-MM-DD` calendar date
    #[error("invalid date {0:?}: expected YYYY-MM-DD")]
    InvalidDate(String),
}
