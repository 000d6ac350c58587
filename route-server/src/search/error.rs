//! Search failure types.

use crate::upstream::TransportError;

/// Message shown when the service answers with something other than an array.
pub const FORMAT_ERROR_MESSAGE: &str = "Unexpected response format from server";

/// Why a search produced no routes.
///
/// Neither kind is retried. `Display` gives the text to show the user.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SearchError {
    /// The response decoded but was not an array of records
    #[error("Unexpected response format from server")]
    Format,

    /// Network, timeout or HTTP failure
    #[error("{}", .0.user_message())]
    Transport(#[from] TransportError),
}

impl SearchError {
    /// Short machine-readable kind, used in JSON responses and logs.
    pub fn kind(&self) -> &'static str {
        match self {
            SearchError::Format => "format",
            SearchError::Transport(_) => "transport",
        }
    }
}
