//! Search orchestration.
//!
//! [`SearchOrchestrator`] runs one search: a single transport call, then the
//! reconciliation pipeline over whatever came back. [`SearchSession`] wraps
//! it with the state the result view reads, and makes sure overlapping
//! searches publish in issue order rather than completion order.

mod error;
mod orchestrator;
mod session;

pub use error::{FORMAT_ERROR_MESSAGE, SearchError};
pub use orchestrator::{SearchOrchestrator, SearchParams, reconcile};
pub use session::{PhaseSnapshot, SearchPhase, SearchSession};
