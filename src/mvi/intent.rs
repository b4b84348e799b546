//! Base trait for dispatched actions.

/// Marker trait for objects a reducer can consume.
///
/// Intents represent:
/// - Operations being started (`_REQ`)
/// - Operation results arriving (`_RES`, `_PAGELIST`)
/// - Any other domain event
pub trait Intent: Send + Sync + 'static {}
