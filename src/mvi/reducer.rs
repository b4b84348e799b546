//! Reducer trait for domain slices.

use super::intent::Intent;
use super::state::SliceState;

/// Reducer transforms a slice based on an intent.
///
/// The reducer is the only place where domain state transitions happen.
/// It must be a pure function: (State, &Intent) -> State
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: SliceState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Process an intent and return the new state.
    ///
    /// This should be a pure function with no side effects.
    fn reduce(state: Self::State, intent: &Self::Intent) -> Self::State;

    /// State used before the first routed action reaches this reducer.
    fn initial_state() -> Self::State {
        <Self::State as Default>::default()
    }

    /// Whether this reducer has already surfaced the error carried by
    /// `intent`, so no user-facing notification should be raised for it.
    fn consumes_error(_intent: &Self::Intent) -> bool {
        false
    }
}
