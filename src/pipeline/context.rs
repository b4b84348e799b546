//! Per-dispatch value threaded through the interceptor chain.

use crate::action::Action;
use crate::slice::Slice;

/// State and action as seen by one interceptor.
///
/// `action` becomes `None` once an interceptor short-circuits the chain;
/// later interceptors then leave the state alone.
#[derive(Debug, Clone)]
pub struct Context<'a> {
    pub state: Slice,
    pub action: Option<&'a Action>,
    /// The domain reducer already surfaced this action's error.
    pub error_consumed: bool,
}

impl<'a> Context<'a> {
    pub fn new(state: Slice, action: &'a Action) -> Self {
        Self {
            state,
            action: Some(action),
            error_consumed: false,
        }
    }

    pub fn consume_error(mut self) -> Self {
        self.error_consumed = true;
        self
    }

    /// Clears the action so later interceptors see nothing to act on.
    pub fn short_circuit(mut self) -> Self {
        self.action = None;
        self
    }

    pub fn is_short_circuited(&self) -> bool {
        self.action.is_none()
    }
}
