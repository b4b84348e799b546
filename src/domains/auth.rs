//! Authentication and session state.

use serde_json::Value;

use crate::action::{Action, Phase};
use crate::mvi::Reducer;
use crate::payload::Outcome;
use crate::slice::Slice;

pub const DOMAIN: &str = "auth";

pub const LOGIN: &str = "LOGIN";
pub const LOGIN_CHECK: &str = "LOGIN_CHECK";
pub const REGISTER: &str = "REGISTER";

pub const USER_KEY: &str = "user";
pub const ERROR_KEY: &str = "error";
pub const LOGIN_CHECK_MESSAGE_KEY: &str = "loginCheckMessage";

/// Reducer for the signed-in user.
///
/// Only responses matter here; the loading flag is handled by the
/// pipeline's interceptors.
pub struct AuthReducer;

impl Reducer for AuthReducer {
    type State = Slice;
    type Intent = Action;

    fn initial_state() -> Slice {
        Slice::new()
            .set(ERROR_KEY, Value::Bool(false))
            .set(USER_KEY, Value::Null)
    }

    fn reduce(state: Slice, action: &Action) -> Slice {
        if action.phase() != Phase::Response {
            return state;
        }
        let Some(outcome) = action.outcome() else {
            return state;
        };

        match (action.verb(), outcome) {
            (LOGIN | LOGIN_CHECK, Outcome::Ok { data }) => state.set(USER_KEY, data.clone()),
            (LOGIN_CHECK, Outcome::Err { message, .. }) if !message.is_empty() => {
                state.set(LOGIN_CHECK_MESSAGE_KEY, Value::String(message.clone()))
            }
            (REGISTER, Outcome::Ok { data }) => {
                let user = data
                    .get(USER_KEY)
                    .filter(|user| !user.is_null())
                    .cloned()
                    .unwrap_or(Value::Null);
                state.set(USER_KEY, user)
            }
            _ => state,
        }
    }

    /// A failed session check is shown inline on the login page rather
    /// than as a toast.
    fn consumes_error(action: &Action) -> bool {
        action.phase() == Phase::Response
            && action.verb() == LOGIN_CHECK
            && matches!(action.outcome(), Some(Outcome::Err { message, .. }) if !message.is_empty())
    }
}
