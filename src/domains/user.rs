//! User administration lists.
//!
//! The slice is filled by the pipeline's page-list unpacking; the reducer
//! itself has nothing to do.

use serde_json::{json, Value};

use crate::action::Action;
use crate::mvi::Reducer;
use crate::slice::Slice;

pub const DOMAIN: &str = "user";

pub const USERS: &str = "USERS";
pub const USERS_KEY: &str = "users";

pub struct UserReducer;

impl Reducer for UserReducer {
    type State = Slice;
    type Intent = Action;

    fn initial_state() -> Slice {
        Slice::new()
            .set(USERS_KEY, json!([]))
            .set(format!("{}Page", USERS_KEY), Value::Null)
    }

    fn reduce(state: Slice, _action: &Action) -> Slice {
        state
    }
}
