//! Domain reducers registered with the console store.

pub mod auth;
pub mod user;

use crate::pipeline::DomainReducer;

pub use auth::AuthReducer;
pub use user::UserReducer;

/// Every domain the console registers, keyed by action prefix.
pub fn console_domains() -> Vec<DomainReducer> {
    vec![
        DomainReducer::of::<AuthReducer>(auth::DOMAIN),
        DomainReducer::of::<UserReducer>(user::DOMAIN),
    ]
}
