//! Model-View-Intent (MVI) primitives for the console store.
//!
//! This module provides the base traits every domain slice builds on.
//!
//! # Architecture
//!
//! ```text
//! Action ──→ Reducer ──→ Interceptors ──→ Slice ──→ View
//!    ↑                                              │
//!    └──────────────────────────────────────────────┘
//! ```
//!
//! - **Slice**: Immutable state owned by one domain
//! - **Action**: Dispatched event (request started, response arrived, ...)
//! - **Reducer**: Pure function that transforms a slice based on an action

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::SliceState;
