pub mod action;
pub mod config;
pub mod domains;
pub mod logging;
pub mod mvi;
pub mod notify;
pub mod payload;
pub mod pipeline;
pub mod routes;
pub mod slice;
pub mod store;
