//! Configuration loading for the console store.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, LoggingConfig, NotificationConfig, PipelineConfig};
