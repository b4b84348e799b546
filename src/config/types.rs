use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::notify::NotifySink;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub notifications: NotificationConfig,
    #[serde(default)]
    pub pipeline: PipelineConfig,
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset (default: "info").
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file base path. `CONSOLE_STATE_LOG` takes precedence.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

/// Where user-facing error notifications go.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NotificationConfig {
    #[serde(default)]
    pub sink: NotifySink,
}

/// Interceptor chain settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Suffix appended to a list key to store its page info (default: "Page").
    #[serde(default = "default_page_suffix")]
    pub page_suffix: String,
    /// Skip page entries lacking `list` or `page` instead of storing null.
    #[serde(default)]
    pub strict_page_entries: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_page_suffix() -> String {
    "Page".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            page_suffix: default_page_suffix(),
            strict_page_entries: false,
        }
    }
}
