//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use console_state::config::PipelineConfig;
use console_state::domains;
use console_state::notify::RecordingNotifier;
use console_state::pipeline::Pipeline;
use console_state::store::Store;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

/// Pipeline with the console's domains and default settings.
pub fn console_pipeline() -> Pipeline {
    Pipeline::new(domains::console_domains(), &PipelineConfig::default())
        .expect("console domains are valid")
}

/// Store backed by the console pipeline and a recording notifier.
pub fn console_store() -> (Store, RecordingNotifier) {
    let notifier = RecordingNotifier::new();
    let store = Store::new(console_pipeline(), Arc::new(notifier.clone()));
    (store, notifier)
}

/// Write `content` to a config file inside a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}
