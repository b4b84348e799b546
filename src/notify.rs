//! User-facing notification channel.
//!
//! The pipeline raises error messages through a [`Notifier`] and never
//! waits on it. Which sink receives them is decided at startup.

use std::sync::Arc;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

/// Fire-and-forget sink for user-visible error messages.
pub trait Notifier: Send + Sync {
    fn error(&self, message: &str);
}

/// Logs notifications through `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn error(&self, message: &str) {
        tracing::warn!(target: "console_state::notify", %message, "error notification");
    }
}

/// Prints notifications to stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn error(&self, message: &str) {
        eprintln!("error: {}", message);
    }
}

/// Records every message, optionally forwarding it to another sink.
///
/// Clones share the same record.
#[derive(Clone, Default)]
pub struct RecordingNotifier {
    messages: Arc<Mutex<Vec<String>>>,
    forward: Option<Arc<dyn Notifier>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn forwarding(inner: Arc<dyn Notifier>) -> Self {
        Self {
            messages: Arc::default(),
            forward: Some(inner),
        }
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().clone()
    }

    pub fn count(&self) -> usize {
        self.messages.lock().len()
    }
}

impl Notifier for RecordingNotifier {
    fn error(&self, message: &str) {
        self.messages.lock().push(message.to_string());
        if let Some(inner) = &self.forward {
            inner.error(message);
        }
    }
}

/// Configured notification sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotifySink {
    #[default]
    Log,
    Stderr,
}

impl NotifySink {
    pub fn build(self) -> Arc<dyn Notifier> {
        match self {
            NotifySink::Log => Arc::new(TracingNotifier),
            NotifySink::Stderr => Arc::new(StderrNotifier),
        }
    }
}
