//! Process-wide store.
//!
//! The store owns the current [`StoreState`] and is the only writer: each
//! dispatch reduces the whole state under a write lock, so one action is
//! fully processed before the next. Readers get cheap snapshots.

use std::sync::{Arc, OnceLock};

use parking_lot::{Mutex, RwLock};
use thiserror::Error;
use tracing::debug;

use crate::action::Action;
use crate::notify::Notifier;
use crate::pipeline::Pipeline;
use crate::slice::StoreState;

/// Errors related to the global store.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Store is already initialized")]
    AlreadyInitialized,

    #[error("Store is not initialized")]
    NotInitialized,
}

type Subscriber = Arc<dyn Fn(&StoreState) + Send + Sync>;

/// Pipeline plus the state it reduces.
pub struct Store {
    pipeline: Pipeline,
    state: RwLock<StoreState>,
    notifier: Arc<dyn Notifier>,
    subscribers: Mutex<Vec<Subscriber>>,
}

impl Store {
    /// Creates a store holding every domain's initial state.
    pub fn new(pipeline: Pipeline, notifier: Arc<dyn Notifier>) -> Self {
        let state = pipeline.initial_state();
        Self {
            pipeline,
            state: RwLock::new(state),
            notifier,
            subscribers: Mutex::new(Vec::new()),
        }
    }

    /// Reduces `action` into the current state and returns the new snapshot.
    ///
    /// Subscribers run with no lock held, so they may dispatch or subscribe.
    /// Each one is handed the latest state at the time it is called, never
    /// an older snapshot overtaken by a concurrent dispatch.
    pub fn dispatch(&self, action: &Action) -> StoreState {
        let snapshot = {
            let mut state = self.state.write();
            let next = self.pipeline.reduce(&state, action, self.notifier.as_ref());
            *state = next.clone();
            next
        };

        let subscribers: Vec<Subscriber> = self.subscribers.lock().clone();
        debug!(
            action = %action.type_name(),
            subscribers = subscribers.len(),
            "action dispatched"
        );
        for subscriber in &subscribers {
            let latest = self.snapshot();
            subscriber(&latest);
        }

        snapshot
    }

    pub fn snapshot(&self) -> StoreState {
        self.state.read().clone()
    }

    /// Registers a listener called with every new snapshot.
    pub fn subscribe(&self, subscriber: impl Fn(&StoreState) + Send + Sync + 'static) {
        self.subscribers.lock().push(Arc::new(subscriber));
    }

    pub fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }
}

static GLOBAL: OnceLock<Store> = OnceLock::new();

/// Installs the process-wide store. Can only succeed once.
pub fn init(store: Store) -> Result<&'static Store, StoreError> {
    let mut installed = false;
    let global = GLOBAL.get_or_init(|| {
        installed = true;
        store
    });
    if installed {
        Ok(global)
    } else {
        Err(StoreError::AlreadyInitialized)
    }
}

/// The process-wide store installed by [`init`].
pub fn global() -> Result<&'static Store, StoreError> {
    GLOBAL.get().ok_or(StoreError::NotInitialized)
}
