//! Action-interception pipeline.
//!
//! Every action is routed to the domain named by its type prefix. The
//! domain reducer runs first; its output then passes through a fixed
//! chain of cross-cutting interceptors:
//!
//! ```text
//! Action ──→ DomainReducer ──→ error ──→ page_list ──→ loading ──→ Slice
//!                                           │
//!                              short-circuit (action cleared)
//! ```
//!
//! Domains that the action does not target keep their slice untouched
//! (or start from their initial state).

mod context;
mod interceptor;
mod registry;

pub use context::Context;
pub use interceptor::{
    ErrorInterceptor, Interceptor, LoadingInterceptor, PageListInterceptor,
};
pub use registry::{validate_key, DomainReducer, PipelineError};

use std::sync::Arc;

use tracing::{debug, trace};

use crate::action::Action;
use crate::config::PipelineConfig;
use crate::notify::Notifier;
use crate::slice::{Slice, StoreState};

/// Domain reducers plus the interceptor chain applied after each of them.
pub struct Pipeline {
    domains: Vec<DomainReducer>,
    interceptors: Vec<Box<dyn Interceptor>>,
}

impl Pipeline {
    /// Builds a pipeline with the default chain: error → page_list → loading.
    pub fn new(
        domains: Vec<DomainReducer>,
        config: &PipelineConfig,
    ) -> Result<Self, PipelineError> {
        registry::validate_domains(&domains)?;
        let interceptors: Vec<Box<dyn Interceptor>> = vec![
            Box::new(ErrorInterceptor),
            Box::new(PageListInterceptor::new(
                config.page_suffix.clone(),
                config.strict_page_entries,
            )),
            Box::new(LoadingInterceptor),
        ];
        Ok(Self {
            domains,
            interceptors,
        })
    }

    /// Appends an interceptor after the default chain.
    ///
    /// It runs after `page_list`, so it sees a cleared action whenever a
    /// page was unpacked.
    pub fn with_interceptor(mut self, interceptor: impl Interceptor + 'static) -> Self {
        self.interceptors.push(Box::new(interceptor));
        self
    }

    pub fn interceptor_names(&self) -> Vec<&'static str> {
        self.interceptors.iter().map(|i| i.name()).collect()
    }

    /// State holding every domain's initial slice.
    pub fn initial_state(&self) -> StoreState {
        self.domains
            .iter()
            .fold(StoreState::new(), |state, domain| {
                state.with_slice(domain.key(), domain.initial_state().clone())
            })
    }

    /// Reduces the whole store for one action.
    ///
    /// Pure apart from `notifier`. Only registered domains appear in the
    /// result; untouched slices are shared with `state`.
    pub fn reduce(&self, state: &StoreState, action: &Action, notifier: &dyn Notifier) -> StoreState {
        trace!(action = %action.type_name(), "dispatch");
        let mut next = StoreState::new();

        for domain in &self.domains {
            let key = domain.key();
            if action.targets(key) {
                let current = state
                    .slice(key)
                    .cloned()
                    .unwrap_or_else(|| domain.initial_state().clone());
                let slice = self.reduce_slice(domain, current, action, notifier);
                next.insert_shared(key, Arc::new(slice));
            } else {
                let shared = state
                    .shared_slice(key)
                    .cloned()
                    .unwrap_or_else(|| Arc::new(domain.initial_state().clone()));
                next.insert_shared(key, shared);
            }
        }

        next
    }

    /// Runs one domain reducer followed by the interceptor chain.
    pub fn reduce_slice(
        &self,
        domain: &DomainReducer,
        state: Slice,
        action: &Action,
        notifier: &dyn Notifier,
    ) -> Slice {
        debug!(domain = domain.key(), action = %action.type_name(), "reducing slice");
        let mut ctx = Context::new(domain.reduce(state, action), action);
        if domain.consumes_error(action) {
            ctx = ctx.consume_error();
        }
        for interceptor in &self.interceptors {
            ctx = interceptor.intercept(ctx, notifier);
        }
        ctx.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mvi::Reducer;
    use crate::notify::RecordingNotifier;
    use crate::payload::Outcome;
    use serde_json::json;

    struct Passthrough;

    impl Reducer for Passthrough {
        type State = Slice;
        type Intent = Action;

        fn reduce(state: Slice, _action: &Action) -> Slice {
            state
        }
    }

    fn pipeline() -> Pipeline {
        Pipeline::new(
            vec![
                DomainReducer::of::<Passthrough>("app"),
                DomainReducer::of::<Passthrough>("user"),
            ],
            &PipelineConfig::default(),
        )
        .unwrap()
    }

    #[test]
    fn default_chain_order() {
        assert_eq!(pipeline().interceptor_names(), vec!["error", "page_list", "loading"]);
    }

    #[test]
    fn duplicate_domains_are_rejected() {
        let result = Pipeline::new(
            vec![
                DomainReducer::of::<Passthrough>("app"),
                DomainReducer::of::<Passthrough>("app"),
            ],
            &PipelineConfig::default(),
        );
        assert!(matches!(result, Err(PipelineError::DuplicateDomain { .. })));
    }

    #[test]
    fn missing_slice_starts_from_initial_state() {
        let pipeline = pipeline();
        let state = pipeline.reduce(
            &StoreState::new(),
            &Action::request("user", "LIST"),
            &RecordingNotifier::new(),
        );
        assert!(state.slice("user").unwrap().loading());
        assert_eq!(state.slice("app"), Some(&Slice::new()));
    }

    #[test]
    fn untouched_slices_are_shared() {
        let pipeline = pipeline();
        let before = pipeline.initial_state();
        let after = pipeline.reduce(
            &before,
            &Action::request("user", "LIST"),
            &RecordingNotifier::new(),
        );
        assert!(before.shares_slice(&after, "app"));
        assert!(!before.shares_slice(&after, "user"));
    }

    #[test]
    fn unregistered_domains_are_dropped() {
        let pipeline = pipeline();
        let state = StoreState::new().with_slice("legacy", Slice::new());
        let next = pipeline.reduce(&state, &Action::plain("app", "PING"), &RecordingNotifier::new());
        assert_eq!(next.slice("legacy"), None);
    }

    #[test]
    fn error_in_unrouted_domain_is_not_notified() {
        let notifier = RecordingNotifier::new();
        pipeline().reduce(
            &StoreState::new(),
            &Action::response("orders", "SAVE", Outcome::err(-1, "nope")),
            &notifier,
        );
        assert_eq!(notifier.count(), 0);
    }

    #[test]
    fn page_list_short_circuits_loading_for_appended_interceptors() {
        struct MarkSeen;

        impl Interceptor for MarkSeen {
            fn name(&self) -> &'static str {
                "mark_seen"
            }

            fn intercept<'a>(&self, mut ctx: Context<'a>, _notifier: &dyn Notifier) -> Context<'a> {
                if ctx.action.is_some() {
                    ctx.state = ctx.state.set("seen", json!(true));
                }
                ctx
            }
        }

        let pipeline = pipeline().with_interceptor(MarkSeen);
        let notifier = RecordingNotifier::new();

        let paged = pipeline.reduce(
            &StoreState::new(),
            &Action::page_list(
                "user",
                "USERS",
                Outcome::ok(json!({ "users": { "list": [], "page": 1 } })),
            ),
            &notifier,
        );
        assert_eq!(paged.slice("user").unwrap().get("seen"), None);

        let plain = pipeline.reduce(&StoreState::new(), &Action::plain("user", "PING"), &notifier);
        assert_eq!(plain.slice("user").unwrap().get("seen"), Some(&json!(true)));
    }
}
