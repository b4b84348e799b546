//! Cross-cutting interceptors run after every routed domain reducer.

use serde_json::Value;
use tracing::{debug, warn};

use crate::action::Phase;
use crate::notify::Notifier;
use crate::payload::Outcome;

use super::context::Context;

/// A reducer-like step applied to every routed action, independent of
/// the domain that owns the slice.
///
/// Interceptors must not fail: input they do not recognise is passed on
/// unchanged.
pub trait Interceptor: Send + Sync {
    fn name(&self) -> &'static str;

    fn intercept<'a>(&self, ctx: Context<'a>, notifier: &dyn Notifier) -> Context<'a>;
}

/// Surfaces application errors (negative code, non-empty message).
#[derive(Debug, Default, Clone, Copy)]
pub struct ErrorInterceptor;

impl Interceptor for ErrorInterceptor {
    fn name(&self) -> &'static str {
        "error"
    }

    fn intercept<'a>(&self, ctx: Context<'a>, notifier: &dyn Notifier) -> Context<'a> {
        if ctx.error_consumed {
            return ctx;
        }
        if let Some(message) = ctx
            .action
            .and_then(|action| action.outcome())
            .and_then(Outcome::user_error)
        {
            notifier.error(message);
        }
        ctx
    }
}

/// Unpacks a fetched page of one or more lists into the slice.
///
/// For every key of the response data, `{ list, page }` is written to
/// `state[key]` and `state[key + page_suffix]`. Once anything was written
/// the chain is short-circuited.
#[derive(Debug, Clone)]
pub struct PageListInterceptor {
    page_suffix: String,
    strict: bool,
}

impl PageListInterceptor {
    pub fn new(page_suffix: impl Into<String>, strict: bool) -> Self {
        Self {
            page_suffix: page_suffix.into(),
            strict,
        }
    }
}

impl Default for PageListInterceptor {
    fn default() -> Self {
        Self::new("Page", false)
    }
}

impl Interceptor for PageListInterceptor {
    fn name(&self) -> &'static str {
        "page_list"
    }

    fn intercept<'a>(&self, ctx: Context<'a>, _notifier: &dyn Notifier) -> Context<'a> {
        let Some(action) = ctx.action else {
            return ctx;
        };
        if action.phase() != Phase::PageList {
            return ctx;
        }
        let Some(Outcome::Ok {
            data: Value::Object(pages),
        }) = action.outcome()
        else {
            return ctx;
        };

        let Context {
            mut state,
            action,
            error_consumed,
        } = ctx;
        let mut written = false;

        for (key, page) in pages {
            let list = page.get("list");
            let number = page.get("page");

            if self.strict && (list.is_none() || number.is_none()) {
                warn!(key = %key, "skipping malformed page entry");
                continue;
            }

            state = state
                .set(key.clone(), list.cloned().unwrap_or(Value::Null))
                .set(
                    format!("{}{}", key, self.page_suffix),
                    number.cloned().unwrap_or(Value::Null),
                );
            written = true;
        }

        let ctx = Context {
            state,
            action,
            error_consumed,
        };
        if written {
            debug!(keys = pages.len(), "page list unpacked");
            ctx.short_circuit()
        } else {
            ctx
        }
    }
}

/// Tracks whether a request is in flight.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoadingInterceptor;

impl Interceptor for LoadingInterceptor {
    fn name(&self) -> &'static str {
        "loading"
    }

    fn intercept<'a>(&self, mut ctx: Context<'a>, _notifier: &dyn Notifier) -> Context<'a> {
        let Some(action) = ctx.action else {
            return ctx;
        };
        match action.phase() {
            Phase::Request => ctx.state = ctx.state.with_loading(true),
            Phase::Response => ctx.state = ctx.state.with_loading(false),
            Phase::PageList | Phase::Plain => {}
        }
        ctx
    }
}
