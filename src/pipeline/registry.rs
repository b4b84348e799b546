//! Domain registration.

use thiserror::Error;

use crate::action::Action;
use crate::mvi::Reducer;
use crate::slice::Slice;

/// Errors raised while registering domains.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PipelineError {
    #[error("Domain key must not be empty")]
    EmptyDomainKey,

    #[error("Domain key '{key}' must not contain '/'")]
    InvalidDomainKey { key: String },

    #[error("Domain '{key}' is registered more than once")]
    DuplicateDomain { key: String },
}

/// A domain reducer bound to the key its actions are routed by.
#[derive(Clone)]
pub struct DomainReducer {
    key: String,
    reduce: fn(Slice, &Action) -> Slice,
    consumes_error: fn(&Action) -> bool,
    initial_state: Slice,
}

impl DomainReducer {
    /// Registers reducer `R` under `key`.
    pub fn of<R>(key: impl Into<String>) -> Self
    where
        R: Reducer<State = Slice, Intent = Action>,
    {
        Self {
            key: key.into(),
            reduce: R::reduce,
            consumes_error: R::consumes_error,
            initial_state: R::initial_state(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn initial_state(&self) -> &Slice {
        &self.initial_state
    }

    pub(crate) fn reduce(&self, state: Slice, action: &Action) -> Slice {
        (self.reduce)(state, action)
    }

    pub(crate) fn consumes_error(&self, action: &Action) -> bool {
        (self.consumes_error)(action)
    }
}

impl std::fmt::Debug for DomainReducer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DomainReducer")
            .field("key", &self.key)
            .field("initial_state", &self.initial_state)
            .finish_non_exhaustive()
    }
}

/// Checks that `key` can be matched unambiguously against `"<key>/"`.
///
/// A key containing `/` could be a prefix of another key followed by `/`
/// (`"a"` and `"a/b"`), so it is rejected.
pub fn validate_key(key: &str) -> Result<(), PipelineError> {
    if key.is_empty() {
        return Err(PipelineError::EmptyDomainKey);
    }
    if key.contains('/') {
        return Err(PipelineError::InvalidDomainKey {
            key: key.to_string(),
        });
    }
    Ok(())
}

pub(crate) fn validate_domains(domains: &[DomainReducer]) -> Result<(), PipelineError> {
    for (index, domain) in domains.iter().enumerate() {
        validate_key(domain.key())?;
        if domains[..index].iter().any(|d| d.key() == domain.key()) {
            return Err(PipelineError::DuplicateDomain {
                key: domain.key().to_string(),
            });
        }
    }
    Ok(())
}
