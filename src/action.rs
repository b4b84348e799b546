//! Typed actions and the `"<domain>/<verb>"` wire convention.
//!
//! Actions arriving from the network layer are named `"<domain>/<verb>"`
//! where the verb suffix tells the lifecycle phase (`_REQ`, `_RES`,
//! `_PAGELIST`). The suffix is parsed once here into [`Phase`]; nothing
//! downstream matches on strings.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::mvi::Intent;
use crate::payload::{Outcome, Payload};

/// Errors raised while parsing a wire action.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ActionError {
    #[error("Action type '{type_name}' has no '<domain>/' prefix")]
    MissingDomain { type_name: String },

    #[error("Action type '{type_name}' has an empty verb")]
    EmptyVerb { type_name: String },
}

/// Lifecycle phase of an asynchronous operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Operation started (`_REQ`).
    Request,
    /// Operation completed (`_RES`).
    Response,
    /// One page of a list was fetched (`_PAGELIST`).
    PageList,
    /// Any other action.
    Plain,
}

impl Phase {
    // `_PAGELIST` is checked first; the others are disjoint from it.
    const SUFFIXES: [(&'static str, Phase); 3] = [
        ("_PAGELIST", Phase::PageList),
        ("_REQ", Phase::Request),
        ("_RES", Phase::Response),
    ];

    pub fn suffix(self) -> &'static str {
        match self {
            Phase::Request => "_REQ",
            Phase::Response => "_RES",
            Phase::PageList => "_PAGELIST",
            Phase::Plain => "",
        }
    }

    /// Splits a wire verb into its base name and phase.
    pub fn split(verb: &str) -> (&str, Phase) {
        Self::SUFFIXES
            .iter()
            .find_map(|(suffix, phase)| verb.strip_suffix(suffix).map(|base| (base, *phase)))
            .unwrap_or((verb, Phase::Plain))
    }
}

/// A dispatched action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "WireAction", into = "WireAction")]
pub struct Action {
    domain: String,
    verb: String,
    phase: Phase,
    payload: Payload,
}

impl Intent for Action {}

impl Action {
    pub fn new(domain: impl Into<String>, verb: impl Into<String>, phase: Phase) -> Self {
        Self {
            domain: domain.into(),
            verb: verb.into(),
            phase,
            payload: Payload::Empty,
        }
    }

    pub fn plain(domain: impl Into<String>, verb: impl Into<String>) -> Self {
        Self::new(domain, verb, Phase::Plain)
    }

    pub fn request(domain: impl Into<String>, verb: impl Into<String>) -> Self {
        Self::new(domain, verb, Phase::Request)
    }

    pub fn response(domain: impl Into<String>, verb: impl Into<String>, outcome: Outcome) -> Self {
        Self::new(domain, verb, Phase::Response).with_payload(outcome)
    }

    pub fn page_list(domain: impl Into<String>, verb: impl Into<String>, outcome: Outcome) -> Self {
        Self::new(domain, verb, Phase::PageList).with_payload(outcome)
    }

    pub fn with_payload(mut self, payload: impl Into<Payload>) -> Self {
        self.payload = payload.into();
        self
    }

    /// Parses a wire action type such as `"auth/LOGIN_RES"`.
    ///
    /// The domain ends at the first `/`; everything after it is the verb.
    pub fn parse(type_name: &str, payload: Value) -> Result<Self, ActionError> {
        let Some((domain, verb)) = type_name.split_once('/').filter(|(d, _)| !d.is_empty())
        else {
            return Err(ActionError::MissingDomain {
                type_name: type_name.to_string(),
            });
        };

        if verb.is_empty() {
            return Err(ActionError::EmptyVerb {
                type_name: type_name.to_string(),
            });
        }

        let (base, phase) = Phase::split(verb);
        Ok(Self::new(domain, base, phase).with_payload(Payload::from_wire(payload)))
    }

    /// Renders the wire type name, e.g. `"auth/LOGIN_RES"`.
    pub fn type_name(&self) -> String {
        format!("{}/{}{}", self.domain, self.verb, self.phase.suffix())
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn verb(&self) -> &str {
        &self.verb
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn outcome(&self) -> Option<&Outcome> {
        self.payload.outcome()
    }

    /// Whether this action is routed to the slice registered under `domain`.
    pub fn targets(&self, domain: &str) -> bool {
        self.domain == domain
    }
}

/// Wire shape `{ "type": "...", "payload": ... }`.
#[derive(Serialize, Deserialize)]
struct WireAction {
    #[serde(rename = "type")]
    type_name: String,
    #[serde(default)]
    payload: Value,
}

impl TryFrom<WireAction> for Action {
    type Error = ActionError;

    fn try_from(wire: WireAction) -> Result<Self, Self::Error> {
        Action::parse(&wire.type_name, wire.payload)
    }
}

impl From<Action> for WireAction {
    fn from(action: Action) -> Self {
        WireAction {
            type_name: action.type_name(),
            payload: action.payload.to_wire(),
        }
    }
}
