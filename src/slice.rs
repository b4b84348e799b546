//! Immutable slice state and the store-wide state tree.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

use crate::mvi::SliceState;

/// Key of the loading flag every slice carries.
pub const LOADING_KEY: &str = "loading";

/// State owned by one domain: a loading flag plus keyed JSON entries.
///
/// Updates consume the slice and return the new value, so a reducer can
/// never observe a half-applied change.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Slice {
    #[serde(default)]
    loading: bool,
    #[serde(flatten)]
    entries: BTreeMap<String, Value>,
}

impl SliceState for Slice {}

impl Slice {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn with_loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Returns the slice with `key` set to `value`.
    ///
    /// `"loading"` is reserved for the loading flag: a boolean updates the
    /// flag and any other value leaves it untouched.
    pub fn set(mut self, key: impl Into<String>, value: Value) -> Self {
        let key = key.into();
        if key == LOADING_KEY {
            if let Some(loading) = value.as_bool() {
                self.loading = loading;
            }
            return self;
        }
        self.entries.insert(key, value);
        self
    }

}

/// The whole store: one shared slice per registered domain.
///
/// Slices are reference-counted so a dispatch that only touches one
/// domain reuses every other slice as-is.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoreState {
    slices: BTreeMap<String, Arc<Slice>>,
}

impl StoreState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn slice(&self, domain: &str) -> Option<&Slice> {
        self.slices.get(domain).map(Arc::as_ref)
    }

    pub(crate) fn shared_slice(&self, domain: &str) -> Option<&Arc<Slice>> {
        self.slices.get(domain)
    }

    pub fn with_slice(mut self, domain: impl Into<String>, slice: Slice) -> Self {
        self.slices.insert(domain.into(), Arc::new(slice));
        self
    }

    pub(crate) fn insert_shared(&mut self, domain: &str, slice: Arc<Slice>) {
        self.slices.insert(domain.to_string(), slice);
    }

    /// Whether both states hold the very same allocation for `domain`.
    pub fn shares_slice(&self, other: &StoreState, domain: &str) -> bool {
        match (self.slices.get(domain), other.slices.get(domain)) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl Serialize for StoreState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.slices.len()))?;
        for (domain, slice) in &self.slices {
            map.serialize_entry(domain, slice.as_ref())?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn set_returns_updated_copy() {
        let before = Slice::new();
        let after = before.clone().set("user", json!({ "id": 1 }));
        assert_eq!(before.get("user"), None);
        assert_eq!(after.get("user"), Some(&json!({ "id": 1 })));
    }

    #[test]
    fn loading_key_drives_flag() {
        let slice = Slice::new().set(LOADING_KEY, json!(true));
        assert!(slice.loading());
        assert_eq!(slice.get(LOADING_KEY), None);
    }

    #[test]
    fn non_bool_loading_is_ignored() {
        let slice = Slice::new().with_loading(true).set(LOADING_KEY, json!("no"));
        assert!(slice.loading());
    }

    #[test]
    fn serializes_flat() {
        let slice = Slice::new().with_loading(true).set("user", Value::Null);
        assert_eq!(
            serde_json::to_value(&slice).unwrap(),
            json!({ "loading": true, "user": null })
        );
    }

    #[test]
    fn deserializes_flat() {
        let slice: Slice = serde_json::from_value(json!({ "loading": true, "items": [1] })).unwrap();
        assert!(slice.loading());
        assert_eq!(slice.get("items"), Some(&json!([1])));
    }

    #[test]
    fn store_state_serializes_by_domain() {
        let state = StoreState::new().with_slice("auth", Slice::new());
        assert_eq!(
            serde_json::to_value(&state).unwrap(),
            json!({ "auth": { "loading": false } })
        );
    }

    #[test]
    fn clone_shares_slices() {
        let state = StoreState::new().with_slice("auth", Slice::new());
        let copy = state.clone();
        assert!(state.shares_slice(&copy, "auth"));
        assert!(!state.shares_slice(&copy, "user"));
    }
}
