//! # Namespace index.
//!
//! Secondary bookkeeping for namespaced registrations:
//!
//! ```text
//! event type ──► namespace ──► [listener, listener, ...]   (insertion order)
//! ```
//!
//! ## Rules
//! - A list never holds the same listener twice (`insert` is idempotent)
//! - Lists emptied by `remove` are kept; the namespace stays known to `emit`
//!   until it is dropped by `take_namespace`/`take_event`/`clear`
//! - The index holds no callbacks of its own; every entry mirrors a registration on
//!   the primitive under the composite key, and the emitter mutates both together
//! - Every composite key handed to the primitive is remembered with its event type
//!   until nothing is left under it, so leftovers of duplicate registrations can
//!   still be hidden from callers and cleared with their event type

use std::collections::HashMap;

use crate::core::key::composite_key;
use crate::listeners::Listener;

pub(crate) struct NamespaceIndex<A: ?Sized> {
    types: HashMap<String, HashMap<String, Vec<Listener<A>>>>,
    /// Composite key → event type.
    issued: HashMap<String, String>,
}

impl<A: ?Sized> NamespaceIndex<A> {
    pub(crate) fn new() -> Self {
        Self {
            types: HashMap::new(),
            issued: HashMap::new(),
        }
    }

    /// Appends `listener` at `(event, namespace)` unless already present.
    ///
    /// Returns `true` if the list changed.
    pub(crate) fn insert(&mut self, event: &str, namespace: &str, listener: Listener<A>) -> bool {
        self.issued
            .entry(composite_key(event, namespace))
            .or_insert_with(|| event.to_string());
        let list = self
            .types
            .entry(event.to_string())
            .or_default()
            .entry(namespace.to_string())
            .or_default();
        if list.contains(&listener) {
            return false;
        }
        list.push(listener);
        true
    }

    /// Removes the first occurrence of `listener` at `(event, namespace)`.
    pub(crate) fn remove(&mut self, event: &str, namespace: &str, listener: &Listener<A>) -> bool {
        let Some(list) = self
            .types
            .get_mut(event)
            .and_then(|nss| nss.get_mut(namespace))
        else {
            return false;
        };
        match list.iter().position(|l| l == listener) {
            Some(pos) => {
                list.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Every namespace known under `event`, including ones with emptied lists.
    pub(crate) fn namespaces(&self, event: &str) -> Vec<String> {
        self.types
            .get(event)
            .map(|nss| nss.keys().cloned().collect())
            .unwrap_or_default()
    }

    pub(crate) fn len(&self, event: &str, namespace: &str) -> usize {
        self.types
            .get(event)
            .and_then(|nss| nss.get(namespace))
            .map_or(0, Vec::len)
    }

    /// Drops the `(event, namespace)` entry and returns its list.
    pub(crate) fn take_namespace(&mut self, event: &str, namespace: &str) -> Option<Vec<Listener<A>>> {
        self.types.get_mut(event)?.remove(namespace)
    }

    /// Drops every namespace under `event` and returns every composite key ever
    /// issued for it, including keys whose namespace was already dropped.
    pub(crate) fn take_event(&mut self, event: &str) -> Vec<String> {
        self.types.remove(event);
        let keys: Vec<String> = self
            .issued
            .iter()
            .filter(|(_, owner)| owner.as_str() == event)
            .map(|(key, _)| key.clone())
            .collect();
        for key in &keys {
            self.issued.remove(key);
        }
        keys
    }

    /// Returns `true` if `key` is a composite key issued to the primitive.
    pub(crate) fn is_issued(&self, key: &str) -> bool {
        self.issued.contains_key(key)
    }

    /// Forgets an issued composite key once the primitive holds nothing under it.
    pub(crate) fn forget_key(&mut self, key: &str) {
        self.issued.remove(key);
    }

    /// Event types that currently hold at least one non-empty namespace list.
    pub(crate) fn events(&self) -> impl Iterator<Item = &str> {
        self.types
            .iter()
            .filter(|(_, nss)| nss.values().any(|l| !l.is_empty()))
            .map(|(event, _)| event.as_str())
    }

    pub(crate) fn clear(&mut self) {
        self.types.clear();
        self.issued.clear();
    }
}
