//! # Default primitive (`BasicEmitter`)
//!
//! A plain synchronous emitter: a map from key to an ordered listener list.
//!
//! ## Rules
//! - **Duplicates kept**: adding the same listener twice makes it fire twice
//! - **Removal is LIFO**: `remove_listener` drops the last matching occurrence
//! - **Snapshot dispatch**: listeners added or removed during `emit` do not change
//!   the set being called for that emit
//! - **Empty lists are dropped**: a key with no listeners is removed from the map
//! - **Leak warning**: once a key exceeds `max_listeners`, a single `warn!` is logged
//!   for that key (reset when the key is emptied)

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

use crate::base::Primitive;
use crate::core::EmitterConfig;
use crate::error::EmitterError;
use crate::listeners::Listener;

/// `RefCell`-backed [`Primitive`] implementation.
pub struct BasicEmitter<A: ?Sized> {
    events: RefCell<HashMap<String, Vec<Listener<A>>>>,
    warned: RefCell<HashSet<String>>,
    config: EmitterConfig,
}

impl<A: ?Sized> BasicEmitter<A> {
    /// Creates an empty emitter with default configuration.
    pub fn new() -> Self {
        Self::with_config(EmitterConfig::default())
    }

    /// Creates an empty emitter with the given configuration.
    pub fn with_config(config: EmitterConfig) -> Self {
        Self {
            events: RefCell::new(HashMap::new()),
            warned: RefCell::new(HashSet::new()),
            config,
        }
    }

    /// Returns the configuration this emitter was built with.
    pub fn config(&self) -> &EmitterConfig {
        &self.config
    }

    fn check_leak(&self, key: &str, count: usize) {
        let Some(limit) = self.config.listener_limit() else {
            return;
        };
        if count > limit && self.warned.borrow_mut().insert(key.to_string()) {
            tracing::warn!(
                key,
                count,
                limit,
                "possible listener leak: key holds more listeners than max_listeners"
            );
        }
    }
}

impl<A: ?Sized> Default for BasicEmitter<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: ?Sized> std::fmt::Debug for BasicEmitter<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let events = self.events.borrow();
        let mut counts: Vec<(&str, usize)> =
            events.iter().map(|(k, v)| (k.as_str(), v.len())).collect();
        counts.sort_unstable();
        f.debug_struct("BasicEmitter")
            .field("events", &counts)
            .field("config", &self.config)
            .finish()
    }
}

impl<A: ?Sized> Primitive<A> for BasicEmitter<A> {
    fn add_listener(&self, key: &str, listener: Listener<A>) -> Result<(), EmitterError> {
        if key.is_empty() {
            return Err(EmitterError::EmptyEventType);
        }
        let count = {
            let mut events = self.events.borrow_mut();
            let list = events.entry(key.to_string()).or_default();
            list.push(listener);
            list.len()
        };
        self.check_leak(key, count);
        Ok(())
    }

    fn remove_listener(&self, key: &str, listener: &Listener<A>) {
        let mut events = self.events.borrow_mut();
        let Some(list) = events.get_mut(key) else {
            return;
        };
        if let Some(pos) = list.iter().rposition(|l| l == listener) {
            list.remove(pos);
        }
        if list.is_empty() {
            events.remove(key);
            self.warned.borrow_mut().remove(key);
        }
    }

    fn remove_all_listeners(&self, key: Option<&str>) {
        match key {
            Some(key) => {
                self.events.borrow_mut().remove(key);
                self.warned.borrow_mut().remove(key);
            }
            None => {
                self.events.borrow_mut().clear();
                self.warned.borrow_mut().clear();
            }
        }
    }

    fn emit(&self, key: &str, args: &A) -> bool {
        // Borrow released before any listener runs.
        let snapshot = self.listeners(key);
        if snapshot.is_empty() {
            return false;
        }
        for listener in &snapshot {
            listener.call(args);
        }
        true
    }

    fn listener_count(&self, key: &str) -> usize {
        self.events.borrow().get(key).map_or(0, Vec::len)
    }

    fn listeners(&self, key: &str) -> Vec<Listener<A>> {
        self.events.borrow().get(key).cloned().unwrap_or_default()
    }

    fn event_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.events.borrow().keys().cloned().collect();
        names.sort_unstable();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn counter() -> (Rc<Cell<u32>>, Listener<()>) {
        let hits = Rc::new(Cell::new(0));
        let h = hits.clone();
        (hits, Listener::new(move |_: &()| h.set(h.get() + 1)))
    }

    #[test]
    fn test_empty_key_rejected() {
        let em: BasicEmitter<()> = BasicEmitter::new();
        let (_, l) = counter();
        assert_eq!(em.add_listener("", l), Err(EmitterError::EmptyEventType));
        assert!(em.event_names().is_empty());
    }

    #[test]
    fn test_emit_reports_presence() {
        let em: BasicEmitter<()> = BasicEmitter::new();
        let (hits, l) = counter();
        assert!(!em.emit("a", &()));
        em.add_listener("a", l).unwrap();
        assert!(em.emit("a", &()));
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn test_duplicates_fire_twice_and_remove_one_at_a_time() {
        let em: BasicEmitter<()> = BasicEmitter::new();
        let (hits, l) = counter();
        em.add_listener("a", l.clone()).unwrap();
        em.add_listener("a", l.clone()).unwrap();
        em.emit("a", &());
        assert_eq!(hits.get(), 2);

        em.remove_listener("a", &l);
        assert_eq!(em.listener_count("a"), 1);
        em.remove_listener("a", &l);
        assert_eq!(em.listener_count("a"), 0);
        assert!(em.event_names().is_empty());
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let em: BasicEmitter<()> = BasicEmitter::new();
        let (_, l) = counter();
        let (_, other) = counter();
        em.remove_listener("missing", &l);
        em.add_listener("a", l).unwrap();
        em.remove_listener("a", &other);
        assert_eq!(em.listener_count("a"), 1);
    }

    #[test]
    fn test_remove_all_by_key_and_global() {
        let em: BasicEmitter<()> = BasicEmitter::new();
        let (_, l) = counter();
        em.add_listener("a", l.clone()).unwrap();
        em.add_listener("b", l.clone()).unwrap();
        em.add_listener("c", l).unwrap();

        em.remove_all_listeners(Some("a"));
        assert_eq!(em.event_names(), vec!["b".to_string(), "c".to_string()]);

        em.remove_all_listeners(None);
        assert!(em.event_names().is_empty());
    }

    #[test]
    fn test_listener_removing_itself_mid_emit() {
        let em: Rc<BasicEmitter<()>> = Rc::new(BasicEmitter::new());
        let (hits, second) = counter();

        let slot: Rc<RefCell<Option<Listener<()>>>> = Rc::new(RefCell::new(None));
        let em2 = em.clone();
        let slot2 = slot.clone();
        let first = Listener::new(move |_: &()| {
            if let Some(me) = slot2.borrow().as_ref() {
                em2.remove_listener("a", me);
            }
        });
        *slot.borrow_mut() = Some(first.clone());

        em.add_listener("a", first).unwrap();
        em.add_listener("a", second).unwrap();

        em.emit("a", &());
        assert_eq!(hits.get(), 1);
        assert_eq!(em.listener_count("a"), 1);
    }

    #[test]
    fn test_listener_added_mid_emit_waits_for_next_emit() {
        let em: Rc<BasicEmitter<()>> = Rc::new(BasicEmitter::new());
        let (hits, late) = counter();
        let em2 = em.clone();
        let adder = Listener::new(move |_: &()| {
            em2.add_listener("a", late.clone()).unwrap();
        });
        em.add_listener("a", adder).unwrap();

        em.emit("a", &());
        assert_eq!(hits.get(), 0);
        em.emit("a", &());
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn test_leak_threshold_does_not_reject() {
        let em: BasicEmitter<()> = BasicEmitter::with_config(EmitterConfig::default().with_max_listeners(1));
        let (hits, l) = counter();
        em.add_listener("a", l.clone()).unwrap();
        em.add_listener("a", l).unwrap();
        assert!(em.warned.borrow().contains("a"));
        em.emit("a", &());
        assert_eq!(hits.get(), 2);

        em.remove_all_listeners(Some("a"));
        assert!(!em.warned.borrow().contains("a"));
    }
}
