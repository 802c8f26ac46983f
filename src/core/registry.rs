//! # Scope registry - one emitter per scope label.
//!
//! [`ScopeRegistry`] hands out shared emitters keyed by scope:
//! - `get_or_create(scope)` → existing emitter, or a new one stored for next time
//! - `remove(scope)` → clears every listener on the emitter, then forgets it
//!
//! ## Architecture
//! ```text
//! ScopeRegistry
//!   └─► HashMap<String, Rc<NamespacedEmitter<A>>>
//!         ├─► "editor" → emitter (listeners...)
//!         └─► "network" → emitter (listeners...)
//! ```
//!
//! ## Rules
//! - The registry owns the emitters it creates; callers hold `Rc` clones
//! - After `remove`, outstanding clones still work but have no listeners and are
//!   detached; the next `get_or_create` builds a brand-new instance
//! - Emitters built directly with `NamespacedEmitter::new` are unknown to any registry
//! - Single-threaded: the registry is `!Send` like the emitters it holds

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::core::config::EmitterConfig;
use crate::core::emitter::NamespacedEmitter;

/// Registry of scoped singleton emitters.
///
/// ## Example
/// ```rust
/// use std::rc::Rc;
/// use nsemitter::ScopeRegistry;
///
/// let registry: ScopeRegistry<()> = ScopeRegistry::new();
/// let a = registry.get_or_create("editor");
/// let b = registry.get_or_create("editor");
/// assert!(Rc::ptr_eq(&a, &b));
///
/// assert!(registry.remove("editor"));
/// let c = registry.get_or_create("editor");
/// assert!(!Rc::ptr_eq(&a, &c));
/// ```
pub struct ScopeRegistry<A: ?Sized> {
    emitters: RefCell<HashMap<String, Rc<NamespacedEmitter<A>>>>,
    config: EmitterConfig,
}

impl<A: ?Sized> ScopeRegistry<A> {
    /// Creates an empty registry; new emitters get the default configuration.
    pub fn new() -> Self {
        Self::with_config(EmitterConfig::default())
    }

    /// Creates an empty registry whose emitters are built from `config`.
    pub fn with_config(config: EmitterConfig) -> Self {
        Self {
            emitters: RefCell::new(HashMap::new()),
            config,
        }
    }

    /// Returns the emitter for `scope`, creating it on first use.
    pub fn get_or_create(&self, scope: &str) -> Rc<NamespacedEmitter<A>> {
        if let Some(existing) = self.emitters.borrow().get(scope) {
            return Rc::clone(existing);
        }

        let emitter = Rc::new(NamespacedEmitter::with_config(scope, self.config.clone()));
        self.emitters
            .borrow_mut()
            .insert(scope.to_string(), Rc::clone(&emitter));
        tracing::debug!(scope, "emitter created");
        emitter
    }

    /// Returns the emitter for `scope` without creating one.
    pub fn get(&self, scope: &str) -> Option<Rc<NamespacedEmitter<A>>> {
        self.emitters.borrow().get(scope).cloned()
    }

    /// Clears and forgets the emitter for `scope`.
    ///
    /// Returns `true` if an emitter was registered. Unknown scopes are a no-op.
    pub fn remove(&self, scope: &str) -> bool {
        // Taken out first so the map is not borrowed while the emitter is cleared.
        let removed = self.emitters.borrow_mut().remove(scope);
        match removed {
            Some(emitter) => {
                emitter.clear();
                tracing::debug!(scope, "emitter removed");
                true
            }
            None => false,
        }
    }

    /// Returns `true` if an emitter exists for `scope`.
    pub fn contains(&self, scope: &str) -> bool {
        self.emitters.borrow().contains_key(scope)
    }

    /// Number of live scopes.
    pub fn len(&self) -> usize {
        self.emitters.borrow().len()
    }

    /// Returns `true` if no scope is registered.
    pub fn is_empty(&self) -> bool {
        self.emitters.borrow().is_empty()
    }

    /// Sorted list of live scope labels.
    pub fn scopes(&self) -> Vec<String> {
        let mut names: Vec<String> = self.emitters.borrow().keys().cloned().collect();
        names.sort_unstable();
        names
    }
}

impl<A: ?Sized> Default for ScopeRegistry<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: ?Sized> fmt::Debug for ScopeRegistry<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScopeRegistry")
            .field("scopes", &self.scopes())
            .field("config", &self.config)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listeners::Listener;
    use std::cell::Cell;

    fn bump(hits: &Rc<Cell<u32>>) -> Listener<()> {
        let h = hits.clone();
        Listener::new(move |_: &()| h.set(h.get() + 1))
    }

    #[test]
    fn test_same_scope_same_instance() {
        let reg: ScopeRegistry<()> = ScopeRegistry::new();
        let a = reg.get_or_create("s");
        let b = reg.get_or_create("s");
        assert!(Rc::ptr_eq(&a, &b));
        assert_eq!(a.scope(), "s");
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn test_distinct_scopes_are_independent() {
        let reg: ScopeRegistry<()> = ScopeRegistry::new();
        let hits = Rc::new(Cell::new(0));
        let a = reg.get_or_create("a");
        let b = reg.get_or_create("b");
        assert!(!Rc::ptr_eq(&a, &b));

        a.on("e", bump(&hits)).unwrap();
        b.emit("e", &());
        assert_eq!(hits.get(), 0);
        assert_eq!(reg.scopes(), vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_remove_clears_and_detaches() {
        let reg: ScopeRegistry<()> = ScopeRegistry::new();
        let hits = Rc::new(Cell::new(0));
        let old = reg.get_or_create("s");
        old.on("e", bump(&hits)).unwrap();
        old.on_ns("e", "ns", bump(&hits)).unwrap();

        assert!(reg.remove("s"));
        assert!(!reg.contains("s"));
        assert!(reg.get("s").is_none());

        // Outstanding handle has lost every listener.
        old.emit("e", &());
        assert_eq!(hits.get(), 0);
        assert!(!old.has_listener("e"));
        assert!(!old.has_listener_ns("e", "ns"));

        let fresh = reg.get_or_create("s");
        assert!(!Rc::ptr_eq(&old, &fresh));
        assert!(fresh.event_names().is_empty());

        // The old handle is no longer reachable through the registry.
        old.on("e", bump(&hits)).unwrap();
        fresh.emit("e", &());
        assert_eq!(hits.get(), 0);
    }

    #[test]
    fn test_remove_unknown_is_noop() {
        let reg: ScopeRegistry<()> = ScopeRegistry::new();
        assert!(!reg.remove("missing"));
        assert!(reg.is_empty());
    }

    #[test]
    fn test_config_passed_to_emitters() {
        let cfg = EmitterConfig::default().with_max_listeners(3);
        let reg: ScopeRegistry<()> = ScopeRegistry::with_config(cfg.clone());
        let em = reg.get_or_create("s");
        assert_eq!(em.primitive().config(), &cfg);
    }

    #[test]
    fn test_listener_removes_its_own_scope() {
        let reg: Rc<ScopeRegistry<()>> = Rc::new(ScopeRegistry::new());
        let em = reg.get_or_create("s");

        let reg2 = reg.clone();
        em.on("shutdown", Listener::new(move |_: &()| {
            reg2.remove("s");
        }))
        .unwrap();

        em.emit("shutdown", &());
        assert!(!reg.contains("s"));
        assert!(!em.has_listener("shutdown"));
    }
}
