//! # Namespace-aware emitter.
//!
//! [`NamespacedEmitter`] composes a [`Primitive`] with a namespace index. Plain calls
//! are forwarded to the primitive under the event type. Namespaced calls go to the
//! primitive under a composite key, and the index records which namespaces exist per
//! event type so that `emit` knows which composite keys to fire.
//!
//! ## Architecture
//! ```text
//! register_ns("save", "audit", l)
//!     ├─► primitive.add_listener("save::audit", l)     (may fail → index untouched)
//!     └─► index["save"]["audit"].push(l)               (deduped)
//!
//! emit("save", args)
//!     ├─► for ns in index["save"] (snapshot):
//!     │       primitive.emit("save::<ns>", args)
//!     └─► primitive.emit("save", args)                 (always last)
//! ```
//!
//! ## Rules
//! - **Paired mutation**: the primitive is updated first; the index follows only on success
//! - **Absence is silent**: unknown types, namespaces or listeners never error
//! - **Re-entrancy**: no `RefCell` borrow is held while a listener runs; listeners may
//!   register, unregister or emit on the same emitter from inside a dispatch
//! - **Namespace order**: unspecified across namespaces; plain listeners fire last
//! - **Empty namespace**: `*_ns` calls with `""` behave as their plain counterparts

use std::cell::RefCell;
use std::fmt;

use crate::base::{BasicEmitter, Primitive};
use crate::core::config::EmitterConfig;
use crate::core::index::NamespaceIndex;
use crate::core::key::{composite_key, effective};
use crate::core::removal::Removal;
use crate::error::EmitterError;
use crate::listeners::Listener;

/// Event emitter with optional per-listener namespaces.
///
/// `A` is the payload passed by reference to every listener. `P` is the base
/// primitive; [`BasicEmitter`] unless constructed with [`NamespacedEmitter::with_primitive`].
///
/// ## Example
/// ```rust
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use nsemitter::{Listener, NamespacedEmitter};
///
/// let em: NamespacedEmitter<&str> = NamespacedEmitter::new("ui");
/// let hits = Rc::new(Cell::new(0));
///
/// let h = hits.clone();
/// let plugin = Listener::new(move |_: &&str| h.set(h.get() + 1));
/// let h = hits.clone();
/// let app = Listener::new(move |_: &&str| h.set(h.get() + 1));
///
/// em.on_ns("click", "plugin", plugin.clone())?
///     .on("click", app)?;
///
/// em.emit("click", &"button");
/// assert_eq!(hits.get(), 2);
///
/// em.off_ns("click", "plugin", &plugin).trigger("click", &"button");
/// assert_eq!(hits.get(), 3);
/// # Ok::<(), nsemitter::EmitterError>(())
/// ```
pub struct NamespacedEmitter<A: ?Sized, P = BasicEmitter<A>> {
    scope: String,
    primitive: P,
    index: RefCell<NamespaceIndex<A>>,
}

impl<A: ?Sized> NamespacedEmitter<A> {
    /// Creates an emitter over a fresh [`BasicEmitter`] with default configuration.
    pub fn new(scope: impl Into<String>) -> Self {
        Self::with_config(scope, EmitterConfig::default())
    }

    /// Creates an emitter over a fresh [`BasicEmitter`] built from `config`.
    pub fn with_config(scope: impl Into<String>, config: EmitterConfig) -> Self {
        Self::with_primitive(scope, BasicEmitter::with_config(config))
    }
}

impl<A: ?Sized, P: Primitive<A>> NamespacedEmitter<A, P> {
    /// Creates an emitter over a caller-supplied primitive.
    ///
    /// The primitive should start empty; listeners already on it are treated as plain
    /// registrations under whatever key they sit on.
    pub fn with_primitive(scope: impl Into<String>, primitive: P) -> Self {
        Self {
            scope: scope.into(),
            primitive,
            index: RefCell::new(NamespaceIndex::new()),
        }
    }

    /// Returns the scope label given at construction.
    pub fn scope(&self) -> &str {
        &self.scope
    }

    /// Borrows the underlying primitive.
    pub fn primitive(&self) -> &P {
        &self.primitive
    }

    // ---- registration ----

    /// Registers `listener` for `event` without a namespace.
    ///
    /// # Errors
    /// Whatever the primitive rejects (e.g. an empty `event`).
    pub fn register(&self, event: &str, listener: Listener<A>) -> Result<&Self, EmitterError> {
        self.primitive.add_listener(event, listener)?;
        Ok(self)
    }

    /// Registers `listener` for `event` under `namespace`.
    ///
    /// The index records the listener once per `(event, namespace)`. The primitive keeps
    /// its own duplicate semantics: registering the same listener twice here makes it
    /// fire twice per emit while the index still lists it once.
    ///
    /// An empty `namespace` registers a plain listener.
    ///
    /// # Errors
    /// [`EmitterError::EmptyEventType`] for an empty `event`, or whatever the primitive
    /// rejects. On error the index is left untouched.
    pub fn register_ns(
        &self,
        event: &str,
        namespace: &str,
        listener: Listener<A>,
    ) -> Result<&Self, EmitterError> {
        let Some(ns) = effective(namespace) else {
            return self.register(event, listener);
        };
        if event.is_empty() {
            return Err(EmitterError::EmptyEventType);
        }

        self.primitive
            .add_listener(&composite_key(event, ns), listener.clone())?;
        self.index.borrow_mut().insert(event, ns, listener);
        Ok(self)
    }

    /// Alias for [`register`](Self::register).
    #[inline]
    pub fn on(&self, event: &str, listener: Listener<A>) -> Result<&Self, EmitterError> {
        self.register(event, listener)
    }

    /// Alias for [`register_ns`](Self::register_ns).
    #[inline]
    pub fn on_ns(
        &self,
        event: &str,
        namespace: &str,
        listener: Listener<A>,
    ) -> Result<&Self, EmitterError> {
        self.register_ns(event, namespace, listener)
    }

    // ---- dispatch ----

    /// Fires every namespaced listener of `event`, then every plain one.
    ///
    /// Each namespace known under `event` is dispatched exactly once, in unspecified
    /// order. The plain dispatch always happens last. `args` is forwarded unchanged.
    pub fn emit(&self, event: &str, args: &A) -> &Self {
        // Released before dispatch so listeners can mutate the index.
        let namespaces = self.index.borrow().namespaces(event);
        tracing::trace!(
            scope = %self.scope,
            event,
            known_namespaces = namespaces.len(),
            "emit"
        );

        for ns in &namespaces {
            self.primitive.emit(&composite_key(event, ns), args);
        }
        self.primitive.emit(event, args);
        self
    }

    /// Alias for [`emit`](Self::emit).
    #[inline]
    pub fn trigger(&self, event: &str, args: &A) -> &Self {
        self.emit(event, args)
    }

    // ---- removal ----

    /// Removes a plain registration of `listener` for `event`.
    ///
    /// Namespaced registrations of the same listener are not affected.
    pub fn unregister(&self, event: &str, listener: &Listener<A>) -> &Self {
        self.primitive.remove_listener(event, listener);
        self
    }

    /// Removes `listener` from `event` under `namespace` only.
    ///
    /// An empty `namespace` removes a plain registration.
    pub fn unregister_ns(&self, event: &str, namespace: &str, listener: &Listener<A>) -> &Self {
        let Some(ns) = effective(namespace) else {
            return self.unregister(event, listener);
        };

        let key = composite_key(event, ns);
        self.primitive.remove_listener(&key, listener);

        let mut index = self.index.borrow_mut();
        index.remove(event, ns, listener);
        if self.primitive.listener_count(&key) == 0 {
            index.forget_key(&key);
        }
        self
    }

    /// Alias for [`unregister`](Self::unregister).
    #[inline]
    pub fn off(&self, event: &str, listener: &Listener<A>) -> &Self {
        self.unregister(event, listener)
    }

    /// Alias for [`unregister_ns`](Self::unregister_ns).
    #[inline]
    pub fn off_ns(&self, event: &str, namespace: &str, listener: &Listener<A>) -> &Self {
        self.unregister_ns(event, namespace, listener)
    }

    /// Runs the bulk removal selected by `removal`.
    ///
    /// See [`Removal`] for the shapes; each one forwards to its dedicated method.
    pub fn unregister_all(&self, removal: Removal<'_>) -> &Self {
        match removal {
            Removal::Everything => self.clear(),
            Removal::Plain(event) => self.unregister_plain(event),
            Removal::Namespace(event, ns) => self.unregister_namespace(event, ns),
            Removal::Event(event) => self.unregister_event(event),
        }
    }

    /// Removes every listener, plain and namespaced, for every event type.
    pub fn clear(&self) -> &Self {
        self.primitive.remove_all_listeners(None);
        self.index.borrow_mut().clear();
        tracing::debug!(scope = %self.scope, "all listeners removed");
        self
    }

    /// Removes the plain listeners of `event`. Namespaced listeners keep firing.
    pub fn unregister_plain(&self, event: &str) -> &Self {
        self.primitive.remove_all_listeners(Some(event));
        self
    }

    /// Removes the listeners indexed under `(event, namespace)` and forgets the namespace.
    ///
    /// Each indexed listener is removed from the primitive once. A listener that was
    /// registered twice on the same pair therefore keeps one primitive registration.
    /// Unknown pairs are a no-op. An empty `namespace` behaves as
    /// [`unregister_plain`](Self::unregister_plain).
    pub fn unregister_namespace(&self, event: &str, namespace: &str) -> &Self {
        let Some(ns) = effective(namespace) else {
            return self.unregister_plain(event);
        };
        let Some(listeners) = self.index.borrow_mut().take_namespace(event, ns) else {
            return self;
        };

        let key = composite_key(event, ns);
        for listener in &listeners {
            self.primitive.remove_listener(&key, listener);
        }
        if self.primitive.listener_count(&key) == 0 {
            self.index.borrow_mut().forget_key(&key);
        }
        self
    }

    /// Removes every listener of `event`, plain and under every namespace.
    ///
    /// Also clears primitive entries left behind by duplicate registrations under
    /// namespaces that were already dropped.
    pub fn unregister_event(&self, event: &str) -> &Self {
        self.unregister_plain(event);

        let keys = self.index.borrow_mut().take_event(event);
        for key in &keys {
            self.primitive.remove_all_listeners(Some(key));
        }
        self
    }

    // ---- queries ----

    /// Returns `true` if `event` has at least one plain listener.
    pub fn has_listener(&self, event: &str) -> bool {
        self.primitive.listener_count(event) > 0
    }

    /// Returns `true` if `(event, namespace)` has at least one indexed listener.
    ///
    /// An empty `namespace` behaves as [`has_listener`](Self::has_listener).
    pub fn has_listener_ns(&self, event: &str, namespace: &str) -> bool {
        match effective(namespace) {
            Some(ns) => self.index.borrow().len(event, ns) > 0,
            None => self.has_listener(event),
        }
    }

    /// Number of plain listeners registered for `event`.
    pub fn listener_count(&self, event: &str) -> usize {
        self.primitive.listener_count(event)
    }

    /// Number of listeners indexed under `(event, namespace)`.
    pub fn listener_count_ns(&self, event: &str, namespace: &str) -> usize {
        match effective(namespace) {
            Some(ns) => self.index.borrow().len(event, ns),
            None => self.listener_count(event),
        }
    }

    /// Sorted namespaces under `event` that currently hold listeners.
    pub fn namespaces(&self, event: &str) -> Vec<String> {
        let index = self.index.borrow();
        let mut out: Vec<String> = index
            .namespaces(event)
            .into_iter()
            .filter(|ns| index.len(event, ns) > 0)
            .collect();
        out.sort_unstable();
        out
    }

    /// Sorted event types that have plain or namespaced listeners.
    ///
    /// Composite keys used internally for namespaced registrations are not reported.
    pub fn event_names(&self) -> Vec<String> {
        let index = self.index.borrow();
        let mut names: Vec<String> = self
            .primitive
            .event_names()
            .into_iter()
            .filter(|key| !index.is_issued(key))
            .collect();
        names.extend(index.events().map(str::to_string));
        names.sort_unstable();
        names.dedup();
        names
    }
}

impl<A: ?Sized, P: fmt::Debug> fmt::Debug for NamespacedEmitter<A, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NamespacedEmitter")
            .field("scope", &self.scope)
            .field("primitive", &self.primitive)
            .finish_non_exhaustive()
    }
}
