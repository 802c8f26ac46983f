//! # Core primitive trait
//!
//! `Primitive` is the extension point for plugging a different base emitter under
//! [`NamespacedEmitter`](crate::NamespacedEmitter). Keys are opaque strings: the
//! primitive cannot tell a plain event type from a composite `type::namespace` key.
//!
//! ## Contract
//! - All methods take `&self`; implementations use interior mutability.
//! - No internal borrow may be held while a listener runs. Listeners are allowed to
//!   re-enter the primitive (add, remove, emit) from inside a dispatch.
//! - `emit` iterates a snapshot taken before the first listener is called.
//! - Duplicate registrations of the same listener are kept; each one fires.
//! - `add_listener` is the only fallible operation. On error nothing was registered.
//!
//! ## Example (skeleton)
//! ```rust
//! // use nsemitter::{Primitive, Listener, EmitterError};
//! //
//! // struct Recording { inner: BasicEmitter<String>, log: RefCell<Vec<String>> }
//! // impl Primitive<String> for Recording {
//! //     fn add_listener(&self, key: &str, l: Listener<String>) -> Result<(), EmitterError> {
//! //         self.log.borrow_mut().push(format!("add {key}"));
//! //         self.inner.add_listener(key, l)
//! //     }
//! //     // ...forward the rest
//! // }
//! ```

use crate::error::EmitterError;
use crate::listeners::Listener;

/// Contract for the synchronous base emitter.
pub trait Primitive<A: ?Sized> {
    /// Appends `listener` to the list for `key`.
    ///
    /// # Errors
    /// [`EmitterError::EmptyEventType`] if `key` is empty.
    fn add_listener(&self, key: &str, listener: Listener<A>) -> Result<(), EmitterError>;

    /// Removes the most recently added occurrence of `listener` under `key`.
    ///
    /// Absent key or listener is a no-op.
    fn remove_listener(&self, key: &str, listener: &Listener<A>);

    /// Removes every listener under `key`, or under every key when `None`.
    fn remove_all_listeners(&self, key: Option<&str>);

    /// Calls each listener registered under `key`, in registration order.
    ///
    /// Returns `true` if at least one listener was registered at dispatch time.
    fn emit(&self, key: &str, args: &A) -> bool;

    /// Number of listeners currently registered under `key`.
    fn listener_count(&self, key: &str) -> usize;

    /// Snapshot of the listeners registered under `key`.
    fn listeners(&self, key: &str) -> Vec<Listener<A>>;

    /// Keys that currently hold at least one listener.
    fn event_names(&self) -> Vec<String>;
}
