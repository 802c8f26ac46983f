//! # Bulk removal selector.
//!
//! [`Removal`] names the four bulk-removal shapes an emitter supports. Each variant
//! maps to a dedicated method on [`NamespacedEmitter`](crate::NamespacedEmitter);
//! the enum exists for callers that want to pick the shape at runtime.
//!
//! | Variant                 | Plain listeners | Namespaced listeners        |
//! |-------------------------|-----------------|-----------------------------|
//! | `Everything`            | all types       | all types, all namespaces   |
//! | `Plain(t)`              | type `t`        | untouched                   |
//! | `Namespace(t, ns)`      | untouched       | type `t`, namespace `ns`    |
//! | `Event(t)`              | type `t`        | type `t`, all namespaces    |

/// Which listeners a bulk removal targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Removal<'a> {
    /// Every listener on the emitter.
    Everything,
    /// Listeners registered without a namespace under this event type.
    Plain(&'a str),
    /// Listeners registered under this event type with this namespace.
    ///
    /// An empty namespace behaves as [`Removal::Plain`].
    Namespace(&'a str, &'a str),
    /// Every listener under this event type, namespaced or not.
    Event(&'a str),
}
