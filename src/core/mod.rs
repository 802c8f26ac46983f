//! Namespaced emitter core.
//!
//! The public API from this module is [`NamespacedEmitter`], [`ScopeRegistry`],
//! [`EmitterConfig`] and [`Removal`].
//!
//! Internal modules:
//! - [`key`]: composite `type::namespace` keys used on the primitive;
//! - [`index`]: type → namespace → listeners bookkeeping;
//! - [`emitter`]: namespace-aware register/emit/unregister/query;
//! - [`registry`]: scope → emitter map with get-or-create and teardown;
//! - [`config`]: construction settings;
//! - [`removal`]: bulk removal selector.

mod config;
mod emitter;
mod index;
mod key;
mod registry;
mod removal;

pub use config::{DEFAULT_MAX_LISTENERS, EmitterConfig};
pub use emitter::NamespacedEmitter;
pub use registry::ScopeRegistry;
pub use removal::Removal;
