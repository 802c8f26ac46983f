//! # nsemitter
//!
//! **nsemitter** is a synchronous, single-threaded event emitter whose listeners can be
//! tagged with a *namespace*, plus a registry that hands out one emitter per *scope*.
//!
//! Namespaces let independent parts of a program share an event type and still remove
//! only their own listeners: a plugin registers `("save", "my-plugin", l)` and later
//! drops everything it put under `"my-plugin"` without touching other listeners of
//! `"save"`.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!   ScopeRegistry (scope → Rc<NamespacedEmitter>)
//!          │ get_or_create / remove
//!          ▼
//! ┌───────────────────────────────────────────────────────────────┐
//! │  NamespacedEmitter                                            │
//! │  - scope label (immutable)                                    │
//! │  - NamespaceIndex: type → namespace → [Listener]              │
//! │  - Primitive (BasicEmitter by default)                        │
//! └──────┬───────────────────────────────┬────────────────────────┘
//!        │ plain key "save"              │ composite key "save::my-plugin"
//!        ▼                               ▼
//! ┌───────────────────────────────────────────────────────────────┐
//! │  Primitive: key → [Listener]   (synchronous, snapshot emit)   │
//! └───────────────────────────────────────────────────────────────┘
//! ```
//!
//! ### Dispatch
//! ```text
//! emit("save", args)
//!   ├─► snapshot namespaces of "save" from the index
//!   ├─► for each ns: primitive.emit("save::<ns>", args)   (order unspecified)
//!   └─► primitive.emit("save", args)                       (always last)
//! ```
//!
//! ## Features
//! | Area            | Description                                                 | Key types                                   |
//! |-----------------|-------------------------------------------------------------|---------------------------------------------|
//! | **Listeners**   | Identity-comparable callback handles                        | [`Listener`]                                |
//! | **Emitter**     | Namespaced register / emit / unregister / query             | [`NamespacedEmitter`], [`Removal`]          |
//! | **Registry**    | Scoped singleton emitters with teardown                     | [`ScopeRegistry`]                           |
//! | **Primitive**   | Pluggable base emitter                                      | [`Primitive`], [`BasicEmitter`]             |
//! | **Errors**      | Typed caller-misuse errors                                  | [`EmitterError`]                            |
//! | **Config**      | Leak-warning threshold                                      | [`EmitterConfig`]                           |
//!
//! Diagnostics go through [`tracing`]; install a subscriber to see them.
//!
//! ## Example
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use nsemitter::{Listener, ScopeRegistry};
//!
//! let registry: ScopeRegistry<String> = ScopeRegistry::new();
//! let bus = registry.get_or_create("documents");
//!
//! let saved = Rc::new(Cell::new(0));
//! let s = saved.clone();
//! let autosave = Listener::new(move |_path: &String| s.set(s.get() + 1));
//! let s = saved.clone();
//! let status_bar = Listener::new(move |_path: &String| s.set(s.get() + 1));
//!
//! bus.on_ns("save", "autosave", autosave)?
//!     .on("save", status_bar)?;
//!
//! bus.emit("save", &"notes.md".to_string());
//! assert_eq!(saved.get(), 2);
//!
//! // Drop only the autosave plugin's listeners.
//! bus.unregister_namespace("save", "autosave");
//! bus.emit("save", &"notes.md".to_string());
//! assert_eq!(saved.get(), 3);
//!
//! // Tear the whole scope down.
//! registry.remove("documents");
//! bus.emit("save", &"notes.md".to_string());
//! assert_eq!(saved.get(), 3);
//! # Ok::<(), nsemitter::EmitterError>(())
//! ```
mod base;
mod core;
mod error;
mod listeners;

// ---- Public re-exports ----

pub use crate::base::{BasicEmitter, Primitive};
pub use crate::core::{DEFAULT_MAX_LISTENERS, EmitterConfig, NamespacedEmitter, Removal, ScopeRegistry};
pub use crate::error::EmitterError;
pub use crate::listeners::Listener;
