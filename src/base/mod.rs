//! Base publish/subscribe layer.
//!
//! The namespaced emitter never stores callbacks itself; it composes a [`Primitive`]
//! and drives it with plain and composite keys. Any synchronous, single-threaded
//! emitter can sit behind the trait. [`BasicEmitter`] is the default one.
//!
//! ## Contents
//! - [`Primitive`] the seam: add/remove/emit/count by string key
//! - [`BasicEmitter`] `RefCell`-backed implementation with leak warnings

mod basic;
mod primitive;

pub use basic::BasicEmitter;
pub use primitive::Primitive;
