//! # Listener handles.
//!
//! This module provides [`Listener`], the callable handle registered on emitters.
//! Removal needs to find "the same listener" again, so a handle compares by the identity
//! of its allocation rather than by what the closure does.

mod listener;

pub use listener::Listener;
