//! # Identity-comparable listener handle (`Listener`)
//!
//! [`Listener`] wraps a closure `F: Fn(&A)` in an `Rc`. Clones share the allocation,
//! and equality is allocation identity: two handles are equal iff one was cloned from
//! the other. Two separately wrapped closures are never equal, even if they are the same
//! function item.
//!
//! ## Example
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use nsemitter::Listener;
//!
//! let hits = Rc::new(Cell::new(0u32));
//! let h = hits.clone();
//! let l: Listener<u32> = Listener::new(move |n: &u32| h.set(h.get() + *n));
//!
//! let same = l.clone();
//! assert_eq!(l, same);
//! assert_ne!(l, Listener::new(|_: &u32| {}));
//!
//! l.call(&5);
//! assert_eq!(hits.get(), 5);
//! ```

use std::fmt;
use std::rc::Rc;

/// Shared handle to a listener callback.
///
/// Listeners receive the emitted payload by reference. Handles are `!Send`; dispatch
/// is single-threaded.
pub struct Listener<A: ?Sized> {
    f: Rc<dyn Fn(&A)>,
}

impl<A: ?Sized> Listener<A> {
    /// Wraps a closure into a new listener with its own identity.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&A) + 'static,
    {
        Self { f: Rc::new(f) }
    }

    /// Invokes the callback with `args`.
    #[inline]
    pub fn call(&self, args: &A) {
        (self.f)(args)
    }

    /// Returns true if both handles point at the same callback allocation.
    ///
    /// Compares the data pointer only; vtable pointers may differ across codegen units.
    #[inline]
    pub fn same(&self, other: &Self) -> bool {
        std::ptr::addr_eq(Rc::as_ptr(&self.f), Rc::as_ptr(&other.f))
    }
}

impl<A: ?Sized> Clone for Listener<A> {
    fn clone(&self) -> Self {
        Self {
            f: Rc::clone(&self.f),
        }
    }
}

impl<A: ?Sized> PartialEq for Listener<A> {
    fn eq(&self, other: &Self) -> bool {
        self.same(other)
    }
}

impl<A: ?Sized> Eq for Listener<A> {}

impl<A: ?Sized> fmt::Debug for Listener<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listener")
            .field("ptr", &Rc::as_ptr(&self.f).cast::<()>())
            .finish()
    }
}
