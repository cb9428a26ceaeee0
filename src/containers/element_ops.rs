//! Element capability sets
//!
//! A [`DynamicArray`](super::DynamicArray) never assumes anything about its
//! element type. How an element is duplicated, compared and released is
//! supplied through an [`ElementOps`] implementation at construction time.

use std::fmt;
use std::marker::PhantomData;

/// Value semantics for the elements stored in a container.
///
/// Implementations must uphold:
///
/// - `copy` returns an independently owned duplicate
/// - `equals` is reflexive and symmetric
/// - `destroy` releases everything the element owns; the container calls it
///   exactly once per element it removes or drops
pub trait ElementOps<T> {
    /// Produce an independent duplicate of `element`
    fn copy(&self, element: &T) -> T;

    /// Compare two elements by content
    fn equals(&self, a: &T, b: &T) -> bool;

    /// Release an element the container no longer holds
    #[inline]
    fn destroy(&self, element: T) {
        drop(element);
    }
}

/// Capability set backed by `Clone`, `PartialEq` and `Drop`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CloneOps;

impl<T: Clone + PartialEq> ElementOps<T> for CloneOps {
    #[inline]
    fn copy(&self, element: &T) -> T {
        element.clone()
    }

    #[inline]
    fn equals(&self, a: &T, b: &T) -> bool {
        a == b
    }
}

type CopyFn<T> = Box<dyn Fn(&T) -> T>;
type EqualsFn<T> = Box<dyn Fn(&T, &T) -> bool>;
type DestroyFn<T> = Box<dyn Fn(T)>;

/// Capability set built from three closures
///
/// Useful when the element type has no suitable `Clone`/`PartialEq`
/// implementations, or when the caller wants to observe every copy and
/// release.
///
/// ```rust
/// use dynarray::containers::{DynamicArray, FnOps};
///
/// let ops = FnOps::new(
///     |s: &String| s.clone(),
///     |a: &String, b: &String| a.eq_ignore_ascii_case(b),
///     |s: String| drop(s),
/// );
/// let mut arr = DynamicArray::new(4, 0.25, ops).unwrap();
/// arr.append(&"Hello".to_string());
/// assert!(arr.find(&"HELLO".to_string()));
/// ```
pub struct FnOps<T> {
    copy_fn: CopyFn<T>,
    equals_fn: EqualsFn<T>,
    destroy_fn: DestroyFn<T>,
    _marker: PhantomData<fn(T) -> T>,
}

impl<T> FnOps<T> {
    /// Create a capability set from copy, equality and destroy callbacks
    pub fn new<C, E, D>(copy_fn: C, equals_fn: E, destroy_fn: D) -> Self
    where
        C: Fn(&T) -> T + 'static,
        E: Fn(&T, &T) -> bool + 'static,
        D: Fn(T) + 'static,
    {
        Self {
            copy_fn: Box::new(copy_fn),
            equals_fn: Box::new(equals_fn),
            destroy_fn: Box::new(destroy_fn),
            _marker: PhantomData,
        }
    }
}

impl<T> ElementOps<T> for FnOps<T> {
    #[inline]
    fn copy(&self, element: &T) -> T {
        (self.copy_fn)(element)
    }

    #[inline]
    fn equals(&self, a: &T, b: &T) -> bool {
        (self.equals_fn)(a, b)
    }

    #[inline]
    fn destroy(&self, element: T) {
        (self.destroy_fn)(element)
    }
}

impl<T> fmt::Debug for FnOps<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnOps").finish_non_exhaustive()
    }
}
