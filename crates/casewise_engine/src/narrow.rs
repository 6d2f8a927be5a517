//! Checked narrowing from a table's input type to a more specific type.
//!
//! Type-based clauses ([`when_match`](crate::clause::when_match)) test
//! whether an input narrows to `T` and, only if it does, hand the narrowed
//! reference to the transform.
//!
//! Implementations are provided for the `dyn Any` family. Inputs shaped as
//! enums or custom trait objects implement [`Narrow`] for each variant or
//! concrete type they want to dispatch on.

use std::any::Any;

/// Capability to view `self` as a `&T` when it is one.
///
/// `narrow` must be deterministic: if it returns `Some` once for a value,
/// it must return `Some` for the same value again.
pub trait Narrow<T: ?Sized> {
    /// Returns `Some(&T)` if `self` is a `T`.
    fn narrow(&self) -> Option<&T>;
}

impl<T: Any> Narrow<T> for dyn Any {
    fn narrow(&self) -> Option<&T> {
        self.downcast_ref()
    }
}

impl<T: Any> Narrow<T> for dyn Any + Send {
    fn narrow(&self) -> Option<&T> {
        self.downcast_ref()
    }
}

impl<T: Any> Narrow<T> for dyn Any + Send + Sync {
    fn narrow(&self) -> Option<&T> {
        self.downcast_ref()
    }
}
