//! Transforms: the output side of a clause.
//!
//! A [`Transform`] maps `&I` to `Option<O>`. `None` is a legitimate result
//! meaning "matched, but there is nothing to return"; the two evaluation
//! contracts treat it differently (see [`crate::eval`]).

use std::fmt;
use std::sync::Arc;

/// A shareable function from `&I` to an optional output.
pub struct Transform<I: ?Sized, O> {
    apply: Arc<dyn Fn(&I) -> Option<O> + Send + Sync>,
}

impl<I: ?Sized, O> Transform<I, O> {
    /// Wraps a closure that may produce no value.
    pub fn new<F>(apply: F) -> Self
    where
        F: Fn(&I) -> Option<O> + Send + Sync + 'static,
    {
        Self {
            apply: Arc::new(apply),
        }
    }

    /// Applies the transform.
    pub fn apply(&self, input: &I) -> Option<O> {
        (self.apply)(input)
    }
}

impl<I: ?Sized + 'static, O: 'static> Transform<I, O> {
    /// Sequences a second step after this transform.
    ///
    /// `next` only runs when this transform produced a value.
    #[must_use]
    pub fn and_then<P, F>(self, next: F) -> Transform<I, P>
    where
        P: 'static,
        F: Fn(O) -> P + Send + Sync + 'static,
    {
        let first = self.apply;
        Transform::new(move |input: &I| first(input).map(&next))
    }

    /// Like [`Transform::and_then`], but the second step may produce nothing.
    #[must_use]
    pub fn and_then_opt<P, F>(self, next: F) -> Transform<I, P>
    where
        P: 'static,
        F: Fn(O) -> Option<P> + Send + Sync + 'static,
    {
        let first = self.apply;
        Transform::new(move |input: &I| first(input).and_then(&next))
    }
}

impl<I: ?Sized, O> Clone for Transform<I, O> {
    fn clone(&self) -> Self {
        Self {
            apply: Arc::clone(&self.apply),
        }
    }
}

impl<I: ?Sized, O> fmt::Debug for Transform<I, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Transform(..)")
    }
}

// =============================================================================
// Constructors
// =============================================================================

/// Always returns a clone of `value`.
pub fn then<I, O>(value: O) -> Transform<I, O>
where
    I: ?Sized + 'static,
    O: Clone + Send + Sync + 'static,
{
    Transform::new(move |_: &I| Some(value.clone()))
}

/// Calls `supplier` on every application, ignoring the input.
pub fn then_supply<I, O, F>(supplier: F) -> Transform<I, O>
where
    I: ?Sized + 'static,
    O: 'static,
    F: Fn() -> O + Send + Sync + 'static,
{
    Transform::new(move |_: &I| Some(supplier()))
}

/// Applies `function` to the input.
pub fn then_apply<I, O, F>(function: F) -> Transform<I, O>
where
    I: ?Sized + 'static,
    O: 'static,
    F: Fn(&I) -> O + Send + Sync + 'static,
{
    Transform::new(move |input: &I| Some(function(input)))
}

/// Applies `function` to the input; `None` means "no value".
pub fn then_apply_opt<I, O, F>(function: F) -> Transform<I, O>
where
    I: ?Sized + 'static,
    O: 'static,
    F: Fn(&I) -> Option<O> + Send + Sync + 'static,
{
    Transform::new(function)
}
