//! Predicates over table inputs.
//!
//! A [`Predicate`] is a shareable `Fn(&I) -> bool`. Clause constructors take
//! plain closures; the factories here build the common ones.

use std::fmt;
use std::sync::Arc;

use crate::narrow::Narrow;

/// A shareable boolean test over `&I`.
pub struct Predicate<I: ?Sized> {
    test: Arc<dyn Fn(&I) -> bool + Send + Sync>,
}

impl<I: ?Sized> Predicate<I> {
    /// Wraps a closure.
    pub fn new<F>(test: F) -> Self
    where
        F: Fn(&I) -> bool + Send + Sync + 'static,
    {
        Self {
            test: Arc::new(test),
        }
    }

    /// Evaluates the predicate.
    #[must_use]
    pub fn test(&self, input: &I) -> bool {
        (self.test)(input)
    }
}

impl<I: ?Sized> Clone for Predicate<I> {
    fn clone(&self) -> Self {
        Self {
            test: Arc::clone(&self.test),
        }
    }
}

impl<I: ?Sized> fmt::Debug for Predicate<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Predicate(..)")
    }
}

// =============================================================================
// Factories
// =============================================================================

/// True iff the input equals `value`.
pub fn equals_to<I>(value: I) -> impl Fn(&I) -> bool + Send + Sync + 'static
where
    I: PartialEq + Send + Sync + 'static,
{
    move |input| *input == value
}

/// True iff the input narrows to `T`.
pub fn is_a<I, T>() -> impl Fn(&I) -> bool + Send + Sync + 'static
where
    I: ?Sized + Narrow<T> + 'static,
    T: ?Sized + 'static,
{
    |input: &I| <I as Narrow<T>>::narrow(input).is_some()
}

/// Negates a predicate.
pub fn not<I, P>(predicate: P) -> impl Fn(&I) -> bool + Send + Sync + 'static
where
    I: ?Sized + 'static,
    P: Fn(&I) -> bool + Send + Sync + 'static,
{
    move |input: &I| !predicate(input)
}

/// True iff both predicates hold. `second` is skipped when `first` fails.
pub fn all_of<I, P, Q>(first: P, second: Q) -> impl Fn(&I) -> bool + Send + Sync + 'static
where
    I: ?Sized + 'static,
    P: Fn(&I) -> bool + Send + Sync + 'static,
    Q: Fn(&I) -> bool + Send + Sync + 'static,
{
    move |input: &I| first(input) && second(input)
}

/// True iff either predicate holds. `second` is skipped when `first` passes.
pub fn any_of<I, P, Q>(first: P, second: Q) -> impl Fn(&I) -> bool + Send + Sync + 'static
where
    I: ?Sized + 'static,
    P: Fn(&I) -> bool + Send + Sync + 'static,
    Q: Fn(&I) -> bool + Send + Sync + 'static,
{
    move |input: &I| first(input) || second(input)
}
