//! Clauses and terminal clauses.
//!
//! A [`Clause`] pairs a [`Predicate`] with a [`Transform`]. A [`Terminal`] is
//! the catch-all consulted when no clause matches. [`Case`] is either one,
//! and is what the variadic table constructor consumes.

use std::fmt;
use std::sync::Arc;

use crate::narrow::Narrow;
use crate::predicate::Predicate;
use crate::transform::Transform;

// =============================================================================
// Clause
// =============================================================================

/// An immutable `(predicate, transform)` pair.
pub struct Clause<I: ?Sized, O> {
    predicate: Predicate<I>,
    transform: Transform<I, O>,
}

impl<I: ?Sized, O> Clause<I, O> {
    /// Creates a clause from its two halves.
    #[must_use]
    pub fn new(predicate: Predicate<I>, transform: Transform<I, O>) -> Self {
        Self {
            predicate,
            transform,
        }
    }

    /// Returns true if this clause governs `input`.
    #[must_use]
    pub fn matches(&self, input: &I) -> bool {
        self.predicate.test(input)
    }

    /// Runs the transform. Only meaningful after [`Clause::matches`].
    pub fn apply(&self, input: &I) -> Option<O> {
        self.transform.apply(input)
    }

    /// The predicate half.
    #[must_use]
    pub fn predicate(&self) -> &Predicate<I> {
        &self.predicate
    }

    /// The transform half.
    #[must_use]
    pub fn transform(&self) -> &Transform<I, O> {
        &self.transform
    }
}

impl<I: ?Sized, O> Clone for Clause<I, O> {
    fn clone(&self) -> Self {
        Self {
            predicate: self.predicate.clone(),
            transform: self.transform.clone(),
        }
    }
}

impl<I: ?Sized, O> fmt::Debug for Clause<I, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Clause").finish_non_exhaustive()
    }
}

/// Builds a clause from a predicate and a transform.
pub fn when<I, O, P>(predicate: P, transform: Transform<I, O>) -> Clause<I, O>
where
    I: ?Sized,
    P: Fn(&I) -> bool + Send + Sync + 'static,
{
    Clause::new(Predicate::new(predicate), transform)
}

/// Builds a type-based clause.
///
/// The clause matches inputs that narrow to `T`; the transform receives the
/// narrowed reference. Narrowing is repeated inside the transform, so a
/// [`Narrow`] implementation that is not deterministic shows up as a
/// matched clause with no value.
pub fn when_match<I, T, O>(transform: Transform<T, O>) -> Clause<I, O>
where
    I: ?Sized + Narrow<T> + 'static,
    T: ?Sized + 'static,
    O: 'static,
{
    let predicate = Predicate::new(|input: &I| <I as Narrow<T>>::narrow(input).is_some());
    let narrowed = Transform::new(move |input: &I| {
        <I as Narrow<T>>::narrow(input).and_then(|t| transform.apply(t))
    });
    Clause::new(predicate, narrowed)
}

// =============================================================================
// Terminal
// =============================================================================

/// Shared closure that manufactures a failure from an unmatched input.
pub type FailureFactory<I, E> = Arc<dyn Fn(&I) -> E + Send + Sync>;

/// The catch-all clause of a table.
pub enum Terminal<I: ?Sized, O, E> {
    /// Produces a value for every unmatched input.
    Value(Transform<I, O>),
    /// Produces a failure for every unmatched input.
    Fail(FailureFactory<I, E>),
}

impl<I: ?Sized, O, E> Terminal<I, O, E> {
    /// Returns true for the failure-producing flavor.
    #[must_use]
    pub fn is_fail(&self) -> bool {
        matches!(self, Self::Fail(_))
    }
}

impl<I: ?Sized, O, E> Clone for Terminal<I, O, E> {
    fn clone(&self) -> Self {
        match self {
            Self::Value(t) => Self::Value(t.clone()),
            Self::Fail(f) => Self::Fail(Arc::clone(f)),
        }
    }
}

impl<I: ?Sized, O, E> fmt::Debug for Terminal<I, O, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(_) => f.write_str("Terminal::Value(..)"),
            Self::Fail(_) => f.write_str("Terminal::Fail(..)"),
        }
    }
}

/// Builds the value-producing terminal.
pub fn or_else<I, O, E>(transform: Transform<I, O>) -> Terminal<I, O, E>
where
    I: ?Sized,
{
    Terminal::Value(transform)
}

/// Builds the failure-producing terminal.
///
/// `factory` receives the unmatched input and returns the failure to report.
pub fn or_else_throw<I, O, E, F>(factory: F) -> Terminal<I, O, E>
where
    I: ?Sized,
    F: Fn(&I) -> E + Send + Sync + 'static,
{
    Terminal::Fail(Arc::new(factory))
}

// =============================================================================
// Case
// =============================================================================

/// One argument of the variadic table constructor.
pub enum Case<I: ?Sized, O, E> {
    /// An ordinary clause.
    Clause(Clause<I, O>),
    /// A terminal clause; must be the last case.
    Terminal(Terminal<I, O, E>),
}

impl<I: ?Sized, O, E> From<Clause<I, O>> for Case<I, O, E> {
    fn from(clause: Clause<I, O>) -> Self {
        Self::Clause(clause)
    }
}

impl<I: ?Sized, O, E> From<Terminal<I, O, E>> for Case<I, O, E> {
    fn from(terminal: Terminal<I, O, E>) -> Self {
        Self::Terminal(terminal)
    }
}

impl<I: ?Sized, O, E> fmt::Debug for Case<I, O, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Clause(c) => fmt::Debug::fmt(c, f),
            Self::Terminal(t) => fmt::Debug::fmt(t, f),
        }
    }
}
