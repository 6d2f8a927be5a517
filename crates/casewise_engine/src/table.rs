//! Pattern tables: sealed, ordered clause lists.
//!
//! A [`Patterns`] table is assembled once, from a list of [`Case`]s, and is
//! immutable afterwards. Clause precedence is purely positional: the table
//! never reorders, deduplicates, or checks clauses for overlap.
//!
//! Three entry points build a table:
//! - [`patterns`] / [`patterns_with`] take a list of cases and validate the
//!   terminal placement.
//! - The [`patterns!`](crate::patterns!) macro does the same for an inline
//!   argument list.
//! - [`PatternsBuilder`] appends clauses one at a time and finishes with at
//!   most one terminal, so a misplaced terminal cannot be expressed at all.

use std::convert::Infallible;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use casewise_foundation::{Error, ErrorContext, Result, TableConfig};

use crate::clause::{Case, Clause, Terminal, when, when_match};
use crate::narrow::Narrow;
use crate::transform::Transform;

// =============================================================================
// Patterns
// =============================================================================

/// An immutable decision table from `&I` to `O`.
///
/// `E` is the failure type of an `or_else_throw` terminal; tables without
/// one keep the default [`Infallible`].
pub struct Patterns<I: ?Sized, O, E = Infallible> {
    pub(crate) clauses: Box<[Clause<I, O>]>,
    pub(crate) terminal: Option<Terminal<I, O, E>>,
    pub(crate) label: Option<Arc<str>>,
}

impl<I: ?Sized, O, E> Patterns<I, O, E> {
    /// Starts a builder with the default configuration.
    #[must_use]
    pub fn builder() -> PatternsBuilder<I, O, E> {
        PatternsBuilder::new()
    }

    /// Builds a table from cases, validating terminal placement.
    ///
    /// # Errors
    /// Returns an error if a terminal clause is not last, if more than one
    /// terminal is supplied, or if the clause count exceeds
    /// `config.max_clauses`.
    pub fn from_cases<C>(config: &TableConfig, cases: C) -> Result<Self>
    where
        C: IntoIterator<Item = Case<I, O, E>>,
    {
        let cases: Vec<Case<I, O, E>> = cases.into_iter().collect();
        let len = cases.len();

        let mut clauses = Vec::with_capacity(len);
        let mut terminal: Option<(usize, Terminal<I, O, E>)> = None;

        for (position, case) in cases.into_iter().enumerate() {
            match case {
                Case::Clause(clause) => {
                    if let Some((first, _)) = &terminal {
                        // A clause after a terminal means the terminal was not last.
                        return Err(with_label(Error::terminal_not_last(*first, len), config));
                    }
                    clauses.push(clause);
                }
                Case::Terminal(t) => {
                    if let Some((first, _)) = &terminal {
                        return Err(with_label(
                            Error::duplicate_terminal(*first, position),
                            config,
                        ));
                    }
                    terminal = Some((position, t));
                }
            }
        }

        Self::seal(config, clauses, terminal.map(|(_, t)| t))
    }

    fn seal(
        config: &TableConfig,
        clauses: Vec<Clause<I, O>>,
        terminal: Option<Terminal<I, O, E>>,
    ) -> Result<Self> {
        if !config.allows(clauses.len()) {
            let limit = config.max_clauses.unwrap_or(usize::MAX);
            return Err(with_label(
                Error::too_many_clauses(limit, clauses.len()),
                config,
            ));
        }

        let table = Self {
            clauses: clauses.into_boxed_slice(),
            terminal,
            label: config.label.as_deref().map(Arc::from),
        };
        tracing::debug!(
            table = table.display_label(),
            clauses = table.clauses.len(),
            terminal = table.has_terminal(),
            "pattern table sealed"
        );
        Ok(table)
    }

    /// Number of ordinary clauses (the terminal is not counted).
    #[must_use]
    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    /// Returns true if the table has no clauses and no terminal.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty() && self.terminal.is_none()
    }

    /// Returns true if the table ends in a terminal clause.
    #[must_use]
    pub fn has_terminal(&self) -> bool {
        self.terminal.is_some()
    }

    /// The ordinary clauses, in evaluation order.
    #[must_use]
    pub fn clauses(&self) -> &[Clause<I, O>] {
        &self.clauses
    }

    /// The terminal clause, if any.
    #[must_use]
    pub fn terminal(&self) -> Option<&Terminal<I, O, E>> {
        self.terminal.as_ref()
    }

    /// The configured label, if any.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub(crate) fn display_label(&self) -> &str {
        self.label.as_deref().unwrap_or("<unlabeled>")
    }
}

fn with_label(err: Error, config: &TableConfig) -> Error {
    match &config.label {
        Some(label) => err.with_context(ErrorContext::new().with_table(label.clone())),
        None => err,
    }
}

impl<I: ?Sized, O, E> Clone for Patterns<I, O, E> {
    fn clone(&self) -> Self {
        Self {
            clauses: self.clauses.clone(),
            terminal: self.terminal.clone(),
            label: self.label.clone(),
        }
    }
}

impl<I: ?Sized, O, E> fmt::Debug for Patterns<I, O, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Patterns")
            .field("label", &self.label)
            .field("clauses", &self.clauses.len())
            .field("terminal", &self.terminal)
            .finish()
    }
}

/// Builds a table from cases with the default configuration.
///
/// # Errors
/// Returns an error if a terminal clause is not the last case or if more
/// than one terminal is supplied.
pub fn patterns<I, O, E, C>(cases: C) -> Result<Patterns<I, O, E>>
where
    I: ?Sized,
    C: IntoIterator<Item = Case<I, O, E>>,
{
    Patterns::from_cases(&TableConfig::default(), cases)
}

/// Builds a table from cases with an explicit configuration.
///
/// # Errors
/// See [`Patterns::from_cases`].
pub fn patterns_with<I, O, E, C>(config: &TableConfig, cases: C) -> Result<Patterns<I, O, E>>
where
    I: ?Sized,
    C: IntoIterator<Item = Case<I, O, E>>,
{
    Patterns::from_cases(config, cases)
}

/// Builds a table from an inline list of clauses and an optional trailing
/// terminal.
///
/// Expands to [`patterns`], so it evaluates to a
/// `casewise_foundation::Result<Patterns<..>>`.
///
/// ```
/// use casewise_engine::{Patterns, equals_to, or_else, patterns, then, when};
///
/// let table: Patterns<i32, &str> = patterns![
///     when(equals_to(1), then("one")),
///     or_else(then("many")),
/// ]
/// .unwrap();
/// assert_eq!(table.get(&1).unwrap(), "one");
/// assert_eq!(table.get(&7).unwrap(), "many");
/// ```
#[macro_export]
macro_rules! patterns {
    ($($case:expr),* $(,)?) => {
        $crate::table::patterns(::std::vec![$($crate::clause::Case::from($case)),*])
    };
}

// =============================================================================
// Builder
// =============================================================================

/// Incremental table builder.
pub struct PatternsBuilder<I: ?Sized, O, E = Infallible> {
    config: TableConfig,
    clauses: Vec<Clause<I, O>>,
    failure: PhantomData<fn() -> E>,
}

impl<I: ?Sized, O, E> PatternsBuilder<I, O, E> {
    /// Creates an empty builder with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: TableConfig::default(),
            clauses: Vec::new(),
            failure: PhantomData,
        }
    }

    /// Replaces the configuration.
    #[must_use]
    pub fn config(mut self, config: TableConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the table label.
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.config.label = Some(label.into());
        self
    }

    /// Appends a prebuilt clause.
    #[must_use]
    pub fn clause(mut self, clause: Clause<I, O>) -> Self {
        self.clauses.push(clause);
        self
    }

    /// Appends `when(predicate, transform)`.
    #[must_use]
    pub fn when<P>(self, predicate: P, transform: Transform<I, O>) -> Self
    where
        P: Fn(&I) -> bool + Send + Sync + 'static,
    {
        self.clause(when(predicate, transform))
    }

    /// Appends `when_match::<T>(transform)`.
    #[must_use]
    pub fn when_match<T>(self, transform: Transform<T, O>) -> Self
    where
        I: Narrow<T> + 'static,
        T: ?Sized + 'static,
        O: 'static,
    {
        self.clause(when_match(transform))
    }

    /// Seals the table without a terminal.
    ///
    /// # Errors
    /// Returns an error if the clause count exceeds the configured limit.
    pub fn build(self) -> Result<Patterns<I, O, E>> {
        Patterns::seal(&self.config, self.clauses, None)
    }

    /// Seals the table with a value-producing terminal.
    ///
    /// # Errors
    /// Returns an error if the clause count exceeds the configured limit.
    pub fn or_else(self, transform: Transform<I, O>) -> Result<Patterns<I, O, E>> {
        Patterns::seal(&self.config, self.clauses, Some(Terminal::Value(transform)))
    }

    /// Seals the table with a failure-producing terminal.
    ///
    /// # Errors
    /// Returns an error if the clause count exceeds the configured limit.
    pub fn or_else_throw<F>(self, factory: F) -> Result<Patterns<I, O, E>>
    where
        F: Fn(&I) -> E + Send + Sync + 'static,
    {
        Patterns::seal(
            &self.config,
            self.clauses,
            Some(Terminal::Fail(Arc::new(factory))),
        )
    }
}

impl<I: ?Sized, O, E> Default for PatternsBuilder<I, O, E> {
    fn default() -> Self {
        Self::new()
    }
}
