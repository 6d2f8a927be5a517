//! First-match evaluation of pattern tables.
//!
//! Every call is an independent scan over the clauses in construction
//! order. The first clause whose predicate holds governs the input; later
//! clauses are never consulted. If none holds, the terminal clause (if any)
//! decides.
//!
//! Two contracts sit on top of the scan:
//!
//! | outcome                          | required ([`Patterns::get`])     | optional ([`Patterns::get_optionally`]) |
//! |----------------------------------|----------------------------------|-----------------------------------------|
//! | matched, value                   | `Ok(value)`                      | `Ok(Some(value))`                       |
//! | matched, no value                | `Err(PatternError::NullResult)`  | `Ok(None)`                              |
//! | unmatched, no terminal           | `Err(PatternError::NoSuchPattern)` | `Ok(None)`                            |
//! | unmatched, `or_else_throw(f)`    | `Err(PatternError::Raised(f(x)))` | `Err(f(x))`                            |
//!
//! "Matched" includes the value-producing terminal.

use std::fmt;

use casewise_foundation::PatternError;

use crate::clause::Terminal;
use crate::table::Patterns;

/// Which part of a table governs an input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selection {
    /// The ordinary clause at this index.
    Clause(usize),
    /// The terminal clause.
    Terminal,
    /// Nothing; the table has no terminal and no clause matched.
    Unmatched,
}

/// Result of a single scan, before a contract is applied.
enum Outcome<O, E> {
    /// A clause or value terminal ran; `None` means it produced no value.
    Matched(Option<O>),
    /// The failure terminal ran.
    Raised(E),
    /// Nothing matched and there is no terminal.
    Unmatched,
}

impl<I: ?Sized, O, E> Patterns<I, O, E> {
    /// Reports which clause would govern `input`, without running any
    /// transform or failure factory.
    #[must_use]
    pub fn select(&self, input: &I) -> Selection {
        match self.clauses.iter().position(|c| c.matches(input)) {
            Some(index) => Selection::Clause(index),
            None if self.terminal.is_some() => Selection::Terminal,
            None => Selection::Unmatched,
        }
    }

    fn scan(&self, input: &I) -> Outcome<O, E> {
        for (index, clause) in self.clauses.iter().enumerate() {
            if clause.matches(input) {
                tracing::trace!(table = self.display_label(), clause = index, "clause matched");
                return Outcome::Matched(clause.apply(input));
            }
        }

        match &self.terminal {
            Some(Terminal::Value(transform)) => {
                tracing::trace!(table = self.display_label(), "terminal value applied");
                Outcome::Matched(transform.apply(input))
            }
            Some(Terminal::Fail(factory)) => {
                tracing::trace!(table = self.display_label(), "terminal failure raised");
                Outcome::Raised(factory(input))
            }
            None => Outcome::Unmatched,
        }
    }

    /// Evaluates `input` under the optional contract.
    ///
    /// # Errors
    /// Returns exactly the value produced by the table's `or_else_throw`
    /// factory when no clause matches. Nothing else is an error here.
    pub fn get_optionally(&self, input: &I) -> Result<Option<O>, E> {
        match self.scan(input) {
            Outcome::Matched(value) => Ok(value),
            Outcome::Raised(failure) => Err(failure),
            Outcome::Unmatched => Ok(None),
        }
    }

    /// The optional contract as a reusable function value.
    ///
    /// ```
    /// use casewise_engine::{Patterns, then};
    ///
    /// let table = Patterns::<i32, &str>::builder()
    ///     .when(|i| *i > 0, then("positive"))
    ///     .build()
    ///     .unwrap();
    /// let out: Result<Vec<_>, _> = [1, -1].iter().map(table.optional()).collect();
    /// assert_eq!(out.unwrap(), vec![Some("positive"), None]);
    /// ```
    pub fn optional(&self) -> impl Fn(&I) -> Result<Option<O>, E> + '_ {
        move |input| self.get_optionally(input)
    }
}

impl<I: ?Sized + fmt::Debug, O, E> Patterns<I, O, E> {
    /// Evaluates `input` under the required contract.
    ///
    /// # Errors
    /// - [`PatternError::NoSuchPattern`] if nothing matched and the table has
    ///   no terminal.
    /// - [`PatternError::NullResult`] if the governing clause produced no
    ///   value.
    /// - [`PatternError::Raised`] carrying the `or_else_throw` failure.
    pub fn get(&self, input: &I) -> Result<O, PatternError<E>> {
        match self.scan(input) {
            Outcome::Matched(Some(value)) => Ok(value),
            Outcome::Matched(None) => {
                tracing::debug!(table = self.display_label(), key = ?input, "pattern computed no value");
                Err(PatternError::NullResult)
            }
            Outcome::Raised(failure) => Err(PatternError::Raised(failure)),
            Outcome::Unmatched => {
                tracing::debug!(table = self.display_label(), key = ?input, "no pattern matched");
                Err(PatternError::no_such_pattern(format!("{input:?}")))
            }
        }
    }

    /// The required contract as a reusable function value.
    ///
    /// ```
    /// use casewise_engine::{Patterns, then, then_apply};
    ///
    /// let table = Patterns::<i32, String>::builder()
    ///     .when(|i| *i == 0, then("zero".to_string()))
    ///     .or_else(then_apply(|i: &i32| i.to_string()))
    ///     .unwrap();
    /// let out: Vec<String> = [0, 5]
    ///     .iter()
    ///     .map(table.required())
    ///     .collect::<Result<_, _>>()
    ///     .unwrap();
    /// assert_eq!(out, ["zero", "5"]);
    /// ```
    pub fn required(&self) -> impl Fn(&I) -> Result<O, PatternError<E>> + '_ {
        move |input| self.get(input)
    }
}
