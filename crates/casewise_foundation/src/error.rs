//! Error types for the Casewise system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//!
//! Two families live here:
//! - [`Error`] / [`ErrorKind`] are construction failures, reported when a
//!   pattern table is assembled from an invalid clause list.
//! - [`PatternError`] is the evaluation failure of the required contract.
//!   It keeps "no clause matched" and "a clause matched but produced nothing"
//!   apart, and carries a caller-supplied failure through untouched.

use std::fmt;

use thiserror::Error;

/// Name of the accessor suggested by required-contract failures.
pub const OPTIONAL_ACCESSOR: &str = "Patterns::get_optionally";

/// Result alias for table construction.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for pattern table construction.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about which table was being built.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates an error for a terminal clause that is not the final case.
    #[must_use]
    pub fn terminal_not_last(position: usize, len: usize) -> Self {
        Self::new(ErrorKind::TerminalNotLast { position, len })
    }

    /// Creates an error for a second terminal clause.
    #[must_use]
    pub fn duplicate_terminal(first: usize, second: usize) -> Self {
        Self::new(ErrorKind::DuplicateTerminal { first, second })
    }

    /// Creates an error for a clause list longer than the configured limit.
    #[must_use]
    pub fn too_many_clauses(limit: usize, actual: usize) -> Self {
        Self::new(ErrorKind::TooManyClauses { limit, actual })
    }
}

/// Categorized error kinds for table construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    /// A terminal clause appeared before the end of the case list.
    #[error("terminal clause at position {position} must be the last of {len} cases")]
    TerminalNotLast {
        /// Zero-based position of the offending terminal.
        position: usize,
        /// Total number of cases supplied.
        len: usize,
    },

    /// More than one terminal clause was supplied.
    #[error("duplicate terminal clause at position {second} (first at {first})")]
    DuplicateTerminal {
        /// Position of the first terminal.
        first: usize,
        /// Position of the second terminal.
        second: usize,
    },

    /// The table exceeds `TableConfig::max_clauses`.
    #[error("too many clauses: limit is {limit}, got {actual}")]
    TooManyClauses {
        /// The configured limit.
        limit: usize,
        /// The number of ordinary clauses supplied.
        actual: usize,
    },
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorContext {
    /// Label of the table being built.
    pub table: Option<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the table label.
    #[must_use]
    pub fn with_table(mut self, table: impl Into<String>) -> Self {
        self.table = Some(table.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(table) = &self.table {
            write!(f, "in table {table}")?;
        }
        Ok(())
    }
}

// =============================================================================
// Evaluation Errors
// =============================================================================

/// Failure of the required evaluation contract.
///
/// `E` is the failure type produced by a table's `or_else_throw` terminal.
/// Tables without one use [`std::convert::Infallible`].
#[derive(Debug, Error)]
pub enum PatternError<E> {
    /// No clause matched and the table has no terminal clause.
    ///
    /// The key is the input's `Debug` rendering, so strings appear quoted
    /// (`for key: "abc".`) and `dyn Any` inputs appear as `Any { .. }`.
    #[error(
        "for key: {key}. To allow this pattern to return nullable value, consider using {accessor}.",
        accessor = OPTIONAL_ACCESSOR
    )]
    NoSuchPattern {
        /// `Debug` rendering of the unmatched input.
        key: String,
    },

    /// A clause matched but its transform produced no value.
    #[error(
        "Pattern computed null result. To allow this pattern to return nullable value, consider using {accessor}.",
        accessor = OPTIONAL_ACCESSOR
    )]
    NullResult,

    /// The failure produced by the table's `or_else_throw` terminal.
    #[error(transparent)]
    Raised(E),
}

impl<E> PatternError<E> {
    /// Creates a no-match error for the given input rendering.
    #[must_use]
    pub fn no_such_pattern(key: impl Into<String>) -> Self {
        Self::NoSuchPattern { key: key.into() }
    }

    /// Returns true if no clause matched.
    #[must_use]
    pub fn is_no_such_pattern(&self) -> bool {
        matches!(self, Self::NoSuchPattern { .. })
    }

    /// Returns true if a clause matched but yielded no value.
    #[must_use]
    pub fn is_null_result(&self) -> bool {
        matches!(self, Self::NullResult)
    }

    /// The unmatched input, for [`PatternError::NoSuchPattern`].
    #[must_use]
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::NoSuchPattern { key } => Some(key),
            _ => None,
        }
    }

    /// Borrows the caller-supplied failure, if that is what this is.
    #[must_use]
    pub fn raised(&self) -> Option<&E> {
        match self {
            Self::Raised(e) => Some(e),
            _ => None,
        }
    }

    /// Unwraps the caller-supplied failure, if that is what this is.
    #[must_use]
    pub fn into_raised(self) -> Option<E> {
        match self {
            Self::Raised(e) => Some(e),
            _ => None,
        }
    }

    /// Maps the caller-supplied failure, leaving the engine's own kinds alone.
    #[must_use]
    pub fn map_raised<F, G>(self, f: G) -> PatternError<F>
    where
        G: FnOnce(E) -> F,
    {
        match self {
            Self::NoSuchPattern { key } => PatternError::NoSuchPattern { key },
            Self::NullResult => PatternError::NullResult,
            Self::Raised(e) => PatternError::Raised(f(e)),
        }
    }
}
