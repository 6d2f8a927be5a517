//! Clauses, pattern tables, and first-match evaluation for Casewise.
//!
//! This crate provides:
//! - [`Clause`] / [`Terminal`] - Predicate/transform pairs and catch-alls
//! - [`Patterns`] - Immutable, ordered decision tables
//! - [`Patterns::get`] / [`Patterns::get_optionally`] - Required and
//!   optional evaluation contracts
//! - [`Narrow`] - Checked narrowing for type-based clauses
//!
//! ```
//! use casewise_engine::{Patterns, equals_to, or_else, patterns, then, then_apply, then_supply, when};
//!
//! let table: Patterns<i32, String> = patterns![
//!     when(equals_to(3), then("b".to_string())),
//!     when(equals_to(4), then_supply(|| "c".to_string())),
//!     when(|i: &i32| *i > 0, then_apply(|i: &i32| i.to_string())),
//!     when(
//!         |i: &i32| *i < 0,
//!         then_apply(|i: &i32| i + 1).and_then(i64::from).and_then(|n| n.to_string()),
//!     ),
//!     or_else(then("a".to_string())),
//! ]
//! .unwrap();
//!
//! let out: Vec<String> = [-1, 0, 1, 2, 3, 4]
//!     .iter()
//!     .map(table.required())
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//! assert_eq!(out, ["0", "a", "1", "2", "b", "c"]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod clause;
pub mod eval;
pub mod narrow;
pub mod predicate;
pub mod table;
pub mod transform;

pub use casewise_foundation::{Error, ErrorKind, PatternError, Result, TableConfig};
pub use clause::{Case, Clause, FailureFactory, Terminal, or_else, or_else_throw, when, when_match};
pub use eval::Selection;
pub use narrow::Narrow;
pub use predicate::{Predicate, all_of, any_of, equals_to, is_a, not};
pub use table::{Patterns, PatternsBuilder, patterns, patterns_with};
pub use transform::{Transform, then, then_apply, then_apply_opt, then_supply};
