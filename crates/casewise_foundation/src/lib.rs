//! Error types and table configuration for Casewise.
//!
//! This crate provides:
//! - [`Error`] - Table construction errors with context
//! - [`PatternError`] - Required-contract evaluation failures
//! - [`TableConfig`] - Labels and limits applied at construction

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod error;

pub use config::TableConfig;
pub use error::{Error, ErrorContext, ErrorKind, OPTIONAL_ACCESSOR, PatternError, Result};
