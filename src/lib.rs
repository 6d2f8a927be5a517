//! Casewise - ordered, predicate-driven pattern tables
//!
//! This crate re-exports all layers of the Casewise system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 1: casewise_engine      — Clauses, pattern tables, evaluation
//! Layer 0: casewise_foundation  — Error types, table configuration
//! ```

pub use casewise_engine as engine;
pub use casewise_foundation as foundation;
