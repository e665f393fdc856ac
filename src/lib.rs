//! # SQL Review Library
//!
//! Heuristic analysis and canonical formatting for raw SQL text.
//!
//! The core exposes two pure operations:
//!
//! - [`rules::analyze`] - segment SQL and run every detection rule,
//!   producing an ordered [`rules::AnalysisReport`]
//! - [`formatter::format`] - re-emit SQL with normalized keyword casing,
//!   clause breaks and indentation
//!
//! Both operate on text alone, share no mutable state and never fail on
//! malformed SQL, so a caller may run them concurrently with zero
//! coordination.

pub mod cli;
pub mod config;
pub mod error;
pub mod formatter;
pub mod normalize;
pub mod output;
pub mod rules;
pub mod scan;
pub mod segment;
