//! envexpand - static expansion of `${VAR}` references in environment variable sets
//!
//! Given a mapping of key → template, envexpand produces a mapping of key →
//! fully substituted value. Templates may reference other keys of the same
//! mapping, transitively and in any order. Unknown names, self references
//! and reference cycles never cause an error; those tokens are left exactly
//! as written.
//!
//! ```rust
//! use std::collections::HashMap;
//!
//! let vars = HashMap::from([
//!     ("A".to_string(), "1".to_string()),
//!     ("B".to_string(), "${A}2".to_string()),
//!     ("C".to_string(), "${A}${B}3".to_string()),
//! ]);
//!
//! let expanded = envexpand::expand(&vars);
//! assert_eq!(expanded["C"], "1123");
//! ```
//!
//! # Modules
//!
//! - [`templating`] - scanning and substitution within one string
//! - [`resolver`] - reference graph, evaluation order and whole-set expansion
//! - [`env`] - `KEY=value` ingestion and output formats
//! - [`config`] - optional configuration file
//! - [`cli`] - the `envexpand` command line
//! - [`core`] - error types

pub mod cli;
pub mod config;
pub mod core;
pub mod env;
pub mod resolver;
pub mod templating;

// test_utils module is available for both unit tests and integration tests
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use resolver::{EvaluationOrder, Expander, ReferenceGraph, evaluation_order, expand};
pub use templating::{ReferenceCache, ReferenceSpan, SpanSource, Uncached, scan, substitute};
