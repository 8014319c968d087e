//! Core types shared by the library and the CLI.
//!
//! ## `error` - Error Handling
//!
//! - [`EnvExpandError`] - Enumerated error types for ingestion, config and output
//! - [`ErrorContext`] - User-friendly error wrapper with suggestions and details
//! - [`user_friendly_error`] - Convert any error to user-friendly format

pub mod error;

pub use error::{EnvExpandError, ErrorContext, user_friendly_error};
