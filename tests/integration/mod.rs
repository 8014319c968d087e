//! Integration test suite for envexpand
//!
//! End-to-end tests that run the compiled binary against files in a
//! temporary directory.
//!
//! ```bash
//! cargo test --test integration
//! ```
//!
//! # Test Organization
//!
//! - **expand**: the `expand` command, input handling and output formats
//! - **refs**: the `refs` command
//! - **config**: configuration file discovery and precedence

#[path = "../common/mod.rs"]
mod common;

mod config;
mod expand;
