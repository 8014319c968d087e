//! Unit test suite for envexpand
//!
//! Library-level tests that exercise the public API without spawning the
//! binary.
//!
//! ```bash
//! cargo test --test unit
//! ```

mod scanner;
