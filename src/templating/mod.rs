//! Scanning and substitution of `${NAME}` references within single strings.
//!
//! This module knows nothing about key sets or evaluation order; it works on
//! one template at a time. The [`resolver`](crate::resolver) module builds on
//! it to expand whole mappings.
//!
//! # Components
//!
//! - [`scanner`]: finds reference spans in one pass
//! - [`cache`]: memoizes scanner output per template string
//! - [`substitute`]: rewrites a template given resolved values
//!
//! The [`SpanSource`] trait is the seam between the engine and memoization:
//! the resolver asks a `SpanSource` for spans and does not care whether they
//! were cached.

use std::sync::Arc;

pub mod cache;
pub mod scanner;
pub mod substitute;

pub use cache::ReferenceCache;
pub use scanner::{ReferenceSpan, scan};
pub use substitute::substitute;

/// Something that can produce the reference spans of a template.
pub trait SpanSource {
    /// Spans for `template`, in ascending order.
    fn spans(&self, template: &str) -> Arc<[ReferenceSpan]>;
}

/// A [`SpanSource`] that scans every request afresh.
#[derive(Debug, Clone, Copy, Default)]
pub struct Uncached;

impl SpanSource for Uncached {
    fn spans(&self, template: &str) -> Arc<[ReferenceSpan]> {
        scan(template).into()
    }
}

impl<S: SpanSource + ?Sized> SpanSource for &S {
    fn spans(&self, template: &str) -> Arc<[ReferenceSpan]> {
        (**self).spans(template)
    }
}

impl<S: SpanSource + ?Sized> SpanSource for Arc<S> {
    fn spans(&self, template: &str) -> Arc<[ReferenceSpan]> {
        (**self).spans(template)
    }
}
