//! Scan cache for template strings.
//!
//! Environment files tend to repeat the same values (hosts, ports, shared
//! prefixes), and every template is scanned twice per expansion: once to
//! build the reference graph and once to substitute. This cache memoizes
//! [`scan`] results per distinct template string so each text is scanned once
//! per session.
//!
//! The cache is an ordinary value owned by the caller. Independent sessions
//! can each create their own, or share one deliberately by reference or
//! through an `Arc`.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use dashmap::DashMap;

use super::SpanSource;
use super::scanner::{ReferenceSpan, scan};

/// Memoized scanner output keyed by exact template text.
///
/// Backed by a [`DashMap`], whose sharded reader/writer locks allow many
/// concurrent readers and concurrent writers on distinct keys. Two writers
/// racing on the same template both compute the same spans, so whichever
/// insert lands last is as good as the first.
///
/// There is no eviction. Drop or [`clear`](Self::clear) the cache when the
/// session that owns it ends.
#[derive(Debug, Default)]
pub struct ReferenceCache {
    /// Map from template text to its spans
    spans: DashMap<String, Arc<[ReferenceSpan]>>,
    hits: AtomicUsize,
    misses: AtomicUsize,
}

impl ReferenceCache {
    /// Create a new empty cache
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the spans for `template`, scanning it on first sight.
    pub fn get_or_compute(&self, template: &str) -> Arc<[ReferenceSpan]> {
        if let Some(cached) = self.spans.get(template) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return Arc::clone(cached.value());
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        // Scan outside any shard lock; the insert is last-writer-wins.
        let computed: Arc<[ReferenceSpan]> = scan(template).into();
        self.spans.insert(template.to_owned(), Arc::clone(&computed));
        computed
    }

    /// Number of distinct templates held
    #[must_use]
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Drop all entries and reset statistics
    pub fn clear(&self) {
        self.spans.clear();
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
    }

    /// Cache statistics as `(hits, misses)`
    #[must_use]
    pub fn stats(&self) -> (usize, usize) {
        (self.hits.load(Ordering::Relaxed), self.misses.load(Ordering::Relaxed))
    }

    /// Calculate hit rate as a percentage
    #[must_use]
    pub fn hit_rate(&self) -> f64 {
        let (hits, misses) = self.stats();
        let total = hits + misses;
        if total == 0 {
            0.0
        } else {
            (hits as f64 / total as f64) * 100.0
        }
    }
}

impl SpanSource for ReferenceCache {
    fn spans(&self, template: &str) -> Arc<[ReferenceSpan]> {
        self.get_or_compute(template)
    }
}
