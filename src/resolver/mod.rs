//! Dependency-ordered expansion of whole variable sets.
//!
//! The resolver turns a mapping of key → template into a mapping of key →
//! expanded value. Templates may reference other keys (`${OTHER}`),
//! transitively and in any order; the resolver evaluates keys so that every
//! reference sees its target's fully expanded value.
//!
//! # Pipeline
//!
//! 1. [`ReferenceGraph::build`] scans every template and records which keys
//!    reference which
//! 2. [`evaluation_order`] orders keys dependencies-first
//! 3. each key is [substituted](crate::templating::substitute) in that order
//!    against the values resolved so far
//!
//! # Unresolvable References
//!
//! Nothing here fails. A reference that has no resolved value at the time
//! its key is evaluated is left in the output exactly as written:
//!
//! - `${NAME}` where `NAME` is not in the set
//! - `${SELF}` inside the value of `SELF`
//! - the reference that closes a cycle (`A → B → A`): the key evaluated first
//!   keeps the literal token for the key still in progress
//!
//! # Examples
//!
//! ```rust
//! use std::collections::HashMap;
//!
//! let vars = HashMap::from([
//!     ("PORT".to_string(), "8080".to_string()),
//!     ("LISTEN".to_string(), "http://0.0.0.0:${PORT}".to_string()),
//!     ("LOG".to_string(), "${LOG_DIR}/app.log".to_string()),
//! ]);
//!
//! let expanded = envexpand::expand(&vars);
//! assert_eq!(expanded["LISTEN"], "http://0.0.0.0:8080");
//! assert_eq!(expanded["LOG"], "${LOG_DIR}/app.log");
//! ```

pub mod dependency_graph;
pub mod diagnostics;
pub mod ordering;

pub use dependency_graph::ReferenceGraph;
pub use diagnostics::{UnresolvedReason, UnresolvedReference, unresolved_references};
pub use ordering::{BackEdge, EvaluationOrder, VisitState, evaluation_order};

use std::collections::HashMap;
use tracing::{debug, trace};

use crate::templating::{ReferenceCache, SpanSource, Uncached, substitute};

/// Expand every template in `vars` against the other keys of `vars`.
///
/// The returned mapping has exactly the keys of `vars`. A scan cache is
/// created for this call and dropped afterwards; use
/// [`Expander::with_cache`] to share one across calls.
#[must_use]
pub fn expand(vars: &HashMap<String, String>) -> HashMap<String, String> {
    let cache = ReferenceCache::new();
    Expander::with_cache(&cache).expand(vars)
}

/// Expansion engine parameterised by where it gets reference spans from.
///
/// ```rust
/// use std::collections::HashMap;
/// use envexpand::{Expander, ReferenceCache};
///
/// let cache = ReferenceCache::new();
/// let expander = Expander::with_cache(&cache);
///
/// let first = HashMap::from([("A".to_string(), "${B}!".to_string()), ("B".to_string(), "b".to_string())]);
/// let second = HashMap::from([("A".to_string(), "${B}!".to_string()), ("B".to_string(), "bee".to_string())]);
///
/// assert_eq!(expander.expand(&first)["A"], "b!");
/// assert_eq!(expander.expand(&second)["A"], "bee!");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Expander<S = Uncached> {
    spans: S,
}

impl Expander<Uncached> {
    /// An expander that rescans every template it sees.
    #[must_use]
    pub const fn uncached() -> Self {
        Self {
            spans: Uncached,
        }
    }
}

impl<'c> Expander<&'c ReferenceCache> {
    /// An expander that memoizes scans in a caller-owned cache.
    #[must_use]
    pub const fn with_cache(cache: &'c ReferenceCache) -> Self {
        Self {
            spans: cache,
        }
    }
}

impl<S: SpanSource> Expander<S> {
    /// An expander over any [`SpanSource`].
    #[must_use]
    pub const fn new(spans: S) -> Self {
        Self {
            spans,
        }
    }

    /// Build the reference graph for `vars` without expanding anything.
    #[must_use]
    pub fn graph(&self, vars: &HashMap<String, String>) -> ReferenceGraph {
        ReferenceGraph::build(vars, &self.spans)
    }

    /// Expand every template in `vars`. See [`expand`].
    #[must_use]
    pub fn expand(&self, vars: &HashMap<String, String>) -> HashMap<String, String> {
        let graph = self.graph(vars);
        let order = evaluation_order(&graph);

        debug!(
            "Expanding {} variables ({} references, {} cycle edges)",
            graph.node_count(),
            graph.edge_count(),
            order.back_edges.len()
        );

        self.expand_in_order(vars, &order)
    }

    /// Substitute keys one by one in `order`, accumulating resolved values.
    ///
    /// Every key in `order` must be a key of `vars`.
    #[must_use]
    pub fn expand_in_order(
        &self,
        vars: &HashMap<String, String>,
        order: &EvaluationOrder,
    ) -> HashMap<String, String> {
        let mut resolved = HashMap::with_capacity(vars.len());

        for key in &order.keys {
            let Some(template) = vars.get(key) else {
                continue;
            };
            let value = substitute(template, &self.spans.spans(template), &resolved);
            trace!("{key}={value}");
            resolved.insert(key.clone(), value);
        }

        resolved
    }

    /// Expand a free-standing template against already resolved values.
    ///
    /// ```rust
    /// use std::collections::HashMap;
    /// use envexpand::Expander;
    ///
    /// let resolved = HashMap::from([("HOME".to_string(), "/home/me".to_string())]);
    /// assert_eq!(Expander::uncached().expand_one("${HOME}/.cache", &resolved), "/home/me/.cache");
    /// ```
    #[must_use]
    pub fn expand_one(&self, template: &str, resolved: &HashMap<String, String>) -> String {
        substitute(template, &self.spans.spans(template), resolved)
    }
}
