//! Reference graph between the keys of one variable set.
//!
//! Each key is a node; an edge `from → to` means the template of `from`
//! contains `${to}` and `to` is another key of the same set. References that
//! cannot take part in ordering (a key naming itself, or naming a key that is
//! not in the set) are kept on the side so callers can still report them.

use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::{BTreeSet, HashMap, HashSet};
use tracing::debug;

use crate::templating::SpanSource;

/// Dependency graph for one expansion run.
///
/// Built once by [`ReferenceGraph::build`] and never modified afterwards.
#[derive(Debug, Clone)]
pub struct ReferenceGraph {
    /// The underlying directed graph; node weights are key names.
    graph: DiGraph<String, ()>,
    /// Map from key names to their graph indices.
    node_map: HashMap<String, NodeIndex>,
    /// Keys whose template references the key itself.
    self_referencing: HashSet<String>,
    /// Names referenced by a key that are absent from the variable set.
    unknown: HashMap<String, BTreeSet<String>>,
}

impl ReferenceGraph {
    /// Scan every template in `vars` and record the references between keys.
    ///
    /// Nodes are added in sorted key order, so node indices (and anything
    /// that walks them in order) are stable across runs regardless of the
    /// map's iteration order.
    pub fn build<S: SpanSource>(vars: &HashMap<String, String>, spans: &S) -> Self {
        let mut keys: Vec<&String> = vars.keys().collect();
        keys.sort();

        let mut graph = DiGraph::with_capacity(keys.len(), keys.len());
        let mut node_map = HashMap::with_capacity(keys.len());
        for key in &keys {
            node_map.insert((*key).clone(), graph.add_node((*key).clone()));
        }

        let mut self_referencing = HashSet::new();
        let mut unknown: HashMap<String, BTreeSet<String>> = HashMap::new();

        for key in keys {
            let template = &vars[key];
            let from = node_map[key];
            let mut seen: HashSet<NodeIndex> = HashSet::new();

            for span in spans.spans(template).iter() {
                let name = span.name(template);

                if name == key.as_str() {
                    self_referencing.insert(key.clone());
                    continue;
                }

                match node_map.get(name) {
                    Some(&to) => {
                        // One edge per distinct target
                        if seen.insert(to) {
                            graph.add_edge(from, to, ());
                        }
                    }
                    None => {
                        debug!("{key} references unknown variable '{name}'");
                        unknown.entry(key.clone()).or_default().insert(name.to_owned());
                    }
                }
            }
        }

        Self {
            graph,
            node_map,
            self_referencing,
            unknown,
        }
    }

    /// Keys that `key` depends on, in sorted order.
    ///
    /// Excludes self-references and unknown names.
    #[must_use]
    pub fn dependencies(&self, key: &str) -> Vec<&str> {
        let Some(&idx) = self.node_map.get(key) else {
            return Vec::new();
        };
        let mut deps: Vec<&str> =
            self.graph.neighbors(idx).map(|dep| self.graph[dep].as_str()).collect();
        deps.sort_unstable();
        deps
    }

    /// Names referenced by `key` that are not keys of the variable set, sorted.
    #[must_use]
    pub fn unknown_references(&self, key: &str) -> Vec<&str> {
        self.unknown.get(key).into_iter().flatten().map(String::as_str).collect()
    }

    /// Whether the template of `key` contains `${key}`.
    #[must_use]
    pub fn is_self_referencing(&self, key: &str) -> bool {
        self.self_referencing.contains(key)
    }

    /// Whether `key` is part of the variable set.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.node_map.contains_key(key)
    }

    /// All keys, in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.graph.node_indices().map(|idx| self.graph[idx].as_str())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Get the total number of keys in the graph.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Get the total number of key-to-key references (deduplicated).
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub(crate) const fn inner(&self) -> &DiGraph<String, ()> {
        &self.graph
    }
}
