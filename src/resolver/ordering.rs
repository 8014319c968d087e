//! Evaluation ordering over a [`ReferenceGraph`].
//!
//! Produces a sequence containing every key exactly once such that, for
//! every reference edge `k → n`, `n` comes before `k`, except for the edges
//! that close a cycle. Those cannot be satisfied by any order; they are
//! reported as back edges and ignored.
//!
//! The traversal is a three-color depth-first search driven by an explicit
//! work stack, so arbitrarily long reference chains cannot overflow the call
//! stack.

use petgraph::graph::NodeIndex;
use std::vec;
use tracing::{debug, trace};

use super::dependency_graph::ReferenceGraph;

/// Traversal state of a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisitState {
    /// Key has not been reached yet.
    Unvisited,
    /// Key is on the current traversal path.
    InProgress,
    /// Key and all of its reachable dependencies have been placed.
    Done,
}

/// A reference edge that closes a cycle and was skipped for ordering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackEdge {
    /// The key whose template contains the reference.
    pub from: String,
    /// The referenced key, already on the traversal path.
    pub to: String,
}

/// Result of ordering a reference graph.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EvaluationOrder {
    /// Every key exactly once, dependencies first.
    pub keys: Vec<String>,
    /// Edges skipped because they close a cycle.
    pub back_edges: Vec<BackEdge>,
}

impl EvaluationOrder {
    /// Whether any reference cycle was found.
    #[must_use]
    pub fn has_cycles(&self) -> bool {
        !self.back_edges.is_empty()
    }

    /// Position of `key` in the order.
    #[must_use]
    pub fn position(&self, key: &str) -> Option<usize> {
        self.keys.iter().position(|k| k == key)
    }
}

struct Frame {
    node: NodeIndex,
    deps: vec::IntoIter<NodeIndex>,
}

/// Compute the evaluation order for `graph`.
///
/// Roots are taken in node order (sorted key order) and each key's
/// dependencies are visited in sorted order, so the result is fully
/// deterministic for a given variable set.
#[must_use]
pub fn evaluation_order(graph: &ReferenceGraph) -> EvaluationOrder {
    let inner = graph.inner();
    let mut state = vec![VisitState::Unvisited; inner.node_count()];
    let mut order = EvaluationOrder {
        keys: Vec::with_capacity(inner.node_count()),
        back_edges: Vec::new(),
    };

    let frame = |node: NodeIndex| {
        let mut deps: Vec<NodeIndex> = inner.neighbors(node).collect();
        deps.sort_unstable();
        Frame {
            node,
            deps: deps.into_iter(),
        }
    };

    for root in inner.node_indices() {
        if state[root.index()] != VisitState::Unvisited {
            continue;
        }

        state[root.index()] = VisitState::InProgress;
        let mut stack = vec![frame(root)];

        while let Some(top) = stack.last_mut() {
            let node = top.node;

            let Some(dep) = top.deps.next() else {
                state[node.index()] = VisitState::Done;
                trace!("ordered {}", inner[node]);
                order.keys.push(inner[node].clone());
                stack.pop();
                continue;
            };

            match state[dep.index()] {
                VisitState::Unvisited => {
                    state[dep.index()] = VisitState::InProgress;
                    stack.push(frame(dep));
                }
                VisitState::InProgress => {
                    debug!("Reference cycle: {} → {} left unresolved", inner[node], inner[dep]);
                    order.back_edges.push(BackEdge {
                        from: inner[node].clone(),
                        to: inner[dep].clone(),
                    });
                }
                VisitState::Done => {}
            }
        }
    }

    order
}
