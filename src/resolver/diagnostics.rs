//! Reporting of references that expansion leaves in place.

use serde::Serialize;
use std::fmt;

use super::dependency_graph::ReferenceGraph;
use super::ordering::EvaluationOrder;

/// Why a reference survives expansion as literal text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnresolvedReason {
    /// The referenced name is not a key of the variable set.
    Unknown,
    /// The key references itself.
    SelfReference,
    /// The reference closes a cycle and its target was still in progress.
    Cycle,
}

impl fmt::Display for UnresolvedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Unknown => "unknown variable",
            Self::SelfReference => "self-reference",
            Self::Cycle => "reference cycle",
        })
    }
}

/// A `${name}` token left verbatim in the value of `key`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnresolvedReference {
    pub key: String,
    pub name: String,
    pub reason: UnresolvedReason,
}

/// List the references that stay literal in their own key's value, sorted
/// by key then name.
///
/// Keys that embed such a value through an ordinary reference inherit the
/// literal text too; they are not listed separately.
#[must_use]
pub fn unresolved_references(
    graph: &ReferenceGraph,
    order: &EvaluationOrder,
) -> Vec<UnresolvedReference> {
    let mut found = Vec::new();

    for key in graph.keys() {
        for name in graph.unknown_references(key) {
            found.push(UnresolvedReference {
                key: key.to_string(),
                name: name.to_string(),
                reason: UnresolvedReason::Unknown,
            });
        }
        if graph.is_self_referencing(key) {
            found.push(UnresolvedReference {
                key: key.to_string(),
                name: key.to_string(),
                reason: UnresolvedReason::SelfReference,
            });
        }
    }

    found.extend(order.back_edges.iter().map(|edge| UnresolvedReference {
        key: edge.from.clone(),
        name: edge.to.clone(),
        reason: UnresolvedReason::Cycle,
    }));

    found.sort_by(|a, b| a.key.cmp(&b.key).then_with(|| a.name.cmp(&b.name)));
    found
}
