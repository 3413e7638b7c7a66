//! Root selection policy.

use conduit_core::types::ElementId;
use petgraph::graph::NodeIndex;

use crate::connectivity::ConnectivityGraph;

/// Pick the traversal root.
///
/// A designated base element wins when it is a member. Otherwise the
/// highest-degree node, ties going to the earliest member.
pub fn select_root(graph: &ConnectivityGraph, base: Option<ElementId>) -> Option<NodeIndex> {
    if let Some(idx) = base.and_then(|b| graph.node(b)) {
        return Some(idx);
    }
    if let Some(base) = base {
        tracing::debug!(base = %base, "designated base is not a member, falling back to degree");
    }

    graph
        .graph
        .node_indices()
        .fold(None, |best: Option<(NodeIndex, usize)>, idx| {
            let degree = graph.degree(idx);
            match best {
                Some((_, best_degree)) if best_degree >= degree => best,
                _ => Some((idx, degree)),
            }
        })
        .map(|(idx, _)| idx)
}
