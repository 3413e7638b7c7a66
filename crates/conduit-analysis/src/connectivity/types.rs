//! Connectivity graph types.

use conduit_core::types::collections::FxHashMap;
use conduit_core::types::{ConnectorRef, ElementId};
use petgraph::graph::{EdgeIndex, NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// One matched connector pair joining two elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectionEdge {
    /// Connector on the element that discovered the edge.
    pub from: ConnectorRef,
    /// Peer connector.
    pub to: ConnectorRef,
}

/// Undirected element adjacency for one network.
///
/// Node indices follow membership order; edge indices follow discovery order.
/// Both orders are what make traversal output reproducible.
#[derive(Debug, Default)]
pub struct ConnectivityGraph {
    pub graph: UnGraph<ElementId, ConnectionEdge>,
    index: FxHashMap<ElementId, NodeIndex>,
}

impl ConnectivityGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(elements: usize) -> Self {
        Self {
            graph: UnGraph::with_capacity(elements, elements),
            index: FxHashMap::with_capacity_and_hasher(elements, Default::default()),
        }
    }

    /// Add an element node. Idempotent; returns the existing node on repeats.
    pub fn add_element(&mut self, id: ElementId) -> NodeIndex {
        if let Some(&idx) = self.index.get(&id) {
            return idx;
        }
        let idx = self.graph.add_node(id);
        self.index.insert(id, idx);
        idx
    }

    /// Record a connection between two member elements.
    /// Returns `None` if either element is not a node of this graph.
    pub fn add_connection(
        &mut self,
        a: ElementId,
        b: ElementId,
        edge: ConnectionEdge,
    ) -> Option<EdgeIndex> {
        let a = *self.index.get(&a)?;
        let b = *self.index.get(&b)?;
        Some(self.graph.add_edge(a, b, edge))
    }

    pub fn node(&self, id: ElementId) -> Option<NodeIndex> {
        self.index.get(&id).copied()
    }

    pub fn element(&self, idx: NodeIndex) -> ElementId {
        self.graph[idx]
    }

    pub fn contains(&self, id: ElementId) -> bool {
        self.index.contains_key(&id)
    }

    pub fn element_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn connection_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Member elements in membership order.
    pub fn element_ids(&self) -> impl Iterator<Item = ElementId> + '_ {
        self.graph.node_indices().map(move |idx| self.graph[idx])
    }

    pub fn degree(&self, idx: NodeIndex) -> usize {
        self.graph.edges(idx).count()
    }

    /// Neighbors of `idx` in edge-discovery order.
    pub fn ordered_neighbors(&self, idx: NodeIndex) -> SmallVec<[NodeIndex; 4]> {
        let mut edges: SmallVec<[(EdgeIndex, NodeIndex); 4]> = self
            .graph
            .edges(idx)
            .map(|e| {
                let other = if e.source() == idx { e.target() } else { e.source() };
                (e.id(), other)
            })
            .collect();
        edges.sort_unstable_by_key(|(edge, _)| edge.index());
        edges.into_iter().map(|(_, node)| node).collect()
    }

    /// Neighbor element ids of `id` in discovery order. Empty for non-members.
    pub fn neighbors_of(&self, id: ElementId) -> Vec<ElementId> {
        self.node(id)
            .map(|idx| {
                self.ordered_neighbors(idx)
                    .into_iter()
                    .map(|n| self.graph[n])
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn are_connected(&self, a: ElementId, b: ElementId) -> bool {
        match (self.node(a), self.node(b)) {
            (Some(a), Some(b)) => self.graph.contains_edge(a, b),
            _ => false,
        }
    }
}

/// Counters collected while building a connectivity graph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectivityStats {
    pub elements: usize,
    pub connections: usize,
    /// Connector references whose peer does not point back.
    pub asymmetric_dropped: usize,
    /// Connector references to elements outside the network.
    pub external_ignored: usize,
    /// Connector references pointing at the owning element.
    pub self_references: usize,
    /// Member ids listed more than once.
    pub duplicate_elements: usize,
    /// Members with no connections at all.
    pub isolated: usize,
}
