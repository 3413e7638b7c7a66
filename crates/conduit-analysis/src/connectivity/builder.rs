//! Builds element adjacency from connector references.

use conduit_core::types::collections::{FxHashMap, FxHashSet};
use conduit_core::types::{ElementId, PhysicalElement};

use super::types::{ConnectionEdge, ConnectivityGraph, ConnectivityStats};

/// Builds a [`ConnectivityGraph`] from a network's member elements.
#[derive(Debug, Default)]
pub struct ConnectivityBuilder;

impl ConnectivityBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Build the adjacency relation.
    ///
    /// Every connector with a peer reference contributes one undirected edge
    /// when the peer is a member, the peer's connector references back, and
    /// the pair has not been recorded yet. Anything else is dropped and
    /// counted, never raised.
    pub fn build(&self, elements: &[PhysicalElement]) -> (ConnectivityGraph, ConnectivityStats) {
        let mut graph = ConnectivityGraph::with_capacity(elements.len());
        let mut stats = ConnectivityStats::default();
        let mut members: FxHashMap<ElementId, &PhysicalElement> =
            FxHashMap::with_capacity_and_hasher(elements.len(), Default::default());

        for element in elements {
            if members.contains_key(&element.id) {
                stats.duplicate_elements += 1;
                tracing::debug!(element = %element.id, "duplicate network member");
                continue;
            }
            members.insert(element.id, element);
            graph.add_element(element.id);
        }

        let mut recorded: FxHashSet<(ElementId, ElementId)> = FxHashSet::default();

        for element in members_in_order(elements, &members) {
            for connector in &element.connectors {
                let Some(peer_ref) = connector.connected_to else {
                    continue;
                };

                if peer_ref.element == element.id {
                    stats.self_references += 1;
                    continue;
                }

                let Some(peer) = members.get(&peer_ref.element) else {
                    stats.external_ignored += 1;
                    tracing::trace!(
                        element = %element.id,
                        peer = %peer_ref.element,
                        "connection leaves the network"
                    );
                    continue;
                };

                let reciprocal = peer
                    .connector(peer_ref.connector)
                    .and_then(|c| c.connected_to)
                    == Some(connector.reference());
                if !reciprocal {
                    stats.asymmetric_dropped += 1;
                    tracing::debug!(
                        element = %element.id,
                        connector = connector.index,
                        peer = %peer_ref.element,
                        "asymmetric connector reference dropped"
                    );
                    continue;
                }

                // Parallel connector pairs between the same two elements collapse to one edge.
                if !recorded.insert(pair_key(element.id, peer.id)) {
                    continue;
                }

                graph.add_connection(
                    element.id,
                    peer.id,
                    ConnectionEdge {
                        from: connector.reference(),
                        to: peer_ref,
                    },
                );
            }
        }

        stats.elements = graph.element_count();
        stats.connections = graph.connection_count();
        stats.isolated = graph
            .graph
            .node_indices()
            .filter(|&idx| graph.degree(idx) == 0)
            .count();

        (graph, stats)
    }
}

/// Build with the default builder.
pub fn build_connectivity(elements: &[PhysicalElement]) -> (ConnectivityGraph, ConnectivityStats) {
    ConnectivityBuilder::new().build(elements)
}

/// First occurrence of each member, in slice order.
fn members_in_order<'a>(
    elements: &'a [PhysicalElement],
    members: &'a FxHashMap<ElementId, &'a PhysicalElement>,
) -> impl Iterator<Item = &'a PhysicalElement> + 'a {
    elements
        .iter()
        .filter(move |e| members.get(&e.id).is_some_and(|first| std::ptr::eq(*first, *e)))
}

fn pair_key(a: ElementId, b: ElementId) -> (ElementId, ElementId) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}
