use conduit_analysis::connectivity::build_connectivity;
use conduit_analysis::traversal::{Tree, TraversalEngine};
use conduit_core::errors::TraversalError;
use conduit_core::types::{Connector, ConnectorRef, ElementId, ElementKind, PhysicalElement};
use proptest::prelude::*;
use proptest::sample::Index;

fn id_of(i: usize) -> i64 {
    i as i64 * 10 + 1
}

fn wire(count: usize, offset: usize, edges: &[(usize, usize)]) -> Vec<PhysicalElement> {
    let mut elements: Vec<PhysicalElement> = (offset..offset + count)
        .map(|i| PhysicalElement::new(id_of(i), "", ElementKind::Fitting { part_type: None }))
        .collect();
    for &(a, b) in edges {
        let (ia, ib) = (a - offset, b - offset);
        let ca = elements[ia].connectors.len() as u32;
        let cb = elements[ib].connectors.len() as u32;
        elements[ia].connectors.push(Connector {
            owner: ElementId(id_of(a)),
            index: ca,
            connected_to: Some(ConnectorRef::new(ElementId(id_of(b)), cb)),
        });
        elements[ib].connectors.push(Connector {
            owner: ElementId(id_of(b)),
            index: cb,
            connected_to: Some(ConnectorRef::new(ElementId(id_of(a)), ca)),
        });
    }
    elements
}

/// A random spanning tree over `n` nodes plus extra loop-closing edges.
fn connected_edges(n: usize, parents: &[Index], extra: &[(Index, Index)], offset: usize) -> Vec<(usize, usize)> {
    let mut edges: Vec<(usize, usize)> = (1..n)
        .map(|i| (offset + parents[i - 1].index(i), offset + i))
        .collect();
    for (a, b) in extra {
        let (a, b) = (a.index(n), b.index(n));
        if a != b {
            edges.push((offset + a, offset + b));
        }
    }
    edges
}

fn connected_graph() -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
    (2usize..40).prop_flat_map(|n| {
        (
            Just(n),
            prop::collection::vec(any::<Index>(), n - 1),
            prop::collection::vec((any::<Index>(), any::<Index>()), 0..n),
        )
            .prop_map(|(n, parents, extra)| (n, connected_edges(n, &parents, &extra, 0)))
    })
}

proptest! {
    #[test]
    fn connected_network_yields_spanning_tree((n, edges) in connected_graph()) {
        let elements = wire(n, 0, &edges);
        let (graph, _) = build_connectivity(&elements);
        let tree = TraversalEngine::new(&graph).with_labels(&elements).traverse(None);
        prop_assert!(tree.is_ok());
        let tree = tree.unwrap();

        prop_assert_eq!(tree.len(), n);
        prop_assert_eq!(tree.nodes().iter().filter(|node| node.parent.is_none()).count(), 1);
        for (idx, node) in tree.nodes().iter().enumerate() {
            if let Some(parent) = node.parent {
                prop_assert!(parent < idx);
            }
        }
        for (parent, child) in tree.edges() {
            prop_assert!(graph.are_connected(parent, child));
        }
        let mut ids: Vec<i64> = tree.elements().map(|e| e.0).collect();
        ids.sort_unstable();
        ids.dedup();
        prop_assert_eq!(ids.len(), n);
    }

    #[test]
    fn serialized_shapes_round_trip((n, edges) in connected_graph()) {
        let elements = wire(n, 0, &edges);
        let (graph, _) = build_connectivity(&elements);
        let tree = TraversalEngine::new(&graph).with_labels(&elements).traverse(None).unwrap();

        prop_assert_eq!(&Tree::from_flat(&tree.to_flat()).unwrap(), &tree);
        prop_assert_eq!(&Tree::from_nested(&tree.to_nested()).unwrap(), &tree);
    }

    #[test]
    fn traversal_is_deterministic((n, edges) in connected_graph()) {
        let elements = wire(n, 0, &edges);
        let (graph, _) = build_connectivity(&elements);
        let engine = TraversalEngine::new(&graph);
        prop_assert_eq!(engine.traverse(None).unwrap(), engine.traverse(None).unwrap());
    }

    #[test]
    fn two_components_are_disconnected(
        (n1, e1) in connected_graph(),
        (n2, e2) in connected_graph(),
    ) {
        let mut elements = wire(n1, 0, &e1);
        let shifted: Vec<(usize, usize)> = e2.iter().map(|&(a, b)| (a + n1, b + n1)).collect();
        elements.extend(wire(n2, n1, &shifted));
        let (graph, _) = build_connectivity(&elements);

        match TraversalEngine::new(&graph).traverse(None) {
            Err(TraversalError::Disconnected { reached, total }) => {
                prop_assert_eq!(total, n1 + n2);
                prop_assert!(reached == n1 || reached == n2);
            }
            other => prop_assert!(false, "expected disconnected, got {:?}", other),
        }
    }
}
