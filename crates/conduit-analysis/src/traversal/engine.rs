//! Depth-first walk from a root element into a [`Tree`].

use conduit_core::errors::TraversalError;
use conduit_core::types::collections::FxHashMap;
use conduit_core::types::{ElementId, PhysicalElement};
use petgraph::graph::NodeIndex;
use petgraph::visit::{VisitMap, Visitable};
use smallvec::SmallVec;

use super::root::select_root;
use super::tree::Tree;
use crate::connectivity::ConnectivityGraph;

/// One level of the explicit DFS stack.
struct Frame {
    tree_node: usize,
    neighbors: SmallVec<[NodeIndex; 4]>,
    next: usize,
}

/// Walks a [`ConnectivityGraph`] into a rooted tree.
pub struct TraversalEngine<'g> {
    graph: &'g ConnectivityGraph,
    labels: FxHashMap<ElementId, String>,
}

impl<'g> TraversalEngine<'g> {
    pub fn new(graph: &'g ConnectivityGraph) -> Self {
        Self {
            graph,
            labels: FxHashMap::default(),
        }
    }

    /// Use element labels for node text. Unlabeled nodes fall back to the id.
    pub fn with_labels(mut self, elements: &[PhysicalElement]) -> Self {
        self.labels = elements.iter().map(|e| (e.id, e.label())).collect();
        self
    }

    /// Traverse from the designated base, or the highest-degree element.
    pub fn traverse(&self, base: Option<ElementId>) -> Result<Tree, TraversalError> {
        let root = select_root(self.graph, base).ok_or(TraversalError::EmptyNetwork)?;
        self.walk(root)
    }

    /// Traverse from an explicit root element.
    pub fn traverse_from(&self, root: ElementId) -> Result<Tree, TraversalError> {
        let idx = self
            .graph
            .node(root)
            .ok_or(TraversalError::RootNotFound(root.value()))?;
        self.walk(idx)
    }

    /// Visit the deepest branch first; already visited neighbors are skipped.
    /// Fails unless every member is reached.
    fn walk(&self, root: NodeIndex) -> Result<Tree, TraversalError> {
        let graph = self.graph;
        let mut visited = graph.graph.visit_map();
        visited.visit(root);
        let mut reached = 1usize;

        let mut tree = Tree::with_root(graph.element(root), self.label(graph.element(root)));
        let mut stack = vec![Frame {
            tree_node: 0,
            neighbors: graph.ordered_neighbors(root),
            next: 0,
        }];

        while let Some(frame) = stack.last_mut() {
            let Some(&neighbor) = frame.neighbors.get(frame.next) else {
                stack.pop();
                continue;
            };
            frame.next += 1;
            if !visited.visit(neighbor) {
                continue;
            }
            reached += 1;

            let parent = frame.tree_node;
            let element = graph.element(neighbor);
            let child = tree.push_child(parent, element, self.label(element));
            stack.push(Frame {
                tree_node: child,
                neighbors: graph.ordered_neighbors(neighbor),
                next: 0,
            });
        }

        let total = graph.element_count();
        if reached != total {
            tracing::debug!(
                root = %graph.element(root),
                reached,
                total,
                "traversal did not reach every member"
            );
            return Err(TraversalError::Disconnected { reached, total });
        }

        Ok(tree)
    }

    fn label(&self, element: ElementId) -> String {
        self.labels
            .get(&element)
            .cloned()
            .unwrap_or_else(|| element.to_string())
    }
}
