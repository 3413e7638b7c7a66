//! Arena-backed rooted tree.

use conduit_core::types::collections::FxHashMap;
use conduit_core::types::ElementId;
use serde::{Deserialize, Serialize};

/// One element's position in a [`Tree`].
#[derive(Debug, Clone, PartialEq)]
pub struct TreeNode {
    pub element: ElementId,
    pub label: String,
    /// Arena index of the parent; `None` for the root.
    pub parent: Option<usize>,
    /// Arena indices of children, in discovery order.
    pub children: Vec<usize>,
}

/// A rooted, acyclic tree stored as an arena in discovery order.
///
/// Index 0 is the root and every parent precedes its children, so a tree is
/// never empty and parent links can never form a cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct Tree {
    nodes: Vec<TreeNode>,
}

/// Shape metrics of a tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeStats {
    pub node_count: usize,
    /// Longest root-to-leaf edge count.
    pub depth: usize,
    pub leaf_count: usize,
    /// Nodes with two or more children.
    pub branch_count: usize,
}

impl Tree {
    pub(crate) fn with_root(element: ElementId, label: String) -> Self {
        Self {
            nodes: vec![TreeNode {
                element,
                label,
                parent: None,
                children: Vec::new(),
            }],
        }
    }

    /// Append a child of `parent` and return its arena index.
    pub(crate) fn push_child(&mut self, parent: usize, element: ElementId, label: String) -> usize {
        let idx = self.nodes.len();
        self.nodes.push(TreeNode {
            element,
            label,
            parent: Some(parent),
            children: Vec::new(),
        });
        self.nodes[parent].children.push(idx);
        idx
    }

    pub fn root(&self) -> &TreeNode {
        &self.nodes[0]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, idx: usize) -> Option<&TreeNode> {
        self.nodes.get(idx)
    }

    /// Nodes in discovery order.
    pub fn nodes(&self) -> &[TreeNode] {
        &self.nodes
    }

    pub fn children_of(&self, idx: usize) -> impl Iterator<Item = &TreeNode> + '_ {
        self.nodes
            .get(idx)
            .map(|n| n.children.as_slice())
            .unwrap_or_default()
            .iter()
            .map(move |&c| &self.nodes[c])
    }

    pub fn contains(&self, element: ElementId) -> bool {
        self.nodes.iter().any(|n| n.element == element)
    }

    /// Element ids in discovery order.
    pub fn elements(&self) -> impl Iterator<Item = ElementId> + '_ {
        self.nodes.iter().map(|n| n.element)
    }

    /// Parent element of every node; `None` for the root.
    pub fn parent_map(&self) -> FxHashMap<ElementId, Option<ElementId>> {
        self.nodes
            .iter()
            .map(|n| (n.element, n.parent.map(|p| self.nodes[p].element)))
            .collect()
    }

    /// `(parent, child)` element pairs in discovery order of the child.
    pub fn edges(&self) -> Vec<(ElementId, ElementId)> {
        self.nodes
            .iter()
            .filter_map(|n| n.parent.map(|p| (self.nodes[p].element, n.element)))
            .collect()
    }

    /// Edge count from the root to `idx`.
    pub fn depth_of(&self, idx: usize) -> Option<usize> {
        let mut current = self.nodes.get(idx)?;
        let mut depth = 0;
        while let Some(parent) = current.parent {
            current = &self.nodes[parent];
            depth += 1;
        }
        Some(depth)
    }

    pub fn stats(&self) -> TreeStats {
        let mut depths = vec![0usize; self.nodes.len()];
        let mut stats = TreeStats {
            node_count: self.nodes.len(),
            ..TreeStats::default()
        };
        for (idx, node) in self.nodes.iter().enumerate() {
            if let Some(parent) = node.parent {
                depths[idx] = depths[parent] + 1;
            }
            stats.depth = stats.depth.max(depths[idx]);
            match node.children.len() {
                0 => stats.leaf_count += 1,
                1 => {}
                _ => stats.branch_count += 1,
            }
        }
        stats
    }
}
