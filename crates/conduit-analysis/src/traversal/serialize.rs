//! Flat (bottom-up) and nested (top-down) tree shapes.
//!
//! Field names and the `"#"` root sentinel are a fixed contract with
//! tree-widget consumers.

use conduit_core::constants::FLAT_ROOT_PARENT;
use conduit_core::errors::{PipelineError, TreeFormatError};
use conduit_core::types::collections::FxHashMap;
use conduit_core::types::ElementId;
use serde::{Deserialize, Serialize};

use super::tree::Tree;

/// One flat record: `{ "id": "12", "parent": "#", "text": "..." }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlatNode {
    pub id: String,
    pub parent: String,
    pub text: String,
}

/// One nested record: `{ "id": 12, "name": "...", "children": [...] }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NestedNode {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub children: Vec<NestedNode>,
}

impl Tree {
    /// Flat records in discovery order.
    pub fn to_flat(&self) -> Vec<FlatNode> {
        self.nodes()
            .iter()
            .map(|node| FlatNode {
                id: node.element.to_string(),
                parent: node
                    .parent
                    .map(|p| self.nodes()[p].element.to_string())
                    .unwrap_or_else(|| FLAT_ROOT_PARENT.to_string()),
                text: node.label.clone(),
            })
            .collect()
    }

    /// Nested hierarchy rooted at the tree root.
    pub fn to_nested(&self) -> NestedNode {
        // Children always sit after their parent in the arena, so a reverse
        // sweep finishes every subtree before its parent needs it.
        let nodes = self.nodes();
        let mut built: Vec<Option<NestedNode>> = vec![None; nodes.len()];
        for idx in (0..nodes.len()).rev() {
            let node = &nodes[idx];
            let children = node
                .children
                .iter()
                .filter_map(|&c| built[c].take())
                .collect();
            built[idx] = Some(NestedNode {
                id: node.element.value(),
                name: node.label.clone(),
                children,
            });
        }
        built[0].take().unwrap_or_else(|| NestedNode {
            id: self.root().element.value(),
            name: self.root().label.clone(),
            children: Vec::new(),
        })
    }

    pub fn to_flat_json(&self) -> Result<String, PipelineError> {
        Ok(serde_json::to_string_pretty(&self.to_flat())?)
    }

    pub fn to_nested_json(&self) -> Result<String, PipelineError> {
        Ok(serde_json::to_string_pretty(&self.to_nested())?)
    }

    /// Rebuild a tree from flat records. Parents must precede their children.
    pub fn from_flat(records: &[FlatNode]) -> Result<Tree, TreeFormatError> {
        let mut tree: Option<Tree> = None;
        let mut positions: FxHashMap<ElementId, usize> = FxHashMap::default();

        for record in records {
            let id = parse_id(&record.id)?;
            if positions.contains_key(&id) {
                return Err(TreeFormatError::DuplicateId(record.id.clone()));
            }

            let idx = if record.parent == FLAT_ROOT_PARENT {
                if tree.is_some() {
                    return Err(TreeFormatError::MultipleRoots(record.id.clone()));
                }
                tree = Some(Tree::with_root(id, record.text.clone()));
                0
            } else {
                let unknown_parent = || TreeFormatError::UnknownParent {
                    id: record.id.clone(),
                    parent: record.parent.clone(),
                };
                let parent_id = parse_id(&record.parent)?;
                let parent = *positions.get(&parent_id).ok_or_else(unknown_parent)?;
                let tree = tree.as_mut().ok_or_else(unknown_parent)?;
                tree.push_child(parent, id, record.text.clone())
            };
            positions.insert(id, idx);
        }

        tree.ok_or(TreeFormatError::MissingRoot)
    }

    /// Rebuild a tree from a nested hierarchy.
    pub fn from_nested(root: &NestedNode) -> Result<Tree, TreeFormatError> {
        let mut tree = Tree::with_root(ElementId(root.id), root.name.clone());
        let mut seen: FxHashMap<ElementId, usize> = FxHashMap::default();
        seen.insert(ElementId(root.id), 0);

        // Children are pushed in reverse so they pop in document order,
        // reproducing the original discovery order.
        let mut stack: Vec<(&NestedNode, usize)> = root.children.iter().rev().map(|c| (c, 0)).collect();
        while let Some((node, parent)) = stack.pop() {
            let id = ElementId(node.id);
            if seen.contains_key(&id) {
                return Err(TreeFormatError::DuplicateId(id.to_string()));
            }
            let idx = tree.push_child(parent, id, node.name.clone());
            seen.insert(id, idx);
            stack.extend(node.children.iter().rev().map(|c| (c, idx)));
        }

        Ok(tree)
    }
}

fn parse_id(raw: &str) -> Result<ElementId, TreeFormatError> {
    raw.parse::<ElementId>()
        .map_err(|_| TreeFormatError::InvalidId(raw.to_string()))
}
