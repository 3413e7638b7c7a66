//! Traversal Engine: rooted tree extraction from a connectivity graph.
//!
//! Explicit-stack depth-first walk over an arena of nodes; two serialized
//! shapes (flat parent-indexed records and nested hierarchy).

pub mod engine;
pub mod root;
pub mod serialize;
pub mod tree;

pub use engine::TraversalEngine;
pub use root::select_root;
pub use serialize::{FlatNode, NestedNode};
pub use tree::{Tree, TreeNode, TreeStats};
