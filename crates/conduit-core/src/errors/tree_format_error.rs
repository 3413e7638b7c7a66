//! Errors reconstructing a tree from a serialized form.

use super::error_code::{self, ConduitErrorCode};

/// Errors that can occur when rebuilding a tree from flat or nested records.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TreeFormatError {
    #[error("Tree has no root record")]
    MissingRoot,

    #[error("Tree has more than one root: {0}")]
    MultipleRoots(String),

    #[error("Invalid node id: {0}")]
    InvalidId(String),

    #[error("Duplicate node id: {0}")]
    DuplicateId(String),

    #[error("Parent {parent} of node {id} is not defined before it")]
    UnknownParent { id: String, parent: String },
}

impl ConduitErrorCode for TreeFormatError {
    fn error_code(&self) -> &'static str {
        error_code::TREE_FORMAT_ERROR
    }
}
