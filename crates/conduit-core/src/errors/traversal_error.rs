//! Traversal errors.

use super::error_code::{self, ConduitErrorCode};

/// Errors that can occur while walking a connectivity graph into a tree.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TraversalError {
    #[error("Cannot traverse an empty network")]
    EmptyNetwork,

    #[error("Root element {0} is not a member of the network")]
    RootNotFound(i64),

    #[error("Network is disconnected: reached {reached} of {total} elements")]
    Disconnected { reached: usize, total: usize },
}

impl ConduitErrorCode for TraversalError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Disconnected { .. } => error_code::NETWORK_DISCONNECTED,
            _ => error_code::TRAVERSAL_ERROR,
        }
    }
}
