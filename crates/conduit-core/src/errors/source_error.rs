//! Errors raised by the model source collaborator.

use super::error_code::{self, ConduitErrorCode};

/// Errors that can occur while enumerating model content.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("Model source unavailable: {0}")]
    Unavailable(String),

    #[error("Element {element} of network {network} not found in model")]
    ElementNotFound { network: i64, element: i64 },

    #[error("Failed to read model {path}: {message}")]
    Io { path: String, message: String },

    #[error("Malformed model data: {0}")]
    Malformed(String),
}

impl ConduitErrorCode for SourceError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::ElementNotFound { .. } => error_code::ELEMENT_NOT_FOUND,
            _ => error_code::SOURCE_ERROR,
        }
    }
}
