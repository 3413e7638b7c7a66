//! Error handling for Conduit.
//! One error enum per subsystem, `thiserror` only.

pub mod config_error;
pub mod error_code;
pub mod pipeline_error;
pub mod source_error;
pub mod traversal_error;
pub mod tree_format_error;

pub use config_error::ConfigError;
pub use error_code::ConduitErrorCode;
pub use pipeline_error::{PipelineError, PipelineResult};
pub use source_error::SourceError;
pub use traversal_error::TraversalError;
pub use tree_format_error::TreeFormatError;
