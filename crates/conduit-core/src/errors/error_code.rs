//! Stable error codes exposed to callers and logs.

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const SOURCE_ERROR: &str = "SOURCE_ERROR";
pub const ELEMENT_NOT_FOUND: &str = "ELEMENT_NOT_FOUND";
pub const TRAVERSAL_ERROR: &str = "TRAVERSAL_ERROR";
pub const NETWORK_DISCONNECTED: &str = "NETWORK_DISCONNECTED";
pub const TREE_FORMAT_ERROR: &str = "TREE_FORMAT_ERROR";
pub const SERIALIZATION_ERROR: &str = "SERIALIZATION_ERROR";

/// Maps an error to a stable, machine-readable code.
pub trait ConduitErrorCode {
    fn error_code(&self) -> &'static str;
}
