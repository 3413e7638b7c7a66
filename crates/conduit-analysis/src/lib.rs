//! Conduit analysis engine: connectivity graphs, tree traversal, sprinkler
//! spacing, device resolution, and report assembly.

pub mod connectivity;
pub mod devices;
pub mod proximity;
pub mod report;
pub mod snapshot;
pub mod traversal;
