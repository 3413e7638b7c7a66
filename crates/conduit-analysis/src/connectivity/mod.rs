//! Connectivity Graph Builder: connector-level adjacency as a petgraph `UnGraph`.

pub mod builder;
pub mod types;

pub use builder::{build_connectivity, ConnectivityBuilder};
pub use types::{ConnectionEdge, ConnectivityGraph, ConnectivityStats};
