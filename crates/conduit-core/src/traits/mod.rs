//! Collaborator traits at the host boundary.

pub mod model_source;

pub use model_source::ModelSource;
