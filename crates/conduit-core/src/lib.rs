//! Conduit core: shared entity model, errors, configuration, collaborator
//! traits, logging setup, and constants.

pub mod config;
pub mod constants;
pub mod errors;
pub mod logging;
pub mod traits;
pub mod types;
