//! Configuration system for Conduit.
//! TOML-based, layered resolution: overrides > env > project > defaults.

pub mod conduit_config;
pub mod parameter_config;
pub mod spacing_config;
pub mod traversal_config;

pub use conduit_config::{ConduitConfig, ConfigOverrides};
pub use parameter_config::ParameterConfig;
pub use spacing_config::SpacingConfig;
pub use traversal_config::TraversalConfig;
