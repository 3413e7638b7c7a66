//! Top-level Conduit configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{ParameterConfig, SpacingConfig, TraversalConfig};
use crate::constants::CONFIG_FILE_NAME;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Explicit overrides (applied via `apply_overrides`)
/// 2. Environment variables (`CONDUIT_*`)
/// 3. Project config (`conduit.toml` in the project root)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ConduitConfig {
    pub spacing: SpacingConfig,
    pub traversal: TraversalConfig,
    pub parameters: ParameterConfig,
}

/// Caller-supplied overrides, applied last.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub min_separation: Option<f64>,
    pub max_separation: Option<f64>,
    pub elevation_tolerance: Option<f64>,
    pub parallel: Option<bool>,
}

impl ConduitConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path, overrides: Option<&ConfigOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let project_config_path = root.join(CONFIG_FILE_NAME);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config);

        if let Some(overrides) = overrides {
            Self::apply_overrides(&mut config, overrides);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &ConduitConfig) -> Result<(), ConfigError> {
        let spacing = &config.spacing;
        let min = spacing.effective_min_separation();
        let max = spacing.effective_max_separation();
        if !(min.is_finite() && min > 0.0) {
            return Err(invalid("spacing.min_separation", "must be a positive number"));
        }
        if !(max.is_finite() && max > 0.0) {
            return Err(invalid("spacing.max_separation", "must be a positive number"));
        }
        if min >= max {
            return Err(invalid(
                "spacing.min_separation",
                "must be less than spacing.max_separation",
            ));
        }
        let tolerance = spacing.effective_elevation_tolerance();
        if !(tolerance.is_finite() && tolerance > 0.0) {
            return Err(invalid("spacing.elevation_tolerance", "must be a positive number"));
        }
        if spacing.effective_max_neighbors() == 0 {
            return Err(invalid("spacing.max_neighbors", "must be at least 1"));
        }
        let factor = spacing.effective_pruning_factor();
        if !(factor.is_finite() && factor >= 1.0) {
            return Err(invalid("spacing.pruning_factor", "must be at least 1.0"));
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored.
    fn merge_toml_file(config: &mut ConduitConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: ConduitConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins only where it has a value.
    fn merge(base: &mut ConduitConfig, other: &ConduitConfig) {
        // Spacing
        if other.spacing.min_separation.is_some() {
            base.spacing.min_separation = other.spacing.min_separation;
        }
        if other.spacing.max_separation.is_some() {
            base.spacing.max_separation = other.spacing.max_separation;
        }
        if other.spacing.elevation_tolerance.is_some() {
            base.spacing.elevation_tolerance = other.spacing.elevation_tolerance;
        }
        if other.spacing.max_neighbors.is_some() {
            base.spacing.max_neighbors = other.spacing.max_neighbors;
        }
        if other.spacing.pruning_factor.is_some() {
            base.spacing.pruning_factor = other.spacing.pruning_factor;
        }

        // Traversal
        if other.traversal.parallel.is_some() {
            base.traversal.parallel = other.traversal.parallel;
        }
        if !other.traversal.unassigned_names.is_empty() {
            base.traversal.unassigned_names = other.traversal.unassigned_names.clone();
        }

        // Parameters
        if !other.parameters.k_factor_keys.is_empty() {
            base.parameters.k_factor_keys = other.parameters.k_factor_keys.clone();
        }
        if !other.parameters.coverage_keys.is_empty() {
            base.parameters.coverage_keys = other.parameters.coverage_keys.clone();
        }
        if !other.parameters.orientation_keys.is_empty() {
            base.parameters.orientation_keys = other.parameters.orientation_keys.clone();
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `CONDUIT_SPACING_MIN_SEPARATION`, `CONDUIT_TRAVERSAL_PARALLEL`, etc.
    fn apply_env_overrides(config: &mut ConduitConfig) {
        if let Some(v) = env_parse::<f64>("CONDUIT_SPACING_MIN_SEPARATION") {
            config.spacing.min_separation = Some(v);
        }
        if let Some(v) = env_parse::<f64>("CONDUIT_SPACING_MAX_SEPARATION") {
            config.spacing.max_separation = Some(v);
        }
        if let Some(v) = env_parse::<f64>("CONDUIT_SPACING_ELEVATION_TOLERANCE") {
            config.spacing.elevation_tolerance = Some(v);
        }
        if let Some(v) = env_parse::<usize>("CONDUIT_SPACING_MAX_NEIGHBORS") {
            config.spacing.max_neighbors = Some(v);
        }
        if let Some(v) = env_parse::<bool>("CONDUIT_TRAVERSAL_PARALLEL") {
            config.traversal.parallel = Some(v);
        }
    }

    fn apply_overrides(config: &mut ConduitConfig, overrides: &ConfigOverrides) {
        if let Some(v) = overrides.min_separation {
            config.spacing.min_separation = Some(v);
        }
        if let Some(v) = overrides.max_separation {
            config.spacing.max_separation = Some(v);
        }
        if let Some(v) = overrides.elevation_tolerance {
            config.spacing.elevation_tolerance = Some(v);
        }
        if let Some(v) = overrides.parallel {
            config.traversal.parallel = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.trim().parse::<T>().ok())
}

fn invalid(field: &str, message: &str) -> ConfigError {
    ConfigError::ValidationFailed {
        field: field.to_string(),
        message: message.to_string(),
    }
}
