//! Parameter lookup chains for device attributes.

use serde::{Deserialize, Serialize};

const DEFAULT_K_FACTOR_KEYS: &[&str] = &["K-Factor", "K Factor", "KFactor", "K"];
const DEFAULT_COVERAGE_KEYS: &[&str] = &["Coverage Area", "Coverage", "Max Coverage Area"];
const DEFAULT_ORIENTATION_KEYS: &[&str] = &["Orientation", "Sprinkler Orientation"];

/// Ordered parameter names tried for each device attribute. First hit wins.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ParameterConfig {
    #[serde(default)]
    pub k_factor_keys: Vec<String>,
    #[serde(default)]
    pub coverage_keys: Vec<String>,
    #[serde(default)]
    pub orientation_keys: Vec<String>,
}

impl ParameterConfig {
    pub fn effective_k_factor_keys(&self) -> Vec<String> {
        or_defaults(&self.k_factor_keys, DEFAULT_K_FACTOR_KEYS)
    }

    pub fn effective_coverage_keys(&self) -> Vec<String> {
        or_defaults(&self.coverage_keys, DEFAULT_COVERAGE_KEYS)
    }

    pub fn effective_orientation_keys(&self) -> Vec<String> {
        or_defaults(&self.orientation_keys, DEFAULT_ORIENTATION_KEYS)
    }
}

fn or_defaults(keys: &[String], defaults: &[&str]) -> Vec<String> {
    if keys.is_empty() {
        defaults.iter().map(|k| k.to_string()).collect()
    } else {
        keys.to_vec()
    }
}
