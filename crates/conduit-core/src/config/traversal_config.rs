//! Network traversal configuration.

use serde::{Deserialize, Serialize};

/// Configuration for network eligibility and traversal scheduling.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TraversalConfig {
    /// Traverse eligible networks on the rayon pool. Default: false.
    pub parallel: Option<bool>,
    /// Network names treated as "not a real system" (case-insensitive).
    #[serde(default)]
    pub unassigned_names: Vec<String>,
}

impl TraversalConfig {
    pub fn effective_parallel(&self) -> bool {
        self.parallel.unwrap_or(false)
    }

    /// Returns the effective unassigned names, defaulting to `["unassigned"]`.
    pub fn effective_unassigned_names(&self) -> Vec<String> {
        if self.unassigned_names.is_empty() {
            vec!["unassigned".to_string()]
        } else {
            self.unassigned_names.clone()
        }
    }

    /// True when `name` is blank or one of the unassigned names.
    pub fn is_unassigned_name(&self, name: &str) -> bool {
        let name = name.trim();
        name.is_empty()
            || self
                .effective_unassigned_names()
                .iter()
                .any(|n| n.eq_ignore_ascii_case(name))
    }
}
