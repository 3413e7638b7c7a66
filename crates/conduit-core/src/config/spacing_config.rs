//! Sprinkler spacing configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the proximity analyzer. Lengths are in feet.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SpacingConfig {
    /// Minimum allowed separation between heads. Default: 6.0.
    pub min_separation: Option<f64>,
    /// Maximum allowed separation between heads. Default: 15.0.
    pub max_separation: Option<f64>,
    /// Vertical band treated as "same level". Default: 1.5.
    pub elevation_tolerance: Option<f64>,
    /// Nearest neighbors classified per device. Default: 4.
    pub max_neighbors: Option<usize>,
    /// Candidate search radius as a multiple of `max_separation`. Default: 2.0.
    pub pruning_factor: Option<f64>,
}

impl SpacingConfig {
    /// Config with explicit min/max bounds and defaults elsewhere.
    pub fn with_bounds(min_separation: f64, max_separation: f64) -> Self {
        Self {
            min_separation: Some(min_separation),
            max_separation: Some(max_separation),
            ..Self::default()
        }
    }

    pub fn effective_min_separation(&self) -> f64 {
        self.min_separation.unwrap_or(6.0)
    }

    pub fn effective_max_separation(&self) -> f64 {
        self.max_separation.unwrap_or(15.0)
    }

    pub fn effective_elevation_tolerance(&self) -> f64 {
        self.elevation_tolerance.unwrap_or(1.5)
    }

    pub fn effective_max_neighbors(&self) -> usize {
        self.max_neighbors.unwrap_or(4)
    }

    pub fn effective_pruning_factor(&self) -> f64 {
        self.pruning_factor.unwrap_or(2.0)
    }

    /// Search radius beyond which candidates are never considered.
    pub fn pruning_distance(&self) -> f64 {
        self.effective_pruning_factor() * self.effective_max_separation()
    }
}
