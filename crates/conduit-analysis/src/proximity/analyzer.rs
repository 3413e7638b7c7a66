//! Nearest-neighbor spacing classification.

use conduit_core::config::SpacingConfig;
use conduit_core::types::collections::FxHashSet;
use conduit_core::types::{Device, ElementId};
use smallvec::SmallVec;

use super::compliance::compliance_rate;
use super::grid::SpatialGrid;
use super::types::{SpacingReport, SpacingViolation, ViolationKind};

/// Classifies device pairs against configured min/max separation.
#[derive(Debug, Clone)]
pub struct ProximityAnalyzer {
    min_separation: f64,
    max_separation: f64,
    elevation_tolerance: f64,
    max_neighbors: usize,
    pruning_distance: f64,
}

impl ProximityAnalyzer {
    pub fn new(config: &SpacingConfig) -> Self {
        Self {
            min_separation: config.effective_min_separation(),
            max_separation: config.effective_max_separation(),
            elevation_tolerance: config.effective_elevation_tolerance(),
            max_neighbors: config.effective_max_neighbors(),
            pruning_distance: config.pruning_distance(),
        }
    }

    pub fn min_separation(&self) -> f64 {
        self.min_separation
    }

    pub fn max_separation(&self) -> f64 {
        self.max_separation
    }

    /// Run the spacing check over every device in the model.
    ///
    /// For each device, candidates are same-band devices (vertical offset
    /// below the tolerance) within the pruning distance; the nearest
    /// `max_neighbors` are classified. Each unordered pair is classified once,
    /// whichever device reaches it first.
    pub fn analyze(&self, devices: &[Device]) -> SpacingReport {
        let grid = SpatialGrid::build(devices.iter().map(|d| d.location), self.pruning_distance);
        let mut processed: FxHashSet<(ElementId, ElementId)> = FxHashSet::default();
        let mut violations = Vec::new();
        let mut pairs_checked = 0usize;

        for (idx, device) in devices.iter().enumerate() {
            let mut candidates: SmallVec<[(f64, usize); 16]> = grid
                .nearby(&device.location)
                .filter(|&other| other != idx && devices[other].id != device.id)
                .filter(|&other| {
                    device.location.vertical_offset(&devices[other].location)
                        < self.elevation_tolerance
                })
                .map(|other| {
                    (
                        device.location.horizontal_distance(&devices[other].location),
                        other,
                    )
                })
                .filter(|&(distance, _)| distance <= self.pruning_distance)
                .collect();
            candidates.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));

            for &(distance, other) in candidates.iter().take(self.max_neighbors) {
                let key = pair_key(device.id, devices[other].id);
                if !processed.insert(key) {
                    continue;
                }
                pairs_checked += 1;

                if let Some(kind) =
                    ViolationKind::classify(distance, self.min_separation, self.max_separation)
                {
                    violations.push(SpacingViolation::new(
                        key,
                        distance,
                        self.min_separation,
                        self.max_separation,
                        kind,
                        device.level.name.clone(),
                    ));
                }
            }
        }

        let compliance = compliance_rate(violations.len(), devices.len());
        tracing::debug!(
            devices = devices.len(),
            pairs = pairs_checked,
            violations = violations.len(),
            compliance,
            "spacing analysis complete"
        );

        SpacingReport {
            violations,
            compliance_rate: compliance,
            devices_checked: devices.len(),
            pairs_checked,
        }
    }
}

impl Default for ProximityAnalyzer {
    fn default() -> Self {
        Self::new(&SpacingConfig::default())
    }
}

fn pair_key(a: ElementId, b: ElementId) -> (ElementId, ElementId) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}
