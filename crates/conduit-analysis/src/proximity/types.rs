//! Spacing analysis types.

use conduit_core::constants::feet_to_meters;
use conduit_core::types::ElementId;
use serde::{Deserialize, Serialize};

/// Which bound a pair violates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ViolationKind {
    TooClose,
    TooFar,
}

impl ViolationKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::TooClose => "too_close",
            Self::TooFar => "too_far",
        }
    }

    /// Classify a horizontal distance against `[min, max]`.
    pub fn classify(distance: f64, min: f64, max: f64) -> Option<Self> {
        if distance < min {
            Some(Self::TooClose)
        } else if distance > max {
            Some(Self::TooFar)
        } else {
            None
        }
    }
}

/// A device pair whose horizontal separation is out of bounds.
///
/// `device_a < device_b` always; each unordered pair appears at most once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SpacingViolation {
    #[serde(rename = "Sprinkler1Id")]
    pub device_a: ElementId,
    #[serde(rename = "Sprinkler2Id")]
    pub device_b: ElementId,
    pub level: String,
    pub actual_spacing_feet: f64,
    pub actual_spacing_meters: f64,
    pub required_min_feet: f64,
    pub required_max_feet: f64,
    pub violation_type: ViolationKind,
}

impl SpacingViolation {
    pub fn new(
        pair: (ElementId, ElementId),
        distance_feet: f64,
        min: f64,
        max: f64,
        kind: ViolationKind,
        level: impl Into<String>,
    ) -> Self {
        let (device_a, device_b) = if pair.0 <= pair.1 { pair } else { (pair.1, pair.0) };
        Self {
            device_a,
            device_b,
            level: level.into(),
            actual_spacing_feet: distance_feet,
            actual_spacing_meters: feet_to_meters(distance_feet),
            required_min_feet: min,
            required_max_feet: max,
            violation_type: kind,
        }
    }

    pub fn involves(&self, device: ElementId) -> bool {
        self.device_a == device || self.device_b == device
    }
}

/// Output of one proximity run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpacingReport {
    /// Violations in scan order.
    pub violations: Vec<SpacingViolation>,
    /// Percentage in `[0, 100]`, one decimal.
    pub compliance_rate: f64,
    pub devices_checked: usize,
    /// Distinct pairs classified.
    pub pairs_checked: usize,
}

impl SpacingReport {
    pub fn count_of(&self, kind: ViolationKind) -> usize {
        self.violations
            .iter()
            .filter(|v| v.violation_type == kind)
            .count()
    }
}
