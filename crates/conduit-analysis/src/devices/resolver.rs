//! Builds [`Device`]s from terminal elements using parameter lookup chains.

use conduit_core::config::ParameterConfig;
use conduit_core::constants::UNKNOWN_LEVEL;
use conduit_core::types::{Device, ElementKind, Level, PhysicalElement};

use super::orientation::infer_orientation;

/// Resolves sprinkler attributes with ordered fallback keys.
///
/// Each attribute tries its keys in priority order; the first usable value
/// wins, otherwise the documented default (0) applies.
#[derive(Debug, Clone)]
pub struct DeviceResolver {
    k_factor_keys: Vec<String>,
    coverage_keys: Vec<String>,
    orientation_keys: Vec<String>,
}

impl DeviceResolver {
    pub fn new(config: &ParameterConfig) -> Self {
        Self {
            k_factor_keys: config.effective_k_factor_keys(),
            coverage_keys: config.effective_coverage_keys(),
            orientation_keys: config.effective_orientation_keys(),
        }
    }

    /// Resolve one element. Only terminal devices yield a [`Device`].
    pub fn resolve(&self, element: &PhysicalElement) -> Option<Device> {
        let ElementKind::TerminalDevice { location } = element.kind else {
            return None;
        };

        let explicit_orientation = self
            .orientation_keys
            .iter()
            .filter_map(|key| element.parameter(key))
            .find_map(|value| value.as_text());

        let level = element
            .level
            .clone()
            .unwrap_or_else(|| Level::new(UNKNOWN_LEVEL, location.z));

        Some(Device {
            id: element.id,
            name: element.name.clone(),
            k_factor: element.first_number(&self.k_factor_keys).unwrap_or(0.0),
            coverage_area: element.first_number(&self.coverage_keys).unwrap_or(0.0),
            orientation: infer_orientation(explicit_orientation, &element.name),
            level,
            location,
        })
    }

    /// Resolve every terminal device in `elements`, preserving order.
    pub fn resolve_all(&self, elements: &[PhysicalElement]) -> Vec<Device> {
        elements.iter().filter_map(|e| self.resolve(e)).collect()
    }
}

impl Default for DeviceResolver {
    fn default() -> Self {
        Self::new(&ParameterConfig::default())
    }
}
