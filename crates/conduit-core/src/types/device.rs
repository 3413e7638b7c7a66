//! Sprinkler devices: terminal elements with domain attributes.

use serde::{Deserialize, Serialize};

use super::geometry::{Level, Point3};
use super::identifiers::ElementId;

/// Mounting orientation of a sprinkler head.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Orientation {
    #[default]
    Pendent,
    Upright,
    Sidewall,
    Concealed,
    Recessed,
}

impl Orientation {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Pendent => "Pendent",
            Self::Upright => "Upright",
            Self::Sidewall => "Sidewall",
            Self::Concealed => "Concealed",
            Self::Recessed => "Recessed",
        }
    }
}

/// A terminal device (sprinkler head) with a point location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Device {
    pub id: ElementId,
    pub name: String,
    /// Discharge coefficient. 0 when unavailable.
    pub k_factor: f64,
    /// Rated coverage area in square feet. 0 when unavailable.
    pub coverage_area: f64,
    pub orientation: Orientation,
    pub level: Level,
    pub location: Point3,
}

impl Device {
    /// Device with default attributes on the given level.
    pub fn at(id: impl Into<ElementId>, location: Point3, level: Level) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            k_factor: 0.0,
            coverage_area: 0.0,
            orientation: Orientation::default(),
            level,
            location,
        }
    }
}
