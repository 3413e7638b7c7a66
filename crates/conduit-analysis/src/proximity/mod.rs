//! Proximity Analyzer: sprinkler spacing checks per elevation band.

pub mod analyzer;
pub mod compliance;
pub mod grid;
pub mod types;

pub use analyzer::ProximityAnalyzer;
pub use compliance::compliance_rate;
pub use types::{SpacingReport, SpacingViolation, ViolationKind};
