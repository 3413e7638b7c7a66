//! Network eligibility filter.

use conduit_core::config::TraversalConfig;
use conduit_core::types::{Network, NetworkClassification};

/// Outcome of the eligibility check for one network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Eligibility {
    Eligible,
    /// One element or none.
    TooFewElements,
    /// Blank or placeholder name.
    Unassigned,
    /// Host does not vouch for a single connected component.
    NotWellConnected,
}

impl Eligibility {
    pub fn is_eligible(&self) -> bool {
        matches!(self, Self::Eligible)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Eligible => "eligible",
            Self::TooFewElements => "too_few_elements",
            Self::Unassigned => "unassigned",
            Self::NotWellConnected => "not_well_connected",
        }
    }
}

/// A network is traversed only with more than one element, a real name,
/// and the host's well-connected flag.
pub fn check_eligibility(
    network: &Network,
    classification: &NetworkClassification,
    config: &TraversalConfig,
) -> Eligibility {
    if network.element_count() <= 1 {
        Eligibility::TooFewElements
    } else if config.is_unassigned_name(&classification.name) {
        Eligibility::Unassigned
    } else if !classification.well_connected {
        Eligibility::NotWellConnected
    } else {
        Eligibility::Eligible
    }
}
