//! Host model access, abstracted so the core runs against in-memory fixtures.

use crate::errors::SourceError;
use crate::types::{Device, Network, NetworkClassification, PhysicalElement};

/// Read access to a building model.
///
/// Implementations snapshot host state; the analysis never calls back into
/// the host after enumeration.
pub trait ModelSource {
    /// Display name of the model document.
    fn model_name(&self) -> String;

    /// All networks in the model, eligible or not.
    fn networks(&self) -> Result<Vec<Network>, SourceError>;

    /// Every member element of `network`, with resolved connectors.
    fn enumerate_elements(&self, network: &Network) -> Result<Vec<PhysicalElement>, SourceError>;

    /// Every terminal device in the model with resolved location and level.
    fn enumerate_devices(&self) -> Result<Vec<Device>, SourceError>;

    /// Eligibility flags for `network`.
    fn classify_network(&self, network: &Network) -> NetworkClassification {
        NetworkClassification::from(network)
    }
}
