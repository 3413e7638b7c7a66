//! Networks: functional systems of physical elements.

use serde::{Deserialize, Serialize};

use super::identifiers::{ElementId, NetworkId};

/// Functional domain of a network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NetworkDomain {
    Piping,
    Mechanical,
    Electrical,
    #[default]
    Unknown,
}

impl NetworkDomain {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Piping => "piping",
            Self::Mechanical => "mechanical",
            Self::Electrical => "electrical",
            Self::Unknown => "unknown",
        }
    }
}

/// A maximal set of elements considered as one functional system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Network {
    pub id: NetworkId,
    pub name: String,
    #[serde(default)]
    pub domain: NetworkDomain,
    /// Membership in host order. Order drives deterministic discovery.
    #[serde(default)]
    pub elements: Vec<ElementId>,
    /// Upstream claim that the members form a single connected component.
    #[serde(default)]
    pub well_connected: bool,
    /// Designated system base element, used as traversal root when present.
    #[serde(default)]
    pub base_element: Option<ElementId>,
}

impl Network {
    pub fn new(id: impl Into<NetworkId>, name: impl Into<String>, domain: NetworkDomain) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            domain,
            elements: Vec::new(),
            well_connected: true,
            base_element: None,
        }
    }

    pub fn with_elements<I, E>(mut self, elements: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<ElementId>,
    {
        self.elements = elements.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_base(mut self, base: impl Into<ElementId>) -> Self {
        self.base_element = Some(base.into());
        self
    }

    pub fn with_well_connected(mut self, well_connected: bool) -> Self {
        self.well_connected = well_connected;
        self
    }

    pub fn element_count(&self) -> usize {
        self.elements.len()
    }
}

/// Eligibility flags supplied by the host collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkClassification {
    pub domain: NetworkDomain,
    pub well_connected: bool,
    pub name: String,
}

impl From<&Network> for NetworkClassification {
    fn from(network: &Network) -> Self {
        Self {
            domain: network.domain,
            well_connected: network.well_connected,
            name: network.name.clone(),
        }
    }
}
