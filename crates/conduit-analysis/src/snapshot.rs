//! In-memory model snapshot implementing [`ModelSource`].
//!
//! Lets the whole analysis run against JSON fixtures with no host present.

use std::path::Path;

use conduit_core::config::ParameterConfig;
use conduit_core::errors::SourceError;
use conduit_core::traits::ModelSource;
use conduit_core::types::collections::FxHashMap;
use conduit_core::types::{Device, ElementId, Network, PhysicalElement};
use serde::{Deserialize, Serialize};

use crate::devices::DeviceResolver;

/// A frozen copy of a building model's networks and elements.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "SnapshotRecord")]
pub struct ModelSnapshot {
    pub model_name: String,
    pub elements: Vec<PhysicalElement>,
    pub networks: Vec<Network>,
    #[serde(skip)]
    index: FxHashMap<ElementId, usize>,
    #[serde(skip)]
    resolver: DeviceResolver,
}

#[derive(Deserialize)]
struct SnapshotRecord {
    #[serde(default)]
    model_name: String,
    #[serde(default)]
    elements: Vec<PhysicalElement>,
    #[serde(default)]
    networks: Vec<Network>,
}

impl From<SnapshotRecord> for ModelSnapshot {
    fn from(record: SnapshotRecord) -> Self {
        Self::new(record.model_name, record.elements, record.networks)
    }
}

impl ModelSnapshot {
    pub fn new(
        model_name: impl Into<String>,
        elements: Vec<PhysicalElement>,
        networks: Vec<Network>,
    ) -> Self {
        let mut index = FxHashMap::with_capacity_and_hasher(elements.len(), Default::default());
        for (pos, element) in elements.iter().enumerate() {
            index.entry(element.id).or_insert(pos);
        }
        Self {
            model_name: model_name.into(),
            elements,
            networks,
            index,
            resolver: DeviceResolver::default(),
        }
    }

    /// Use custom parameter lookup chains for device attributes.
    pub fn with_parameters(mut self, config: &ParameterConfig) -> Self {
        self.resolver = DeviceResolver::new(config);
        self
    }

    pub fn from_json(json: &str) -> Result<Self, SourceError> {
        serde_json::from_str(json).map_err(|e| SourceError::Malformed(e.to_string()))
    }

    pub fn load(path: &Path) -> Result<Self, SourceError> {
        let content = std::fs::read_to_string(path).map_err(|e| SourceError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_json(&content)
    }

    pub fn element(&self, id: ElementId) -> Option<&PhysicalElement> {
        self.index.get(&id).map(|&pos| &self.elements[pos])
    }
}

impl ModelSource for ModelSnapshot {
    fn model_name(&self) -> String {
        self.model_name.clone()
    }

    fn networks(&self) -> Result<Vec<Network>, SourceError> {
        Ok(self.networks.clone())
    }

    fn enumerate_elements(&self, network: &Network) -> Result<Vec<PhysicalElement>, SourceError> {
        network
            .elements
            .iter()
            .map(|&id| {
                self.element(id)
                    .cloned()
                    .ok_or(SourceError::ElementNotFound {
                        network: network.id.0,
                        element: id.value(),
                    })
            })
            .collect()
    }

    fn enumerate_devices(&self) -> Result<Vec<Device>, SourceError> {
        Ok(self.resolver.resolve_all(&self.elements))
    }
}
