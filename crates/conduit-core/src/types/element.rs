//! Physical elements and their connectors.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::collections::FxHashMap;
use super::geometry::{Level, Point3};
use super::identifiers::ElementId;

/// Category payload of a physical element. Immutable once assigned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "snake_case")]
pub enum ElementKind {
    Pipe {
        #[serde(default)]
        length: f64,
        #[serde(default)]
        nominal_diameter: f64,
    },
    Fitting {
        #[serde(default)]
        part_type: Option<String>,
    },
    TerminalDevice {
        location: Point3,
    },
    Unknown,
}

impl ElementKind {
    pub fn category(&self) -> ElementCategory {
        match self {
            Self::Pipe { .. } => ElementCategory::Pipe,
            Self::Fitting { .. } => ElementCategory::Fitting,
            Self::TerminalDevice { .. } => ElementCategory::TerminalDevice,
            Self::Unknown => ElementCategory::Unknown,
        }
    }
}

/// Payload-free category tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementCategory {
    Pipe,
    Fitting,
    TerminalDevice,
    Unknown,
}

impl ElementCategory {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Pipe => "Pipe",
            Self::Fitting => "Fitting",
            Self::TerminalDevice => "Terminal Device",
            Self::Unknown => "Element",
        }
    }
}

/// Reference to a specific connector on a specific element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConnectorRef {
    pub element: ElementId,
    pub connector: u32,
}

impl ConnectorRef {
    pub const fn new(element: ElementId, connector: u32) -> Self {
        Self { element, connector }
    }
}

/// A joinable point on an element. Joins at most one peer connector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Connector {
    pub owner: ElementId,
    pub index: u32,
    #[serde(default)]
    pub connected_to: Option<ConnectorRef>,
}

impl Connector {
    /// This connector's own reference.
    pub fn reference(&self) -> ConnectorRef {
        ConnectorRef::new(self.owner, self.index)
    }

    pub fn is_connected(&self) -> bool {
        self.connected_to.is_some()
    }
}

/// A host parameter value. Text values may carry trailing units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParameterValue {
    Flag(bool),
    Number(f64),
    Text(String),
}

impl ParameterValue {
    /// Numeric reading of the value. Text is parsed from its leading number,
    /// so `"5.6 K"` reads as `5.6`.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) if n.is_finite() => Some(*n),
            Self::Number(_) | Self::Flag(_) => None,
            Self::Text(text) => leading_number(text),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text.as_str()),
            _ => None,
        }
    }
}

fn leading_number(text: &str) -> Option<f64> {
    let trimmed = text.trim_start();
    let end = trimmed
        .char_indices()
        .find(|&(i, c)| !(c.is_ascii_digit() || c == '.' || (i == 0 && (c == '-' || c == '+'))))
        .map(|(i, _)| i)
        .unwrap_or(trimmed.len());
    trimmed[..end].parse::<f64>().ok().filter(|n| n.is_finite())
}

/// One physical item in a network: pipe segment, fitting, or terminal device.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "ElementRecord")]
pub struct PhysicalElement {
    pub id: ElementId,
    pub name: String,
    pub kind: ElementKind,
    pub connectors: SmallVec<[Connector; 4]>,
    pub level: Option<Level>,
    pub parameters: FxHashMap<String, ParameterValue>,
}

impl PhysicalElement {
    pub fn new(id: impl Into<ElementId>, name: impl Into<String>, kind: ElementKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            connectors: SmallVec::new(),
            level: None,
            parameters: FxHashMap::default(),
        }
    }

    /// Append a connector; its index is its position on the element.
    pub fn with_connector(mut self, connected_to: Option<ConnectorRef>) -> Self {
        let index = self.connectors.len() as u32;
        self.connectors.push(Connector {
            owner: self.id,
            index,
            connected_to,
        });
        self
    }

    pub fn with_level(mut self, level: Level) -> Self {
        self.level = Some(level);
        self
    }

    pub fn with_parameter(mut self, name: impl Into<String>, value: ParameterValue) -> Self {
        self.parameters.insert(name.into(), value);
        self
    }

    pub fn category(&self) -> ElementCategory {
        self.kind.category()
    }

    pub fn connector(&self, index: u32) -> Option<&Connector> {
        self.connectors.iter().find(|c| c.index == index)
    }

    /// Pipe length, or `None` for non-pipe elements.
    pub fn pipe_length(&self) -> Option<f64> {
        match self.kind {
            ElementKind::Pipe { length, .. } => Some(length),
            _ => None,
        }
    }

    /// Point location, available for terminal devices only.
    pub fn location(&self) -> Option<Point3> {
        match self.kind {
            ElementKind::TerminalDevice { location } => Some(location),
            _ => None,
        }
    }

    pub fn parameter(&self, name: &str) -> Option<&ParameterValue> {
        self.parameters.get(name)
    }

    /// First numeric parameter found among `keys`, in priority order.
    pub fn first_number<S: AsRef<str>>(&self, keys: &[S]) -> Option<f64> {
        keys.iter()
            .filter_map(|key| self.parameters.get(key.as_ref()))
            .find_map(ParameterValue::as_number)
    }

    /// Human-readable label for tree nodes.
    pub fn label(&self) -> String {
        let name = self.name.trim();
        let base = if name.is_empty() {
            format!("{} {}", self.category().name(), self.id)
        } else {
            format!("{name} [{}]", self.id)
        };
        match &self.kind {
            ElementKind::Pipe {
                length,
                nominal_diameter,
            } if *nominal_diameter > 0.0 => {
                format!("{base} Ø{nominal_diameter} L={length:.2}")
            }
            ElementKind::Fitting {
                part_type: Some(part),
            } => format!("{base} ({part})"),
            _ => base,
        }
    }
}

#[derive(Deserialize)]
struct ConnectorRecord {
    index: u32,
    #[serde(default)]
    connected_to: Option<ConnectorRef>,
}

#[derive(Deserialize)]
struct ElementRecord {
    id: ElementId,
    #[serde(default)]
    name: String,
    kind: ElementKind,
    #[serde(default)]
    connectors: Vec<ConnectorRecord>,
    #[serde(default)]
    level: Option<Level>,
    #[serde(default)]
    parameters: FxHashMap<String, ParameterValue>,
}

impl From<ElementRecord> for PhysicalElement {
    fn from(record: ElementRecord) -> Self {
        let owner = record.id;
        Self {
            id: owner,
            name: record.name,
            kind: record.kind,
            connectors: record
                .connectors
                .into_iter()
                .map(|c| Connector {
                    owner,
                    index: c.index,
                    connected_to: c.connected_to,
                })
                .collect(),
            level: record.level,
            parameters: record.parameters,
        }
    }
}
