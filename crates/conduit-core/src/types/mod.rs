//! Entity model shared by the connectivity, traversal, and proximity engines.

pub mod collections;
pub mod device;
pub mod element;
pub mod geometry;
pub mod identifiers;
pub mod network;

pub use device::{Device, Orientation};
pub use element::{Connector, ConnectorRef, ElementCategory, ElementKind, ParameterValue, PhysicalElement};
pub use geometry::{Level, Point3};
pub use identifiers::{ElementId, NetworkId};
pub use network::{Network, NetworkClassification, NetworkDomain};
