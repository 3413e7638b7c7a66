//! Device resolution: terminal elements to sprinkler devices.

pub mod orientation;
pub mod resolver;

pub use orientation::infer_orientation;
pub use resolver::DeviceResolver;
