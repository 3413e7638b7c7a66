//! Constants shared across the Conduit workspace.

/// Exact feet-to-meters factor used for every exported distance.
pub const FEET_TO_METERS: f64 = 0.3048;

/// Parent sentinel for the root record of a flat tree.
pub const FLAT_ROOT_PARENT: &str = "#";

/// Project configuration file name.
pub const CONFIG_FILE_NAME: &str = "conduit.toml";

/// Environment variable read by `logging::init_tracing`.
pub const LOG_ENV_VAR: &str = "CONDUIT_LOG";

/// Level name assigned to devices without a host level.
pub const UNKNOWN_LEVEL: &str = "Unknown";

/// Convert a length in feet to meters.
#[inline]
pub fn feet_to_meters(feet: f64) -> f64 {
    feet * FEET_TO_METERS
}
