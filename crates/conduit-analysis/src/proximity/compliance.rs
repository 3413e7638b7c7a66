//! Aggregate compliance metric.

/// Compliance percentage, rounded to one decimal.
///
/// `(1 - min(violations, devices) / devices) * 100`, and exactly 100.0 with
/// no devices. Violating pairs are counted against devices, not distinct
/// affected devices.
pub fn compliance_rate(violations: usize, devices: usize) -> f64 {
    if devices == 0 {
        return 100.0;
    }
    let ratio = violations.min(devices) as f64 / devices as f64;
    ((1.0 - ratio) * 100.0 * 10.0).round() / 10.0
}
