use conduit_analysis::proximity::{ProximityAnalyzer, ViolationKind};
use conduit_core::config::SpacingConfig;
use conduit_core::constants::feet_to_meters;
use conduit_core::types::{Device, ElementId, Level, Point3};
use conduit_core::types::collections::FxHashSet;
use proptest::prelude::*;

fn devices() -> impl Strategy<Value = Vec<Device>> {
    prop::collection::vec((0.0f64..80.0, 0.0f64..80.0, prop::bool::ANY), 0..60).prop_map(|points| {
        points
            .into_iter()
            .enumerate()
            .map(|(i, (x, y, upper))| {
                let z = if upper { 10.0 } else { 0.0 };
                Device::at(i as i64 + 1, Point3::new(x, y, z), Level::new("L", z))
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn violations_are_unique_ordered_pairs(devices in devices()) {
        let report = ProximityAnalyzer::default().analyze(&devices);
        let mut seen = FxHashSet::default();
        for v in &report.violations {
            prop_assert!(v.device_a < v.device_b);
            prop_assert!(seen.insert((v.device_a, v.device_b)));
        }
    }

    #[test]
    fn violations_respect_bounds(devices in devices()) {
        let config = SpacingConfig::default();
        let min = config.effective_min_separation();
        let max = config.effective_max_separation();
        let report = ProximityAnalyzer::new(&config).analyze(&devices);

        let location = |id: ElementId| devices[(id.0 - 1) as usize].location;
        for v in &report.violations {
            let (a, b) = (location(v.device_a), location(v.device_b));
            let distance = a.horizontal_distance(&b);
            prop_assert!((v.actual_spacing_feet - distance).abs() < 1e-9);
            prop_assert!((v.actual_spacing_meters - feet_to_meters(v.actual_spacing_feet)).abs() < 1e-9);
            prop_assert!(distance <= config.pruning_distance());
            prop_assert!(a.vertical_offset(&b) < config.effective_elevation_tolerance());
            match v.violation_type {
                ViolationKind::TooClose => prop_assert!(distance < min),
                ViolationKind::TooFar => prop_assert!(distance > max),
            }
        }
    }

    #[test]
    fn compliance_stays_in_range(devices in devices()) {
        let report = ProximityAnalyzer::default().analyze(&devices);
        prop_assert!((0.0..=100.0).contains(&report.compliance_rate));
        prop_assert_eq!(report.devices_checked, devices.len());
    }
}
