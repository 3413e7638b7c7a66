//! ModelSnapshot tests: JSON fixtures, file loading, device resolution.

use std::io::Write;

use conduit_analysis::report::ReportAssembler;
use conduit_analysis::snapshot::ModelSnapshot;
use conduit_core::config::ParameterConfig;
use conduit_core::errors::SourceError;
use conduit_core::traits::ModelSource;
use conduit_core::types::{ElementId, NetworkDomain, NetworkId, Orientation};

const FIXTURE: &str = r#"{
  "model_name": "Warehouse",
  "elements": [
    {
      "id": 1,
      "name": "Main",
      "kind": { "category": "pipe", "length": 12.5, "nominal_diameter": 2.0 },
      "connectors": [ { "index": 0, "connected_to": { "element": 2, "connector": 0 } } ]
    },
    {
      "id": 2,
      "name": "Elbow",
      "kind": { "category": "fitting", "part_type": "Elbow" },
      "connectors": [
        { "index": 0, "connected_to": { "element": 1, "connector": 0 } },
        { "index": 1, "connected_to": { "element": 3, "connector": 0 } }
      ]
    },
    {
      "id": 3,
      "name": "Upright Head",
      "kind": { "category": "terminal_device", "location": { "x": 0.0, "y": 0.0, "z": 12.0 } },
      "connectors": [ { "index": 0, "connected_to": { "element": 2, "connector": 1 } } ],
      "level": { "name": "Mezzanine", "elevation": 12.0 },
      "parameters": { "K-Factor": "5.6 K", "Max Coverage Area": 130.0 }
    },
    {
      "id": 4,
      "name": "Sprinkler",
      "kind": { "category": "terminal_device", "location": { "x": 8.0, "y": 0.0, "z": 12.0 } },
      "parameters": { "K Factor": 8.0, "Orientation": "Sidewall", "Custom K": 11.2 }
    }
  ],
  "networks": [
    { "id": 7, "name": "Wet Riser", "domain": "piping", "elements": [1, 2, 3], "well_connected": true }
  ]
}"#;

#[test]
fn parses_fixture() {
    let snapshot = ModelSnapshot::from_json(FIXTURE).unwrap();

    assert_eq!(snapshot.model_name(), "Warehouse");
    assert_eq!(snapshot.elements.len(), 4);
    let networks = snapshot.networks().unwrap();
    assert_eq!(networks.len(), 1);
    assert_eq!(networks[0].id, NetworkId(7));
    assert_eq!(networks[0].domain, NetworkDomain::Piping);

    let elbow = snapshot.element(ElementId(2)).unwrap();
    assert_eq!(elbow.connectors.len(), 2);
    assert_eq!(elbow.connectors[1].owner, ElementId(2));
    assert!(snapshot.element(ElementId(99)).is_none());
}

#[test]
fn enumerates_members_in_network_order() {
    let snapshot = ModelSnapshot::from_json(FIXTURE).unwrap();
    let network = &snapshot.networks[0];
    let ids: Vec<i64> = snapshot
        .enumerate_elements(network)
        .unwrap()
        .iter()
        .map(|e| e.id.value())
        .collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn missing_member_is_reported() {
    let mut snapshot = ModelSnapshot::from_json(FIXTURE).unwrap();
    snapshot.networks[0].elements.push(ElementId(42));
    let network = snapshot.networks[0].clone();

    let err = snapshot.enumerate_elements(&network).unwrap_err();
    assert!(matches!(
        err,
        SourceError::ElementNotFound { network: 7, element: 42 }
    ));
}

#[test]
fn malformed_json_is_rejected() {
    let err = ModelSnapshot::from_json("{ \"elements\": 3 }").unwrap_err();
    assert!(matches!(err, SourceError::Malformed(_)));
}

#[test]
fn loads_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(FIXTURE.as_bytes()).unwrap();

    let snapshot = ModelSnapshot::load(file.path()).unwrap();
    assert_eq!(snapshot.model_name, "Warehouse");
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = ModelSnapshot::load(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, SourceError::Io { .. }));
}

// ═══════════════════════════════════════════════════════════════════════════
// Device resolution
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn resolves_devices_with_fallbacks() {
    let snapshot = ModelSnapshot::from_json(FIXTURE).unwrap();
    let devices = snapshot.enumerate_devices().unwrap();
    assert_eq!(devices.len(), 2);

    let upright = &devices[0];
    assert_eq!(upright.id, ElementId(3));
    assert_eq!(upright.k_factor, 5.6);
    assert_eq!(upright.coverage_area, 130.0);
    assert_eq!(upright.orientation, Orientation::Upright);
    assert_eq!(upright.level.name, "Mezzanine");

    let sidewall = &devices[1];
    assert_eq!(sidewall.k_factor, 8.0);
    assert_eq!(sidewall.coverage_area, 0.0);
    assert_eq!(sidewall.orientation, Orientation::Sidewall);
    assert_eq!(sidewall.level.name, "Unknown");
    assert_eq!(sidewall.level.elevation, 12.0);
}

#[test]
fn custom_parameter_keys() {
    let config = ParameterConfig {
        k_factor_keys: vec!["Custom K".into()],
        ..ParameterConfig::default()
    };
    let snapshot = ModelSnapshot::from_json(FIXTURE).unwrap().with_parameters(&config);
    let devices = snapshot.enumerate_devices().unwrap();

    assert_eq!(devices[0].k_factor, 0.0);
    assert_eq!(devices[1].k_factor, 11.2);
}

#[test]
fn fixture_runs_end_to_end() {
    let snapshot = ModelSnapshot::from_json(FIXTURE).unwrap();
    let result = ReportAssembler::default().assemble(&snapshot).unwrap();

    assert!(result.is_clean());
    let report = result.data;
    assert_eq!(report.total_systems, 1);
    assert_eq!(report.total_sprinklers, 2);
    assert!(report.spacing_violations.is_empty());

    let system = &report.systems[0];
    assert_eq!(system.root_element_id, Some(ElementId(2)));
    assert_eq!(system.total_pipe_length, 12.5);
    assert_eq!(system.tree.as_ref().unwrap().children.len(), 2);
}
