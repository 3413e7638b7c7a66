//! Tests for the Conduit configuration system.

use std::sync::Mutex;

use conduit_core::config::{ConduitConfig, ConfigOverrides};
use conduit_core::errors::{ConduitErrorCode, ConfigError};

/// Serializes tests that modify environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn tempdir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

fn clear_conduit_env_vars() {
    for key in [
        "CONDUIT_SPACING_MIN_SEPARATION",
        "CONDUIT_SPACING_MAX_SEPARATION",
        "CONDUIT_SPACING_ELEVATION_TOLERANCE",
        "CONDUIT_SPACING_MAX_NEIGHBORS",
        "CONDUIT_TRAVERSAL_PARALLEL",
    ] {
        std::env::remove_var(key);
    }
}

#[test]
fn test_defaults_without_files() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_conduit_env_vars();

    let dir = tempdir();
    let config = ConduitConfig::load(dir.path(), None).unwrap();

    assert_eq!(config.spacing.effective_min_separation(), 6.0);
    assert_eq!(config.spacing.effective_max_separation(), 15.0);
    assert_eq!(config.spacing.effective_elevation_tolerance(), 1.5);
    assert_eq!(config.spacing.effective_max_neighbors(), 4);
    assert_eq!(config.spacing.pruning_distance(), 30.0);
    assert!(!config.traversal.effective_parallel());
    assert_eq!(config.traversal.effective_unassigned_names(), vec!["unassigned"]);
    assert_eq!(config.parameters.effective_k_factor_keys()[0], "K-Factor");
}

#[test]
fn test_layered_resolution() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_conduit_env_vars();

    let dir = tempdir();
    std::fs::write(
        dir.path().join("conduit.toml"),
        r#"
[spacing]
min_separation = 7.0
max_separation = 12.0
elevation_tolerance = 2.0

[traversal]
unassigned_names = ["unassigned", "default"]
"#,
    )
    .unwrap();

    std::env::set_var("CONDUIT_SPACING_MAX_SEPARATION", "14");
    let overrides = ConfigOverrides {
        min_separation: Some(5.0),
        parallel: Some(true),
        ..Default::default()
    };

    let config = ConduitConfig::load(dir.path(), Some(&overrides)).unwrap();

    // Override beats project file.
    assert_eq!(config.spacing.min_separation, Some(5.0));
    // Env beats project file.
    assert_eq!(config.spacing.max_separation, Some(14.0));
    // Project file beats defaults.
    assert_eq!(config.spacing.elevation_tolerance, Some(2.0));
    assert!(config.traversal.effective_parallel());
    assert!(config.traversal.is_unassigned_name("DEFAULT"));

    clear_conduit_env_vars();
}

#[test]
fn test_invalid_env_value_is_ignored() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_conduit_env_vars();

    std::env::set_var("CONDUIT_SPACING_MIN_SEPARATION", "not-a-number");
    let dir = tempdir();
    let config = ConduitConfig::load(dir.path(), None).unwrap();
    assert_eq!(config.spacing.min_separation, None);

    clear_conduit_env_vars();
}

#[test]
fn test_malformed_project_file_is_parse_error() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_conduit_env_vars();

    let dir = tempdir();
    std::fs::write(dir.path().join("conduit.toml"), "[spacing\nmin = ").unwrap();
    let err = ConduitConfig::load(dir.path(), None).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
    assert_eq!(err.error_code(), "CONFIG_ERROR");
}

#[test]
fn test_min_must_be_below_max() {
    let err = ConduitConfig::from_toml(
        r#"
[spacing]
min_separation = 15.0
max_separation = 6.0
"#,
    )
    .unwrap_err();
    match err {
        ConfigError::ValidationFailed { field, .. } => {
            assert_eq!(field, "spacing.min_separation");
        }
        other => panic!("expected validation failure, got {other:?}"),
    }
}

#[test]
fn test_zero_neighbors_rejected() {
    let err = ConduitConfig::from_toml("[spacing]\nmax_neighbors = 0\n").unwrap_err();
    assert!(matches!(err, ConfigError::ValidationFailed { ref field, .. } if field == "spacing.max_neighbors"));
}

#[test]
fn test_parameter_keys_replace_defaults() {
    let config = ConduitConfig::from_toml(
        r#"
[parameters]
k_factor_keys = ["Sprinkler K"]
"#,
    )
    .unwrap();
    assert_eq!(config.parameters.effective_k_factor_keys(), vec!["Sprinkler K"]);
    assert_eq!(config.parameters.effective_coverage_keys()[0], "Coverage Area");
}

#[test]
fn test_toml_round_trip() {
    let config = ConduitConfig::from_toml("[spacing]\nmin_separation = 6.5\n").unwrap();
    let text = config.to_toml().unwrap();
    let back = ConduitConfig::from_toml(&text).unwrap();
    assert_eq!(back.spacing.min_separation, Some(6.5));
}
