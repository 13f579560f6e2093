//! Tests for harness configuration loading

use modeltemplate::snapshot::find_cases;
use modeltemplate::{HarnessConfig, HarnessError, Tolerance};

use crate::common::TestProject;

#[test]
fn test_load_without_file_uses_defaults() {
    let project = TestProject::new();
    let config = HarnessConfig::load(project.path()).unwrap();
    assert_eq!(config, HarnessConfig::new(project.path()));
    assert_eq!(config.tolerance, Tolerance::default());
}

#[test]
fn test_load_applies_overrides() {
    let project = TestProject::new();
    project.add_file(
        "modeltemplate.toml",
        "[snapshots]\ndir = \"golden\"\nabsolute_tolerance = 1e-3\n",
    );

    let config = HarnessConfig::load(project.path()).unwrap();

    assert_eq!(config.snapshots_dir, project.path().join("golden"));
    assert!((config.tolerance.absolute - 1e-3).abs() < f64::EPSILON);
    assert!(config.tolerance.relative.abs() < f64::EPSILON);
}

#[test]
fn test_load_empty_file_uses_defaults() {
    let project = TestProject::new();
    project.add_file("modeltemplate.toml", "");

    let config = HarnessConfig::load(project.path()).unwrap();
    assert_eq!(config, HarnessConfig::new(project.path()));
}

#[test]
fn test_load_malformed_file_fails() {
    let project = TestProject::new();
    project.add_file("modeltemplate.toml", "[snapshots\nabsolute_tolerance = ");

    let err = HarnessConfig::load(project.path()).unwrap_err();
    assert!(matches!(err, HarnessError::Config { .. }));
}

#[test]
fn test_load_wrong_type_fails() {
    let project = TestProject::new();
    project.add_file("modeltemplate.toml", "[snapshots]\nabsolute_tolerance = \"tiny\"\n");

    assert!(matches!(
        HarnessConfig::load(project.path()),
        Err(HarnessError::Config { .. })
    ));
}

#[test]
fn test_with_snapshots_dir_moves_case_discovery() {
    let project = TestProject::new();
    project.add_dir("Case01");
    project.add_file("golden/Case05/Inputs/settings.json", "{}");

    let config = project.config().with_snapshots_dir(project.path().join("golden"));
    let cases = find_cases(&config).unwrap();

    assert_eq!(cases, [project.path().join("golden/Case05")]);
}
