//! Tests for the harness run modes

use std::fs;

use modeltemplate::outputs::{Arrays, Document, Report};
use modeltemplate::{
    Harness, HarnessConfig, HarnessError, Mode, OutputSet, Settings, SubtractModel, Tolerance,
};
use ndarray::arr1;
use serde_json::json;

use crate::common::{TestProject, dir_names, read_json};

fn subtract(project: &TestProject) -> SubtractModel {
    SubtractModel::new(project.path().join("Outputs"))
}

/// Model producing one item of every kind
fn rich_model(settings: &Settings) -> modeltemplate::Result<OutputSet> {
    let scale = settings.number("scale")?.as_f64().unwrap_or(1.0);

    let mut set = OutputSet::new();
    set.add_item(Document::new("summary", json!({"scale": scale, "labels": ["x", "y"]})));
    set.add_item(Arrays::new("series").with_array("x", arr1(&[scale, 2.0 * scale]).into_dyn())?);
    set.add_item(Report::new("report", "<p>generated</p>"));
    Ok(set)
}

// =============================================================================
// MODE VALIDATION
// =============================================================================

#[test]
fn test_invalid_mode_fails_before_io() {
    let project = TestProject::new();
    let config = project.config();
    let harness = Harness::new(&config, subtract(&project));

    let err = harness.run_mode("bogus").unwrap_err();

    assert!(matches!(err, HarnessError::InvalidMode { .. }));
    assert!(err.to_string().contains("Accepted values: 'compare', 'update', 'create'"));
    assert!(!project.snapshots().exists());
}

// =============================================================================
// CREATE
// =============================================================================

#[test]
fn test_create_first_case() {
    let project = TestProject::new();
    project.set_inputs(&json!({"a": 10, "b": 3, "create_output_files": true}));
    let config = project.config();

    let report = Harness::new(&config, subtract(&project)).run(Mode::Create).unwrap();

    assert_eq!(report.mode, Mode::Create);
    assert_eq!(report.cases.len(), 1);
    assert_eq!(report.cases[0].name, "Case01");

    let case_dir = project.snapshots().join("Case01");
    let settings_path = case_dir.join("Inputs/settings.json");
    assert_eq!(
        read_json(&settings_path),
        json!({"a": 10, "b": 3, "create_output_files": false})
    );
    assert!(fs::read_to_string(&settings_path).unwrap().contains("\n    \"a\": 10"));
    assert_eq!(
        fs::read_to_string(case_dir.join("ExpectedOutputs/df.csv")).unwrap(),
        ",total\n0,7\n"
    );
    // The model itself wrote nothing
    assert!(!project.path().join("Outputs").exists());
}

#[test]
fn test_create_fills_gap() {
    let project = TestProject::new();
    project.set_inputs(&json!({"a": 1, "b": 1}));
    for name in ["Case01", "Case02", "Case04"] {
        project.add_case(name, &json!({"a": 1, "b": 1}));
    }
    let config = project.config();

    let report = Harness::new(&config, subtract(&project)).run_mode("create").unwrap();

    assert_eq!(report.cases[0].name, "Case03");
    assert!(project.snapshots().join("Case03/ExpectedOutputs/df.csv").is_file());
}

#[test]
fn test_create_without_project_inputs_fails() {
    let project = TestProject::new();
    let config = project.config();

    let err = Harness::new(&config, subtract(&project)).run(Mode::Create).unwrap_err();
    assert!(matches!(err, HarnessError::Io { .. }));
    assert!(!project.snapshots().join("Case01").exists());
}

#[test]
fn test_create_with_failing_model_leaves_no_case() {
    let project = TestProject::new();
    project.set_inputs(&json!({"a": 1}));
    project.add_case("Case01", &json!({"a": 1, "b": 1}));
    let config = project.config();
    let harness = Harness::new(&config, subtract(&project));

    let err = harness.run(Mode::Create).unwrap_err();

    assert!(matches!(err, HarnessError::Settings(_)), "got {err}");
    assert_eq!(dir_names(&project.snapshots()), ["Case01"]);
    // Existing cases still run
    harness.run(Mode::Update).unwrap();
    harness.run(Mode::Compare).unwrap();
}

// =============================================================================
// UPDATE
// =============================================================================

#[test]
fn test_update_overwrites_expected_outputs() {
    let project = TestProject::new();
    let case_dir = project.add_case("Case01", &json!({"a": 5, "b": 8}));
    project.add_file("tests/snapshots/Case01/ExpectedOutputs/stale.csv", "v\n1\n");
    let config = project.config();

    let report = Harness::new(&config, subtract(&project)).run(Mode::Update).unwrap();

    assert_eq!(report.cases[0].files, 1);
    assert_eq!(dir_names(&case_dir.join("ExpectedOutputs")), ["df.csv"]);
    assert_eq!(
        fs::read_to_string(case_dir.join("ExpectedOutputs/df.csv")).unwrap(),
        ",total\n0,-3\n"
    );
}

#[test]
fn test_update_is_idempotent() {
    let project = TestProject::new();
    let case_dir = project.add_case("Case01", &json!({"scale": 0.1}));
    let config = project.config();
    let harness = Harness::new(&config, rich_model);
    let summary = case_dir.join("ExpectedOutputs/summary.json");

    harness.run(Mode::Update).unwrap();
    let first = fs::read(&summary).unwrap();

    harness.run(Mode::Update).unwrap();
    assert_eq!(fs::read(&summary).unwrap(), first);
    assert_eq!(dir_names(&case_dir.join("ExpectedOutputs")), ["series.npz", "summary.json"]);

    // Compare still passes against the rewritten archive
    harness.run(Mode::Compare).unwrap();
}

// =============================================================================
// COMPARE
// =============================================================================

#[test]
fn test_compare_passes_and_cleans_up() {
    let project = TestProject::new();
    project.add_case("Case01", &json!({"a": 10, "b": 3}));
    project.add_case("Case02", &json!({"a": 1.5, "b": 0.25}));
    let config = project.config();
    let harness = Harness::new(&config, subtract(&project));
    harness.run(Mode::Update).unwrap();

    let report = harness.run(Mode::Compare).unwrap();

    assert_eq!(report.cases.len(), 2);
    assert!(report.cases.iter().all(|c| c.files == 1));
    for case in ["Case01", "Case02"] {
        assert!(!project.snapshots().join(case).join("TempOutputs").exists());
    }
}

#[test]
fn test_compare_rich_outputs() {
    let project = TestProject::new();
    project.add_case("Case01", &json!({"scale": 3.0}));
    let config = project.config();
    let harness = Harness::new(&config, rich_model);
    harness.run(Mode::Update).unwrap();

    let report = harness.run(Mode::Compare).unwrap();
    assert_eq!(report.cases[0].files, 2);
}

#[test]
fn test_compare_mismatch_cleans_up() {
    let project = TestProject::new();
    let case_dir = project.add_case("Case01", &json!({"a": 10, "b": 3}));
    project.add_file("tests/snapshots/Case01/ExpectedOutputs/df.csv", ",total\n0,8\n");
    let config = project.config();

    let err = Harness::new(&config, subtract(&project)).run(Mode::Compare).unwrap_err();

    assert!(matches!(err, HarnessError::Mismatch { .. }));
    assert!(err.to_string().contains("expected 8, found 7"));
    assert!(!case_dir.join("TempOutputs").exists());
}

#[test]
fn test_compare_unsupported_extension_cleans_up() {
    let project = TestProject::new();
    let case_dir = project.add_case("Case01", &json!({"a": 10, "b": 3}));
    project.add_file("tests/snapshots/Case01/ExpectedOutputs/notes.txt", "hi");
    let config = project.config();

    let err = Harness::new(&config, subtract(&project)).run(Mode::Compare).unwrap_err();

    assert!(matches!(err, HarnessError::UnsupportedExtension { .. }));
    assert!(!case_dir.join("TempOutputs").exists());
}

#[test]
fn test_compare_stops_at_first_failing_case() {
    let project = TestProject::new();
    project.add_case("Case01", &json!({"a": 10, "b": 3}));
    project.add_file("tests/snapshots/Case01/ExpectedOutputs/df.csv", ",total\n0,0\n");
    project.add_case("Case02", &json!({"b": 3}));
    let config = project.config();

    let err = Harness::new(&config, subtract(&project)).run(Mode::Compare).unwrap_err();
    assert!(matches!(err, HarnessError::Mismatch { .. }), "got {err}");
}

#[test]
fn test_compare_respects_configured_tolerance() {
    let project = TestProject::new();
    project.add_case("Case01", &json!({"a": 10.5, "b": 3}));
    project.add_file("tests/snapshots/Case01/ExpectedOutputs/df.csv", ",total\n0,7.501\n");

    let strict = project.config();
    assert!(Harness::new(&strict, subtract(&project)).run(Mode::Compare).is_err());

    let loose = HarnessConfig::new(project.path()).with_tolerance(Tolerance {
        absolute: 1e-2,
        relative: 0.0,
    });
    Harness::new(&loose, subtract(&project)).run(Mode::Compare).unwrap();
}

#[test]
fn test_compare_without_cases_is_empty() {
    let project = TestProject::new();
    let config = project.config();

    let report = Harness::new(&config, subtract(&project)).run(Mode::Compare).unwrap();
    assert!(report.cases.is_empty());
}
