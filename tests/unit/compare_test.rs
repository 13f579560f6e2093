//! Tests for output comparison

use std::fs;
use std::path::Path;

use modeltemplate::outputs::{Arrays, OutputItem};
use modeltemplate::snapshot::compare_outputs;
use modeltemplate::{HarnessError, Tolerance};
use ndarray::{ArrayD, arr1, arr2};
use tempfile::TempDir;

/// Expected and actual output trees side by side
struct Trees {
    dir: TempDir,
}

impl Trees {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("expected")).unwrap();
        fs::create_dir_all(dir.path().join("actual")).unwrap();
        Self { dir }
    }

    fn expected(&self) -> std::path::PathBuf {
        self.dir.path().join("expected")
    }

    fn actual(&self) -> std::path::PathBuf {
        self.dir.path().join("actual")
    }

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn both(&self, rel: &str, actual: &str, expected: &str) {
        Self::write(&self.actual(), rel, actual);
        Self::write(&self.expected(), rel, expected);
    }

    fn npz(root: &Path, arrays: &[(&str, ArrayD<f64>)]) {
        let item = arrays
            .iter()
            .try_fold(Arrays::new("arrays"), |acc, (k, a)| acc.with_array(*k, a.clone()))
            .unwrap();
        item.export_to(root).unwrap();
    }

    fn compare(&self) -> modeltemplate::Result<usize> {
        compare_outputs(&self.expected(), &self.actual(), Tolerance::default())
    }
}

// =============================================================================
// CSV
// =============================================================================

#[test]
fn test_csv_within_absolute_tolerance() {
    let trees = Trees::new();
    trees.both("df.csv", ",total\n0,7.000000001\n", ",total\n0,7.0\n");
    assert_eq!(trees.compare().unwrap(), 1);
}

#[test]
fn test_csv_beyond_absolute_tolerance() {
    let trees = Trees::new();
    trees.both("df.csv", ",total\n0,7.0000001\n", ",total\n0,7.0\n");
    assert!(matches!(trees.compare(), Err(HarnessError::Mismatch { .. })));
}

#[test]
fn test_csv_int_and_float_columns_differ() {
    let trees = Trees::new();
    trees.both("df.csv", ",total\n0,7.0\n", ",total\n0,7\n");
    let err = trees.compare().unwrap_err();
    assert!(matches!(err, HarnessError::Mismatch { .. }), "got {err}");
    assert!(err.to_string().contains("type differs: expected int, found float"));
}

#[test]
fn test_csv_int_columns_match() {
    let trees = Trees::new();
    trees.both("df.csv", ",total\n0,7\n1,-3\n", ",total\n0,7\n1,-3\n");
    assert_eq!(trees.compare().unwrap(), 1);
}

// =============================================================================
// JSON
// =============================================================================

#[test]
fn test_json_key_order_irrelevant() {
    let trees = Trees::new();
    trees.both("meta.json", r#"{"b": [1, 2], "a": 1}"#, r#"{"a": 1, "b": [1, 2]}"#);
    trees.compare().unwrap();
}

#[test]
fn test_json_value_mismatch() {
    let trees = Trees::new();
    trees.both("meta.json", r#"{"a": 1, "b": [2, 1]}"#, r#"{"a": 1, "b": [1, 2]}"#);
    let err = trees.compare().unwrap_err();
    assert!(err.to_string().contains("at /b/0: expected 1, found 2"));
}

// =============================================================================
// NPZ
// =============================================================================

#[test]
fn test_npz_equal_archives() {
    let trees = Trees::new();
    let arrays = [("x", arr1(&[1.0, 2.0]).into_dyn()), ("m", arr2(&[[1.0], [2.0]]).into_dyn())];
    Trees::npz(&trees.actual(), &arrays);
    Trees::npz(&trees.expected(), &arrays);
    assert_eq!(trees.compare().unwrap(), 1);
}

#[test]
fn test_npz_value_mismatch_is_not_key_mismatch() {
    let trees = Trees::new();
    Trees::npz(&trees.actual(), &[("x", arr1(&[1.0, 2.5]).into_dyn())]);
    Trees::npz(&trees.expected(), &[("x", arr1(&[1.0, 2.0]).into_dyn())]);

    let err = trees.compare().unwrap_err();
    assert!(matches!(err, HarnessError::Mismatch { .. }), "got {err}");
    assert!(err.to_string().contains("array 'x' at [1]"));
}

#[test]
fn test_npz_key_mismatch_even_when_shared_keys_equal() {
    let trees = Trees::new();
    let x = arr1(&[1.0, 2.0]).into_dyn();
    Trees::npz(&trees.actual(), &[("x", x.clone()), ("y", x.clone())]);
    Trees::npz(&trees.expected(), &[("x", x.clone()), ("z", x)]);

    match trees.compare().unwrap_err() {
        HarnessError::ArchiveKeyMismatch {
            missing, unexpected, ..
        } => {
            assert_eq!(missing, ["z"]);
            assert_eq!(unexpected, ["y"]);
        },
        other => panic!("expected key mismatch, got {other}"),
    }
}

#[test]
fn test_npz_shape_mismatch() {
    let trees = Trees::new();
    Trees::npz(&trees.actual(), &[("x", arr2(&[[1.0, 2.0]]).into_dyn())]);
    Trees::npz(&trees.expected(), &[("x", arr1(&[1.0, 2.0]).into_dyn())]);

    let err = trees.compare().unwrap_err();
    assert!(err.to_string().contains("shape differs"));
}

// =============================================================================
// WALK AND DISPATCH
// =============================================================================

#[test]
fn test_html_is_skipped() {
    let trees = Trees::new();
    Trees::write(&trees.expected(), "report.html", "<p>old</p>");
    assert_eq!(trees.compare().unwrap(), 0);
}

#[test]
fn test_unsupported_extension_fails() {
    let trees = Trees::new();
    trees.both("notes.txt", "same", "same");
    assert!(matches!(
        trees.compare(),
        Err(HarnessError::UnsupportedExtension { ref extension, .. }) if extension == ".txt"
    ));
}

#[test]
fn test_missing_output_fails() {
    let trees = Trees::new();
    Trees::write(&trees.expected(), "df.csv", "v\n1\n");
    assert!(matches!(trees.compare(), Err(HarnessError::MissingOutput(_))));
}

#[test]
fn test_nested_folders_compared() {
    let trees = Trees::new();
    trees.both("tables/monthly/df.csv", "v\n1\n", "v\n1\n");
    trees.both("meta.json", "{}", "{}");
    assert_eq!(trees.compare().unwrap(), 2);
}

#[test]
fn test_extra_actual_files_are_ignored() {
    let trees = Trees::new();
    trees.both("df.csv", "v\n1\n", "v\n1\n");
    Trees::write(&trees.actual(), "extra.csv", "v\n2\n");
    assert_eq!(trees.compare().unwrap(), 1);
}

#[test]
fn test_first_mismatch_stops_comparison() {
    let trees = Trees::new();
    trees.both("a.csv", "v\n1\n", "v\n2\n");
    trees.both("b.csv", "v\n3\n", "v\n4\n");

    let err = trees.compare().unwrap_err();
    let message = err.to_string();
    assert!(message.contains("a.csv"), "{message}");
    assert!(!message.contains("b.csv"), "{message}");
}
