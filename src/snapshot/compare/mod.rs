//! Comparison of produced outputs against golden files
//!
//! The expected tree drives the walk: every golden file must have a
//! counterpart at the same relative path in the produced tree. The check is
//! picked from the file extension and the first mismatch stops the walk.

mod csv;
mod json;
mod npz;

use std::path::Path;

use float_cmp::{ApproxEq, F64Margin};
use walkdir::WalkDir;

use crate::config::Tolerance;
use crate::error::{HarnessError, Result};
use crate::outputs::Extension;

/// Equality check for one kind of golden file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparator {
    /// Tables compared cell by cell, numbers within tolerance
    Csv,
    /// Deep structural equality
    Json,
    /// Never compared (html)
    Skip,
    /// Same member names, arrays compared element-wise within tolerance
    Npz,
}

impl Comparator {
    /// Pick the comparator for a golden file
    ///
    /// Unknown extensions are an error, not a skip.
    pub fn for_path(path: &Path) -> Result<Self> {
        match Extension::from_path(path) {
            Some(Extension::Csv) => Ok(Self::Csv),
            Some(Extension::Json) => Ok(Self::Json),
            Some(Extension::Html) => Ok(Self::Skip),
            Some(Extension::Npz) => Ok(Self::Npz),
            None => Err(HarnessError::UnsupportedExtension {
                extension: path
                    .extension()
                    .map(|ext| format!(".{}", ext.to_string_lossy()))
                    .unwrap_or_default(),
                path: path.to_path_buf(),
            }),
        }
    }

    /// Assert that `actual` matches `expected`
    pub fn compare(self, actual: &Path, expected: &Path, tolerance: Tolerance) -> Result<()> {
        match self {
            Self::Csv => csv::compare_csv(actual, expected, tolerance),
            Self::Json => json::compare_json(actual, expected),
            Self::Skip => Ok(()),
            Self::Npz => npz::compare_npz(actual, expected, tolerance),
        }
    }
}

/// Compare every file under `expected_root` with its counterpart under `actual_root`
///
/// Returns the number of files compared; skipped files are not counted.
pub fn compare_outputs(expected_root: &Path, actual_root: &Path, tolerance: Tolerance) -> Result<usize> {
    let mut compared = 0;

    for entry in WalkDir::new(expected_root).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let expected = entry.path();
        let relative = expected.strip_prefix(expected_root).unwrap_or(expected);
        let actual = actual_root.join(relative);

        let comparator = Comparator::for_path(expected)?;
        if comparator == Comparator::Skip {
            log::debug!("skipping {}", relative.display());
            continue;
        }
        if !actual.is_file() {
            return Err(HarnessError::MissingOutput(actual));
        }

        log::debug!("comparing {}", relative.display());
        comparator.compare(&actual, expected, tolerance)?;
        compared += 1;
    }

    Ok(compared)
}

/// Whether `actual` is within `tolerance` of `expected`
///
/// NaN only matches NaN.
#[must_use]
pub fn values_match(actual: f64, expected: f64, tolerance: Tolerance) -> bool {
    if actual.is_nan() || expected.is_nan() {
        return actual.is_nan() && expected.is_nan();
    }
    let margin = F64Margin {
        epsilon: tolerance.relative.mul_add(expected.abs(), tolerance.absolute),
        ulps: 0,
    };
    actual.approx_eq(expected, margin)
}
