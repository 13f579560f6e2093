//! Harness configuration
//!
//! A `HarnessConfig` is built once per invocation and handed to the harness by
//! reference. Defaults come from [`crate::paths`]; a project may override the
//! snapshots location and the comparison tolerances in `modeltemplate.toml`:
//!
//! ```toml
//! [snapshots]
//! dir = "tests/snapshots"
//! absolute_tolerance = 1e-8
//! relative_tolerance = 0.0
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{HarnessError, Result};
use crate::paths;

/// Default absolute tolerance for numeric comparisons
pub const ABSOLUTE_TOLERANCE: f64 = 1e-8;

/// Default relative tolerance for numeric comparisons
pub const RELATIVE_TOLERANCE: f64 = 0.0;

/// Numeric comparison tolerance
///
/// Two values match when `|actual - expected| <= absolute + relative * |expected|`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tolerance {
    /// Absolute tolerance
    pub absolute: f64,
    /// Relative tolerance, scaled by the expected value
    pub relative: f64,
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            absolute: ABSOLUTE_TOLERANCE,
            relative: RELATIVE_TOLERANCE,
        }
    }
}

/// Immutable configuration of the snapshot harness
#[derive(Debug, Clone, PartialEq)]
pub struct HarnessConfig {
    /// Project root; `create` reads its settings from here
    pub project_root: PathBuf,
    /// Directory scanned for cases
    pub snapshots_dir: PathBuf,
    /// Name prefix identifying case directories
    pub case_prefix: String,
    /// Inputs folder name
    pub inputs_folder: String,
    /// Golden outputs folder name
    pub expected_outputs_folder: String,
    /// Temporary outputs folder name
    pub temp_outputs_folder: String,
    /// Settings filename
    pub settings_filename: String,
    /// Numeric comparison tolerance
    pub tolerance: Tolerance,
}

/// On-disk shape of `modeltemplate.toml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    snapshots: SnapshotsSection,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct SnapshotsSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    dir: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    absolute_tolerance: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    relative_tolerance: Option<f64>,
}

impl HarnessConfig {
    /// Default configuration rooted at `project_root`
    #[must_use]
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        let project_root = project_root.into();
        Self {
            snapshots_dir: project_root.join(paths::SNAPSHOTS_DIR),
            project_root,
            case_prefix: paths::CASE_PREFIX.to_string(),
            inputs_folder: paths::INPUTS_FOLDER.to_string(),
            expected_outputs_folder: paths::EXPECTED_OUTPUTS_FOLDER.to_string(),
            temp_outputs_folder: paths::TEMP_OUTPUTS_FOLDER.to_string(),
            settings_filename: paths::SETTINGS_FILENAME.to_string(),
            tolerance: Tolerance::default(),
        }
    }

    /// Load configuration for `project_root`, applying `modeltemplate.toml` if present
    pub fn load(project_root: impl Into<PathBuf>) -> Result<Self> {
        let mut config = Self::new(project_root);
        let path = paths::config_file(&config.project_root);
        if !path.exists() {
            return Ok(config);
        }

        let content = fs::read_to_string(&path).map_err(|e| HarnessError::io(&path, e))?;
        let file: ConfigFile = toml::from_str(&content).map_err(|e| HarnessError::Config {
            path: path.clone(),
            message: e.to_string(),
        })?;

        if let Some(dir) = file.snapshots.dir {
            config.snapshots_dir = config.project_root.join(dir);
        }
        if let Some(absolute) = file.snapshots.absolute_tolerance {
            config.tolerance.absolute = absolute;
        }
        if let Some(relative) = file.snapshots.relative_tolerance {
            config.tolerance.relative = relative;
        }
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Override the snapshots directory
    #[must_use]
    pub fn with_snapshots_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.snapshots_dir = dir.into();
        self
    }

    /// Override the comparison tolerance
    #[must_use]
    pub const fn with_tolerance(mut self, tolerance: Tolerance) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Settings file under `base_dir` (project root or case directory)
    #[must_use]
    pub fn settings_path(&self, base_dir: &Path) -> PathBuf {
        self.inputs_dir(base_dir).join(&self.settings_filename)
    }

    /// Inputs folder under `base_dir`
    #[must_use]
    pub fn inputs_dir(&self, base_dir: &Path) -> PathBuf {
        base_dir.join(&self.inputs_folder)
    }

    /// Golden outputs folder of a case
    #[must_use]
    pub fn expected_outputs_dir(&self, case_dir: &Path) -> PathBuf {
        case_dir.join(&self.expected_outputs_folder)
    }

    /// Temporary outputs folder of a case
    #[must_use]
    pub fn temp_outputs_dir(&self, case_dir: &Path) -> PathBuf {
        case_dir.join(&self.temp_outputs_folder)
    }
}
