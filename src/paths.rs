//! Centralized path definitions for modeltemplate
//!
//! This module provides a single source of truth for the folder and file names
//! the model and the snapshot harness agree on.
//!
//! ## Project Layout
//!
//! ```text
//! project/
//! ├── modeltemplate.toml                  # OPTIONAL: harness overrides
//! ├── Inputs/
//! │   └── settings.json                   # Working inputs (run, create)
//! ├── Outputs/                            # Written by `run` when create_output_files is on
//! └── tests/snapshots/
//!     └── Case01/
//!         ├── Inputs/settings.json        # Case inputs
//!         ├── ExpectedOutputs/**          # Golden files (.csv, .json, .npz)
//!         └── TempOutputs/**              # Ephemeral, only during compare
//! ```

use std::path::{Path, PathBuf};

// =============================================================================
// Snapshot layout
// =============================================================================

/// Snapshots root, relative to the project root
pub const SNAPSHOTS_DIR: &str = "tests/snapshots";

/// Name prefix identifying a case directory
pub const CASE_PREFIX: &str = "Case";

/// Folder holding a settings file (project or case)
pub const INPUTS_FOLDER: &str = "Inputs";

/// Folder holding a case's golden files
pub const EXPECTED_OUTPUTS_FOLDER: &str = "ExpectedOutputs";

/// Folder receiving outputs during a compare run
pub const TEMP_OUTPUTS_FOLDER: &str = "TempOutputs";

/// Settings filename inside an inputs folder
pub const SETTINGS_FILENAME: &str = "settings.json";

// =============================================================================
// Project layout
// =============================================================================

/// Folder the model writes to when `create_output_files` is on
pub const OUTPUTS_FOLDER: &str = "Outputs";

/// Optional harness configuration file at the project root
pub const CONFIG_FILENAME: &str = "modeltemplate.toml";

/// Get path to the project's working settings file.
#[must_use]
pub fn project_settings(root: &Path) -> PathBuf {
    root.join(INPUTS_FOLDER).join(SETTINGS_FILENAME)
}

/// Get path to the folder the model exports into.
#[must_use]
pub fn project_outputs(root: &Path) -> PathBuf {
    root.join(OUTPUTS_FOLDER)
}

/// Get path to the optional configuration file.
#[must_use]
pub fn config_file(root: &Path) -> PathBuf {
    root.join(CONFIG_FILENAME)
}
