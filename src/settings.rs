//! Model settings
//!
//! Settings are a flat JSON object read from `Inputs/settings.json`. The harness
//! always forces `create_output_files` off so the model never writes files of its
//! own during a snapshot run.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::{Map, Value};

use crate::config::HarnessConfig;
use crate::error::{HarnessError, Result};

/// Key of the flag telling the model to export its own output files
pub const CREATE_OUTPUT_FILES: &str = "create_output_files";

/// Model settings mapping
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Settings {
    values: Map<String, Value>,
}

impl Settings {
    /// Wrap an existing JSON object
    #[must_use]
    pub const fn new(values: Map<String, Value>) -> Self {
        Self { values }
    }

    /// Parse settings from a JSON value, which must be an object
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(values) => Ok(Self { values }),
            other => Err(HarnessError::Settings(format!(
                "expected a JSON object, found {}",
                json_kind(&other)
            ))),
        }
    }

    /// Read a settings file as-is
    pub fn read_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| HarnessError::io(path, e))?;
        let value: Value = serde_json::from_str(&content).map_err(|e| HarnessError::json(path, e))?;
        Self::from_value(value)
    }

    /// Load the settings under `base_dir` for a harness run
    ///
    /// `base_dir` is either the project root (create) or a case directory
    /// (update, compare). `create_output_files` is forced to `false`.
    pub fn load(base_dir: &Path, config: &HarnessConfig) -> Result<Self> {
        let path = config.settings_path(base_dir);
        let mut settings = Self::read_file(&path)?;
        settings.set(CREATE_OUTPUT_FILES, Value::Bool(false));
        log::debug!("loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Write the settings into a case's inputs folder, replacing its content
    pub fn export(&self, case_dir: &Path, config: &HarnessConfig) -> Result<PathBuf> {
        let inputs_dir = config.inputs_dir(case_dir);
        if inputs_dir.is_dir() {
            fs::remove_dir_all(&inputs_dir).map_err(|e| HarnessError::io(&inputs_dir, e))?;
        }
        fs::create_dir_all(&inputs_dir).map_err(|e| HarnessError::io(&inputs_dir, e))?;

        let path = inputs_dir.join(&config.settings_filename);
        self.write_file(&path)?;
        Ok(path)
    }

    /// Write the settings as JSON indented by four spaces
    pub fn write_file(&self, path: &Path) -> Result<()> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.values.serialize(&mut ser).map_err(|e| HarnessError::json(path, e))?;
        fs::write(path, buf).map_err(|e| HarnessError::io(path, e))
    }

    /// Get a raw value
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Set a value, replacing any previous one
    pub fn set(&mut self, key: impl Into<String>, value: Value) {
        self.values.insert(key.into(), value);
    }

    /// Get a required numeric value
    pub fn number(&self, key: &str) -> Result<&serde_json::Number> {
        match self.values.get(key) {
            Some(Value::Number(n)) => Ok(n),
            Some(other) => Err(HarnessError::Settings(format!(
                "'{key}' must be a number, found {}",
                json_kind(other)
            ))),
            None => Err(HarnessError::Settings(format!("missing key '{key}'"))),
        }
    }

    /// Get a boolean flag, `false` when absent
    pub fn flag(&self, key: &str) -> Result<bool> {
        match self.values.get(key) {
            None | Some(Value::Null) => Ok(false),
            Some(Value::Bool(b)) => Ok(*b),
            Some(other) => Err(HarnessError::Settings(format!(
                "'{key}' must be a boolean, found {}",
                json_kind(other)
            ))),
        }
    }

    /// Borrow the underlying mapping
    #[must_use]
    pub const fn as_map(&self) -> &Map<String, Value> {
        &self.values
    }
}

pub(crate) const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
