//! JSON document output item

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use super::{Extension, OutputItem};
use crate::error::{HarnessError, Result};

/// A JSON value exported as a pretty-printed `.json` file
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    name: String,
    value: Value,
}

impl Document {
    /// Create a document item
    #[must_use]
    pub fn new(name: impl Into<String>, value: Value) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    /// The wrapped value
    #[must_use]
    pub const fn value(&self) -> &Value {
        &self.value
    }
}

impl OutputItem for Document {
    fn name(&self) -> &str {
        &self.name
    }

    fn extension(&self) -> Extension {
        Extension::Json
    }

    fn export_to(&self, folder: &Path) -> Result<PathBuf> {
        let path = self.file_path(folder);
        let content =
            serde_json::to_string_pretty(&self.value).map_err(|e| HarnessError::json(&path, e))?;
        fs::write(&path, content).map_err(|e| HarnessError::io(&path, e))?;
        Ok(path)
    }
}
