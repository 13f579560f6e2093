//! HTML report output item
//!
//! Reports embed run-specific metadata, so the harness never stores them as
//! golden files.

use std::fs;
use std::path::{Path, PathBuf};

use super::{Extension, OutputItem};
use crate::error::{HarnessError, Result};

/// An HTML page exported as an `.html` file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    name: String,
    html: String,
}

impl Report {
    /// Create a report item
    #[must_use]
    pub fn new(name: impl Into<String>, html: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            html: html.into(),
        }
    }
}

impl OutputItem for Report {
    fn name(&self) -> &str {
        &self.name
    }

    fn extension(&self) -> Extension {
        Extension::Html
    }

    fn export_to(&self, folder: &Path) -> Result<PathBuf> {
        let path = self.file_path(folder);
        fs::write(&path, &self.html).map_err(|e| HarnessError::io(&path, e))?;
        Ok(path)
    }
}
