//! Named-array archive output item, exported as `.npz`

use std::fs::File;
use std::path::{Path, PathBuf};

use ndarray::ArrayD;
use ndarray_npy::NpzWriter;

use super::{Extension, OutputItem};
use crate::error::{HarnessError, Result};

/// Ordered collection of named `f64` arrays
///
/// Members are stored the way `numpy.savez` stores them, one `<key>.npy`
/// entry per array.
#[derive(Debug, Clone, PartialEq)]
pub struct Arrays {
    name: String,
    arrays: Vec<(String, ArrayD<f64>)>,
}

impl Arrays {
    /// Create an empty archive item
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arrays: Vec::new(),
        }
    }

    /// Append a named array; keys must be unique
    pub fn with_array(mut self, key: impl Into<String>, array: ArrayD<f64>) -> Result<Self> {
        let key = key.into();
        if self.arrays.iter().any(|(k, _)| *k == key) {
            return Err(HarnessError::InvalidOutput {
                name: self.name,
                message: format!("duplicate array '{key}'"),
            });
        }
        self.arrays.push((key, array));
        Ok(self)
    }

    /// Array keys in order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.arrays.iter().map(|(k, _)| k.as_str())
    }
}

impl OutputItem for Arrays {
    fn name(&self) -> &str {
        &self.name
    }

    fn extension(&self) -> Extension {
        Extension::Npz
    }

    fn export_to(&self, folder: &Path) -> Result<PathBuf> {
        let path = self.file_path(folder);
        let file = File::create(&path).map_err(|e| HarnessError::io(&path, e))?;

        let mut npz = NpzWriter::new(file);
        for (key, array) in &self.arrays {
            npz.add_array(key.as_str(), array)
                .map_err(|e| HarnessError::archive(&path, e))?;
        }
        npz.finish().map_err(|e| HarnessError::archive(&path, e))?;
        Ok(path)
    }
}
