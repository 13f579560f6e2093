//! Model output items
//!
//! An [`OutputSet`] is the ordered collection of artifacts produced by one model
//! run. Each artifact implements [`OutputItem`]: it has a name, a file
//! extension, and knows how to export itself into a folder as
//! `<folder>/<name>.<extension>`.

mod arrays;
mod document;
mod report;
mod table;

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{HarnessError, Result};

pub use arrays::Arrays;
pub use document::Document;
pub use report::Report;
pub use table::{Cell, Table};

/// File type of an output item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Extension {
    /// Comma-separated table
    Csv,
    /// JSON document
    Json,
    /// HTML report; never stored as a golden file
    Html,
    /// `NumPy` archive of named arrays
    Npz,
}

impl Extension {
    /// Extension token without the leading dot
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
            Self::Html => "html",
            Self::Npz => "npz",
        }
    }

    /// Extension of a file path, if it is one of the known ones
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| ext.parse().ok())
    }
}

impl fmt::Display for Extension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Extension {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            "html" => Ok(Self::Html),
            "npz" => Ok(Self::Npz),
            _ => Err(format!("Unknown extension: {s}. Use: csv, json, html, npz")),
        }
    }
}

/// A named artifact that can export itself to a file
pub trait OutputItem: fmt::Debug {
    /// Identifier, used as the file stem
    fn name(&self) -> &str;

    /// File type written by [`OutputItem::export_to`]
    fn extension(&self) -> Extension;

    /// Write the item into `folder`, returning the file written
    fn export_to(&self, folder: &Path) -> Result<PathBuf>;

    /// Target file inside `folder`
    fn file_path(&self, folder: &Path) -> PathBuf {
        folder.join(format!("{}.{}", self.name(), self.extension()))
    }
}

/// Ordered collection of output items from one model run
#[derive(Debug, Default)]
pub struct OutputSet {
    items: Vec<Box<dyn OutputItem>>,
}

impl OutputSet {
    /// Create an empty set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an item
    pub fn add_item(&mut self, item: impl OutputItem + 'static) {
        self.items.push(Box::new(item));
    }

    /// Items in insertion order
    pub fn items(&self) -> impl Iterator<Item = &dyn OutputItem> {
        self.items.iter().map(AsRef::as_ref)
    }

    /// Number of items
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the set holds no items
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Export every item, html included, into `folder`
    ///
    /// The folder is created if needed; existing files are overwritten but
    /// not removed.
    pub fn export_all(&self, folder: &Path) -> Result<Vec<PathBuf>> {
        fs::create_dir_all(folder).map_err(|e| HarnessError::io(folder, e))?;
        self.items.iter().map(|item| item.export_to(folder)).collect()
    }
}
