//! Tabular output item, exported as csv
//!
//! The first csv column is the row index and has an empty header, so a
//! one-column table `total = [7]` is written as:
//!
//! ```text
//! ,total
//! 0,7
//! ```

use std::fmt;
use std::path::{Path, PathBuf};

use serde_json::Number;

use super::{Extension, OutputItem};
use crate::error::{HarnessError, Result};

/// A single table cell
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// Integer value
    Int(i64),
    /// Floating point value
    Float(f64),
    /// Free text
    Text(String),
    /// Missing value, written as an empty field
    Missing,
}

impl Cell {
    /// Cell holding a JSON number, integer when it fits in `i64`
    #[must_use]
    pub fn from_number(n: &Number) -> Self {
        n.as_i64()
            .map(Self::Int)
            .or_else(|| n.as_f64().map(Self::Float))
            .unwrap_or(Self::Missing)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) if v.is_nan() => Ok(()),
            Self::Float(v) => write!(f, "{v:?}"),
            Self::Text(s) => f.write_str(s),
            Self::Missing => Ok(()),
        }
    }
}

impl From<i64> for Cell {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for Cell {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for Cell {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

/// Named column of cells
#[derive(Debug, Clone, PartialEq)]
struct Column {
    name: String,
    cells: Vec<Cell>,
}

/// Table with an integer row index and named columns
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    name: String,
    index: Vec<i64>,
    columns: Vec<Column>,
}

impl Table {
    /// Create an empty table with `rows` rows indexed `0..rows`
    #[must_use]
    pub fn new(name: impl Into<String>, rows: usize) -> Self {
        Self {
            name: name.into(),
            index: (0..rows).map(|i| i64::try_from(i).unwrap_or(i64::MAX)).collect(),
            columns: Vec::new(),
        }
    }

    /// Append a column; its length must match the index
    pub fn with_column<C>(mut self, name: impl Into<String>, cells: C) -> Result<Self>
    where
        C: IntoIterator,
        C::Item: Into<Cell>,
    {
        let name = name.into();
        let cells: Vec<Cell> = cells.into_iter().map(Into::into).collect();
        if cells.len() != self.index.len() {
            return Err(HarnessError::InvalidOutput {
                name: self.name,
                message: format!(
                    "column '{name}' has {} rows, index has {}",
                    cells.len(),
                    self.index.len()
                ),
            });
        }
        if self.columns.iter().any(|c| c.name == name) {
            return Err(HarnessError::InvalidOutput {
                name: self.name,
                message: format!("duplicate column '{name}'"),
            });
        }
        self.columns.push(Column { name, cells });
        Ok(self)
    }

    /// Number of rows
    #[must_use]
    pub fn rows(&self) -> usize {
        self.index.len()
    }

    /// Column names in order
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    /// Cells of a column
    #[must_use]
    pub fn column(&self, name: &str) -> Option<&[Cell]> {
        self.columns.iter().find(|c| c.name == name).map(|c| c.cells.as_slice())
    }
}

impl OutputItem for Table {
    fn name(&self) -> &str {
        &self.name
    }

    fn extension(&self) -> Extension {
        Extension::Csv
    }

    fn export_to(&self, folder: &Path) -> Result<PathBuf> {
        let path = self.file_path(folder);
        let mut writer = csv::Writer::from_path(&path).map_err(|e| HarnessError::csv(&path, e))?;

        let header = std::iter::once("").chain(self.column_names());
        writer.write_record(header).map_err(|e| HarnessError::csv(&path, e))?;

        for (row, index) in self.index.iter().enumerate() {
            let record = std::iter::once(index.to_string())
                .chain(self.columns.iter().map(|c| c.cells[row].to_string()));
            writer.write_record(record).map_err(|e| HarnessError::csv(&path, e))?;
        }

        writer.flush().map_err(|e| HarnessError::io(&path, e))?;
        Ok(path)
    }
}
