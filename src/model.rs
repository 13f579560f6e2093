//! The model
//!
//! [`Model`] is the seam between the harness and the computation: anything
//! that maps [`Settings`] to an [`OutputSet`] can be snapshot tested. The
//! template ships [`SubtractModel`], a placeholder to be replaced by real
//! business logic.

use std::path::PathBuf;

use crate::error::Result;
use crate::outputs::{Cell, OutputSet, Table};
use crate::settings::{CREATE_OUTPUT_FILES, Settings};

/// A computation mapping settings to output items
///
/// Implementations must not write files when `create_output_files` is
/// `false`.
pub trait Model {
    /// Run the model
    fn run(&self, settings: &Settings) -> Result<OutputSet>;
}

impl<F> Model for F
where
    F: Fn(&Settings) -> Result<OutputSet>,
{
    fn run(&self, settings: &Settings) -> Result<OutputSet> {
        self(settings)
    }
}

/// Placeholder model: `total = a - b`
///
/// Produces a single table `df` with one column `total`. When
/// `create_output_files` is set, the table is also exported into the output
/// folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubtractModel {
    output_dir: PathBuf,
}

impl SubtractModel {
    /// Model exporting into `output_dir` when asked to write files
    #[must_use]
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }
}

impl Model for SubtractModel {
    fn run(&self, settings: &Settings) -> Result<OutputSet> {
        let a = settings.number("a")?;
        let b = settings.number("b")?;

        // Integer inputs stay integers unless the difference overflows
        let total = match a.as_i64().zip(b.as_i64()).and_then(|(a, b)| a.checked_sub(b)) {
            Some(total) => Cell::Int(total),
            None => Cell::Float(a.as_f64().unwrap_or(f64::NAN) - b.as_f64().unwrap_or(f64::NAN)),
        };

        let mut output_set = OutputSet::new();
        output_set.add_item(Table::new("df", 1).with_column("total", [total])?);

        if settings.flag(CREATE_OUTPUT_FILES)? {
            let written = output_set.export_all(&self.output_dir)?;
            log::info!("exported {} file(s) to {}", written.len(), self.output_dir.display());
        }

        Ok(output_set)
    }
}
