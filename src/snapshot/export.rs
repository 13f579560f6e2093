//! Output export for snapshot runs

use std::fs;
use std::path::Path;

use crate::error::{HarnessError, Result};
use crate::outputs::{Extension, OutputSet};

/// Export model outputs into `outputs_dir`
///
/// The folder is cleared first so no stale file can leak into a comparison.
/// HTML items are skipped: they embed metadata that changes on every run.
/// Returns the number of files written.
pub fn export_outputs(outputs_dir: &Path, output_set: &OutputSet) -> Result<usize> {
    if outputs_dir.is_dir() {
        fs::remove_dir_all(outputs_dir).map_err(|e| HarnessError::io(outputs_dir, e))?;
    }
    fs::create_dir_all(outputs_dir).map_err(|e| HarnessError::io(outputs_dir, e))?;

    let mut written = 0;
    for item in output_set.items().filter(|item| item.extension() != Extension::Html) {
        let path = item.export_to(outputs_dir)?;
        log::debug!("exported {}", path.display());
        written += 1;
    }
    Ok(written)
}
