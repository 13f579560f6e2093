//! Case discovery and allocation
//!
//! Case directories are named `<prefix><NN>` with a zero-padded number. New
//! cases fill the smallest gap in the existing numbering before extending it.

use std::fs;
use std::path::PathBuf;

use crate::config::HarnessConfig;
use crate::error::{HarnessError, Result};

/// Find all case directories under the snapshots root
///
/// Only immediate subdirectories whose name starts with the case prefix are
/// returned, sorted by name. A missing snapshots root yields no cases.
pub fn find_cases(config: &HarnessConfig) -> Result<Vec<PathBuf>> {
    let root = &config.snapshots_dir;
    if !root.is_dir() {
        return Ok(Vec::new());
    }

    let mut cases = Vec::new();
    for entry in fs::read_dir(root).map_err(|e| HarnessError::io(root, e))? {
        let entry = entry.map_err(|e| HarnessError::io(root, e))?;
        let path = entry.path();
        let is_case = entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.starts_with(&config.case_prefix));
        if is_case && path.is_dir() {
            cases.push(path);
        }
    }

    cases.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(cases)
}

/// Parse the number of a case directory name
pub fn case_number(prefix: &str, name: &str) -> Result<u32> {
    name.strip_prefix(prefix)
        .and_then(|suffix| suffix.parse().ok())
        .ok_or_else(|| HarnessError::InvalidCaseName(name.to_string()))
}

/// Directory name of case `number`, e.g. `Case07`
#[must_use]
pub fn case_dir_name(prefix: &str, number: u32) -> String {
    format!("{prefix}{number:02}")
}

/// Next case number: the smallest unused number below the current maximum,
/// otherwise the maximum plus one
///
/// With no existing cases, numbering starts at 1.
#[must_use]
pub fn next_case_number(numbers: &[u32]) -> u32 {
    let Some(&max) = numbers.iter().max() else {
        return 1;
    };
    (1..max).find(|n| !numbers.contains(n)).unwrap_or_else(|| max.saturating_add(1))
}

/// Allocate and create the directory of a new case
pub fn create_new_case_folder(config: &HarnessConfig) -> Result<PathBuf> {
    let numbers = find_cases(config)?
        .iter()
        .map(|dir| {
            let name = dir.file_name().and_then(|n| n.to_str()).unwrap_or_default();
            case_number(&config.case_prefix, name)
        })
        .collect::<Result<Vec<_>>>()?;

    let number = next_case_number(&numbers);
    let case_dir = config.snapshots_dir.join(case_dir_name(&config.case_prefix, number));
    fs::create_dir_all(&case_dir).map_err(|e| HarnessError::io(&case_dir, e))?;

    log::info!("allocated case {}", case_dir.display());
    Ok(case_dir)
}
