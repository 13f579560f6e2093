//! List snapshot cases

use std::path::Path;

use modeltemplate::HarnessConfig;
use modeltemplate::output::{CaseList, OutputMode};
use modeltemplate::snapshot::find_cases;

/// List the case directories under the snapshots root
pub fn cases(root: &Path, output_mode: OutputMode) -> anyhow::Result<()> {
    let config = HarnessConfig::load(root)?;
    let cases = find_cases(&config)?
        .iter()
        .filter_map(|dir| dir.file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .collect();

    CaseList {
        snapshots_dir: config.snapshots_dir.display().to_string(),
        cases,
    }
    .render(output_mode);
    Ok(())
}
