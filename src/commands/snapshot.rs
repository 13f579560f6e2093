//! Snapshot test command

use std::path::Path;

use anyhow::Context;
use modeltemplate::output::OutputMode;
use modeltemplate::{Harness, HarnessConfig, Mode, SubtractModel, paths};

/// Run the snapshot harness in `mode`
pub fn snapshot(root: &Path, mode: &str, coverage: bool, output_mode: OutputMode) -> anyhow::Result<()> {
    // Validate before any filesystem access
    let mode: Mode = mode.parse()?;

    if coverage {
        if mode == Mode::Compare {
            log::info!("coverage is collected by the test runner: cargo llvm-cov --test snapshot_cases");
        } else {
            log::warn!("--coverage only applies to compare runs; ignoring it for {mode}");
        }
    }

    let config = HarnessConfig::load(root).context("failed to load harness configuration")?;
    let harness = Harness::new(&config, SubtractModel::new(paths::project_outputs(root)));

    let report = harness.run(mode).with_context(|| format!("snapshot {mode} failed"))?;
    report.render(output_mode);
    Ok(())
}
