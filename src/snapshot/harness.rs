//! Run orchestration for the three harness modes

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use super::cases::{create_new_case_folder, find_cases};
use super::compare::compare_outputs;
use super::export::export_outputs;
use super::mode::Mode;
use crate::config::HarnessConfig;
use crate::error::Result;
use crate::model::Model;
use crate::settings::Settings;

/// Outcome of one harness run
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    /// Mode that was run
    pub mode: Mode,
    /// Cases processed, in order
    pub cases: Vec<CaseReport>,
    /// When the run finished (RFC3339)
    pub finished_at: String,
}

/// Outcome for a single case
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaseReport {
    /// Case directory name
    pub name: String,
    /// Files compared (compare) or written (update, create)
    pub files: usize,
}

impl CaseReport {
    fn new(case_dir: &Path, files: usize) -> Self {
        Self {
            name: case_dir
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
            files,
        }
    }
}

/// Temporary outputs folder, removed when dropped
#[derive(Debug)]
struct TempOutputs {
    path: PathBuf,
}

impl Drop for TempOutputs {
    fn drop(&mut self) {
        if self.path.exists()
            && let Err(err) = fs::remove_dir_all(&self.path)
        {
            log::warn!("failed to remove {}: {err}", self.path.display());
        }
    }
}

/// Snapshot harness bound to a configuration and a model
#[derive(Debug)]
pub struct Harness<'a, M> {
    config: &'a HarnessConfig,
    model: M,
}

impl<'a, M: Model> Harness<'a, M> {
    /// Create a harness
    pub const fn new(config: &'a HarnessConfig, model: M) -> Self {
        Self { config, model }
    }

    /// Parse `mode` and run it
    ///
    /// An invalid token fails before touching the filesystem.
    pub fn run_mode(&self, mode: &str) -> Result<RunReport> {
        let mode: Mode = mode.parse()?;
        self.run(mode)
    }

    /// Run the harness in `mode`
    ///
    /// Cases are processed one after the other; the first error stops the run.
    pub fn run(&self, mode: Mode) -> Result<RunReport> {
        let cases = match mode {
            Mode::Create => vec![self.create()?],
            Mode::Update => self.each_case(|case_dir| self.update_case(case_dir))?,
            Mode::Compare => self.each_case(|case_dir| self.compare_case(case_dir))?,
        };

        log::info!("{mode}: {} case(s) done", cases.len());
        Ok(RunReport {
            mode,
            cases,
            finished_at: chrono::Utc::now().to_rfc3339(),
        })
    }

    fn each_case<F>(&self, mut f: F) -> Result<Vec<CaseReport>>
    where
        F: FnMut(&Path) -> Result<CaseReport>,
    {
        let cases = find_cases(self.config)?;
        if cases.is_empty() {
            log::warn!("no cases found in {}", self.config.snapshots_dir.display());
        }
        cases.iter().map(|case_dir| f(case_dir)).collect()
    }

    /// Snapshot the project's current inputs as a new case
    ///
    /// The case folder is only allocated once the model has run, and is
    /// removed again if writing it fails.
    fn create(&self) -> Result<CaseReport> {
        let settings = Settings::load(&self.config.project_root, self.config)?;
        let output_set = self.model.run(&settings)?;

        let case_dir = create_new_case_folder(self.config)?;
        let written = settings
            .export(&case_dir, self.config)
            .and_then(|_| export_outputs(&self.config.expected_outputs_dir(&case_dir), &output_set));
        let written = match written {
            Ok(written) => written,
            Err(err) => {
                if let Err(cleanup) = fs::remove_dir_all(&case_dir) {
                    log::warn!("failed to remove {}: {cleanup}", case_dir.display());
                }
                return Err(err);
            },
        };

        log::info!("created {} with {written} expected output(s)", case_dir.display());
        Ok(CaseReport::new(&case_dir, written))
    }

    /// Regenerate a case's expected outputs
    fn update_case(&self, case_dir: &Path) -> Result<CaseReport> {
        let settings = Settings::load(case_dir, self.config)?;
        let output_set = self.model.run(&settings)?;
        let written = export_outputs(&self.config.expected_outputs_dir(case_dir), &output_set)?;

        log::info!("updated {} ({written} file(s))", case_dir.display());
        Ok(CaseReport::new(case_dir, written))
    }

    /// Run a case into its temporary folder and compare with the expected outputs
    fn compare_case(&self, case_dir: &Path) -> Result<CaseReport> {
        let settings = Settings::load(case_dir, self.config)?;
        let output_set = self.model.run(&settings)?;

        let temp = TempOutputs {
            path: self.config.temp_outputs_dir(case_dir),
        };
        export_outputs(&temp.path, &output_set)?;
        let compared = compare_outputs(
            &self.config.expected_outputs_dir(case_dir),
            &temp.path,
            self.config.tolerance,
        )?;

        log::info!("compared {} ({compared} file(s))", case_dir.display());
        Ok(CaseReport::new(case_dir, compared))
    }
}
