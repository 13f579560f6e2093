//! Run the model on the project's working inputs

use std::path::Path;

use anyhow::Context;
use modeltemplate::output::{OperationResult, OutputMode};
use modeltemplate::{Model, Settings, SubtractModel, paths};

/// Run the model on `<root>/Inputs/settings.json`
///
/// Files are only written when the settings set `create_output_files`.
pub fn run(root: &Path, output_mode: OutputMode) -> anyhow::Result<()> {
    if output_mode == OutputMode::Human {
        println!(">> {} v.{} <<", modeltemplate::NAME, modeltemplate::VERSION);
    }

    let settings_path = paths::project_settings(root);
    let settings = Settings::read_file(&settings_path)
        .with_context(|| format!("failed to load settings from {}", settings_path.display()))?;

    let model = SubtractModel::new(paths::project_outputs(root));
    let output_set = model.run(&settings)?;

    let names: Vec<String> = output_set
        .items()
        .map(|item| format!("{}.{}", item.name(), item.extension()))
        .collect();

    OperationResult {
        success: true,
        message: format!("Model produced {} output(s): {}", names.len(), names.join(", ")),
    }
    .render(output_mode);
    Ok(())
}
