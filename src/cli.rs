//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands;
use modeltemplate::output::OutputMode;

/// modeltemplate - model runner with snapshot tests
#[derive(Parser, Debug)]
#[command(
    name = "modeltemplate",
    version,
    about = "Model runner with snapshot tests",
    long_about = "Run the model on the project's inputs and keep its outputs under snapshot tests.\n\n\
                  Snapshot cases live in tests/snapshots/CaseNN. Each case stores the settings\n\
                  it was created from and the outputs accepted for them."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Project root (defaults to the current directory)
    #[arg(long, global = true, value_name = "DIR")]
    pub root: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the model on Inputs/settings.json
    Run,

    /// Run snapshot tests
    Snapshot {
        /// Run mode: compare (check outputs), update (accept outputs), create (new case)
        #[arg(default_value = "compare")]
        mode: String,

        /// Accepted for compatibility; runs nothing, only logs how to collect coverage (cargo llvm-cov)
        #[arg(long)]
        coverage: bool,
    },

    /// List snapshot cases
    Cases,

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let root = match cli.root {
        Some(root) => root,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Some(Command::Run) => commands::run(&root, output_mode),
        Some(Command::Snapshot { mode, coverage }) => {
            commands::snapshot(&root, &mode, coverage, output_mode)
        },
        Some(Command::Cases) => commands::cases(&root, output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": modeltemplate::VERSION
                    })
                );
            } else {
                println!("{} v{}", modeltemplate::NAME, modeltemplate::VERSION);
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": modeltemplate::VERSION,
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("{} v{}", modeltemplate::NAME, modeltemplate::VERSION);
                println!("\nRun 'modeltemplate --help' for usage");
                println!("Run 'modeltemplate snapshot' to run the snapshot tests");
            }
            Ok(())
        },
    }
}
