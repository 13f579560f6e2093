//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

use crate::snapshot::{Mode, RunReport};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of a case listing
#[derive(Debug, Serialize)]
pub struct CaseList {
    /// Snapshots root that was scanned
    pub snapshots_dir: String,
    /// Case directory names
    pub cases: Vec<String>,
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

impl RunReport {
    /// Render the report based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        if self.cases.is_empty() {
            println!("No snapshot cases found.");
            return;
        }

        let verb = match self.mode {
            Mode::Compare => "compared",
            Mode::Update => "updated",
            Mode::Create => "created",
        };
        for case in &self.cases {
            println!("  {} {} ({} file(s) {verb})", "ok".green(), case.name, case.files);
        }
        println!("\n{}: {} case(s) {verb}", self.mode.to_string().bold(), self.cases.len());
    }
}

impl CaseList {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        if self.cases.is_empty() {
            println!("No snapshot cases in {}", self.snapshots_dir);
            return;
        }

        println!("Snapshot cases in {}:\n", self.snapshots_dir);
        for case in &self.cases {
            println!("  {case}");
        }
    }
}

impl OperationResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => render_json(self),
        }
    }
}

fn render_json<T: Serialize>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}
