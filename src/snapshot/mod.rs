//! Snapshot-testing harness
//!
//! A snapshot case is a directory `tests/snapshots/CaseNN` holding the model
//! settings (`Inputs/settings.json`) and the accepted outputs
//! (`ExpectedOutputs/**`). The harness runs in one of three modes:
//!
//! - `compare`: run every case and diff the outputs against the golden files
//! - `update`: run every case and overwrite its golden files
//! - `create`: snapshot the project's current inputs as a new case

pub mod cases;
pub mod compare;
pub mod export;
mod harness;
mod mode;

pub use cases::{case_dir_name, case_number, create_new_case_folder, find_cases, next_case_number};
pub use compare::{Comparator, compare_outputs};
pub use export::export_outputs;
pub use harness::{CaseReport, Harness, RunReport};
pub use mode::Mode;
