//! modeltemplate - project template for numerical models
//!
//! This library provides the placeholder model, the output-set abstraction used to
//! export model results, and the snapshot-testing harness that compares freshly
//! generated outputs against stored golden outputs.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Package name, as printed in the run banner
pub const NAME: &str = env!("CARGO_PKG_NAME");

pub mod config;
pub mod error;
pub mod model;
pub mod output;
pub mod outputs;
pub mod paths;
pub mod settings;
pub mod snapshot;

pub use config::{HarnessConfig, Tolerance};
pub use error::{HarnessError, Result};
pub use model::{Model, SubtractModel};
pub use outputs::{OutputItem, OutputSet};
pub use settings::Settings;
pub use snapshot::{Harness, Mode, RunReport};
