//! Error types for the model and the snapshot harness

use std::path::PathBuf;

use thiserror::Error;

/// Result alias used throughout the library
pub type Result<T> = std::result::Result<T, HarnessError>;

/// Errors that can occur while running the model or the snapshot harness
#[derive(Debug, Error)]
pub enum HarnessError {
    /// Run mode token is not one of the accepted modes
    #[error("invalid run mode '{given}'. Accepted values: {accepted}")]
    InvalidMode {
        /// The rejected token
        given: String,
        /// Comma-separated list of quoted accepted tokens
        accepted: String,
    },

    /// A directory carries the case prefix but no numeric suffix
    #[error("case directory '{0}' has no numeric suffix")]
    InvalidCaseName(String),

    /// Golden file with an extension the comparator cannot handle
    #[error("file extension '{extension}' is not supported: {path}")]
    UnsupportedExtension {
        /// The extension, empty when the file has none
        extension: String,
        /// The golden file
        path: PathBuf,
    },

    /// Expected output has no counterpart in the produced outputs
    #[error("missing output file: {0}")]
    MissingOutput(PathBuf),

    /// Produced output differs from the golden file
    #[error("output mismatch in {path}: {detail}")]
    Mismatch {
        /// The golden file
        path: PathBuf,
        /// First difference found
        detail: String,
    },

    /// Two `.npz` archives hold different member names
    #[error("the .npz archives have different keys in {path} (missing: {missing:?}, unexpected: {unexpected:?})")]
    ArchiveKeyMismatch {
        /// The golden archive
        path: PathBuf,
        /// Members in the golden archive only
        missing: Vec<String>,
        /// Members in the produced archive only
        unexpected: Vec<String>,
    },

    /// Output item could not be built
    #[error("invalid output '{name}': {message}")]
    InvalidOutput {
        /// Output item name
        name: String,
        /// What is wrong with it
        message: String,
    },

    /// Settings are missing a key or hold the wrong type
    #[error("invalid settings: {0}")]
    Settings(String),

    /// Configuration file could not be parsed
    #[error("invalid config {path}: {message}")]
    Config {
        /// The configuration file
        path: PathBuf,
        /// Parser message
        message: String,
    },

    /// IO error on a specific path
    #[error("io error on {path}: {source}")]
    Io {
        /// The path being read or written
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// JSON could not be read or written
    #[error("json error in {path}: {source}")]
    Json {
        /// The JSON file
        path: PathBuf,
        /// Underlying error
        source: serde_json::Error,
    },

    /// CSV could not be read or written
    #[error("csv error in {path}: {source}")]
    Csv {
        /// The CSV file
        path: PathBuf,
        /// Underlying error
        source: csv::Error,
    },

    /// `.npz` archive could not be read or written
    #[error("npz error in {path}: {message}")]
    Archive {
        /// The archive file
        path: PathBuf,
        /// Underlying error message
        message: String,
    },

    /// Error walking the expected outputs tree
    #[error("walkdir error: {0}")]
    WalkDir(#[from] walkdir::Error),
}

impl HarnessError {
    /// Build an IO error bound to `path`
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Build a JSON error bound to `path`
    pub fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.into(),
            source,
        }
    }

    /// Build a CSV error bound to `path`
    pub fn csv(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        Self::Csv {
            path: path.into(),
            source,
        }
    }

    /// Build an archive error bound to `path`
    pub fn archive(path: impl Into<PathBuf>, err: impl std::fmt::Display) -> Self {
        Self::Archive {
            path: path.into(),
            message: err.to_string(),
        }
    }

    /// Build a mismatch error for the golden file at `path`
    pub fn mismatch(path: impl Into<PathBuf>, detail: impl Into<String>) -> Self {
        Self::Mismatch {
            path: path.into(),
            detail: detail.into(),
        }
    }
}
