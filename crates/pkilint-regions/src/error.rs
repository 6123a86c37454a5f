//! Region lookup error types.
//!
//! Load-time errors carry the file path or table location. Lookup-time
//! errors mean the knowledge base broke its contract for one query.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading or querying region data.
#[derive(Debug, Error)]
pub enum RegionError {
    /// A backing store produced an outcome outside the three defined values.
    #[error("unrecognized region outcome {0:?}")]
    UnrecognizedOutcome(String),

    /// The lookup could not answer for this pair.
    #[error("region lookup failed for ({country:?}, {province:?}): {detail}")]
    Lookup {
        country: String,
        province: String,
        detail: String,
    },

    /// The region table is structurally invalid.
    #[error("invalid region table at {location}: {detail}")]
    InvalidTable { location: String, detail: String },

    /// YAML parsing failed.
    #[error("failed to parse YAML at {path}: {source}")]
    YamlParse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    /// A required file was not found.
    #[error("region table not found: {path}")]
    FileNotFound { path: PathBuf },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic serde_yaml error (not file-specific).
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type alias for region operations.
pub type RegionResult<T> = Result<T, RegionError>;
