//! Fixture layer error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur loading or writing fixture files.
#[derive(Debug, Error)]
pub enum DataError {
    /// A fixture file could not be read. Missing fixtures are fatal to the
    /// invoking command.
    #[error("Failed to read fixture {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON (de)serialization failed.
    #[error("JSON error in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// CSV (de)serialization failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// I/O error writing a fixture or index file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
