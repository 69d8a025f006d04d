//! Error types for the corrects library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for scoring operations.
#[derive(Debug, Error)]
pub enum CorrectsError {
    /// Error reading or writing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input file does not exist.
    #[error("Input file not found: {0}")]
    InputNotFound(PathBuf),

    /// Derived output file already exists; scored output never replaces anything.
    #[error("Output file already exists, refusing to overwrite: {0}")]
    OutputExists(PathBuf),

    /// A required column is missing from the header.
    #[error("Missing required column: {0}")]
    MissingColumn(String),

    /// Empty file or no data rows to score.
    #[error("Empty data: {0}")]
    EmptyData(String),

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type alias for scoring operations.
pub type Result<T> = std::result::Result<T, CorrectsError>;
