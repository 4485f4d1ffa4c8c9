//! Dataset Errors
//!
//! Load-time failures. All of these are fatal at startup: the process
//! serves nothing without a valid table.

use thiserror::Error;

/// Errors raised while loading or validating the dataset
#[derive(Error, Debug)]
pub enum DatasetError {
    /// File could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV could not be parsed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A required column is absent from the header row
    #[error("Missing required column: {0}")]
    MissingColumn(String),

    /// Two rows share the same crop name
    #[error("Duplicate crop in dataset: {0}")]
    DuplicateCrop(String),

    /// The file parsed but contained no data rows
    #[error("Dataset contains no rows")]
    Empty,
}

/// Result type for dataset operations
pub type DatasetResult<T> = Result<T, DatasetError>;
