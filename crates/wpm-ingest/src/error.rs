//! Error types for flight dataset ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a flight dataset.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// No dataset at the given location.
    #[error("flight dataset not found: {path}")]
    InputMissing { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === CSV Parsing Errors ===
    #[error("failed to parse CSV {path}: {source}")]
    CsvParse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// CSV file has no header row.
    #[error("CSV file is empty: {path}")]
    EmptyCsv { path: PathBuf },

    // === Record Errors ===
    /// Required column not found in the header row.
    #[error("required column '{column}' not found in {path}")]
    MissingColumn { column: String, path: PathBuf },

    /// Numeric cell that is not a finite, non-negative number.
    #[error("row {row}: invalid {column} value '{value}' in {path}")]
    InvalidNumber {
        row: usize,
        column: String,
        value: String,
        path: PathBuf,
    },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
