//! Error types for report generation.

use std::io;
use std::path::PathBuf;

use polars::prelude::PolarsError;
use thiserror::Error;

/// Errors raised while building or writing ranked output.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The ranked table could not be assembled or encoded.
    #[error("failed to export ranked table: {0}")]
    Export(#[from] PolarsError),

    /// The ranked table could not be serialized as JSON.
    #[error("failed to serialize ranked table: {0}")]
    Json(#[from] serde_json::Error),

    /// The outcome does not line up with the dataset it was ranked from.
    #[error("ranked record {index} is outside the dataset ({row_count} rows)")]
    RowMismatch { index: usize, row_count: usize },

    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ReportError>;
