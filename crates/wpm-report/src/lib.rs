//! Ranked flight output.
//!
//! - **Summary**: the best N flights with rounded scores
//! - **Frame**: the full ranked dataset as a polars `DataFrame`
//! - **Export**: CSV (column order preserved) or JSON files

pub mod error;
pub mod export;
pub mod frame;
pub mod summary;

pub use error::{ReportError, Result};
pub use export::{ExportFormat, export_ranked, ranked_json, write_csv, write_json};
pub use frame::{DERIVED_COLUMNS, ranked_frame};
pub use summary::{DEFAULT_TOP_N, FlightSummary, format_score, top_summaries};
