//! Writing the ranked table to CSV or JSON.

use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

use polars::prelude::{CsvWriter, DataFrame, SerWriter};
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::info;

use wpm_core::RankingOutcome;
use wpm_ingest::FlightTable;
use wpm_model::RankMethod;

use crate::error::{ReportError, Result};
use crate::frame::{ranked_frame, source_columns};

/// Encoding of an exported ranked table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExportFormat {
    #[default]
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }

    /// Guess the format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| ext.parse().ok())
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            other => Err(format!("unknown export format: {other}")),
        }
    }
}

/// Write a ranked frame as CSV with a header row.
pub fn write_csv<W: Write>(writer: W, frame: &mut DataFrame) -> Result<()> {
    CsvWriter::new(writer).include_header(true).finish(frame)?;
    Ok(())
}

#[derive(Serialize)]
struct RankedDocument {
    rank_method: RankMethod,
    weights: Map<String, Value>,
    flights: Vec<Map<String, Value>>,
}

/// The ranked table as a JSON document.
///
/// Each flight object carries the source columns as strings, in their
/// original order, followed by the derived values.
///
/// # Errors
///
/// [`ReportError::RowMismatch`] when the outcome refers to a row the dataset
/// does not have.
pub fn ranked_json(dataset: &FlightTable, outcome: &RankingOutcome) -> Result<Value> {
    let columns = source_columns(dataset);
    let row_count = dataset.table.rows.len();
    let mut flights = Vec::with_capacity(outcome.len());
    for ranked in &outcome.flights {
        let row = dataset
            .table
            .rows
            .get(ranked.source_index)
            .ok_or(ReportError::RowMismatch {
                index: ranked.source_index,
                row_count,
            })?;
        let mut object = Map::new();
        for (index, name) in &columns {
            let cell = row.get(*index).cloned().unwrap_or_default();
            object.insert(name.clone(), Value::String(cell));
        }
        let attributes = &ranked.attributes;
        object.insert("stops_mapped".into(), attributes.stops.into());
        object.insert("class_mapped".into(), attributes.class.into());
        object.insert("dep_time_score".into(), attributes.departure_score.into());
        object.insert("arr_time_score".into(), attributes.arrival_score.into());
        object.insert("wpm_score".into(), ranked.score.into());
        object.insert("rank".into(), ranked.rank.into());
        flights.push(object);
    }

    let weights = outcome
        .weights
        .iter()
        .map(|(criterion, weight)| (criterion.name().to_string(), Value::from(weight)))
        .collect();
    let document = RankedDocument {
        rank_method: outcome.rank_method,
        weights,
        flights,
    };
    Ok(serde_json::to_value(document)?)
}

/// Write the ranked table as pretty-printed JSON.
pub fn write_json<W: Write>(
    mut writer: W,
    dataset: &FlightTable,
    outcome: &RankingOutcome,
) -> Result<()> {
    let document = ranked_json(dataset, outcome)?;
    serde_json::to_writer_pretty(&mut writer, &document)?;
    writeln!(writer).map_err(serde_json::Error::io)?;
    Ok(())
}

/// Export the ranked table to `path`.
///
/// # Errors
///
/// [`ReportError::Io`] when the file cannot be created, otherwise any
/// encoding error.
pub fn export_ranked(
    path: &Path,
    format: ExportFormat,
    dataset: &FlightTable,
    outcome: &RankingOutcome,
) -> Result<()> {
    let io_error = |source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(io_error)?;
    let mut writer = BufWriter::new(file);
    match format {
        ExportFormat::Csv => {
            let mut frame = ranked_frame(dataset, outcome)?;
            write_csv(&mut writer, &mut frame)?;
        }
        ExportFormat::Json => write_json(&mut writer, dataset, outcome)?,
    }
    writer.flush().map_err(io_error)?;
    info!(
        path = %path.display(),
        format = format.as_str(),
        record_count = outcome.len(),
        "exported ranked table"
    );
    Ok(())
}
