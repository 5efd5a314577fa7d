//! Ranked dataset as a polars `DataFrame`.

use std::collections::BTreeSet;

use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, Series};
use tracing::warn;

use wpm_core::{RankedFlight, RankingOutcome};
use wpm_ingest::FlightTable;

use crate::error::{ReportError, Result};

/// Columns appended after the source columns, in output order.
pub const DERIVED_COLUMNS: [&str; 6] = [
    "stops_mapped",
    "class_mapped",
    "dep_time_score",
    "arr_time_score",
    "wpm_score",
    "rank",
];

/// Name of the source column at `index` as it appears in the export.
///
/// Blank headers get a positional name so every column stays addressable.
pub(crate) fn export_header(header: &str, index: usize) -> String {
    if header.trim().is_empty() {
        format!("column_{}", index + 1)
    } else {
        header.to_string()
    }
}

/// Source columns that survive into the export, as `(position, name)`.
///
/// A source column named like a derived column is replaced by the derived one.
pub(crate) fn source_columns(dataset: &FlightTable) -> Vec<(usize, String)> {
    let mut seen = BTreeSet::new();
    dataset
        .table
        .headers
        .iter()
        .enumerate()
        .filter_map(|(index, header)| {
            let name = export_header(header, index);
            if DERIVED_COLUMNS.contains(&name.as_str()) {
                warn!(column = %name, "source column shadowed by derived column");
                return None;
            }
            if !seen.insert(name.clone()) {
                warn!(column = %name, "duplicate source column dropped");
                return None;
            }
            Some((index, name))
        })
        .collect()
}

/// Build the ranked table: every source column as text in its original order,
/// followed by [`DERIVED_COLUMNS`], rows sorted by descending score.
///
/// # Errors
///
/// [`ReportError::RowMismatch`] when the outcome refers to a row the dataset
/// does not have, or a polars error while assembling the frame.
pub fn ranked_frame(dataset: &FlightTable, outcome: &RankingOutcome) -> Result<DataFrame> {
    let row_count = dataset.table.rows.len();
    let mut rows = Vec::with_capacity(outcome.len());
    for ranked in &outcome.flights {
        let row = dataset
            .table
            .rows
            .get(ranked.source_index)
            .ok_or(ReportError::RowMismatch {
                index: ranked.source_index,
                row_count,
            })?;
        rows.push(row);
    }

    let mut columns: Vec<Column> = source_columns(dataset)
        .into_iter()
        .map(|(index, name)| {
            let values: Vec<String> = rows
                .iter()
                .map(|row| row.get(index).cloned().unwrap_or_default())
                .collect();
            Series::new(name.into(), values).into_column()
        })
        .collect();

    columns.push(int_column("stops_mapped", outcome, |f| f.attributes.stops.into()));
    columns.push(int_column("class_mapped", outcome, |f| f.attributes.class.into()));
    columns.push(int_column("dep_time_score", outcome, |f| {
        f.attributes.departure_score.into()
    }));
    columns.push(int_column("arr_time_score", outcome, |f| {
        f.attributes.arrival_score.into()
    }));
    let scores: Vec<f64> = outcome.flights.iter().map(|f| f.score).collect();
    columns.push(Series::new("wpm_score".into(), scores).into_column());
    columns.push(int_column("rank", outcome, |f| f.rank as i64));

    Ok(DataFrame::new(columns)?)
}

fn int_column(name: &str, outcome: &RankingOutcome, pick: impl Fn(&RankedFlight) -> i64) -> Column {
    let values: Vec<i64> = outcome.flights.iter().map(pick).collect();
    Series::new(name.into(), values).into_column()
}
