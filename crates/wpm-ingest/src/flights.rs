//! Typed flight records on top of the raw CSV table.

use std::path::Path;

use tracing::{info, warn};

use wpm_model::{FlightRecord, REQUIRED_COLUMNS};

use crate::csv_table::{CsvTable, IngestOptions, read_csv_table};
use crate::error::{IngestError, Result};

/// A loaded flight dataset.
///
/// `records[i]` was parsed from `table.rows[i]`; the raw table is kept so
/// columns the ranking does not use still reach the export.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlightTable {
    pub table: CsvTable,
    pub records: Vec<FlightRecord>,
}

impl FlightTable {
    /// Build a table whose raw columns are exactly the required ones.
    pub fn from_records(records: Vec<FlightRecord>) -> Self {
        let headers = REQUIRED_COLUMNS.iter().map(|c| (*c).to_string()).collect();
        let rows = records.iter().map(record_row).collect();
        Self {
            table: CsvTable { headers, rows },
            records,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn record_row(record: &FlightRecord) -> Vec<String> {
    REQUIRED_COLUMNS
        .iter()
        .map(|column| match *column {
            "airline" => record.airline.clone(),
            "flight" => record.flight.clone(),
            "price" => record.price.to_string(),
            "duration" => record.duration.to_string(),
            "days_left" => record.days_left.to_string(),
            "stops" => record.stops.clone(),
            "class" => record.class.clone(),
            "departure_time" => record.departure_time.clone(),
            "arrival_time" => record.arrival_time.clone(),
            _ => String::new(),
        })
        .collect()
}

/// Load and parse a flight dataset from disk.
///
/// # Errors
///
/// [`IngestError::InputMissing`] when the file is absent, otherwise CSV,
/// column or number errors for the first offending row.
pub fn load_flights(path: &Path, options: IngestOptions) -> Result<FlightTable> {
    let table = read_csv_table(path, options)?;
    let flights = parse_flights(table, path)?;
    info!(
        path = %path.display(),
        record_count = flights.len(),
        column_count = flights.table.headers.len(),
        "loaded flight dataset"
    );
    Ok(flights)
}

/// Column positions of the required fields.
struct ColumnMap {
    airline: usize,
    flight: usize,
    price: usize,
    duration: usize,
    days_left: usize,
    stops: usize,
    class: usize,
    departure_time: usize,
    arrival_time: usize,
}

impl ColumnMap {
    fn resolve(table: &CsvTable, origin: &Path) -> Result<Self> {
        let find = |column: &str| {
            table
                .column_index(column)
                .ok_or_else(|| IngestError::MissingColumn {
                    column: column.to_string(),
                    path: origin.to_path_buf(),
                })
        };
        Ok(Self {
            airline: find("airline")?,
            flight: find("flight")?,
            price: find("price")?,
            duration: find("duration")?,
            days_left: find("days_left")?,
            stops: find("stops")?,
            class: find("class")?,
            departure_time: find("departure_time")?,
            arrival_time: find("arrival_time")?,
        })
    }
}

/// Parse typed records out of a raw table.
///
/// `origin` only labels errors. Numeric cells must be finite and non-negative;
/// zero is accepted.
pub fn parse_flights(table: CsvTable, origin: &Path) -> Result<FlightTable> {
    let columns = ColumnMap::resolve(&table, origin)?;
    let mut records = Vec::with_capacity(table.rows.len());
    for (idx, row) in table.rows.iter().enumerate() {
        let row_number = idx + 1;
        let cell = |column: usize| row.get(column).map(String::as_str).unwrap_or("");
        let number = |column: usize, name: &str| {
            parse_non_negative(cell(column)).ok_or_else(|| IngestError::InvalidNumber {
                row: row_number,
                column: name.to_string(),
                value: cell(column).to_string(),
                path: origin.to_path_buf(),
            })
        };
        let days_left_raw = cell(columns.days_left);
        let days_left =
            parse_days(days_left_raw).ok_or_else(|| IngestError::InvalidNumber {
                row: row_number,
                column: "days_left".to_string(),
                value: days_left_raw.to_string(),
                path: origin.to_path_buf(),
            })?;
        records.push(FlightRecord {
            airline: cell(columns.airline).to_string(),
            flight: cell(columns.flight).to_string(),
            class: cell(columns.class).to_string(),
            price: number(columns.price, "price")?,
            duration: number(columns.duration, "duration")?,
            days_left,
            stops: cell(columns.stops).to_string(),
            departure_time: cell(columns.departure_time).to_string(),
            arrival_time: cell(columns.arrival_time).to_string(),
        });
    }
    if records.is_empty() {
        warn!(path = %origin.display(), "flight dataset has no data rows");
    }
    Ok(FlightTable { table, records })
}

fn parse_non_negative(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    let parsed = trimmed.parse::<f64>().ok()?;
    (parsed.is_finite() && parsed >= 0.0).then_some(parsed)
}

/// Whole days; integral floats such as `12.0` are accepted.
fn parse_days(value: &str) -> Option<u32> {
    let trimmed = value.trim();
    if let Ok(days) = trimmed.parse::<u32>() {
        return Some(days);
    }
    let parsed = parse_non_negative(trimmed)?;
    (parsed.fract() == 0.0 && parsed <= f64::from(u32::MAX)).then_some(parsed as u32)
}
