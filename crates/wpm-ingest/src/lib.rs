//! Flight dataset ingestion.

pub mod csv_table;
pub mod error;
pub mod flights;

pub use csv_table::{CsvTable, IngestOptions, read_csv_table, read_csv_table_from_reader};
pub use error::{IngestError, Result};
pub use flights::{FlightTable, load_flights, parse_flights};
