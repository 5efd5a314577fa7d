//! Raw CSV loading.
//!
//! The first non-blank row is the header. Cells are kept as trimmed text so the
//! ranked export can reproduce every source column verbatim.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use crate::error::{IngestError, Result};

/// Options controlling how a delimited file is read.
#[derive(Debug, Clone, Copy)]
pub struct IngestOptions {
    /// Field delimiter byte (`,` by default).
    pub delimiter: u8,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

impl IngestOptions {
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }
}

/// Header row plus data rows, every row padded or cut to the header width.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl CsvTable {
    /// Index of a column, matched case-insensitively on the trimmed name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        let wanted = name.trim();
        self.headers
            .iter()
            .position(|header| header.eq_ignore_ascii_case(wanted))
    }
}

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Read a delimited file from disk.
///
/// # Errors
///
/// Returns [`IngestError::InputMissing`] when the file does not exist, and
/// parse errors for malformed content.
pub fn read_csv_table(path: &Path, options: IngestOptions) -> Result<CsvTable> {
    let file = File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::InputMissing {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;
    read_csv_table_from_reader(file, path, options)
}

/// Read delimited content from any reader; `origin` is only used in errors.
pub fn read_csv_table_from_reader<R: Read>(
    reader: R,
    origin: &Path,
    options: IngestOptions,
) -> Result<CsvTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(options.delimiter)
        .from_reader(reader);
    let mut headers: Option<Vec<String>> = None;
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| IngestError::CsvParse {
            path: origin.to_path_buf(),
            source,
        })?;
        if record.iter().all(|value| value.trim().is_empty()) {
            continue;
        }
        match &headers {
            None => headers = Some(record.iter().map(normalize_header).collect()),
            Some(headers) => {
                let mut row = Vec::with_capacity(headers.len());
                for idx in 0..headers.len() {
                    row.push(record.get(idx).map(normalize_cell).unwrap_or_default());
                }
                rows.push(row);
            }
        }
    }
    let Some(headers) = headers else {
        return Err(IngestError::EmptyCsv {
            path: origin.to_path_buf(),
        });
    };
    debug!(
        path = %origin.display(),
        columns = headers.len(),
        rows = rows.len(),
        "read csv table"
    );
    Ok(CsvTable { headers, rows })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(content: &str) -> Result<CsvTable> {
        read_csv_table_from_reader(
            content.as_bytes(),
            Path::new("inline.csv"),
            IngestOptions::default(),
        )
    }

    #[test]
    fn test_header_and_rows_are_trimmed() {
        let table = read("\u{feff} a , b \n 1 ,x\n").unwrap();
        assert_eq!(table.headers, vec!["a", "b"]);
        assert_eq!(table.rows, vec![vec!["1".to_string(), "x".to_string()]]);
    }

    #[test]
    fn test_short_rows_are_padded() {
        let table = read("a,b,c\n1\n").unwrap();
        assert_eq!(table.rows[0], vec!["1", "", ""]);
    }

    #[test]
    fn test_blank_lines_skipped() {
        let table = read("\n,,\na,b\n,\n1,2\n").unwrap();
        assert_eq!(table.headers, vec!["a", "b"]);
        assert_eq!(table.rows.len(), 1);
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(read(""), Err(IngestError::EmptyCsv { .. })));
    }

    #[test]
    fn test_column_index_case_insensitive() {
        let table = read("Airline,PRICE\n").unwrap();
        assert_eq!(table.column_index("price"), Some(1));
        assert_eq!(table.column_index("airline"), Some(0));
        assert_eq!(table.column_index("stops"), None);
    }

    #[test]
    fn test_semicolon_delimiter() {
        let table = read_csv_table_from_reader(
            "a;b\n1;2\n".as_bytes(),
            Path::new("inline.csv"),
            IngestOptions::default().with_delimiter(b';'),
        )
        .unwrap();
        assert_eq!(table.rows[0], vec!["1", "2"]);
    }
}
