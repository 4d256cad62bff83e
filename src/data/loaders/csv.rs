// csv.rs - CSV file loader for input tables

use crate::data::table::Table;
use crate::error::TableError;
use ::csv::{Reader, ReaderBuilder};
use std::io::Read;
use std::path::Path;

fn builder() -> ReaderBuilder {
    let mut builder = ReaderBuilder::new();
    builder.has_headers(true).flexible(true);
    builder
}

fn read_table<R: Read>(mut reader: Reader<R>, path: &Path) -> Result<Table, TableError> {
    let headers: Vec<String> = reader
        .headers()
        .map_err(|source| TableError::Header {
            path: path.to_path_buf(),
            source,
        })?
        .iter()
        .map(str::to_string)
        .collect();

    if headers.is_empty() {
        return Err(TableError::NoHeader {
            path: path.to_path_buf(),
        });
    }

    // Short records are padded with empty cells; long ones are rejected
    let width = headers.len();
    let mut rows = Vec::new();
    for (idx, record) in reader.records().enumerate() {
        let record = record.map_err(|source| TableError::Record {
            path: path.to_path_buf(),
            record: idx + 1,
            source,
        })?;
        if record.len() > width {
            return Err(TableError::TooManyFields {
                path: path.to_path_buf(),
                record: idx + 1,
                found: record.len(),
                expected: width,
            });
        }
        let mut row: Vec<String> = record.iter().map(str::to_string).collect();
        row.resize(width, String::new());
        rows.push(row);
    }

    Ok(Table::new(headers, rows))
}

impl Table {
    /// Load a CSV file with a header row. Values are kept as strings.
    pub fn from_csv(file_path: &Path) -> Result<Self, TableError> {
        let reader = builder()
            .from_path(file_path)
            .map_err(|source| TableError::Open {
                path: file_path.to_path_buf(),
                source,
            })?;

        let table = read_table(reader, file_path)?;
        tracing::debug!(
            path = %file_path.display(),
            rows = table.len(),
            columns = table.column_count(),
            "CSV loaded"
        );
        Ok(table)
    }

    /// Load CSV from any reader; `source` is only used in error messages
    pub fn from_csv_reader<R: Read>(input: R, source: &Path) -> Result<Self, TableError> {
        read_table(builder().from_reader(input), source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Result<Table, TableError> {
        Table::from_csv_reader(text.as_bytes(), Path::new("test.csv"))
    }

    #[test]
    fn test_rows_in_file_order() {
        let table = parse("stage,match,score\nsemi,1,2-0\nsemi,2,1-1\nfinal,1,3-2\n").unwrap();

        assert_eq!(table.headers, vec!["stage", "match", "score"]);
        assert_eq!(table.len(), 3);
        assert_eq!(table.get(0, "stage"), Some("semi"));
        assert_eq!(table.get(2, "score"), Some("3-2"));
    }

    #[test]
    fn test_values_are_not_coerced() {
        let table = parse("id,countries,ranking\n007,France,5.0\n").unwrap();
        assert_eq!(table.get(0, "id"), Some("007"));
        assert_eq!(table.get(0, "ranking"), Some("5.0"));
    }

    #[test]
    fn test_quoted_fields() {
        let table = parse("country_a,country_b,scores\n\"Bosnia, Herzegovina\",Italy,0-0\n").unwrap();
        assert_eq!(table.get(0, "country_a"), Some("Bosnia, Herzegovina"));
    }

    #[test]
    fn test_header_only() {
        let table = parse("id,countries,ranking\n").unwrap();
        assert!(table.is_empty());
        assert_eq!(table.column_count(), 3);
    }

    #[test]
    fn test_empty_input_has_no_header() {
        let err = parse("").unwrap_err();
        assert!(matches!(err, TableError::NoHeader { .. }));
    }

    #[test]
    fn test_short_rows_are_padded() {
        let table = parse("stage,match,score\nsemi,1,2-0\nfinal,1\n").unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.get(0, "score"), Some("2-0"));
        assert_eq!(table.rows[1], vec!["final", "1", ""]);
        assert_eq!(table.get(1, "score"), Some(""));
    }

    #[test]
    fn test_long_row_is_an_error() {
        let err = parse("id,countries,ranking\n1,France,5\n2,Spain,7,extra\n").unwrap_err();
        assert!(matches!(
            err,
            TableError::TooManyFields {
                record: 2,
                found: 4,
                expected: 3,
                ..
            }
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = Table::from_csv(Path::new("/nonexistent/countries.csv")).unwrap_err();
        assert!(matches!(err, TableError::Open { .. }));
    }
}
