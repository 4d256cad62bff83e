// table.rs - Verbatim tabular data loaded from CSV

use serde::Serialize;
use std::collections::BTreeMap;

/// Header plus rows, kept as the raw strings from the file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Create a table from a header and rows
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// Table with no columns and no rows
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of data rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Index of the first column named `name`
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Cell value at `row` under column `column`
    pub fn get(&self, row: usize, column: &str) -> Option<&str> {
        let idx = self.column_index(column)?;
        self.rows.get(row)?.get(idx).map(String::as_str)
    }

    /// Column name to value for one row
    pub fn row_map(&self, row: usize) -> Option<BTreeMap<&str, &str>> {
        let values = self.rows.get(row)?;
        Some(
            self.headers
                .iter()
                .map(String::as_str)
                .zip(values.iter().map(String::as_str))
                .collect(),
        )
    }

    /// True when any header equals one of `expected`.
    ///
    /// Only one match is needed, not the full set.
    pub fn has_any_column(&self, expected: &[&str]) -> bool {
        self.headers.iter().any(|h| expected.contains(&h.as_str()))
    }
}
