//! Decoded sheet contents.

use serde::Serialize;

/// One row of string cells. Rows may be shorter or longer than the header.
pub type Row = Vec<String>;

/// Decoded sheet contents. Row 0 is the header row; the rest are data rows.
///
/// A `Table` is never mutated in place once built. Callers that need a new
/// sheet build a new `Table` and swap it in whole.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Table {
    rows: Vec<Row>,
}

impl Table {
    /// Creates a table from decoded rows (header first).
    pub fn from_rows(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    /// All rows, header included.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// The header row, or an empty slice for an empty table.
    pub fn header(&self) -> &[String] {
        self.rows.first().map(Vec::as_slice).unwrap_or_default()
    }

    /// Every row after the header.
    pub fn data_rows(&self) -> &[Row] {
        self.rows.get(1..).unwrap_or_default()
    }

    /// Number of data rows (header excluded).
    pub fn data_len(&self) -> usize {
        self.rows.len().saturating_sub(1)
    }

    /// Returns true if the table has no rows at all, not even a header.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Reads a cell from a ragged row; missing cells read as the empty string.
pub fn cell(row: &[String], index: usize) -> &str {
    row.get(index).map(String::as_str).unwrap_or("")
}

/// Header text for display. Blank headers fall back to `Column N` (1-based).
pub fn display_header(index: usize, name: &str) -> String {
    if name.is_empty() {
        format!("Column {}", index + 1)
    } else {
        name.to_string()
    }
}
