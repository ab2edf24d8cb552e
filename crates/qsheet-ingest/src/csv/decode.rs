//! Whole-document decoding.
//!
//! The decoder is strictly line-oriented: text is split on `\n` before any
//! quote handling, so a quoted cell that spans lines is decoded as several
//! rows. Published sheet exports keep each question on one line.

use qsheet_model::{Row, Table};
use tracing::debug;

use super::line::parse_line;

/// Decodes CSV text into a [`Table`].
///
/// - Blank lines (whitespace only) are skipped and never become rows.
/// - Rows whose cells are all empty are dropped.
/// - A leading UTF-8 byte order mark is ignored.
///
/// No header detection happens here; row 0 of the result is simply the
/// first non-empty line.
pub fn decode(text: &str) -> Table {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let rows: Vec<Row> = text
        .split('\n')
        .filter(|line| !line.trim().is_empty())
        .map(parse_line)
        .filter(|row| row.iter().any(|cell| !cell.is_empty()))
        .collect();

    debug!(rows = rows.len(), "decoded sheet text");
    Table::from_rows(rows)
}
