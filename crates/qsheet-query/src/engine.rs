//! Filtering and pagination of data rows.

use std::collections::BTreeSet;

use qsheet_model::{FilterState, Row, Table, cell};
use serde::Serialize;
use tracing::trace;

use crate::classify::{ColumnRoles, classify};

/// Everything the presentation layer needs for one render.
///
/// Always recomputed from a table and a filter state, never edited.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DerivedView {
    /// Header row as decoded (blank names are not filled in).
    pub headers: Vec<String>,
    /// Data rows on the current page.
    pub rows: Vec<Row>,
    /// Number of data rows passing every filter.
    pub total_items: usize,
    /// `ceil(total_items / page_size)`; zero when nothing matches.
    pub total_pages: usize,
    /// Sorted distinct values of the topic column.
    pub topics: Vec<String>,
    /// Sorted distinct values of the difficulty column.
    pub difficulties: Vec<String>,
    /// 1-based page this view was cut from.
    pub page: usize,
    pub page_size: usize,
    /// 1-based index of the first row on the page, for "Showing A to B".
    pub start_index: usize,
    /// 1-based index of the last row on the page.
    pub end_index: usize,
    /// Classified topic and difficulty columns.
    pub roles: ColumnRoles,
}

impl DerivedView {
    /// Returns true if the current page shows no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Computes the view for a table under a filter state.
///
/// Total for every input: an empty table yields an all-zero view, and a
/// missing topic or difficulty column only matches an empty filter.
pub fn derive_view(table: &Table, state: &FilterState) -> DerivedView {
    let page = state.page();
    let page_size = state.page_size();

    if table.is_empty() {
        return DerivedView {
            page,
            page_size,
            ..DerivedView::default()
        };
    }

    let headers = table.header().to_vec();
    let data_rows = table.data_rows();
    let roles = classify(&headers);

    let topics = distinct_values(data_rows, roles.topic);
    let difficulties = distinct_values(data_rows, roles.difficulty);

    let filter = RowFilter::new(state, roles);
    let filtered: Vec<&Row> = data_rows.iter().filter(|row| filter.matches(row)).collect();

    let total_items = filtered.len();
    let total_pages = total_items.div_ceil(page_size);
    let start = (page - 1).saturating_mul(page_size);
    let end = start.saturating_add(page_size);
    let rows: Vec<Row> = filtered
        .get(start.min(total_items)..end.min(total_items))
        .unwrap_or_default()
        .iter()
        .map(|row| (*row).clone())
        .collect();

    trace!(
        total_items,
        total_pages,
        page,
        visible = rows.len(),
        "derived view"
    );

    DerivedView {
        headers,
        rows,
        total_items,
        total_pages,
        topics,
        difficulties,
        page,
        page_size,
        start_index: start.saturating_add(1),
        end_index: end.min(total_items),
        roles,
    }
}

/// Sorted, de-duplicated, non-empty trimmed values of one column.
///
/// Returns an empty list when the column was not found.
pub fn distinct_values(rows: &[Row], column: Option<usize>) -> Vec<String> {
    let Some(index) = column else {
        return Vec::new();
    };
    rows.iter()
        .map(|row| cell(row, index).trim())
        .filter(|value| !value.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Returns true if a data row passes the search, topic, and difficulty filters.
pub fn row_matches(row: &[String], state: &FilterState, roles: ColumnRoles) -> bool {
    RowFilter::new(state, roles).matches(row)
}

/// Filter predicates with the search needle lowercased once.
struct RowFilter<'a> {
    needle: String,
    topic: &'a str,
    difficulty: &'a str,
    roles: ColumnRoles,
}

impl<'a> RowFilter<'a> {
    fn new(state: &'a FilterState, roles: ColumnRoles) -> Self {
        Self {
            needle: state.search().to_lowercase(),
            topic: state.topic(),
            difficulty: state.difficulty(),
            roles,
        }
    }

    fn matches(&self, row: &[String]) -> bool {
        self.matches_search(row)
            && column_equals(row, self.roles.topic, self.topic)
            && column_equals(row, self.roles.difficulty, self.difficulty)
    }

    /// Case-insensitive substring match against every cell.
    fn matches_search(&self, row: &[String]) -> bool {
        self.needle.is_empty()
            || row
                .iter()
                .any(|value| value.to_lowercase().contains(&self.needle))
    }
}

/// Exact, case-sensitive match of a trimmed cell. An empty filter always matches.
fn column_equals(row: &[String], column: Option<usize>, wanted: &str) -> bool {
    wanted.is_empty() || column.is_some_and(|index| cell(row, index).trim() == wanted)
}
