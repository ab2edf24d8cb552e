//! Terminal rendering of a derived view.

use anyhow::Result;
use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};

use qsheet_model::{FilterState, cell, display_header};
use qsheet_query::{CellContent, DerivedView, classify_cell, page_controls};

/// Prints the full browse screen: summary, table, and page bar.
pub fn print_view(view: &DerivedView, state: &FilterState) {
    if view.headers.is_empty() {
        println!("The sheet has no questions yet.");
        return;
    }

    println!("{}", showing_line(view));
    if let Some(chips) = filter_chips(state) {
        println!("{chips}");
    }

    if view.is_empty() && state.has_active_filters() {
        println!();
        println!("No Questions Found");
        println!("No questions match your current filters.");
        println!("Drop --search, --topic, or --difficulty to see everything.");
        return;
    }

    println!("{}", question_table(view));
    if let Some(bar) = page_bar(view) {
        println!("{bar}");
    }
}

/// `Showing A to B of N questions`.
pub fn showing_line(view: &DerivedView) -> String {
    format!(
        "Showing {} to {} of {} questions",
        view.start_index, view.end_index, view.total_items
    )
}

/// Active filter chips on one line, or `None` when nothing is filtered.
pub fn filter_chips(state: &FilterState) -> Option<String> {
    let chips: Vec<String> = state
        .active_filters()
        .iter()
        .map(ToString::to_string)
        .collect();
    if chips.is_empty() {
        None
    } else {
        Some(format!("Filters: {}", chips.join(" | ")))
    }
}

/// `Page X of Y` followed by the navigation controls; `None` for a single page.
pub fn page_bar(view: &DerivedView) -> Option<String> {
    let controls = page_controls(view.page, view.total_pages);
    if controls.is_empty() {
        return None;
    }
    let buttons: Vec<String> = controls.iter().map(ToString::to_string).collect();
    Some(format!(
        "Page {} of {}   {}",
        view.page,
        view.total_pages,
        buttons.join(" ")
    ))
}

/// Builds the question table for the current page.
pub fn question_table(view: &DerivedView) -> Table {
    let mut table = Table::new();
    table.set_header(
        view.headers
            .iter()
            .enumerate()
            .map(|(index, name)| header_cell(&display_header(index, name))),
    );
    apply_table_style(&mut table);

    for row in &view.rows {
        table.add_row((0..view.headers.len()).map(|index| content_cell(cell(row, index))));
    }
    table
}

/// Prints the distinct topic and difficulty values and the columns they came from.
pub fn print_facets(view: &DerivedView) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Filter"),
        header_cell("Column"),
        header_cell("Values"),
    ]);
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);

    for (label, column, values) in [
        ("Topic", view.roles.topic, &view.topics),
        ("Difficulty", view.roles.difficulty, &view.difficulties),
    ] {
        let column_cell = match column {
            Some(index) => Cell::new(display_header(index, &view.headers[index])),
            None => dim_cell("not found"),
        };
        let values_cell = if values.is_empty() {
            dim_cell("-")
        } else {
            Cell::new(values.join(", "))
        };
        table.add_row(vec![
            Cell::new(label).add_attribute(Attribute::Bold),
            column_cell,
            values_cell,
        ]);
    }
    println!("{table}");
}

/// Prints the failed-load screen. No partial data is shown.
pub fn print_load_error(message: &str) {
    eprintln!("Connection Error");
    eprintln!("{message}");
    eprintln!("Re-run the command to retry.");
}

/// Writes the view as pretty JSON to stdout.
pub fn print_json(view: &DerivedView) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(view)?);
    Ok(())
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(160);
}

fn content_cell(value: &str) -> Cell {
    match classify_cell(value) {
        CellContent::Empty => dim_cell("—"),
        CellContent::Text(text) => Cell::new(text),
        CellContent::Link { label, .. } => Cell::new(label)
            .fg(Color::Blue)
            .add_attribute(Attribute::Underlined),
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

#[cfg(test)]
mod tests {
    use super::*;
    use qsheet_model::Table as Sheet;
    use qsheet_query::derive_view;

    fn sheet(count: usize) -> Sheet {
        let mut rows = vec![vec!["Problem".to_string(), "".to_string()]];
        rows.extend((1..=count).map(|i| vec![format!("Q{i}"), format!("leetcode.com/q{i}")]));
        Sheet::from_rows(rows)
    }

    #[test]
    fn test_showing_line() {
        let mut state = FilterState::new();
        state.set_page(3);
        let view = derive_view(&sheet(23), &state);
        insta::assert_snapshot!(showing_line(&view), @"Showing 21 to 23 of 23 questions");
    }

    #[test]
    fn test_page_bar() {
        let mut state = FilterState::new();
        state.set_page(2);
        let view = derive_view(&sheet(23), &state);
        insta::assert_snapshot!(page_bar(&view).unwrap(), @"Page 2 of 3   ← Previous 1 [2] 3 Next →");
    }

    #[test]
    fn test_single_page_has_no_bar() {
        let view = derive_view(&sheet(4), &FilterState::new());
        assert!(page_bar(&view).is_none());
    }

    #[test]
    fn test_filter_chips() {
        let mut state = FilterState::new();
        assert!(filter_chips(&state).is_none());
        state.set_search("sum");
        state.set_topic("Arrays");
        insta::assert_snapshot!(filter_chips(&state).unwrap(), @r#"Filters: Search: "sum" | Topic: Arrays"#);
    }

    #[test]
    fn test_question_table_uses_fallback_header_and_link_labels() {
        let view = derive_view(&sheet(2), &FilterState::new());
        let rendered = question_table(&view).to_string();
        assert!(rendered.contains("Column 2"));
        assert!(rendered.contains("leetcode.com/q1"));
        assert!(rendered.contains("Q2"));
    }
}
