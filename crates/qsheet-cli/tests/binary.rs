//! End-to-end tests of the `qsheet` binary against a local CSV export.

use std::io::Write;
use std::process::{Command, Output};

use tempfile::NamedTempFile;

const SHEET: &str = "\
Problem,Topic,Difficulty,Link
Two Sum,Arrays,Easy,https://leetcode.com/problems/two-sum/
3Sum,Arrays,Medium,leetcode.com/problems/3sum
Word Ladder,Graphs,Hard,
Course Schedule,Graphs,Medium,https://leetcode.com/problems/course-schedule/
";

fn write_sheet() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", SHEET).unwrap();
    file
}

fn qsheet(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_qsheet"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn test_browse_filters_by_topic() {
    let sheet = write_sheet();
    let path = sheet.path().to_str().unwrap();
    let output = qsheet(&["browse", "--file", path, "--topic", "Graphs", "--color", "never"]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Showing 1 to 2 of 2 questions"));
    assert!(stdout.contains("Filters: Topic: Graphs"));
    assert!(stdout.contains("Word Ladder"));
    assert!(!stdout.contains("Two Sum"));
}

#[test]
fn test_browse_json_output() {
    let sheet = write_sheet();
    let path = sheet.path().to_str().unwrap();
    let output = qsheet(&[
        "browse", "--file", path, "--search", "SUM", "--output", "json",
    ]);

    assert!(output.status.success());
    let view: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(view["total_items"], 2);
    assert_eq!(view["total_pages"], 1);
    assert_eq!(view["topics"], serde_json::json!(["Arrays", "Graphs"]));
    assert_eq!(view["roles"]["difficulty"], 2);
}

#[test]
fn test_facets_lists_values() {
    let sheet = write_sheet();
    let path = sheet.path().to_str().unwrap();
    let output = qsheet(&["facets", "--file", path, "--color", "never"]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Arrays, Graphs"));
    assert!(stdout.contains("Easy, Hard, Medium"));
}

#[test]
fn test_missing_file_shows_error_screen() {
    let output = qsheet(&["browse", "--file", "/no/such/sheet.csv"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Connection Error"));
    assert!(stderr.contains("Failed to load data: CSV file not found"));
    assert!(output.stdout.is_empty());
}
