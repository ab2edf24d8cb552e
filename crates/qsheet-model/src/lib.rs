//! Core data types for the question sheet browser.
//!
//! A [`Table`] is the decoded sheet (row 0 is the header row), and a
//! [`FilterState`] is the user's current search, filter, and page selection.
//! Both are plain values; everything derived from them lives in `qsheet-query`.

pub mod filter;
pub mod table;

pub use filter::{
    ActiveFilter, DEFAULT_PAGE_SIZE, FilterKind, FilterState, PAGE_SIZE_OPTIONS,
};
pub use table::{Row, Table, cell, display_header};
