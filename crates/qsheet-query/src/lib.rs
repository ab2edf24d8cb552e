//! Query pipeline over a decoded sheet.
//!
//! Everything here is pure and synchronous. Given a [`Table`] and a
//! [`FilterState`], [`derive_view`] classifies the header, filters the data
//! rows, and slices out the current page. [`QuerySession`] wraps that with
//! setter entry points and caches the last view.
//!
//! [`Table`]: qsheet_model::Table
//! [`FilterState`]: qsheet_model::FilterState

pub mod classify;
pub mod engine;
pub mod links;
pub mod pages;
pub mod session;

pub use classify::{ColumnRoles, DIFFICULTY_KEYWORDS, TOPIC_KEYWORDS, classify};
pub use engine::{DerivedView, derive_view, distinct_values, row_matches};
pub use links::{CellContent, LINK_HOSTS, classify_cell};
pub use pages::{MAX_VISIBLE_PAGES, PageControl, page_controls};
pub use session::QuerySession;
