//! Fetching sheet text and loading it into a table.

mod loader;
mod settings;
mod source;

pub use loader::{LoadState, SheetLoader};
pub use settings::{DEFAULT_SHEET_URL, SourceSettings};
pub use source::{FileSource, HttpSource, SheetSource};
