//! Sheet ingestion utilities.
//!
//! This crate turns a published spreadsheet into a [`Table`]:
//!
//! - **CSV Decoding**: a line-oriented, quote-aware decoder ([`decode`])
//! - **Sources**: where the CSV text comes from ([`HttpSource`], [`FileSource`])
//! - **Loading**: the one-shot `Loading -> Ready | Failed` state machine
//!   ([`SheetLoader`])
//!
//! # Example
//!
//! ```ignore
//! use qsheet_ingest::{HttpSource, LoadState, SheetLoader, SourceSettings};
//!
//! let source = HttpSource::new(&SourceSettings::default())?;
//! let mut loader = SheetLoader::new(source);
//! if let LoadState::Ready(table) = loader.load() {
//!     println!("{} questions", table.data_len());
//! }
//! ```
//!
//! [`Table`]: qsheet_model::Table

mod csv;
mod error;
mod fetch;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Decoding ===
pub use csv::{decode, parse_line};

// === Fetching ===
pub use fetch::{
    DEFAULT_SHEET_URL, FileSource, HttpSource, LoadState, SheetLoader, SheetSource,
    SourceSettings,
};
