//! One-shot loading of the sheet into a table.

use std::sync::Arc;

use qsheet_model::Table;
use tracing::{error, info, info_span};

use crate::csv::decode;
use crate::error::Result;

use super::source::SheetSource;

/// Lifecycle of a sheet load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    /// No load has finished yet.
    Loading,
    /// The sheet was fetched and decoded.
    Ready(Arc<Table>),
    /// Fetching or decoding failed; carries a message for the error screen.
    Failed(String),
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// The loaded table, if any. A failed load never exposes partial data.
    pub fn table(&self) -> Option<&Arc<Table>> {
        match self {
            Self::Ready(table) => Some(table),
            Self::Loading | Self::Failed(_) => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            Self::Loading | Self::Ready(_) => None,
        }
    }
}

/// Owns the sheet source and the table it produced.
///
/// There are no automatic retries. Calling [`SheetLoader::load`] again
/// restarts from `Loading` and replaces the table wholesale.
pub struct SheetLoader {
    source: Box<dyn SheetSource>,
    state: LoadState,
}

impl SheetLoader {
    pub fn new(source: impl SheetSource + 'static) -> Self {
        Self {
            source: Box::new(source),
            state: LoadState::Loading,
        }
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    /// Fetches and decodes the sheet, moving to `Ready` or `Failed`.
    pub fn load(&mut self) -> &LoadState {
        let origin = self.source.describe();
        let span = info_span!("load_sheet", source = %origin);
        let _guard = span.enter();

        self.state = LoadState::Loading;
        self.state = match self.fetch_table() {
            Ok(table) => {
                info!(questions = table.data_len(), "sheet loaded");
                LoadState::Ready(Arc::new(table))
            }
            Err(err) => {
                error!(error = %err, "error fetching sheet");
                LoadState::Failed(format!("Failed to load data: {err}"))
            }
        };
        &self.state
    }

    fn fetch_table(&self) -> Result<Table> {
        let text = self.source.fetch_text()?;
        Ok(decode(&text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IngestError;

    struct FixedSource(&'static str);

    impl SheetSource for FixedSource {
        fn describe(&self) -> String {
            "fixed".to_string()
        }

        fn fetch_text(&self) -> Result<String> {
            Ok(self.0.to_string())
        }
    }

    struct StatusSource(u16);

    impl SheetSource for StatusSource {
        fn describe(&self) -> String {
            "status".to_string()
        }

        fn fetch_text(&self) -> Result<String> {
            Err(IngestError::HttpStatus { status: self.0 })
        }
    }

    #[test]
    fn test_initial_state_is_loading() {
        let loader = SheetLoader::new(FixedSource("a,b"));
        assert!(loader.state().is_loading());
        assert!(loader.state().table().is_none());
    }

    #[test]
    fn test_load_success() {
        let mut loader = SheetLoader::new(FixedSource("Problem,Topic\nTwo Sum,Arrays\n"));
        let state = loader.load();
        let table = state.table().unwrap();
        assert_eq!(table.header(), &["Problem", "Topic"]);
        assert_eq!(table.data_len(), 1);
        assert!(state.error().is_none());
    }

    #[test]
    fn test_load_http_failure_embeds_status() {
        let mut loader = SheetLoader::new(StatusSource(404));
        let state = loader.load();
        assert!(state.table().is_none());
        assert_eq!(
            state.error(),
            Some("Failed to load data: HTTP error! status: 404")
        );
    }

    #[test]
    fn test_empty_sheet_is_ready_not_failed() {
        let mut loader = SheetLoader::new(FixedSource("\n\n"));
        let table = loader.load().table().unwrap();
        assert!(table.is_empty());
    }
}
