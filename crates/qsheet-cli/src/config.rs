//! User configuration, read from a TOML file.
//!
//! ```toml
//! [source]
//! url = "https://example.com/sheet.csv"
//! timeout_secs = 20
//!
//! [display]
//! page_size = 20
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use qsheet_ingest::SourceSettings;
use qsheet_model::DEFAULT_PAGE_SIZE;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Root of the configuration file. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Where the sheet is fetched from.
    pub source: SourceSettings,

    /// How results are shown.
    pub display: DisplaySettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Rows per page when `--page-size` is not given.
    pub page_size: usize,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Settings {
    /// Loads settings from `explicit`, or from the default path.
    ///
    /// A missing default file yields defaults; a missing explicit file is an
    /// error. Malformed files are always errors.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load_from(path),
            None => {
                let path = Self::config_path();
                if path.is_file() {
                    Self::load_from(&path)
                } else {
                    debug!(path = %path.display(), "no config file, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    /// Loads settings from a specific file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        let mut settings: Self = toml::from_str(&content)
            .with_context(|| format!("parse config {}", path.display()))?;
        if settings.display.page_size == 0 {
            warn!(path = %path.display(), "display.page_size = 0 ignored");
            settings.display.page_size = DEFAULT_PAGE_SIZE;
        }
        debug!(path = %path.display(), "loaded config");
        Ok(settings)
    }

    /// Default config file location in the platform config directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("in", "desiqna", "qsheet")
            .map(|dirs| dirs.config_dir().join("qsheet.toml"))
            .unwrap_or_else(|| PathBuf::from("qsheet.toml"))
    }
}
