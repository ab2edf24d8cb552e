//! Sources of raw sheet text.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use reqwest::blocking::Client;
use tracing::debug;

use crate::error::{IngestError, Result};

use super::settings::SourceSettings;

/// Anything that can produce the sheet as CSV text.
pub trait SheetSource {
    /// Human-readable origin, used in logs.
    fn describe(&self) -> String;

    /// Retrieves the full CSV text.
    fn fetch_text(&self) -> Result<String>;
}

/// Fetches the sheet with a single unauthenticated HTTP GET.
pub struct HttpSource {
    client: Client,
    url: String,
}

impl HttpSource {
    /// Builds the HTTP client from the given settings.
    pub fn new(settings: &SourceSettings) -> Result<Self> {
        let client = Client::builder()
            .timeout(settings.timeout())
            .user_agent(settings.user_agent.clone())
            .build()?;

        Ok(Self {
            client,
            url: settings.url.clone(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl SheetSource for HttpSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    fn fetch_text(&self) -> Result<String> {
        debug!(url = %self.url, "requesting sheet");

        let response = self.client.get(&self.url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(IngestError::HttpStatus {
                status: status.as_u16(),
            });
        }

        // Content-Type is ignored; the body is always read as text.
        let text = response.text()?;
        debug!(bytes = text.len(), "received sheet body");
        Ok(text)
    }
}

/// Reads a previously exported sheet from disk.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SheetSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn fetch_text(&self) -> Result<String> {
        let bytes = std::fs::read(&self.path).map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                IngestError::FileNotFound {
                    path: self.path.clone(),
                }
            } else {
                IngestError::FileRead {
                    path: self.path.clone(),
                    source: e,
                }
            }
        })?;

        if let Some(encoding) = utf16_bom(&bytes) {
            return Err(IngestError::UnsupportedEncoding {
                path: self.path.clone(),
                encoding,
            });
        }

        String::from_utf8(bytes).map_err(|_| IngestError::UnsupportedEncoding {
            path: self.path.clone(),
            encoding: "non-UTF-8",
        })
    }
}

/// Detects UTF-16 byte order marks, which sheet exports never use.
fn utf16_bom(bytes: &[u8]) -> Option<&'static str> {
    match bytes.get(..2) {
        Some([0xFF, 0xFE]) => Some("UTF-16 LE"),
        Some([0xFE, 0xFF]) => Some("UTF-16 BE"),
        _ => None,
    }
}
