//! Error types for sheet ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while retrieving sheet text.
///
/// Decoding itself never fails; every error here comes from getting the
/// bytes. The loader folds all of them into a single failed state.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IngestError {
    // === File System Errors ===
    /// CSV file not found.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File is not UTF-8 text.
    #[error("unsupported encoding {encoding} in {path}")]
    UnsupportedEncoding {
        path: PathBuf,
        encoding: &'static str,
    },

    // === Network Errors ===
    /// The server answered with a status outside the 2xx range.
    #[error("HTTP error! status: {status}")]
    HttpStatus { status: u16 },

    /// Transport failure, timeout, or an unreadable response body.
    #[error("network error: {0}")]
    Network(String),
}

impl IngestError {
    /// Returns a short message suitable for the error screen.
    #[must_use]
    pub fn user_message(&self) -> &str {
        match self {
            Self::Network(_) => {
                "Could not reach the sheet. Please check your internet connection."
            }
            Self::HttpStatus { .. } => "The sheet server rejected the request.",
            Self::FileNotFound { .. } => "The CSV file does not exist.",
            Self::FileRead { .. } | Self::UnsupportedEncoding { .. } => {
                "The CSV file could not be read."
            }
        }
    }

    /// Returns whether a manual reload could plausibly succeed.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Network(_) => true,
            Self::HttpStatus { status } => *status == 429 || *status >= 500,
            Self::FileNotFound { .. }
            | Self::FileRead { .. }
            | Self::UnsupportedEncoding { .. } => false,
        }
    }
}

impl From<reqwest::Error> for IngestError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::HttpStatus { status: 404 };
        assert_eq!(err.to_string(), "HTTP error! status: 404");

        let err = IngestError::FileNotFound {
            path: PathBuf::from("/path/to/sheet.csv"),
        };
        assert_eq!(err.to_string(), "CSV file not found: /path/to/sheet.csv");
    }

    #[test]
    fn test_retryable() {
        assert!(IngestError::Network("timeout".to_string()).is_retryable());
        assert!(IngestError::HttpStatus { status: 503 }.is_retryable());
        assert!(IngestError::HttpStatus { status: 429 }.is_retryable());
        assert!(!IngestError::HttpStatus { status: 404 }.is_retryable());
        assert!(
            !IngestError::FileNotFound {
                path: PathBuf::from("x.csv")
            }
            .is_retryable()
        );
    }

    #[test]
    fn test_user_messages() {
        let err = IngestError::Network("connection refused".to_string());
        assert!(err.user_message().contains("internet connection"));
        let err = IngestError::HttpStatus { status: 500 };
        assert!(err.user_message().contains("rejected"));
    }
}
