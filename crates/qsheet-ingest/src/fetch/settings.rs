//! Connection settings for the published sheet.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Published CSV export of the practice question sheet.
pub const DEFAULT_SHEET_URL: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vTBVyDooYoIPC19s9sLqaQMbbBnAu_VR_DX4OnZiFLI8NMeBYJMeSfJlowGan_fvw/pub?gid=451760203&single=true&output=csv";

/// Default HTTP request timeout, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Where and how to fetch the sheet over HTTP.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceSettings {
    /// URL serving the sheet as CSV text.
    pub url: String,

    /// Request timeout in seconds.
    pub timeout_secs: u64,

    /// `User-Agent` header sent with the request.
    pub user_agent: String,
}

impl Default for SourceSettings {
    fn default() -> Self {
        Self {
            url: DEFAULT_SHEET_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: format!("qsheet/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl SourceSettings {
    /// Request timeout as a [`Duration`]. A zero timeout falls back to the default.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        if self.timeout_secs == 0 {
            Duration::from_secs(DEFAULT_TIMEOUT_SECS)
        } else {
            Duration::from_secs(self.timeout_secs)
        }
    }

    /// Returns a copy pointing at a different URL.
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = SourceSettings::default();
        assert_eq!(settings.url, DEFAULT_SHEET_URL);
        assert_eq!(settings.timeout(), Duration::from_secs(30));
        assert!(settings.user_agent.starts_with("qsheet/"));
    }

    #[test]
    fn test_zero_timeout_uses_default() {
        let settings = SourceSettings {
            timeout_secs: 0,
            ..SourceSettings::default()
        };
        assert_eq!(settings.timeout(), Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }

    #[test]
    fn test_with_url() {
        let settings = SourceSettings::default().with_url("https://example.com/sheet.csv");
        assert_eq!(settings.url, "https://example.com/sheet.csv");
    }
}
