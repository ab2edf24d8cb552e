//! Logging setup using `tracing` and `tracing-subscriber`.
//!
//! # Log Levels
//!
//! - `error`: the sheet could not be loaded
//! - `warn`: ignored configuration, odd input
//! - `info`: load progress and row counts
//! - `debug`: request details, view recomputation
//! - `trace`: per-view filter statistics

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    EnvFilter,
    fmt::{self, MakeWriter},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

/// Crates whose events follow the configured level.
const OWN_CRATES: &[&str] = &[
    "qsheet",
    "qsheet_cli",
    "qsheet_ingest",
    "qsheet_model",
    "qsheet_query",
];

/// Configuration for logging behavior.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Level applied to this workspace's crates.
    pub level_filter: LevelFilter,
    /// Let `RUST_LOG` replace the computed filter when set.
    pub use_env_filter: bool,
    /// Include the module path of each event.
    pub with_target: bool,
    /// Include timestamps.
    pub with_timestamps: bool,
    /// Use ANSI colors.
    pub with_ansi: bool,
    pub format: LogFormat,
    /// Write to this file instead of stderr.
    pub log_file: Option<PathBuf>,
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable multi-field format.
    #[default]
    Pretty,
    /// Single-line format.
    Compact,
    /// JSON lines for machine parsing.
    Json,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level_filter: LevelFilter::WARN,
            use_env_filter: true,
            with_target: false,
            with_timestamps: false,
            with_ansi: true,
            format: LogFormat::default(),
            log_file: None,
        }
    }
}

/// Installs the global subscriber. Call once at startup.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened.
pub fn init_logging(config: &LogConfig) -> io::Result<()> {
    match &config.log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            init_logging_with_writer(config, SharedFileWriter::new(file));
        }
        None => init_logging_with_writer(config, io::stderr),
    }
    Ok(())
}

/// Installs the global subscriber writing to `writer`.
pub fn init_logging_with_writer<W>(config: &LogConfig, writer: W)
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    let filter = build_filter(config);
    let registry = tracing_subscriber::registry().with(filter);

    // Each arm yields a distinct layer type, so each installs its own.
    match (config.format, config.with_timestamps) {
        (LogFormat::Json, _) => registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(writer)
                    .with_target(config.with_target),
            )
            .init(),
        (LogFormat::Compact, true) => registry.with(base_layer(config, writer).compact()).init(),
        (LogFormat::Compact, false) => registry
            .with(base_layer(config, writer).compact().without_time())
            .init(),
        (LogFormat::Pretty, true) => registry.with(base_layer(config, writer)).init(),
        (LogFormat::Pretty, false) => registry
            .with(base_layer(config, writer).without_time())
            .init(),
    }
}

fn base_layer<S, W>(
    config: &LogConfig,
    writer: W,
) -> fmt::Layer<S, fmt::format::DefaultFields, fmt::format::Format, W>
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    fmt::layer()
        .with_writer(writer)
        .with_ansi(config.with_ansi)
        .with_target(config.with_target)
}

/// Builds the event filter: `RUST_LOG` when allowed and set, otherwise the
/// configured level for our crates and `warn` for dependencies.
pub fn build_filter(config: &LogConfig) -> EnvFilter {
    if config.use_env_filter
        && let Ok(filter) = EnvFilter::try_from_default_env()
    {
        return filter;
    }
    EnvFilter::new(default_directives(config.level_filter))
}

/// Directive string used when `RUST_LOG` does not apply.
pub fn default_directives(level: LevelFilter) -> String {
    let level = level.to_string().to_lowercase();
    let mut directives = vec!["warn".to_string()];
    directives.extend(OWN_CRATES.iter().map(|krate| format!("{krate}={level}")));
    directives.join(",")
}

/// Clonable writer that serializes writes to one log file.
#[derive(Clone)]
struct SharedFileWriter {
    file: Arc<Mutex<File>>,
}

impl SharedFileWriter {
    fn new(file: File) -> Self {
        Self {
            file: Arc::new(Mutex::new(file)),
        }
    }

    fn with_file<T>(&self, op: impl FnOnce(&mut File) -> io::Result<T>) -> io::Result<T> {
        let mut guard = self
            .file
            .lock()
            .map_err(|_| io::Error::other("log file lock poisoned"))?;
        op(&mut guard)
    }
}

impl Write for SharedFileWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.with_file(|file| file.write(buf))
    }

    fn flush(&mut self) -> io::Result<()> {
        self.with_file(File::flush)
    }
}

impl<'a> MakeWriter<'a> for SharedFileWriter {
    type Writer = SharedFileWriter;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directives() {
        let directives = default_directives(LevelFilter::DEBUG);
        assert!(directives.starts_with("warn,"));
        assert!(directives.contains("qsheet_query=debug"));
        assert!(directives.contains("qsheet_ingest=debug"));
    }

    #[test]
    fn test_build_filter_ignores_env_when_disabled() {
        let config = LogConfig {
            level_filter: LevelFilter::INFO,
            use_env_filter: false,
            ..LogConfig::default()
        };
        let filter = build_filter(&config).to_string();
        assert!(filter.contains("qsheet_cli=info"));
    }
}
