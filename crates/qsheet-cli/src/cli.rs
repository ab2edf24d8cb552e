//! CLI argument definitions for the question sheet browser.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use qsheet_cli::shell::parse_page_size;

#[derive(Parser)]
#[command(
    name = "qsheet",
    version,
    about = "Search and page through the published DSA practice question sheet",
    long_about = "Fetch the published practice question sheet (CSV) and browse it.\n\n\
                  Search matches any column, case-insensitively. Topic and difficulty\n\
                  filters match the columns whose headers look like topic/difficulty."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Read settings from this TOML file instead of the default location.
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show one page of questions, optionally searched and filtered.
    Browse(BrowseArgs),

    /// List the topic and difficulty values available for filtering.
    Facets(FacetsArgs),

    /// Browse interactively, one command per line on stdin.
    Shell(ShellArgs),
}

/// Where to load the sheet from.
#[derive(Args)]
pub struct SourceArgs {
    /// Fetch the sheet from this URL (default: configured or built-in sheet).
    #[arg(long = "url", value_name = "URL", conflicts_with = "file")]
    pub url: Option<String>,

    /// Read a local CSV export instead of fetching.
    #[arg(long = "file", value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// HTTP timeout in seconds.
    #[arg(long = "timeout", value_name = "SECS")]
    pub timeout: Option<u64>,
}

#[derive(Args)]
pub struct BrowseArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Case-insensitive text to look for in any column.
    #[arg(short = 's', long = "search", value_name = "TEXT")]
    pub search: Option<String>,

    /// Exact topic value (see `qsheet facets`).
    #[arg(short = 't', long = "topic", value_name = "TOPIC")]
    pub topic: Option<String>,

    /// Exact difficulty value (see `qsheet facets`).
    #[arg(short = 'd', long = "difficulty", value_name = "LEVEL")]
    pub difficulty: Option<String>,

    /// 1-based page number.
    #[arg(short = 'p', long = "page", default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..))]
    pub page: u64,

    /// Rows per page: 5, 10, 20, 50, or 100.
    #[arg(long = "page-size", value_name = "N", value_parser = parse_page_size)]
    pub page_size: Option<usize>,

    /// Output format.
    #[arg(long = "output", value_enum, default_value = "table")]
    pub output: OutputArg,
}

#[derive(Args)]
pub struct FacetsArgs {
    #[command(flatten)]
    pub source: SourceArgs,
}

#[derive(Args)]
pub struct ShellArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Initial rows per page: 5, 10, 20, 50, or 100.
    #[arg(long = "page-size", value_name = "N", value_parser = parse_page_size)]
    pub page_size: Option<usize>,
}

/// How `browse` prints its result.
#[derive(Clone, Copy, ValueEnum)]
pub enum OutputArg {
    Table,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
