use std::io::{self, IsTerminal};
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info, info_span};

use qsheet_cli::config::Settings;
use qsheet_cli::render::{print_facets, print_json, print_load_error, print_view};
use qsheet_cli::shell::run_shell;
use qsheet_ingest::{FileSource, HttpSource, SheetLoader, SourceSettings};
use qsheet_model::{FilterState, Table};
use qsheet_query::{QuerySession, derive_view};

use crate::cli::{BrowseArgs, FacetsArgs, OutputArg, ShellArgs, SourceArgs};
use crate::types::Outcome;

pub fn run_browse(args: &BrowseArgs, settings: &Settings) -> Result<Outcome> {
    let Some(table) = load_table(&args.source, settings)? else {
        return Ok(Outcome::LoadFailed);
    };

    let mut state = FilterState::new();
    state.set_page_size(args.page_size.unwrap_or(settings.display.page_size));
    if let Some(search) = &args.search {
        state.set_search(search.as_str());
    }
    if let Some(topic) = &args.topic {
        state.set_topic(topic.as_str());
    }
    if let Some(difficulty) = &args.difficulty {
        state.set_difficulty(difficulty.as_str());
    }
    // Filter setters reset the page, so the page goes last.
    state.set_page(usize::try_from(args.page).unwrap_or(usize::MAX));

    let view = derive_view(&table, &state);
    debug!(
        total_items = view.total_items,
        total_pages = view.total_pages,
        "browse view ready"
    );
    match args.output {
        OutputArg::Table => print_view(&view, &state),
        OutputArg::Json => print_json(&view).context("serialize view")?,
    }
    Ok(Outcome::Completed)
}

pub fn run_facets(args: &FacetsArgs, settings: &Settings) -> Result<Outcome> {
    let Some(table) = load_table(&args.source, settings)? else {
        return Ok(Outcome::LoadFailed);
    };
    let view = derive_view(&table, &FilterState::new());
    print_facets(&view);
    Ok(Outcome::Completed)
}

pub fn run_interactive(args: &ShellArgs, settings: &Settings) -> Result<Outcome> {
    let Some(table) = load_table(&args.source, settings)? else {
        return Ok(Outcome::LoadFailed);
    };
    let mut session = QuerySession::new(table);
    session.set_page_size(args.page_size.unwrap_or(settings.display.page_size));

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_shell(&mut session, stdin.lock(), stdout.lock()).context("shell I/O")?;
    Ok(Outcome::Completed)
}

/// Loads the sheet once. Returns `None` after printing the error screen.
fn load_table(source: &SourceArgs, settings: &Settings) -> Result<Option<Arc<Table>>> {
    let mut loader = match &source.file {
        Some(path) => SheetLoader::new(FileSource::new(path)),
        None => {
            let source_settings = source_settings(source, settings);
            let http = HttpSource::new(&source_settings).context("build HTTP client")?;
            SheetLoader::new(http)
        }
    };

    let span = info_span!("load");
    let _guard = span.enter();
    let start = Instant::now();
    let state = with_spinner("Loading practice questions...", || loader.load().clone());
    let elapsed_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
    info!(elapsed_ms, "load finished");

    if let Some(message) = state.error() {
        print_load_error(message);
        return Ok(None);
    }
    Ok(state.table().cloned())
}

/// Settings file values with command-line overrides applied.
fn source_settings(source: &SourceArgs, settings: &Settings) -> SourceSettings {
    let mut resolved = settings.source.clone();
    if let Some(url) = &source.url {
        resolved.url = url.clone();
    }
    if let Some(timeout) = source.timeout {
        resolved.timeout_secs = timeout;
    }
    resolved
}

fn with_spinner<T>(message: &'static str, op: impl FnOnce() -> T) -> T {
    let spinner = if io::stderr().is_terminal() {
        ProgressBar::new_spinner()
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(80));
    let result = op();
    spinner.finish_and_clear();
    result
}
