//! Line-oriented interactive session over a loaded sheet.
//!
//! Each input line is one command. After every command that changes the
//! filter state the current page is printed again.

use std::io::{self, BufRead, Write};

use qsheet_model::PAGE_SIZE_OPTIONS;
use qsheet_query::QuerySession;
use tracing::debug;

use crate::render::{filter_chips, page_bar, question_table, showing_line};

const HELP: &str = "\
commands:
  search <text>   case-insensitive search across all columns (empty clears)
  topic <value>   exact topic filter (empty clears)
  level <value>   exact difficulty filter (empty clears)
  size <n>        rows per page (5, 10, 20, 50, 100)
  page <n>        jump to page n
  next | prev     move one page
  clear           clear search, topic, and level
  topics          list topic values
  levels          list difficulty values
  show            print the current page
  help            this text
  quit            leave";

/// A parsed shell command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Search(String),
    Topic(String),
    Level(String),
    PageSize(usize),
    Page(usize),
    Next,
    Previous,
    Clear,
    Topics,
    Levels,
    Show,
    Help,
    Quit,
}

/// Parses one input line. Blank lines parse to `None`.
///
/// Search text is taken verbatim after the single separator, so leading and
/// trailing spaces are part of the term. Other arguments are trimmed.
pub fn parse_command(line: &str) -> Result<Option<ShellCommand>, String> {
    let line = line.trim_end_matches(['\r', '\n']).trim_start();
    if line.trim_end().is_empty() {
        return Ok(None);
    }
    let (word, raw) = line
        .split_once(char::is_whitespace)
        .unwrap_or((line.trim_end(), ""));
    let rest = raw.trim();

    let command = match word.to_lowercase().as_str() {
        "search" | "s" => ShellCommand::Search(raw.to_string()),
        "topic" | "t" => ShellCommand::Topic(rest.to_string()),
        "level" | "difficulty" | "d" => ShellCommand::Level(rest.to_string()),
        "size" => ShellCommand::PageSize(parse_page_size(rest)?),
        "page" | "p" => ShellCommand::Page(parse_number(rest)?),
        "next" | "n" => ShellCommand::Next,
        "prev" | "previous" => ShellCommand::Previous,
        "clear" => ShellCommand::Clear,
        "topics" => ShellCommand::Topics,
        "levels" => ShellCommand::Levels,
        "show" | "ls" => ShellCommand::Show,
        "help" | "?" => ShellCommand::Help,
        "quit" | "exit" | "q" => ShellCommand::Quit,
        other => return Err(format!("unknown command '{other}', try 'help'")),
    };
    Ok(Some(command))
}

fn parse_number(value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(number) if number > 0 => Ok(number),
        _ => Err(format!("expected a positive number, got '{value}'")),
    }
}

/// Parses a page size, accepting only the offered options.
pub fn parse_page_size(value: &str) -> Result<usize, String> {
    let size = parse_number(value)?;
    if PAGE_SIZE_OPTIONS.contains(&size) {
        Ok(size)
    } else {
        Err(format!(
            "page size must be one of {}",
            PAGE_SIZE_OPTIONS
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        ))
    }
}

/// Runs commands from `input` until `quit` or end of input.
pub fn run_shell<R: BufRead, W: Write>(
    session: &mut QuerySession,
    input: R,
    mut output: W,
) -> io::Result<()> {
    write_page(session, &mut output)?;
    for line in input.lines() {
        let line = line?;
        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(message) => {
                writeln!(output, "error: {message}")?;
                continue;
            }
        };
        debug!(?command, "shell command");

        match command {
            ShellCommand::Quit => break,
            ShellCommand::Help => writeln!(output, "{HELP}")?,
            ShellCommand::Topics => write_values(&mut output, &session.view().topics)?,
            ShellCommand::Levels => write_values(&mut output, &session.view().difficulties)?,
            ShellCommand::Show => write_page(session, &mut output)?,
            ShellCommand::Next => {
                if session.next_page() {
                    write_page(session, &mut output)?;
                } else {
                    writeln!(output, "already on the last page")?;
                }
            }
            ShellCommand::Previous => {
                if session.previous_page() {
                    write_page(session, &mut output)?;
                } else {
                    writeln!(output, "already on the first page")?;
                }
            }
            change => {
                apply_change(session, change);
                write_page(session, &mut output)?;
            }
        }
    }
    Ok(())
}

fn apply_change(session: &mut QuerySession, command: ShellCommand) {
    match command {
        ShellCommand::Search(text) => session.set_search(&text),
        ShellCommand::Topic(topic) => session.set_topic(&topic),
        ShellCommand::Level(level) => session.set_difficulty(&level),
        ShellCommand::PageSize(size) => session.set_page_size(size),
        ShellCommand::Page(page) => session.set_page(page),
        ShellCommand::Clear => session.clear_filters(),
        _ => {}
    }
}

fn write_values<W: Write>(output: &mut W, values: &[String]) -> io::Result<()> {
    if values.is_empty() {
        writeln!(output, "(none)")
    } else {
        writeln!(output, "{}", values.join(", "))
    }
}

fn write_page<W: Write>(session: &mut QuerySession, output: &mut W) -> io::Result<()> {
    let chips = filter_chips(session.state());
    let view = session.view();
    writeln!(output, "{}", showing_line(view))?;
    if let Some(chips) = chips {
        writeln!(output, "{chips}")?;
    }
    if view.is_empty() {
        writeln!(output, "No questions match your current filters")?;
    } else {
        writeln!(output, "{}", question_table(view))?;
    }
    if let Some(bar) = page_bar(view) {
        writeln!(output, "{bar}")?;
    }
    Ok(())
}
