//! Interactive session loop
//!
//! Reads one command per line, turns it into a [`ViewEvent`] and re-renders
//! the session after every transition.

use std::{fmt, io, time::Duration};

use application::{EventOutcome, LookupOutcome, SearchController, ViewEvent};
use chrono::Local;
use domain::{DomainError, LocationKey, SearchHistory};
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::debug;

use crate::view;

/// Show the loading line if a lookup takes longer than this
const LOADING_HINT_DELAY: Duration = Duration::from_millis(150);

const HELP: &str = "\
Type a location to look up its current weather.

  /open <n|name>    look up a history entry again
  /delete <n|name>  remove a history entry
  /history          show the search history
  /help             show this help
  /quit             leave
";

/// One parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Free text to search for
    Submit(String),
    Open(Selector),
    Delete(Selector),
    History,
    Help,
    Quit,
}

/// Reference to a history entry by 1-based position or by name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    Position(usize),
    Name(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command: /{0} (try /help)")]
    Unknown(String),

    #[error("/{0} needs a history number or name")]
    MissingArgument(&'static str),
}

/// Parse a line typed at the prompt
pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let line = line.trim();
    let Some(rest) = line.strip_prefix('/') else {
        return Ok(Command::Submit(line.to_string()));
    };

    let (name, arg) = rest
        .split_once(char::is_whitespace)
        .map_or((rest, ""), |(name, arg)| (name, arg.trim()));

    match name.to_ascii_lowercase().as_str() {
        "open" => Selector::parse(arg)
            .map(Command::Open)
            .ok_or(CommandError::MissingArgument("open")),
        "delete" | "rm" => Selector::parse(arg)
            .map(Command::Delete)
            .ok_or(CommandError::MissingArgument("delete")),
        "history" => Ok(Command::History),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" | "q" => Ok(Command::Quit),
        other => Err(CommandError::Unknown(other.to_string())),
    }
}

impl Selector {
    fn parse(arg: &str) -> Option<Self> {
        if arg.is_empty() {
            return None;
        }
        Some(
            arg.parse::<usize>()
                .map_or_else(|_| Self::Name(arg.to_string()), Self::Position),
        )
    }

    /// Find the history entry this selector points at
    pub fn resolve(&self, history: &SearchHistory) -> Result<LocationKey, DomainError> {
        let entry = match self {
            Self::Position(n) => n.checked_sub(1).and_then(|i| history.get_index(i)),
            Self::Name(name) => LocationKey::parse(name).and_then(|key| history.get(&key)),
        };

        entry
            .map(|e| e.location_key.clone())
            .ok_or_else(|| DomainError::not_found("History entry", self.to_string()))
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Position(n) => write!(f, "#{n}"),
            Self::Name(name) => f.write_str(name),
        }
    }
}

/// Run the prompt until `/quit` or end of input
pub async fn run<R, W>(controller: &SearchController, input: R, out: &mut W) -> io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: io::Write,
{
    write!(out, "{}", view::render(&controller.state()))?;
    writeln!(out, "\nType /help for commands.")?;

    let mut lines = input.lines();
    loop {
        write!(out, "> ")?;
        out.flush()?;

        let Some(line) = lines.next_line().await? else {
            writeln!(out)?;
            break;
        };

        match parse_command(&line) {
            Ok(Command::Quit) => break,
            Ok(command) => execute(controller, command, out).await?,
            Err(e) => writeln!(out, "{e}")?,
        }
    }

    Ok(())
}

/// Look up `text` once and print the resulting frame.
///
/// Returns `true` when a snapshot was loaded.
pub async fn lookup_once<W: io::Write>(
    controller: &SearchController,
    text: &str,
    out: &mut W,
) -> io::Result<bool> {
    let outcome = controller.submit(text).await;
    write!(out, "{}", view::render(&controller.state()))?;
    Ok(matches!(outcome, Some(LookupOutcome::Loaded)))
}

async fn execute<W: io::Write>(
    controller: &SearchController,
    command: Command,
    out: &mut W,
) -> io::Result<()> {
    let event = match command {
        Command::Submit(text) => ViewEvent::Submit(text),
        Command::Open(selector) => match selector.resolve(&controller.state().history) {
            Ok(key) => ViewEvent::HistoryItemClick(key),
            Err(e) => return writeln!(out, "{e}"),
        },
        Command::Delete(selector) => match selector.resolve(&controller.state().history) {
            Ok(key) => ViewEvent::HistoryItemDelete(key),
            Err(e) => return writeln!(out, "{e}"),
        },
        Command::History => {
            return write!(out, "{}", view::render_history(&controller.state().history, &Local));
        },
        Command::Help => return write!(out, "{HELP}"),
        Command::Quit => return Ok(()),
    };

    let dispatched = controller.dispatch(event);
    tokio::pin!(dispatched);

    let outcome = tokio::select! {
        outcome = &mut dispatched => outcome,
        () = tokio::time::sleep(LOADING_HINT_DELAY) => {
            let state = controller.state();
            if state.is_loading {
                if let Some(location) = &state.current_location {
                    writeln!(out, "Loading {location}...")?;
                }
            }
            dispatched.await
        },
    };

    debug!(?outcome, "Event handled");
    if outcome == EventOutcome::Ignored {
        return Ok(());
    }

    write!(out, "{}", view::render(&controller.state()))
}
