//! Interactive session loop
//!
//! Reads commands line by line until `quit` or end of input. Command errors
//! are reported and the loop carries on; only failures to write output end
//! the session early.

use std::io::{BufRead, Write};

use chrono::{Local, NaiveDate};
use clap::error::ErrorKind;
use clap::Parser;
use tracing::{debug, info};

use crate::config::Settings;
use crate::error::ExpenseResult;
use crate::session::Session;

use super::commands::{execute, Outcome, SessionLine};

const PROMPT: &str = "expenses> ";

/// Run a session over `input`, writing everything to `out`
///
/// The prompt is only printed when `interactive` is set.
pub fn run_session<R: BufRead, W: Write>(
    session: &mut Session,
    settings: &Settings,
    input: R,
    out: &mut W,
    interactive: bool,
) -> ExpenseResult<()> {
    info!(categories = session.categories().len(), "session started");
    if interactive {
        writeln!(out, "Expense ledger. Type 'help' for commands, 'quit' to leave.")?;
    }

    let mut lines = input.lines();
    loop {
        if interactive {
            write!(out, "{}", PROMPT)?;
            out.flush()?;
        }

        let Some(line) = lines.next() else { break };
        let line = line?;
        if handle_line(session, settings, &line, today(), out)? == Outcome::Quit {
            break;
        }
    }

    info!(expenses = session.ledger().len(), "session ended");
    Ok(())
}

/// Parse and execute one input line
pub fn handle_line<W: Write>(
    session: &mut Session,
    settings: &Settings,
    line: &str,
    today: NaiveDate,
    out: &mut W,
) -> ExpenseResult<Outcome> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(Outcome::Continue);
    }

    let words = match shell_words::split(line) {
        Ok(words) => words,
        Err(e) => {
            writeln!(out, "error: {}", e)?;
            return Ok(Outcome::Continue);
        }
    };

    let command = match SessionLine::try_parse_from(words) {
        Ok(parsed) => parsed.command,
        Err(e) => {
            if !matches!(e.kind(), ErrorKind::DisplayHelp) {
                debug!(line, "unparsed input");
            }
            write!(out, "{}", e.render())?;
            return Ok(Outcome::Continue);
        }
    };

    match execute(session, settings, command, today, out) {
        Ok(outcome) => Ok(outcome),
        Err(e) => {
            writeln!(out, "error: {}", e)?;
            Ok(Outcome::Continue)
        }
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}
