//! Session commands
//!
//! Each line typed into a session is parsed into a [`SessionCommand`] and
//! executed against the [`Session`]. Missing form fields are passed through
//! as empty so that the ledger, not the parser, decides what is required.

use std::io::Write;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use crate::config::Settings;
use crate::display::{format_expense_list, format_expense_short, format_summary, format_total_line};
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Money, NewExpense};
use crate::services::DEFAULT_PALETTE;
use crate::session::Session;

/// One line of session input
#[derive(Parser, Debug)]
#[command(
    name = "expenses",
    no_binary_name = true,
    disable_version_flag = true,
    subcommand_required = true
)]
pub struct SessionLine {
    #[command(subcommand)]
    pub command: SessionCommand,
}

/// Commands available inside a session
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum SessionCommand {
    /// Record a new expense
    Add {
        /// Expense name
        #[arg(short, long)]
        name: Option<String>,
        /// Amount (e.g. "12.50")
        #[arg(short, long, allow_hyphen_values = true)]
        amount: Option<String>,
        /// Category name
        #[arg(short, long)]
        category: Option<String>,
        /// Expense date (defaults to today)
        #[arg(short, long)]
        date: Option<String>,
        /// Free-text description
        #[arg(short = 'm', long)]
        description: Option<String>,
    },

    /// Show the expenses that pass the current filter
    #[command(alias = "ls")]
    List,

    /// Remove an expense by its number in the last list
    #[command(alias = "rm")]
    Remove {
        /// Number shown in the `#` column
        position: usize,
    },

    /// Show or change the filter
    Filter {
        #[command(subcommand)]
        action: Option<FilterCommand>,
    },

    /// Category breakdown of the filtered expenses
    Summary {
        /// Emit chart data as JSON
        #[arg(long)]
        json: bool,
    },

    /// Total of all recorded expenses
    Total,

    /// List the available categories
    Categories,

    /// End the session
    #[command(alias = "exit")]
    Quit,
}

/// Filter subcommands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum FilterCommand {
    /// Show the current filter
    Show,
    /// Remove every filter constraint
    Clear,
    /// Only show one category (omit the name to show all)
    Category { name: Option<String> },
    /// Only show expenses on or after a date (omit to remove the bound)
    From { date: Option<String> },
    /// Only show expenses on or before a date (omit to remove the bound)
    To { date: Option<String> },
}

/// What the session loop should do next
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Quit,
}

/// Execute a session command, writing its output to `out`
pub fn execute<W: Write>(
    session: &mut Session,
    settings: &Settings,
    command: SessionCommand,
    today: NaiveDate,
    out: &mut W,
) -> ExpenseResult<Outcome> {
    let symbol = settings.currency_symbol.as_str();

    match command {
        SessionCommand::Add {
            name,
            amount,
            category,
            date,
            description,
        } => {
            let amount = amount
                .filter(|a| !a.trim().is_empty())
                .map(|a| Money::parse(&a))
                .transpose()
                .map_err(|e| ExpenseError::Parse(e.to_string()))?;
            let date = match date {
                Some(text) => parse_date(&text, &settings.date_format)?,
                None => today,
            };

            let input = NewExpense {
                name: name.unwrap_or_default(),
                amount,
                category: category.unwrap_or_default(),
                date: Some(date),
                description: description.unwrap_or_default(),
            };
            let record = session.add(input)?;
            writeln!(out, "Added: {}", format_expense_short(record, settings))?;
        }

        SessionCommand::List => {
            let visible = session.visible();
            if session.filter().is_active() {
                writeln!(out, "Filter: {}", session.filter())?;
                writeln!(
                    out,
                    "Showing {} of {} expenses",
                    visible.len(),
                    session.ledger().len()
                )?;
            }
            write!(out, "{}", format_expense_list(&visible, settings))?;
        }

        SessionCommand::Remove { position } => {
            let shown = session.visible().len();
            let index = position
                .checked_sub(1)
                .filter(|i| *i < shown)
                .ok_or(ExpenseError::IndexOutOfRange {
                    index: position,
                    len: shown,
                })?;
            let removed = session.remove_visible(index)?;
            writeln!(out, "Removed: {}", format_expense_short(&removed, settings))?;
        }

        SessionCommand::Filter { action } => {
            match action.unwrap_or(FilterCommand::Show) {
                FilterCommand::Show => {}
                FilterCommand::Clear => session.clear_filter(),
                FilterCommand::Category { name } => {
                    session.set_category_filter(name.as_deref())?
                }
                FilterCommand::From { date } => {
                    let from = date
                        .map(|d| parse_date(&d, &settings.date_format))
                        .transpose()?;
                    session.set_from(from);
                }
                FilterCommand::To { date } => {
                    let to = date
                        .map(|d| parse_date(&d, &settings.date_format))
                        .transpose()?;
                    session.set_to(to);
                }
            }
            writeln!(out, "Filter: {}", session.filter())?;
        }

        SessionCommand::Summary { json } => {
            let summary = session.summary()?;
            if json {
                let slices = summary.chart_slices(&DEFAULT_PALETTE);
                writeln!(out, "{}", serde_json::to_string_pretty(&slices)?)?;
            } else {
                write!(out, "{}", format_summary(&summary, settings))?;
            }
        }

        SessionCommand::Total => {
            write!(out, "{}", format_total_line("Total Expense", session.total(), symbol))?;
        }

        SessionCommand::Categories => {
            for category in session.categories().iter() {
                writeln!(out, "{}", category)?;
            }
        }

        SessionCommand::Quit => return Ok(Outcome::Quit),
    }

    Ok(Outcome::Continue)
}

/// Parse a date in the configured format, falling back to ISO 8601
pub fn parse_date(text: &str, format: &str) -> ExpenseResult<NaiveDate> {
    let text = text.trim();
    NaiveDate::parse_from_str(text, format)
        .or_else(|_| NaiveDate::parse_from_str(text, "%Y-%m-%d"))
        .map_err(|_| ExpenseError::Parse(format!("Invalid date '{}' (expected {})", text, format)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CategorySet;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    fn parse(line: &str) -> SessionCommand {
        let words = shell_words::split(line).unwrap();
        SessionLine::try_parse_from(words).unwrap().command
    }

    fn run(session: &mut Session, line: &str) -> ExpenseResult<String> {
        let mut out = Vec::new();
        execute(session, &Settings::default(), parse(line), today(), &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_parse_add() {
        let command = parse(r#"add -n Lunch -a 12.50 -c Food -d 2024-01-05 -m "Soup and bread""#);
        assert_eq!(
            command,
            SessionCommand::Add {
                name: Some("Lunch".into()),
                amount: Some("12.50".into()),
                category: Some("Food".into()),
                date: Some("2024-01-05".into()),
                description: Some("Soup and bread".into()),
            }
        );
    }

    #[test]
    fn test_parse_aliases() {
        assert_eq!(parse("ls"), SessionCommand::List);
        assert_eq!(parse("rm 2"), SessionCommand::Remove { position: 2 });
        assert_eq!(parse("exit"), SessionCommand::Quit);
        assert_eq!(parse("filter"), SessionCommand::Filter { action: None });
    }

    #[test]
    fn test_add_defaults_date_to_today() {
        let mut session = Session::new(CategorySet::default());
        let output = run(&mut session, "add -n Tea -a 2 -c food -m chai").unwrap();
        assert!(output.contains("Added: 2024-06-01 Tea ₹2.00 (Food)"));
        assert_eq!(session.ledger().records()[0].date(), today());
    }

    #[test]
    fn test_add_missing_fields_is_validation_error() {
        let mut session = Session::new(CategorySet::default());
        let err = run(&mut session, "add -n Tea -c Food").unwrap_err();
        assert!(err.is_validation());
        assert_eq!(
            err.to_string(),
            "Validation error: All fields must be filled (missing: amount, description)"
        );
        assert!(session.ledger().is_empty());
    }

    #[test]
    fn test_add_bad_amount_is_parse_error() {
        let mut session = Session::new(CategorySet::default());
        let err = run(&mut session, "add -n Tea -a lots -c Food -m x").unwrap_err();
        assert!(matches!(err, ExpenseError::Parse(_)));
    }

    #[test]
    fn test_remove_uses_displayed_numbers() {
        let mut session = Session::new(CategorySet::default());
        run(&mut session, "add -n Rent -a 900 -c Rent -m flat").unwrap();
        run(&mut session, "add -n Lunch -a 10 -c Food -m soup").unwrap();
        run(&mut session, "filter category food").unwrap();

        let output = run(&mut session, "rm 1").unwrap();
        assert!(output.contains("Removed:"));
        assert!(output.contains("Lunch"));
        assert_eq!(session.total(), Money::from_units(900));

        let err = run(&mut session, "rm 1").unwrap_err();
        assert!(matches!(err, ExpenseError::IndexOutOfRange { index: 1, len: 0 }));
        let err = run(&mut session, "rm 0").unwrap_err();
        assert!(err.is_index_out_of_range());
    }

    #[test]
    fn test_filter_commands() {
        let mut session = Session::new(CategorySet::default());
        let output = run(&mut session, "filter from 2024-02-01").unwrap();
        assert_eq!(output, "Filter: category: any, from: 2024-02-01, to: any\n");

        run(&mut session, "filter to 2024-03-01").unwrap();
        run(&mut session, "filter from").unwrap();
        assert_eq!(session.filter().date_range.from, None);
        assert!(session.filter().date_range.to.is_some());

        assert!(run(&mut session, "filter category Travel").is_err());
        assert!(run(&mut session, "filter to tomorrow").is_err());

        run(&mut session, "filter clear").unwrap();
        assert!(!session.filter().is_active());
    }

    #[test]
    fn test_summary_json() {
        let mut session = Session::new(CategorySet::default());
        run(&mut session, "add -n A -a 30 -c Food -m x").unwrap();
        run(&mut session, "add -n B -a 10 -c Rent -m y").unwrap();

        let output = run(&mut session, "summary --json").unwrap();
        let slices: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(slices[0]["label"], "Food");
        assert_eq!(slices[0]["value"], 30.0);
        assert_eq!(slices[0]["color"], "#FF5733");
        assert_eq!(slices[1]["label"], "Rent");
        assert_eq!(slices[1]["percentage"], 25.0);
    }

    #[test]
    fn test_total_and_quit() {
        let mut session = Session::new(CategorySet::default());
        run(&mut session, "add -n A -a 30 -c Food -m x").unwrap();
        assert!(run(&mut session, "total").unwrap().contains("₹30.00"));

        let mut out = Vec::new();
        let outcome =
            execute(&mut session, &Settings::default(), SessionCommand::Quit, today(), &mut out)
                .unwrap();
        assert_eq!(outcome, Outcome::Quit);
    }

    #[test]
    fn test_parse_date_formats() {
        assert_eq!(
            parse_date("05/01/2024", "%d/%m/%Y").unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 5).unwrap()
        );
        assert_eq!(
            parse_date("2024-01-05", "%d/%m/%Y").unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 5).unwrap()
        );
        assert!(parse_date("2024-13-05", "%Y-%m-%d").is_err());
    }
}
