use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use expense_ledger::cli::run_session;
use expense_ledger::config::{ExpensePaths, Settings};
use expense_ledger::logging;
use expense_ledger::Session;

#[derive(Parser)]
#[command(
    name = "expenses",
    version,
    about = "Record expenses, filter them and see where the money went",
    long_about = "An interactive expense ledger. Add expenses, filter them by \
                  category and date range, and view a per-category breakdown. \
                  Expenses live only for the duration of the session."
)]
struct Cli {
    /// Settings file (defaults to config.json in the data directory)
    #[arg(long, global = true, env = "EXPENSE_LEDGER_CONFIG")]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive session (default)
    Session,

    /// List the configured categories
    Categories,

    /// Show the settings file location and effective settings
    Config,

    /// Write a default settings file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let settings_file = match &cli.config {
        Some(path) => path.clone(),
        None => ExpensePaths::new()?.settings_file(),
    };
    let settings = Settings::load_from(&settings_file)?;
    logging::init_tracing(cli.verbose, settings.log_filter.as_deref());

    match cli.command.unwrap_or(Commands::Session) {
        Commands::Session => {
            settings.validate()?;
            let mut session = Session::new(settings.category_set()?);
            let stdin = io::stdin();
            let interactive = stdin.is_terminal();
            let mut stdout = io::stdout().lock();
            run_session(&mut session, &settings, stdin.lock(), &mut stdout, interactive)?;
        }
        Commands::Categories => {
            for category in settings.category_set()?.iter() {
                println!("{}", category);
            }
        }
        Commands::Config => {
            println!("Settings file: {}", settings_file.display());
            println!("Exists: {}", settings_file.exists());
            println!("{}", serde_json::to_string_pretty(&settings)?);
        }
        Commands::Init { force } => handle_init(&settings_file, force)?,
    }

    Ok(())
}

fn handle_init(settings_file: &Path, force: bool) -> Result<()> {
    if settings_file.exists() && !force {
        println!(
            "Settings already exist at {} (use --force to overwrite)",
            settings_file.display()
        );
        return Ok(());
    }

    if let Some(parent) = settings_file.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    Settings::default().save_to(settings_file)?;
    println!("Wrote default settings to {}", settings_file.display());
    Ok(())
}
