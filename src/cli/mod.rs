//! CLI command handlers
//!
//! This module contains the interactive session: parsing typed lines with
//! clap and running them against a [`Session`](crate::session::Session).

pub mod commands;
pub mod session;

pub use commands::{execute, FilterCommand, Outcome, SessionCommand, SessionLine};
pub use session::{handle_line, run_session};
