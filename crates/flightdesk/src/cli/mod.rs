//! Command-line interface for flightdesk.
//!
//! This module provides the CLI structure, prompts and rendering for the
//! `flightdesk` binary.

mod commands;
pub mod output;
mod run;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{
    AddCommand, ClearCommand, ConfigCommand, DeleteCommand, FlightArgs, ListCommand,
    OutputFormat, ShowCommand, StatusCommand, UpdateCommand,
};
pub use run::{run_command, DELETE_QUESTION};

/// flightdesk - Record and manage flight schedules
///
/// Each subcommand is one action on the flight entry form: add a record,
/// update or delete a selected record, list all records, or load a record
/// into the form.
#[derive(Debug, Parser)]
#[command(name = "flightdesk")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for info, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Add a new flight record
    Add(AddCommand),

    /// Update a record; unspecified fields keep their stored values
    Update(UpdateCommand),

    /// Delete a record
    Delete(DeleteCommand),

    /// List all flight records
    #[command(visible_alias = "read")]
    List(ListCommand),

    /// Load a record into the form and print it
    Show(ShowCommand),

    /// Print a cleared form
    Clear(ClearCommand),

    /// List the accepted date/time formats
    Formats,

    /// Show store status
    Status(StatusCommand),

    /// View or validate configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Command {
    /// Whether this command needs the record store.
    #[must_use]
    pub fn needs_store(&self) -> bool {
        !matches!(self, Self::Formats | Self::Config(_))
    }
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> crate::logging::Verbosity {
        if self.quiet {
            crate::logging::Verbosity::Quiet
        } else {
            match self.verbose {
                0 => crate::logging::Verbosity::Normal,
                1 => crate::logging::Verbosity::Verbose,
                _ => crate::logging::Verbosity::Trace,
            }
        }
    }
}

/// Ask a yes/no question; anything but `y` or `yes` is a no.
///
/// # Errors
///
/// Returns an error if the prompt cannot be written or the answer read.
pub fn confirm<R: BufRead, W: Write>(input: &mut R, output: &mut W, question: &str) -> io::Result<bool> {
    write!(output, "{question} [y/N] ")?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    let answer = answer.trim();
    Ok(answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes"))
}
