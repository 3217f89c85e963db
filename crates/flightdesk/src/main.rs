//! `flightdesk` - CLI for recording flight schedules
//!
//! This binary opens the flight store once, runs a single form action against
//! it, and reports the outcome.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::io;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::{error, warn};

use flightdesk::cli::output::render_formats;
use flightdesk::cli::{confirm, run_command, Cli, Command, ConfigCommand};
use flightdesk::{init_logging, Config, FlightDesk, SqliteStore, Validator};

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    init_logging(cli.verbosity());

    let config = Config::load_from(cli.config.clone()).context("failed to load configuration")?;

    if !cli.command.needs_store() {
        match cli.command {
            Command::Formats => println!("{}", render_formats()),
            Command::Config(cmd) => handle_config(&config, cmd)?,
            _ => {}
        }
        return Ok(ExitCode::SUCCESS);
    }

    // The store is opened once; failing here ends the process.
    let path = config.database_path();
    let store = SqliteStore::open(&path)
        .with_context(|| format!("failed to open flight store at {}", path.display()))?;
    let mut desk = FlightDesk::with_validator(store, Validator::new(config.validation()));

    match run_command(&mut desk, cli.command, &mut io::stdout(), ask) {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(err) => {
            error!(error = %err, "action failed");
            eprintln!("{}: {err}", err.title());
            Ok(ExitCode::FAILURE)
        }
    }
}

fn ask(question: &str) -> bool {
    confirm(&mut io::stdin().lock(), &mut io::stdout(), question).unwrap_or_else(|e| {
        warn!(error = %e, "could not read confirmation; treating as no");
        false
    })
}

fn handle_config(config: &Config, cmd: ConfigCommand) -> anyhow::Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Storage]");
                println!("  Database path:            {}", config.database_path().display());
                println!();
                println!("[Validation]");
                println!(
                    "  Arrival after departure:  {}",
                    config.validation.arrival_after_departure
                );
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path = file.unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            match Config::load_from(Some(path)) {
                Ok(_) => println!("Configuration is valid."),
                Err(e) => println!("Configuration error: {e}"),
            }
        }
    }
    Ok(())
}
