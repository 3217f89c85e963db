//! Command execution against an open flight store.

use std::io::Write;

use tracing::warn;

use super::output::{render_form, render_formats, render_plain, render_table};
use super::{Command, OutputFormat};
use crate::desk::{DeleteOutcome, FlightDesk};
use crate::error::Result;
use crate::flight::FlightForm;
use crate::store::SqliteStore;

/// Question asked before a record is deleted.
pub const DELETE_QUESTION: &str = "Are you sure you want to delete this record?";

/// Run one command, writing its report to `out`.
///
/// `ask` is consulted for delete confirmation unless `--yes` was given.
/// `config` subcommands need no store and are left to the caller.
///
/// # Errors
///
/// Returns the desk's validation, selection or store error, or an I/O error
/// if `out` cannot be written.
pub fn run_command<W: Write>(
    desk: &mut FlightDesk<SqliteStore>,
    command: Command,
    out: &mut W,
    ask: impl FnOnce(&str) -> bool,
) -> Result<()> {
    match command {
        Command::Add(cmd) => {
            let mut form = desk.clear();
            cmd.fields.apply_to(&mut form);
            let id = desk.add(&form)?;
            writeln!(out, "Flight record inserted successfully! (id {id})")?;
        }
        Command::Update(cmd) => {
            let mut form = match cmd.id {
                Some(id) => desk.select(id)?,
                None => desk.clear(),
            };
            if cmd.fields.is_empty() {
                warn!("no fields given; record will be rewritten unchanged");
            }
            cmd.fields.apply_to(&mut form);
            desk.update(cmd.id, &form)?;
            writeln!(out, "Flight record updated successfully!")?;
        }
        Command::Delete(cmd) => {
            let yes = cmd.yes;
            let outcome = desk.delete(cmd.id, || yes || ask(DELETE_QUESTION))?;
            match outcome {
                DeleteOutcome::Deleted => writeln!(out, "Flight record deleted successfully!")?,
                DeleteOutcome::Cancelled => writeln!(out, "Delete cancelled.")?,
            }
        }
        Command::List(cmd) => {
            let records = desk.read()?;
            match cmd.format {
                OutputFormat::Table => writeln!(out, "{}", render_table(&records))?,
                OutputFormat::Plain => {
                    if !records.is_empty() {
                        writeln!(out, "{}", render_plain(&records))?;
                    }
                }
                OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(&records)?)?,
            }
        }
        Command::Show(cmd) => {
            let form = desk.select(cmd.id)?;
            write_form(out, &form, cmd.json)?;
        }
        Command::Clear(cmd) => write_form(out, &desk.clear(), cmd.json)?,
        Command::Formats => writeln!(out, "{}", render_formats())?,
        Command::Status(cmd) => {
            let stats = desk.store().stats()?;
            let path = desk.store().path();
            if cmd.json {
                let status = serde_json::json!({
                    "database_path": path,
                    "total_flights": stats.total_flights,
                    "db_size_bytes": stats.db_size_bytes,
                });
                writeln!(out, "{}", serde_json::to_string_pretty(&status)?)?;
            } else {
                writeln!(out, "flightdesk status")?;
                writeln!(out, "-----------------")?;
                writeln!(out, "Database:      {}", path.display())?;
                writeln!(out, "Flights:       {}", stats.total_flights)?;
                writeln!(out, "Size (bytes):  {}", stats.db_size_bytes)?;
            }
        }
        Command::Config(_) => {}
    }
    Ok(())
}

fn write_form<W: Write>(out: &mut W, form: &FlightForm, json: bool) -> Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(form)?)?;
    } else {
        writeln!(out, "{}", render_form(form))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;
    use crate::cli::Cli;
    use crate::error::Error;
    use crate::flight::{FlightRecord, FlightStatus, RecordId};
    use crate::logging::init_test_logging;
    use crate::store::FlightStore;

    const AI203: [&str; 14] = [
        "--flight-no",
        "AI203",
        "--airline",
        "Air India",
        "--origin",
        "DEL",
        "--destination",
        "BOM",
        "--departure",
        "20-08-2025 14:30",
        "--arrival",
        "2025-08-20 16:45",
        "--gate",
        "T3-G12",
    ];

    fn desk() -> FlightDesk<SqliteStore> {
        init_test_logging();
        FlightDesk::new(SqliteStore::open_in_memory().unwrap())
    }

    fn command(args: &[&str]) -> Command {
        let argv = std::iter::once("flightdesk").chain(args.iter().copied());
        Cli::try_parse_from(argv).unwrap().command
    }

    /// Run a command line, returning its output.
    fn run(desk: &mut FlightDesk<SqliteStore>, args: &[&str]) -> Result<String> {
        run_answering(desk, args, false)
    }

    fn run_answering(
        desk: &mut FlightDesk<SqliteStore>,
        args: &[&str],
        answer: bool,
    ) -> Result<String> {
        let mut out = Vec::new();
        run_command(desk, command(args), &mut out, |_| answer)?;
        Ok(String::from_utf8(out).unwrap())
    }

    fn add_ai203(desk: &mut FlightDesk<SqliteStore>) {
        let mut args = vec!["add"];
        args.extend(AI203);
        run(desk, &args).unwrap();
    }

    fn only_record(desk: &FlightDesk<SqliteStore>) -> FlightRecord {
        let mut records = desk.read().unwrap();
        assert_eq!(records.len(), 1);
        records.remove(0)
    }

    #[test]
    fn test_add_reports_new_id() {
        let mut desk = desk();
        let mut args = vec!["add"];
        args.extend(AI203);

        let out = run(&mut desk, &args).unwrap();
        assert_eq!(out, "Flight record inserted successfully! (id 1)\n");

        let record = only_record(&desk);
        assert_eq!(record.flight.departure, "2025-08-20 14:30");
        assert_eq!(record.flight.status, FlightStatus::Scheduled);
    }

    #[test]
    fn test_add_with_missing_fields() {
        let mut desk = desk();
        let err = run(&mut desk, &["add", "--flight-no", "AI203"]).unwrap_err();
        assert!(err.is_validation_error());
        assert_eq!(desk.store().count().unwrap(), 0);
    }

    #[test]
    fn test_update_overlays_given_flags_on_stored_record() {
        let mut desk = desk();
        add_ai203(&mut desk);

        let out = run(&mut desk, &["update", "1", "--status", "Delayed"]).unwrap();
        assert_eq!(out, "Flight record updated successfully!\n");

        let record = only_record(&desk);
        assert_eq!(record.id, RecordId::new(1));
        assert_eq!(record.flight.status, FlightStatus::Delayed);
        assert_eq!(record.flight.flight_no, "AI203");
        assert_eq!(record.flight.gate, "T3-G12");
        assert_eq!(record.flight.arrival, "2025-08-20 16:45");
    }

    #[test]
    fn test_update_normalizes_new_time() {
        let mut desk = desk();
        add_ai203(&mut desk);

        run(&mut desk, &["update", "1", "--arrival", "20 Aug 2025 17:05"]).unwrap();
        assert_eq!(only_record(&desk).flight.arrival, "2025-08-20 17:05");
    }

    #[test]
    fn test_update_rejects_bad_value_and_keeps_record() {
        let mut desk = desk();
        add_ai203(&mut desk);

        let err = run(&mut desk, &["update", "1", "--departure", "soon"]).unwrap_err();
        assert!(err.is_validation_error());
        assert_eq!(only_record(&desk).flight.departure, "2025-08-20 14:30");
    }

    #[test]
    fn test_update_without_id_is_selection_error() {
        let mut desk = desk();
        add_ai203(&mut desk);

        let err = run(&mut desk, &["update", "--status", "Delayed"]).unwrap_err();
        assert!(err.is_selection_error());
        assert_eq!(only_record(&desk).flight.status, FlightStatus::Scheduled);
    }

    #[test]
    fn test_update_unknown_id() {
        let mut desk = desk();
        let err = run(&mut desk, &["update", "9", "--status", "Delayed"]).unwrap_err();
        assert!(matches!(err, Error::RecordNotFound { .. }));
    }

    #[test]
    fn test_delete_asks_and_respects_answer() {
        let mut desk = desk();
        add_ai203(&mut desk);

        let out = run_answering(&mut desk, &["delete", "1"], false).unwrap();
        assert_eq!(out, "Delete cancelled.\n");
        assert_eq!(desk.store().count().unwrap(), 1);

        let out = run_answering(&mut desk, &["delete", "1"], true).unwrap();
        assert_eq!(out, "Flight record deleted successfully!\n");
        assert_eq!(desk.store().count().unwrap(), 0);
    }

    #[test]
    fn test_delete_yes_skips_question() {
        let mut desk = desk();
        add_ai203(&mut desk);

        let mut out = Vec::new();
        run_command(&mut desk, command(&["delete", "1", "--yes"]), &mut out, |_| {
            panic!("should not ask")
        })
        .unwrap();
        assert_eq!(desk.store().count().unwrap(), 0);
    }

    #[test]
    fn test_list_formats() {
        let mut desk = desk();
        assert_eq!(run(&mut desk, &["list"]).unwrap(), "No flight records.\n");
        assert_eq!(run(&mut desk, &["list", "-f", "plain"]).unwrap(), "");

        add_ai203(&mut desk);
        let table = run(&mut desk, &["read"]).unwrap();
        assert!(table.starts_with("ID"));
        assert!(table.contains("AI203"));

        let json = run(&mut desk, &["list", "--format", "json"]).unwrap();
        let parsed: Vec<FlightRecord> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, desk.read().unwrap());
    }

    #[test]
    fn test_show_and_clear() {
        let mut desk = desk();
        add_ai203(&mut desk);

        let shown = run(&mut desk, &["show", "1"]).unwrap();
        assert!(shown.starts_with("Flight No:      AI203"));

        let json = run(&mut desk, &["show", "1", "--json"]).unwrap();
        let form: FlightForm = serde_json::from_str(&json).unwrap();
        assert_eq!(form.departure, "2025-08-20 14:30");

        let cleared = run(&mut desk, &["clear"]).unwrap();
        assert!(cleared.contains("Status:         Scheduled"));
    }

    #[test]
    fn test_status_json() {
        let mut desk = desk();
        add_ai203(&mut desk);

        let json = run(&mut desk, &["status", "--json"]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["total_flights"], 1);
        assert_eq!(value["database_path"], ":memory:");
    }

    #[test]
    fn test_formats() {
        let mut desk = desk();
        let out = run(&mut desk, &["formats"]).unwrap();
        assert!(out.contains("YYYY-MM-DDTHH:MM"));
    }
}
