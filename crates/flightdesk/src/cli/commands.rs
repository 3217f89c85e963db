//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands.

use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

use crate::flight::{FlightForm, RecordId};

/// The eight form fields as command-line flags.
///
/// Every flag is optional at the parser level so that blank or missing
/// values are reported by the validator, the same way an empty form field is.
#[derive(Debug, Clone, Default, Args)]
pub struct FlightArgs {
    /// Flight number (e.g. AI203)
    #[arg(long)]
    pub flight_no: Option<String>,

    /// Airline name
    #[arg(long)]
    pub airline: Option<String>,

    /// Origin city or airport
    #[arg(long)]
    pub origin: Option<String>,

    /// Destination city or airport
    #[arg(long)]
    pub destination: Option<String>,

    /// Departure date and time (e.g. "2025-08-20 14:30"; see `formats`)
    #[arg(long)]
    pub departure: Option<String>,

    /// Arrival date and time
    #[arg(long)]
    pub arrival: Option<String>,

    /// Status: Scheduled, Delayed, Cancelled, Departed or Arrived
    #[arg(long)]
    pub status: Option<String>,

    /// Gate or terminal (e.g. T3-G12)
    #[arg(long)]
    pub gate: Option<String>,
}

impl FlightArgs {
    /// Overwrite the form fields that were given on the command line.
    pub fn apply_to(&self, form: &mut FlightForm) {
        let pairs = [
            (&self.flight_no, &mut form.flight_no),
            (&self.airline, &mut form.airline),
            (&self.origin, &mut form.origin),
            (&self.destination, &mut form.destination),
            (&self.departure, &mut form.departure),
            (&self.arrival, &mut form.arrival),
            (&self.status, &mut form.status),
            (&self.gate, &mut form.gate),
        ];
        for (arg, field) in pairs {
            if let Some(value) = arg {
                field.clone_from(value);
            }
        }
    }

    /// Check whether any field flag was given.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        [
            &self.flight_no,
            &self.airline,
            &self.origin,
            &self.destination,
            &self.departure,
            &self.arrival,
            &self.status,
            &self.gate,
        ]
        .iter()
        .all(|arg| arg.is_none())
    }
}

/// Add command arguments.
#[derive(Debug, Args)]
pub struct AddCommand {
    /// Form fields
    #[command(flatten)]
    pub fields: FlightArgs,
}

/// Update command arguments.
#[derive(Debug, Args)]
pub struct UpdateCommand {
    /// Record to update
    pub id: Option<RecordId>,

    /// Fields to change; the rest keep their stored values
    #[command(flatten)]
    pub fields: FlightArgs,
}

/// Delete command arguments.
#[derive(Debug, Args)]
pub struct DeleteCommand {
    /// Record to delete
    pub id: Option<RecordId>,

    /// Skip confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

/// List command arguments.
#[derive(Debug, Args)]
pub struct ListCommand {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

/// Show command arguments.
#[derive(Debug, Args)]
pub struct ShowCommand {
    /// Record to load into the form
    pub id: RecordId,

    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Clear command arguments.
#[derive(Debug, Args)]
pub struct ClearCommand {
    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Status command arguments.
#[derive(Debug, Args)]
pub struct StatusCommand {
    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate configuration
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

/// Output format for listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// One line per record
    Plain,
    /// Aligned table with headings
    #[default]
    Table,
    /// JSON array
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_to_overwrites_given_fields_only() {
        let mut form = FlightForm {
            flight_no: "AI203".to_string(),
            airline: "Air India".to_string(),
            origin: "DEL".to_string(),
            destination: "BOM".to_string(),
            departure: "2025-08-20 14:30".to_string(),
            arrival: "2025-08-20 16:45".to_string(),
            status: "Scheduled".to_string(),
            gate: "T3-G12".to_string(),
        };
        let args = FlightArgs {
            status: Some("Delayed".to_string()),
            gate: Some("T3-G14".to_string()),
            ..FlightArgs::default()
        };

        args.apply_to(&mut form);

        assert_eq!(form.status, "Delayed");
        assert_eq!(form.gate, "T3-G14");
        assert_eq!(form.flight_no, "AI203");
        assert_eq!(form.departure, "2025-08-20 14:30");
    }

    #[test]
    fn test_apply_to_cleared_form_keeps_default_status() {
        let mut form = FlightForm::default();
        let args = FlightArgs {
            flight_no: Some("AI203".to_string()),
            ..FlightArgs::default()
        };

        args.apply_to(&mut form);

        assert_eq!(form.flight_no, "AI203");
        assert_eq!(form.status, "Scheduled");
        assert!(form.airline.is_empty());
    }

    #[test]
    fn test_apply_to_can_blank_a_field() {
        let mut form = FlightForm::default();
        form.gate = "T3-G12".to_string();
        let args = FlightArgs {
            gate: Some(String::new()),
            ..FlightArgs::default()
        };

        args.apply_to(&mut form);
        assert!(form.gate.is_empty());
    }

    #[test]
    fn test_flight_args_is_empty() {
        assert!(FlightArgs::default().is_empty());
        let args = FlightArgs {
            arrival: Some("2025-08-20 16:45".to_string()),
            ..FlightArgs::default()
        };
        assert!(!args.is_empty());
    }

    #[test]
    fn test_output_format_default() {
        assert_eq!(OutputFormat::default(), OutputFormat::Table);
    }
}
