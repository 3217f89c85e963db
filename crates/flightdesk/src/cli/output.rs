//! Rendering of records and forms for the terminal.

use std::fmt::Write as _;

use crate::datetime::accepted_patterns;
use crate::flight::{FlightForm, FlightRecord};

/// Column headings of the record table.
pub const TABLE_HEADINGS: [&str; 9] = [
    "ID",
    "Flight No",
    "Airline",
    "Origin",
    "Destination",
    "Departure",
    "Arrival",
    "Status",
    "Gate/Terminal",
];

fn table_row(record: &FlightRecord) -> [String; 9] {
    let flight = &record.flight;
    [
        record.id.to_string(),
        flight.flight_no.clone(),
        flight.airline.clone(),
        flight.origin.clone(),
        flight.destination.clone(),
        flight.departure.clone(),
        flight.arrival.clone(),
        flight.status.to_string(),
        flight.gate.clone(),
    ]
}

/// Render records as an aligned table with a heading row.
#[must_use]
pub fn render_table(records: &[FlightRecord]) -> String {
    if records.is_empty() {
        return "No flight records.".to_string();
    }

    let rows: Vec<[String; 9]> = records.iter().map(table_row).collect();

    let mut widths = TABLE_HEADINGS.map(|heading| heading.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &TABLE_HEADINGS, &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_row(&mut out, &rule, &widths);
    for row in &rows {
        push_row(&mut out, row, &widths);
    }
    out.truncate(out.trim_end().len());
    out
}

fn push_row<S: AsRef<str>>(out: &mut String, cells: &[S], widths: &[usize]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell.as_ref(), width = *width))
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(line.trim_end());
    out.push('\n');
}

/// Render records one per line.
#[must_use]
pub fn render_plain(records: &[FlightRecord]) -> String {
    records
        .iter()
        .map(|record| {
            let f = &record.flight;
            format!(
                "#{} {} ({}) {} -> {} dep {} arr {} [{}] gate {}",
                record.id,
                f.flight_no,
                f.airline,
                f.origin,
                f.destination,
                f.departure,
                f.arrival,
                f.status,
                f.gate
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render a form as labelled fields.
#[must_use]
pub fn render_form(form: &FlightForm) -> String {
    let mut out = String::new();
    for (label, value) in form.fields() {
        let _ = writeln!(out, "{:<15} {value}", format!("{label}:"));
    }
    out.truncate(out.trim_end_matches('\n').len());
    out
}

/// Render the accepted datetime layouts with an example each.
#[must_use]
pub fn render_formats() -> String {
    let mut out = String::from("Accepted date/time formats (tried in this order):\n");
    for (i, pattern) in accepted_patterns().iter().enumerate() {
        let _ = writeln!(out, "  {}. {:<22} e.g. {}", i + 1, pattern.layout, pattern.example);
    }
    out.push_str("All times are stored as YYYY-MM-DD HH:MM.");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flight::{FlightStatus, NewFlight, RecordId};

    fn record(id: i64, flight_no: &str, airline: &str) -> FlightRecord {
        FlightRecord::new(
            RecordId::new(id),
            NewFlight {
                flight_no: flight_no.to_string(),
                airline: airline.to_string(),
                origin: "DEL".to_string(),
                destination: "BOM".to_string(),
                departure: "2025-08-20 14:30".to_string(),
                arrival: "2025-08-20 16:45".to_string(),
                status: FlightStatus::Scheduled,
                gate: "T3-G12".to_string(),
            },
        )
    }

    #[test]
    fn test_render_table_empty() {
        assert_eq!(render_table(&[]), "No flight records.");
    }

    #[test]
    fn test_render_table_layout() {
        let table = render_table(&[record(1, "AI203", "Air India"), record(2, "6E5", "IndiGo")]);
        let lines: Vec<_> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("ID  Flight No  Airline"));
        assert!(lines[0].ends_with("Gate/Terminal"));
        assert!(lines[1].starts_with("--  ---------"));
        assert!(lines[2].starts_with("1   AI203      Air India"));
        assert!(lines[3].starts_with("2   6E5        IndiGo"));
    }

    #[test]
    fn test_render_table_columns_align() {
        let table = render_table(&[record(1, "AI203", "Air India"), record(10, "X", "Y")]);
        let status_columns: Vec<_> = table
            .lines()
            .filter(|line| !line.starts_with('-'))
            .map(|line| line.find("Status").or_else(|| line.find("Scheduled")))
            .collect();
        assert!(status_columns.iter().all(|c| c.is_some()));
        assert!(status_columns.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn test_render_plain() {
        let text = render_plain(&[record(3, "AI203", "Air India")]);
        assert_eq!(
            text,
            "#3 AI203 (Air India) DEL -> BOM dep 2025-08-20 14:30 arr 2025-08-20 16:45 [Scheduled] gate T3-G12"
        );
        assert_eq!(render_plain(&[]), "");
    }

    #[test]
    fn test_render_form() {
        let text = render_form(&FlightForm::from(&record(1, "AI203", "Air India")));
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], "Flight No:      AI203");
        assert_eq!(lines[7], "Gate/Terminal:  T3-G12");
    }

    #[test]
    fn test_render_cleared_form() {
        let text = render_form(&FlightForm::default());
        assert!(text.contains("Status:         Scheduled"));
    }

    #[test]
    fn test_render_formats_lists_all_patterns() {
        let text = render_formats();
        for pattern in accepted_patterns() {
            assert!(text.contains(pattern.layout));
            assert!(text.contains(pattern.example));
        }
        assert!(text.contains("1. YYYY-MM-DD HH:MM"));
    }
}
