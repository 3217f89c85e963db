//! Datetime normalization for departure and arrival times.
//!
//! Users type flight times in whatever shape is convenient. This module tries
//! a fixed, ordered list of accepted patterns and rewrites the first match into
//! the single canonical form `YYYY-MM-DD HH:MM`. Times are naive wall-clock
//! values; no timezone is ever applied.
//!
//! Order matters: `01-02-2025 09:00` is read day-first because the
//! `DD-MM-YYYY` pattern is tried before anything else that could accept it.

use std::sync::OnceLock;

use chrono::{Datelike, NaiveDateTime};
use regex::Regex;
use thiserror::Error;
use tracing::trace;

/// The `chrono` format of a normalized datetime.
pub const NORMALIZED_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Why a datetime string could not be normalized.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateTimeError {
    /// The input was empty after trimming.
    #[error("Empty date/time.")]
    Empty,

    /// The input matched none of the accepted patterns.
    #[error("Use format like 2025-08-20 14:30")]
    Unrecognized,
}

/// One accepted input pattern.
#[derive(Debug)]
pub struct DateTimePattern {
    /// Human-readable layout, e.g. `DD-MM-YYYY HH:MM`.
    pub layout: &'static str,

    /// A literal example in this layout.
    pub example: &'static str,

    /// The `chrono` format used once the shape matches.
    format: &'static str,

    /// Shape guard: strict field widths that `chrono` alone would not enforce.
    shape: Regex,
}

impl DateTimePattern {
    /// Create a new pattern.
    ///
    /// # Panics
    ///
    /// Panics if the shape regex is invalid.
    #[must_use]
    pub fn new(
        layout: &'static str,
        example: &'static str,
        format: &'static str,
        shape: &str,
    ) -> Self {
        Self {
            layout,
            example,
            format,
            shape: Regex::new(shape).expect("Invalid datetime shape pattern"),
        }
    }

    /// Parse a trimmed input under this pattern.
    ///
    /// Returns `None` if the shape does not match or the values are not a real
    /// calendar date and time. Year zero is not a calendar year.
    #[must_use]
    pub fn parse(&self, input: &str) -> Option<NaiveDateTime> {
        if !self.shape.is_match(input) {
            return None;
        }
        // Separators match any run of whitespace; letters match in any case.
        let collapsed = input
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_ascii_uppercase();
        NaiveDateTime::parse_from_str(&collapsed, self.format)
            .ok()
            .filter(|dt| dt.year() >= 1)
    }
}

fn builtin_patterns() -> Vec<DateTimePattern> {
    vec![
        DateTimePattern::new(
            "YYYY-MM-DD HH:MM",
            "2025-08-20 14:30",
            "%Y-%m-%d %H:%M",
            r"^[0-9]{4}-[0-9]{1,2}-[0-9]{1,2}\s+[0-9]{1,2}:[0-9]{1,2}$",
        ),
        DateTimePattern::new(
            "YYYY-MM-DD HH:MM:SS",
            "2025-08-20 14:30:00",
            "%Y-%m-%d %H:%M:%S",
            r"^[0-9]{4}-[0-9]{1,2}-[0-9]{1,2}\s+[0-9]{1,2}:[0-9]{1,2}:[0-9]{1,2}$",
        ),
        DateTimePattern::new(
            "DD-MM-YYYY HH:MM",
            "20-08-2025 14:30",
            "%d-%m-%Y %H:%M",
            r"^[0-9]{1,2}-[0-9]{1,2}-[0-9]{4}\s+[0-9]{1,2}:[0-9]{1,2}$",
        ),
        DateTimePattern::new(
            "DD/MM/YYYY HH:MM",
            "20/08/2025 14:30",
            "%d/%m/%Y %H:%M",
            r"^[0-9]{1,2}/[0-9]{1,2}/[0-9]{4}\s+[0-9]{1,2}:[0-9]{1,2}$",
        ),
        DateTimePattern::new(
            "YYYY/MM/DD HH:MM",
            "2025/08/20 14:30",
            "%Y/%m/%d %H:%M",
            r"^[0-9]{4}/[0-9]{1,2}/[0-9]{1,2}\s+[0-9]{1,2}:[0-9]{1,2}$",
        ),
        DateTimePattern::new(
            "DD Mon YYYY HH:MM",
            "20 Aug 2025 14:30",
            "%d %b %Y %H:%M",
            r"^[0-9]{1,2}\s+[A-Za-z]{3}\s+[0-9]{4}\s+[0-9]{1,2}:[0-9]{1,2}$",
        ),
        DateTimePattern::new(
            "DD Month YYYY HH:MM",
            "20 August 2025 14:30",
            "%d %B %Y %H:%M",
            r"^[0-9]{1,2}\s+[A-Za-z]+\s+[0-9]{4}\s+[0-9]{1,2}:[0-9]{1,2}$",
        ),
        DateTimePattern::new(
            "YYYY-MM-DDTHH:MM",
            "2025-08-20T14:30",
            "%Y-%m-%dT%H:%M",
            r"^[0-9]{4}-[0-9]{1,2}-[0-9]{1,2}[Tt][0-9]{1,2}:[0-9]{1,2}$",
        ),
    ]
}

/// The accepted patterns, in the order they are tried.
#[must_use]
pub fn accepted_patterns() -> &'static [DateTimePattern] {
    static PATTERNS: OnceLock<Vec<DateTimePattern>> = OnceLock::new();
    PATTERNS.get_or_init(builtin_patterns)
}

/// Parse a raw datetime string into a naive datetime.
///
/// The input is trimmed first. The first accepted pattern that parses wins.
///
/// # Errors
///
/// Returns [`DateTimeError::Empty`] for blank input and
/// [`DateTimeError::Unrecognized`] if no pattern matches.
pub fn parse_datetime(input: &str) -> Result<NaiveDateTime, DateTimeError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(DateTimeError::Empty);
    }

    accepted_patterns()
        .iter()
        .find_map(|pattern| {
            let parsed = pattern.parse(trimmed);
            if parsed.is_some() {
                trace!(layout = pattern.layout, input = trimmed, "datetime matched");
            }
            parsed
        })
        .ok_or(DateTimeError::Unrecognized)
}

/// Normalize a raw datetime string to `YYYY-MM-DD HH:MM`.
///
/// # Examples
///
/// ```
/// use flightdesk::datetime::normalize_datetime;
///
/// assert_eq!(normalize_datetime("20-08-2025 14:30").unwrap(), "2025-08-20 14:30");
/// assert_eq!(normalize_datetime(" 2025-08-20T14:30 ").unwrap(), "2025-08-20 14:30");
/// ```
///
/// # Errors
///
/// Same as [`parse_datetime`].
pub fn normalize_datetime(input: &str) -> Result<String, DateTimeError> {
    parse_datetime(input).map(|dt| dt.format(NORMALIZED_FORMAT).to_string())
}
