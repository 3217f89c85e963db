//! Core flight record types.
//!
//! This module defines the flight record as stored, the validated record that
//! is about to be stored, and the raw form the user fills in.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Operational status of a flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FlightStatus {
    /// On schedule.
    #[default]
    Scheduled,
    /// Running late.
    Delayed,
    /// Will not operate.
    Cancelled,
    /// Has left the origin.
    Departed,
    /// Has reached the destination.
    Arrived,
}

impl FlightStatus {
    /// All statuses, in the order they are offered to the user.
    pub const ALL: [Self; 5] = [
        Self::Scheduled,
        Self::Delayed,
        Self::Cancelled,
        Self::Departed,
        Self::Arrived,
    ];

    /// The display name, which is also the stored value.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Scheduled => "Scheduled",
            Self::Delayed => "Delayed",
            Self::Cancelled => "Cancelled",
            Self::Departed => "Departed",
            Self::Arrived => "Arrived",
        }
    }
}

impl fmt::Display for FlightStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not one of the five status names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStatus(pub String);

impl fmt::Display for UnknownStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown flight status '{}'", self.0)
    }
}

impl std::error::Error for UnknownStatus {}

impl FromStr for FlightStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

/// Identifier assigned by the store when a record is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(i64);

impl RecordId {
    /// Wrap a raw store identifier.
    #[must_use]
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// The raw store identifier.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RecordId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

/// A validated flight, ready to be written to the store.
///
/// Every field is non-empty and both times are in normalized
/// `YYYY-MM-DD HH:MM` form. Only the validator builds these from user input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewFlight {
    /// Flight number, e.g. `AI203`.
    pub flight_no: String,
    /// Operating airline.
    pub airline: String,
    /// Origin city or airport.
    pub origin: String,
    /// Destination city or airport.
    pub destination: String,
    /// Normalized departure time.
    pub departure: String,
    /// Normalized arrival time.
    pub arrival: String,
    /// Current status.
    pub status: FlightStatus,
    /// Gate or terminal, free-form.
    pub gate: String,
}

/// A flight record as held by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightRecord {
    /// Store-assigned identifier.
    pub id: RecordId,
    /// The record's fields.
    #[serde(flatten)]
    pub flight: NewFlight,
}

impl FlightRecord {
    /// Pair a stored identifier with its fields.
    #[must_use]
    pub fn new(id: RecordId, flight: NewFlight) -> Self {
        Self { id, flight }
    }
}

/// The eight raw values of the entry form, exactly as typed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightForm {
    /// Flight number.
    pub flight_no: String,
    /// Airline name.
    pub airline: String,
    /// Origin.
    pub origin: String,
    /// Destination.
    pub destination: String,
    /// Departure time in any accepted layout.
    pub departure: String,
    /// Arrival time in any accepted layout.
    pub arrival: String,
    /// Status name.
    pub status: String,
    /// Gate or terminal.
    pub gate: String,
}

impl Default for FlightForm {
    /// The cleared form: all fields blank, status `Scheduled`.
    fn default() -> Self {
        Self {
            flight_no: String::new(),
            airline: String::new(),
            origin: String::new(),
            destination: String::new(),
            departure: String::new(),
            arrival: String::new(),
            status: FlightStatus::default().to_string(),
            gate: String::new(),
        }
    }
}

impl From<&NewFlight> for FlightForm {
    fn from(flight: &NewFlight) -> Self {
        Self {
            flight_no: flight.flight_no.clone(),
            airline: flight.airline.clone(),
            origin: flight.origin.clone(),
            destination: flight.destination.clone(),
            departure: flight.departure.clone(),
            arrival: flight.arrival.clone(),
            status: flight.status.to_string(),
            gate: flight.gate.clone(),
        }
    }
}

impl From<&FlightRecord> for FlightForm {
    fn from(record: &FlightRecord) -> Self {
        Self::from(&record.flight)
    }
}

impl FlightForm {
    /// The fields as label/value pairs, in form order.
    #[must_use]
    pub fn fields(&self) -> [(&'static str, &str); 8] {
        [
            ("Flight No", self.flight_no.as_str()),
            ("Airline", self.airline.as_str()),
            ("Origin", self.origin.as_str()),
            ("Destination", self.destination.as_str()),
            ("Departure", self.departure.as_str()),
            ("Arrival", self.arrival.as_str()),
            ("Status", self.status.as_str()),
            ("Gate/Terminal", self.gate.as_str()),
        ]
    }
}
