//! Input validation for the flight entry form.
//!
//! Turns the eight raw form strings into a [`NewFlight`] or reports the first
//! problem found. Validation is pure: it never touches the store.

use chrono::{NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::datetime::{parse_datetime, DateTimeError, NORMALIZED_FORMAT};
use crate::flight::{FlightForm, FlightStatus, NewFlight};

/// Why a form could not be turned into a flight record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// At least one of the eight fields is blank.
    #[error("Please fill all fields.")]
    MissingFields,

    /// The departure time did not normalize.
    #[error("Invalid Departure Date & Time. {0}")]
    InvalidDeparture(DateTimeError),

    /// The arrival time did not normalize.
    #[error("Invalid Arrival Date & Time. {0}")]
    InvalidArrival(DateTimeError),

    /// The status is not one of the known values.
    #[error("Invalid Status '{0}'. Choose one of: Scheduled, Delayed, Cancelled, Departed, Arrived")]
    InvalidStatus(String),

    /// Arrival is earlier than departure (only when that rule is enabled).
    #[error("Arrival ({arrival}) is before Departure ({departure}).")]
    ArrivalBeforeDeparture {
        /// Normalized departure.
        departure: String,
        /// Normalized arrival.
        arrival: String,
    },
}

/// Optional validation rules.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Reject records whose arrival is strictly earlier than departure.
    pub arrival_after_departure: bool,
}

/// Form validator.
#[derive(Debug, Clone, Copy, Default)]
pub struct Validator {
    config: ValidationConfig,
}

impl Validator {
    /// Create a validator with the given rules.
    #[must_use]
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// The rules this validator applies.
    #[must_use]
    pub fn config(&self) -> ValidationConfig {
        self.config
    }

    /// Validate a form.
    ///
    /// Checks run in a fixed order and the first failure is returned:
    /// blank fields, departure, arrival, status, then the optional ordering
    /// rule.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] encountered.
    pub fn validate(&self, form: &FlightForm) -> Result<NewFlight, ValidationError> {
        let trimmed = form.fields().map(|(_, value)| value.trim());
        if trimmed.iter().any(|value| value.is_empty()) {
            debug!("form rejected: missing fields");
            return Err(ValidationError::MissingFields);
        }
        let [flight_no, airline, origin, destination, departure, arrival, status, gate] = trimmed;

        let departure_at = parse_datetime(departure).map_err(ValidationError::InvalidDeparture)?;
        let arrival_at = parse_datetime(arrival).map_err(ValidationError::InvalidArrival)?;
        let departure = departure_at.format(NORMALIZED_FORMAT).to_string();
        let arrival = arrival_at.format(NORMALIZED_FORMAT).to_string();

        let status: FlightStatus = status
            .parse()
            .map_err(|_| ValidationError::InvalidStatus(status.to_string()))?;

        if self.config.arrival_after_departure && to_minute(arrival_at) < to_minute(departure_at) {
            return Err(ValidationError::ArrivalBeforeDeparture { departure, arrival });
        }

        Ok(NewFlight {
            flight_no: flight_no.to_string(),
            airline: airline.to_string(),
            origin: origin.to_string(),
            destination: destination.to_string(),
            departure,
            arrival,
            status,
            gate: gate.to_string(),
        })
    }
}

// Stored times keep minutes only, so seconds never decide the order.
fn to_minute(at: NaiveDateTime) -> (NaiveDate, u32, u32) {
    (at.date(), at.hour(), at.minute())
}

/// Validate a form with the default rules.
///
/// # Errors
///
/// Returns the first [`ValidationError`] encountered.
pub fn validate_flight(form: &FlightForm) -> Result<NewFlight, ValidationError> {
    Validator::default().validate(form)
}
