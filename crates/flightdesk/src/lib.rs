//! `flightdesk` - Record and manage flight schedules
//!
//! This library provides datetime normalization and form validation for
//! flight records, a persistence gateway over `SQLite`, and the user actions
//! (add, update, delete, read, select, clear) that tie them together.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod datetime;
pub mod desk;
pub mod error;
pub mod flight;
pub mod logging;
pub mod store;
pub mod validate;

pub use config::Config;
pub use datetime::{normalize_datetime, DateTimeError};
pub use desk::{DeleteOutcome, FlightDesk};
pub use error::{Error, Result};
pub use flight::{FlightForm, FlightRecord, FlightStatus, NewFlight, RecordId};
pub use logging::init_logging;
pub use store::{FlightStore, SqliteStore, StoreStats};
pub use validate::{validate_flight, ValidationConfig, ValidationError, Validator};
