//! Error types for flightdesk.
//!
//! This module defines all error types used throughout the flightdesk crate,
//! providing detailed context for debugging and user-friendly error messages.

use std::path::PathBuf;
use thiserror::Error;

use crate::flight::RecordId;
use crate::validate::ValidationError;

/// The main error type for flightdesk operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Validation Errors ===
    /// The submitted form did not validate.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    // === Selection Errors ===
    /// An action that needs a selected record was invoked without one.
    #[error("Please select a record to {action}.")]
    NoSelection {
        /// The action that was attempted.
        action: &'static str,
    },

    // === Storage Errors ===
    /// Failed to open or create the database.
    #[error("failed to open database at {path}: {source}")]
    DatabaseOpen {
        /// Path to the database file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: rusqlite::Error,
    },

    /// A database query failed.
    #[error("database query failed: {0}")]
    DatabaseQuery(#[from] rusqlite::Error),

    /// The database file was written with a schema this build cannot read.
    #[error("unsupported database schema: {message}")]
    SchemaVersion {
        /// What was found.
        message: String,
    },

    /// No record has the given identifier.
    #[error("no flight record with id {id}")]
    RecordNotFound {
        /// The identifier that was looked up.
        id: RecordId,
    },

    /// A stored row could not be read back as a flight record.
    #[error("flight record {id} is corrupt: {message}")]
    CorruptRecord {
        /// The offending record.
        id: RecordId,
        /// Description of what is wrong with it.
        message: String,
    },

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === I/O Errors ===
    /// Reading file system metadata failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to create a required directory.
    #[error("failed to create directory {path}: {source}")]
    DirectoryCreate {
        /// Path that couldn't be created.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    // === Serialization Errors ===
    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for flightdesk operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create a selection error for the given action.
    #[must_use]
    pub fn no_selection(action: &'static str) -> Self {
        Self::NoSelection { action }
    }

    /// Create a not-found error.
    #[must_use]
    pub fn record_not_found(id: RecordId) -> Self {
        Self::RecordNotFound { id }
    }

    /// Check if this error came from form validation.
    #[must_use]
    pub fn is_validation_error(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this error means no record was selected.
    #[must_use]
    pub fn is_selection_error(&self) -> bool {
        matches!(self, Self::NoSelection { .. })
    }

    /// Check if this error came from the record store.
    #[must_use]
    pub fn is_store_error(&self) -> bool {
        matches!(
            self,
            Self::DatabaseOpen { .. }
                | Self::DatabaseQuery(_)
                | Self::SchemaVersion { .. }
                | Self::RecordNotFound { .. }
                | Self::CorruptRecord { .. }
                | Self::DirectoryCreate { .. }
        )
    }

    /// A short title for the kind of problem, for user-facing messages.
    #[must_use]
    pub fn title(&self) -> &'static str {
        if self.is_validation_error() {
            "Input Error"
        } else if self.is_selection_error() {
            "Selection Error"
        } else {
            "Error"
        }
    }
}
