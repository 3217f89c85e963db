//! Record store for flightdesk.
//!
//! [`FlightStore`] is the gateway the rest of the crate talks to: insert,
//! find, update-by-id and delete-by-id. [`SqliteStore`] implements it over an
//! embedded `SQLite` database.

pub mod schema;
pub mod version;

use std::path::{Path, PathBuf};

use rusqlite::{params, Connection, OptionalExtension};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::flight::{FlightRecord, FlightStatus, NewFlight, RecordId};

use self::schema::FLIGHT_COLUMNS;

/// Persistence gateway for flight records.
///
/// Calls are synchronous. Implementations report failures as values; callers
/// decide how to surface them.
pub trait FlightStore {
    /// Insert a validated flight and return its new identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the store rejects the write.
    fn insert(&mut self, flight: &NewFlight) -> Result<RecordId>;

    /// Fetch every record, oldest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    fn find_all(&self) -> Result<Vec<FlightRecord>>;

    /// Fetch one record by identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    fn find_by_id(&self, id: RecordId) -> Result<Option<FlightRecord>>;

    /// Replace all fields of a record.
    ///
    /// Returns `false` if no record has that identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the store rejects the write.
    fn update_by_id(&mut self, id: RecordId, flight: &NewFlight) -> Result<bool>;

    /// Delete a record.
    ///
    /// Returns `false` if no record has that identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the store rejects the write.
    fn delete_by_id(&mut self, id: RecordId) -> Result<bool>;

    /// Count stored records.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    fn count(&self) -> Result<i64>;
}

/// `SQLite`-backed flight store.
#[derive(Debug)]
pub struct SqliteStore {
    /// Path to the database file.
    path: PathBuf,
    /// Database connection.
    conn: Connection,
}

impl SqliteStore {
    /// Open or create a store at the given path.
    ///
    /// Creates the parent directories and database file if they don't exist,
    /// and initializes the schema.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or schema initialization fails.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent).map_err(|source| Error::DirectoryCreate {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        debug!("Opening database at {}", path.display());
        let conn = Connection::open(&path).map_err(|source| Error::DatabaseOpen {
            path: path.clone(),
            source,
        })?;

        conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA synchronous=NORMAL;")?;
        version::prepare(&conn)?;

        info!("Database opened at {}", path.display());
        Ok(Self { path, conn })
    }

    /// Create an in-memory store.
    ///
    /// # Errors
    ///
    /// Returns an error if the in-memory database cannot be created.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(|source| Error::DatabaseOpen {
            path: PathBuf::from(":memory:"),
            source,
        })?;

        version::prepare(&conn)?;

        Ok(Self {
            path: PathBuf::from(":memory:"),
            conn,
        })
    }

    /// Get the path to the database file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get database statistics.
    ///
    /// # Errors
    ///
    /// Returns an error if the count query fails or the database file cannot
    /// be inspected.
    pub fn stats(&self) -> Result<StoreStats> {
        let total_flights = self.count()?;

        let db_size_bytes = if self.path.to_string_lossy() == ":memory:" {
            0
        } else {
            std::fs::metadata(&self.path)?.len()
        };

        Ok(StoreStats {
            total_flights,
            db_size_bytes,
        })
    }

    fn read_row(row: &rusqlite::Row) -> rusqlite::Result<StoredRow> {
        Ok(StoredRow {
            id: row.get(0)?,
            flight_no: row.get(1)?,
            airline: row.get(2)?,
            origin: row.get(3)?,
            destination: row.get(4)?,
            departure: row.get(5)?,
            arrival: row.get(6)?,
            status: row.get(7)?,
            gate: row.get(8)?,
        })
    }
}

impl FlightStore for SqliteStore {
    fn insert(&mut self, flight: &NewFlight) -> Result<RecordId> {
        self.conn.execute(
            r"
            INSERT INTO flights (flight_no, airline, origin, destination, departure, arrival, status, gate)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
            ",
            params![
                flight.flight_no,
                flight.airline,
                flight.origin,
                flight.destination,
                flight.departure,
                flight.arrival,
                flight.status.as_str(),
                flight.gate,
            ],
        )?;

        let id = RecordId::new(self.conn.last_insert_rowid());
        debug!(%id, flight_no = %flight.flight_no, "Inserted flight");
        Ok(id)
    }

    fn find_all(&self) -> Result<Vec<FlightRecord>> {
        let mut stmt = self
            .conn
            .prepare(&format!("SELECT {FLIGHT_COLUMNS} FROM flights ORDER BY id ASC"))?;

        let rows = stmt
            .query_map([], Self::read_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        rows.into_iter().map(StoredRow::into_record).collect()
    }

    fn find_by_id(&self, id: RecordId) -> Result<Option<FlightRecord>> {
        let row = self
            .conn
            .query_row(
                &format!("SELECT {FLIGHT_COLUMNS} FROM flights WHERE id = ?1"),
                [id.get()],
                Self::read_row,
            )
            .optional()?;

        row.map(StoredRow::into_record).transpose()
    }

    fn update_by_id(&mut self, id: RecordId, flight: &NewFlight) -> Result<bool> {
        let affected = self.conn.execute(
            r"
            UPDATE flights
            SET flight_no = ?2, airline = ?3, origin = ?4, destination = ?5,
                departure = ?6, arrival = ?7, status = ?8, gate = ?9
            WHERE id = ?1
            ",
            params![
                id.get(),
                flight.flight_no,
                flight.airline,
                flight.origin,
                flight.destination,
                flight.departure,
                flight.arrival,
                flight.status.as_str(),
                flight.gate,
            ],
        )?;

        debug!(%id, affected, "Updated flight");
        Ok(affected > 0)
    }

    fn delete_by_id(&mut self, id: RecordId) -> Result<bool> {
        let affected = self
            .conn
            .execute("DELETE FROM flights WHERE id = ?1", [id.get()])?;

        debug!(%id, affected, "Deleted flight");
        Ok(affected > 0)
    }

    fn count(&self) -> Result<i64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM flights", [], |row| row.get(0))?;
        Ok(count)
    }
}

/// A row exactly as stored, before the status is checked.
struct StoredRow {
    id: i64,
    flight_no: String,
    airline: String,
    origin: String,
    destination: String,
    departure: String,
    arrival: String,
    status: String,
    gate: String,
}

impl StoredRow {
    fn into_record(self) -> Result<FlightRecord> {
        let id = RecordId::new(self.id);
        let status: FlightStatus = self.status.parse().map_err(|e| Error::CorruptRecord {
            id,
            message: format!("{e}"),
        })?;

        Ok(FlightRecord::new(
            id,
            NewFlight {
                flight_no: self.flight_no,
                airline: self.airline,
                origin: self.origin,
                destination: self.destination,
                departure: self.departure,
                arrival: self.arrival,
                status,
                gate: self.gate,
            },
        ))
    }
}

/// Statistics about the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreStats {
    /// Total number of flight records.
    pub total_flights: i64,
    /// Size of the database file in bytes.
    pub db_size_bytes: u64,
}
