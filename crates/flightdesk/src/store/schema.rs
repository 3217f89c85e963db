//! `SQLite` schema definitions for flightdesk.
//!
//! The `flights` table plays the role of the record collection; `metadata`
//! holds internal bookkeeping such as the schema version.

/// SQL statement to create the flights table.
pub const CREATE_FLIGHTS_TABLE: &str = r"
CREATE TABLE IF NOT EXISTS flights (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    flight_no TEXT NOT NULL,
    airline TEXT NOT NULL,
    origin TEXT NOT NULL,
    destination TEXT NOT NULL,
    departure TEXT NOT NULL,
    arrival TEXT NOT NULL,
    status TEXT NOT NULL,
    gate TEXT NOT NULL,
    created_at TEXT NOT NULL DEFAULT (datetime('now'))
)
";

/// SQL statement to create an index on `flight_no` for lookups.
pub const CREATE_FLIGHT_NO_INDEX: &str = r"
CREATE INDEX IF NOT EXISTS idx_flights_flight_no ON flights(flight_no)
";

/// SQL statement to create the metadata table for storing key-value pairs.
pub const CREATE_METADATA_TABLE: &str = r"
CREATE TABLE IF NOT EXISTS metadata (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL
)
";

/// All schema creation statements in order.
pub const SCHEMA_STATEMENTS: &[&str] = &[
    CREATE_FLIGHTS_TABLE,
    CREATE_FLIGHT_NO_INDEX,
    CREATE_METADATA_TABLE,
];

/// Columns selected when reading a flight back, in row order.
pub const FLIGHT_COLUMNS: &str =
    "id, flight_no, airline, origin, destination, departure, arrival, status, gate";
