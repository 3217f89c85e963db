//! Schema version guard for the flight store.
//!
//! The tables are created idempotently. The `metadata` table records which
//! schema layout the file was written with, so that an older binary refuses a
//! file written by a newer one instead of misreading it.

use rusqlite::{Connection, OptionalExtension};

use crate::error::{Error, Result};

use super::schema::SCHEMA_STATEMENTS;

/// Schema layout written by this build.
pub const CURRENT_VERSION: i32 = 1;

const VERSION_KEY: &str = "schema_version";

/// Create the tables if needed and check the recorded schema version.
///
/// A fresh file is stamped with [`CURRENT_VERSION`].
///
/// # Errors
///
/// Returns [`Error::SchemaVersion`] if the file carries an unreadable or newer
/// version, or a query error if the tables cannot be created.
pub fn prepare(conn: &Connection) -> Result<()> {
    for statement in SCHEMA_STATEMENTS {
        conn.execute(statement, [])?;
    }

    match stored_version(conn)? {
        None => stamp_version(conn),
        Some(found) if found > CURRENT_VERSION => Err(Error::SchemaVersion {
            message: format!("file uses schema {found}, this build reads up to {CURRENT_VERSION}"),
        }),
        Some(_) => Ok(()),
    }
}

fn stored_version(conn: &Connection) -> Result<Option<i32>> {
    let raw: Option<String> = conn
        .query_row(
            "SELECT value FROM metadata WHERE key = ?1",
            [VERSION_KEY],
            |row| row.get(0),
        )
        .optional()?;

    raw.map(|value| {
        value.parse().map_err(|_| Error::SchemaVersion {
            message: format!("unreadable schema version {value:?}"),
        })
    })
    .transpose()
}

fn stamp_version(conn: &Connection) -> Result<()> {
    conn.execute(
        "INSERT INTO metadata (key, value) VALUES (?1, ?2)",
        (VERSION_KEY, CURRENT_VERSION.to_string()),
    )?;
    Ok(())
}
