//! Read access to the address book store.
//!
//! The store is a SQLite file holding an `ABPerson` table joined one-to-many
//! against `ABMultiValue`. A person's attribute rows come back in `UID`
//! (insertion) order, which decides who wins the limited phone and email
//! slots; regrouping happens in the pipeline.

use std::path::Path;

use rusqlite::types::{Type, ValueRef};
use rusqlite::{Connection, OpenFlags, Row};
use tracing::{debug, info, instrument};

use crate::addressbook::contacts::error::{ExportError, Result};
use crate::addressbook::contacts::model::{BirthdayRaw, PersonRecord, RawRow};

const PERSON_JOIN_SQL: &str = "SELECT
    ABPerson.ROWID,
    ABPerson.Prefix,
    ABPerson.First,
    ABPerson.Middle,
    ABPerson.Last,
    ABPerson.Suffix,
    ABPerson.Birthday,
    ABPerson.Organization,
    ABPerson.JobTitle,
    ABPerson.Note,
    ABMultiValue.value
FROM ABPerson
LEFT JOIN ABMultiValue ON ABPerson.ROWID = ABMultiValue.record_id
ORDER BY ABPerson.First DESC, ABPerson.ROWID, ABMultiValue.UID";

/// Opens the store read-only and makes sure it is a readable database.
#[instrument(level = "debug", skip_all, fields(path = %path.display()))]
pub fn open_store(path: &Path) -> Result<Connection> {
    if !path.exists() {
        return Err(ExportError::MissingInput(path.to_path_buf()));
    }

    let connection_error = |source: rusqlite::Error| ExportError::StoreConnection {
        path: path.to_path_buf(),
        source,
    };

    let conn = Connection::open_with_flags(path, OpenFlags::SQLITE_OPEN_READ_ONLY)
        .map_err(connection_error)?;
    // SQLite opens lazily; touching the schema surfaces corrupt or non-database files here.
    let schema_version: i64 = conn
        .query_row("PRAGMA schema_version", [], |row| row.get(0))
        .map_err(connection_error)?;
    debug!(schema_version, "address book store opened");
    Ok(conn)
}

/// Runs the person/attribute join and returns one row per person-attribute
/// pair, or one attribute-less row for people without attributes.
pub fn query_rows(conn: &Connection) -> Result<Vec<RawRow>> {
    let mut statement = conn.prepare(PERSON_JOIN_SQL).map_err(ExportError::Query)?;
    let rows = statement
        .query_map([], read_row)
        .map_err(ExportError::Query)?
        .collect::<rusqlite::Result<Vec<_>>>()
        .map_err(ExportError::Query)?;
    Ok(rows)
}

/// Opens the store, loads every join row, and closes the connection again.
#[instrument(level = "info", skip_all, fields(store = %path.display()))]
pub fn load_rows(path: &Path) -> Result<Vec<RawRow>> {
    let conn = open_store(path)?;
    let rows = query_rows(&conn)?;
    drop(conn);
    info!(row_count = rows.len(), "loaded rows from address book store");
    Ok(rows)
}

fn read_row(row: &Row<'_>) -> rusqlite::Result<RawRow> {
    Ok(RawRow {
        key: row.get(0)?,
        person: PersonRecord {
            prefix: text_column(row, 1)?,
            first: text_column(row, 2)?,
            middle: text_column(row, 3)?,
            last: text_column(row, 4)?,
            suffix: text_column(row, 5)?,
            birthday: birthday_column(row, 6)?,
            organization: text_column(row, 7)?,
            job_title: text_column(row, 8)?,
            note: text_column(row, 9)?,
        },
        value: text_column(row, 10)?,
    })
}

/// Reads a loosely typed column as text. Numbers are rendered in decimal.
fn text_column(row: &Row<'_>, idx: usize) -> rusqlite::Result<Option<String>> {
    match row.get_ref(idx)? {
        ValueRef::Null => Ok(None),
        ValueRef::Text(bytes) => Ok(Some(String::from_utf8_lossy(bytes).into_owned())),
        ValueRef::Integer(value) => Ok(Some(value.to_string())),
        ValueRef::Real(value) => Ok(Some(value.to_string())),
        ValueRef::Blob(_) => Err(blob_error(row, idx)),
    }
}

fn birthday_column(row: &Row<'_>, idx: usize) -> rusqlite::Result<Option<BirthdayRaw>> {
    match row.get_ref(idx)? {
        ValueRef::Null => Ok(None),
        ValueRef::Integer(value) => Ok(Some(BirthdayRaw::Seconds(value as f64))),
        ValueRef::Real(value) => Ok(Some(BirthdayRaw::Seconds(value))),
        ValueRef::Text(bytes) => {
            let text = String::from_utf8_lossy(bytes);
            if text.trim().is_empty() {
                Ok(None)
            } else {
                Ok(Some(BirthdayRaw::Text(text.into_owned())))
            }
        }
        ValueRef::Blob(_) => Err(blob_error(row, idx)),
    }
}

fn blob_error(row: &Row<'_>, idx: usize) -> rusqlite::Error {
    let name = row
        .as_ref()
        .column_name(idx)
        .map(str::to_string)
        .unwrap_or_default();
    rusqlite::Error::InvalidColumnType(idx, name, Type::Blob)
}
