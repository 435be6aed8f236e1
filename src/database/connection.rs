//! Read-only query execution against a history snapshot.
//!
//! The snapshot (never the live store) is opened with
//! `SQLITE_OPEN_READ_ONLY`; the connection and prepared statement are closed
//! by scope exit on success and error paths alike.

use std::path::Path;

use rusqlite::{Connection, OpenFlags};

use crate::database::query_builder::SqlStatement;
use crate::types::errors::HistoryError;
use crate::types::history::VisitRecord;

/// Opens the snapshot read-only, runs the statement with its bound
/// parameters, and materializes all matching rows in store order.
pub fn query_snapshot(
    snapshot_path: &Path,
    statement: &SqlStatement,
) -> Result<Vec<VisitRecord>, HistoryError> {
    let conn = Connection::open_with_flags(
        snapshot_path,
        OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )
    .map_err(|e| HistoryError::Database(e.to_string()))?;

    let mut stmt = conn
        .prepare(&statement.text)
        .map_err(|e| HistoryError::Database(e.to_string()))?;

    let rows = stmt
        .query_map(
            rusqlite::params_from_iter(statement.params.iter()),
            row_to_record,
        )
        .map_err(|e| HistoryError::Database(e.to_string()))?;

    let mut records = Vec::new();
    for row in rows {
        records.push(row.map_err(|e| HistoryError::Database(e.to_string()))?);
    }
    Ok(records)
}

/// Reads a single result row into a [`VisitRecord`].
fn row_to_record(row: &rusqlite::Row) -> rusqlite::Result<VisitRecord> {
    Ok(VisitRecord {
        url: row.get(0)?,
        title: row.get(1)?,
        visit_count: row.get(2)?,
        visit_time: row.get(3)?,
    })
}
