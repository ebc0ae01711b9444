/// Connection Management Module
///
/// This module opens and releases the single SQLite connection that a
/// `RowAccessor` owns for its lifetime. Opening fails fast: a connection
/// that cannot be established never produces a usable accessor.
use crate::core::{AccessError, Result};
use rusqlite::Connection;
use tracing::debug;

const INIT_PRAGMAS: &str = "
    PRAGMA foreign_keys = ON;
";

/// Opens a SQLite database at the given path and applies the init pragmas.
///
/// # Arguments
///
/// * `db_path` - Path to the SQLite database file, or ":memory:" for an
///   in-memory database
///
/// # Errors
///
/// Returns `AccessError::Connection` if the database cannot be opened or
/// the init pragmas fail.
pub fn open(db_path: &str) -> Result<Connection> {
    debug!("Opening database connection at {:?}", db_path);
    let conn = Connection::open(db_path).map_err(AccessError::Connection)?;
    conn.execute_batch(INIT_PRAGMAS)
        .map_err(AccessError::Connection)?;
    Ok(conn)
}

/// Opens an in-memory SQLite database with the init pragmas applied.
pub fn open_in_memory() -> Result<Connection> {
    debug!("Opening in-memory database connection");
    let conn = Connection::open_in_memory().map_err(AccessError::Connection)?;
    conn.execute_batch(INIT_PRAGMAS)
        .map_err(AccessError::Connection)?;
    Ok(conn)
}

/// Explicitly releases a connection, surfacing any close failure.
///
/// Dropping a `Connection` also releases it; this path exists for callers
/// that want the close error instead of a silent drop.
pub fn close(conn: Connection) -> Result<()> {
    conn.close().map_err(|(_conn, e)| AccessError::Connection(e))
}
