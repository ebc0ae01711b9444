/// Row Access Module
///
/// This module provides the generic row accessor: a thin layer over one
/// SQLite connection that binds positional parameters, executes statements,
/// and converts result rows into column-name to value mappings.
use crate::core::db::connection;
use crate::core::db::value::{Param, Row, Value};
use crate::core::{AccessError, Result};
use rusqlite::{Connection, Statement};
use tracing::debug;

/// Generic row accessor owning a single live database connection.
///
/// The connection is held for the accessor's entire lifetime and released
/// when the accessor is dropped or explicitly closed. All calls are
/// synchronous and blocking; no retries, timeouts, or cancellation are
/// performed.
///
/// Not safe for concurrent use: the accessor issues one statement at a time
/// against one connection and must not be shared across threads (the
/// underlying `rusqlite::Connection` is not `Sync`).
pub struct RowAccessor {
    conn: Connection,
}

impl RowAccessor {
    /// Opens a database at the given path and returns an accessor for it.
    ///
    /// Fails fast: if the connection cannot be established, no accessor is
    /// returned and there is nothing to call later.
    ///
    /// # Errors
    ///
    /// Returns `AccessError::Connection` if the database cannot be opened.
    pub fn open(db_path: &str) -> Result<Self> {
        Ok(RowAccessor {
            conn: connection::open(db_path)?,
        })
    }

    /// Opens an in-memory database and returns an accessor for it.
    pub fn open_in_memory() -> Result<Self> {
        Ok(RowAccessor {
            conn: connection::open_in_memory()?,
        })
    }

    /// Adopts an externally supplied connection.
    ///
    /// The accessor takes exclusive ownership of the handle for its lifetime.
    pub fn from_connection(conn: Connection) -> Self {
        RowAccessor { conn }
    }

    /// Executes a query and collects every result row.
    ///
    /// Parameters are bound positionally, left to right, into the query's
    /// placeholders. Each database row becomes a `Row` keyed by the result
    /// column names. A query matching nothing returns an empty vec, never
    /// an error.
    ///
    /// # Errors
    ///
    /// Returns `AccessError::Query` for prepare failures and parameter-count
    /// mismatches, `AccessError::Binding` if a parameter cannot be bound,
    /// and `AccessError::Execution` if the database fails mid-run.
    pub fn fetch_all(&self, sql: &str, params: &[Param]) -> Result<Vec<Row>> {
        let mut stmt = self.bind(sql, params)?;
        let columns: Vec<String> = stmt.column_names().into_iter().map(String::from).collect();

        let mut rows = stmt.raw_query();
        let mut result = Vec::new();
        while let Some(row) = rows.next().map_err(AccessError::Execution)? {
            result.push(map_row(row, &columns)?);
        }

        debug!("Fetched {} row(s)", result.len());
        Ok(result)
    }

    /// Executes a query and returns only the first result row, if any.
    ///
    /// A query matching zero rows returns `None`; this is an ordinary
    /// outcome distinct from both an error and an empty mapping.
    ///
    /// # Errors
    ///
    /// Same error classes as [`fetch_all`](Self::fetch_all).
    pub fn fetch_one(&self, sql: &str, params: &[Param]) -> Result<Option<Row>> {
        let mut stmt = self.bind(sql, params)?;
        let columns: Vec<String> = stmt.column_names().into_iter().map(String::from).collect();

        let mut rows = stmt.raw_query();
        match rows.next().map_err(AccessError::Execution)? {
            Some(row) => Ok(Some(map_row(row, &columns)?)),
            None => Ok(None),
        }
    }

    /// Executes a statement expected to produce no result set.
    ///
    /// The statement is stepped to completion and any returned rows are
    /// discarded, so DML and DDL run the same way. No row count or other
    /// feedback is returned.
    ///
    /// # Errors
    ///
    /// Same error classes as [`fetch_all`](Self::fetch_all); a failure is
    /// always surfaced, never swallowed.
    pub fn execute(&self, sql: &str, params: &[Param]) -> Result<()> {
        let mut stmt = self.bind(sql, params)?;
        let mut rows = stmt.raw_query();
        while rows.next().map_err(AccessError::Execution)?.is_some() {}
        Ok(())
    }

    /// Explicitly releases the underlying connection.
    ///
    /// Dropping the accessor also releases it; this path surfaces any close
    /// failure instead of discarding it.
    pub fn close(self) -> Result<()> {
        connection::close(self.conn)
    }

    /// Prepares a statement and binds the parameters at their 1-based
    /// positions.
    ///
    /// The parameter list length must equal the statement's placeholder
    /// count; a mismatch in either direction is a `Query` error rather than
    /// a truncated or padded bind.
    fn bind<'c>(&'c self, sql: &str, params: &[Param]) -> Result<Statement<'c>> {
        let mut stmt = self
            .conn
            .prepare(sql)
            .map_err(|e| AccessError::Query(format!("Failed to prepare statement: {}", e)))?;

        let expected = stmt.parameter_count();
        if expected != params.len() {
            return Err(AccessError::Query(format!(
                "Parameter count mismatch: query has {} placeholder(s), {} parameter(s) given",
                expected,
                params.len()
            )));
        }

        for (i, param) in params.iter().enumerate() {
            // Placeholder indexes are 1-based
            stmt.raw_bind_parameter(i + 1, param).map_err(|e| {
                AccessError::Binding(format!("Failed to bind parameter {}: {}", i + 1, e))
            })?;
        }

        debug!("Bound {} parameter(s)", params.len());
        Ok(stmt)
    }
}

/// Converts one driver row into a `Row` keyed by the result column names.
fn map_row(row: &rusqlite::Row, columns: &[String]) -> Result<Row> {
    let mut mapped = Row::new();
    for (i, name) in columns.iter().enumerate() {
        let value_ref = row.get_ref(i).map_err(AccessError::Execution)?;
        mapped.insert(name.clone(), Value::from(value_ref));
    }
    Ok(mapped)
}
