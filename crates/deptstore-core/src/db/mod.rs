//! Database connection handling and the storage contract.
//!
//! [`Database`] wraps a single SQLite connection. Record operations never
//! reach for it directly; they go through the [`Storage`] trait, which is the
//! only surface the department record depends on:
//!
//! - `execute` of a parameterized statement (writes stay pending)
//! - `query_one` / `query_all` of a result set
//! - `last_insert_id` of the most recent insert
//! - `commit` of pending changes
//!
//! Writes open an implicit transaction the first time they run and stay
//! uncommitted until [`Storage::commit`] is called. A statement that fails
//! rolls back the transaction it opened. Dropping a [`Database`] with pending
//! changes discards them.

use std::path::Path;

use log::{debug, trace, warn};
use rusqlite::{Connection, OptionalExtension, Params, Row};

use crate::error::{DatabaseResultExt, DeptStoreError, Result};

pub mod builder;
pub mod department_queries;
pub mod storage;

pub use builder::DatabaseBuilder;
pub use storage::Storage;

/// Database connection handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Opens (or creates) the SQLite database file at `path`.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;
        Ok(Self { connection })
    }

    /// Opens a private, in-memory database.
    pub fn open_in_memory() -> Result<Self> {
        let connection =
            Connection::open_in_memory().db_context("Failed to open in-memory database")?;
        Ok(Self { connection })
    }

    /// True while an implicit transaction holds uncommitted writes.
    pub fn has_pending_changes(&self) -> bool {
        !self.connection.is_autocommit()
    }

    /// Returns true if a table named `table` exists in the main schema.
    pub fn table_exists(&self, table: &str) -> Result<bool> {
        self.connection
            .query_row(
                "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1)",
                [table],
                |row| row.get(0),
            )
            .db_context("Failed to inspect schema")
    }
}

impl Storage for Database {
    fn execute<P: Params>(&self, sql: &str, params: P) -> Result<usize> {
        let opened = self.connection.is_autocommit();
        if opened {
            self.connection
                .execute_batch("BEGIN")
                .db_context("Failed to begin transaction")?;
        }

        debug!("execute: {}", sql.trim());
        self.connection.execute(sql, params).map_err(|e| {
            if opened && !self.connection.is_autocommit() {
                if let Err(rollback) = self.connection.execute_batch("ROLLBACK") {
                    warn!("rollback after failed statement failed: {rollback}");
                }
            }
            DeptStoreError::database("Failed to execute statement").with_source(e)
        })
    }

    fn query_one<T, P, F>(&self, sql: &str, params: P, map: F) -> Result<Option<T>>
    where
        P: Params,
        F: FnOnce(&Row<'_>) -> rusqlite::Result<T>,
    {
        debug!("query_one: {}", sql.trim());
        let mut stmt = self
            .connection
            .prepare(sql)
            .db_context("Failed to prepare query")?;

        stmt.query_row(params, map)
            .optional()
            .db_context("Failed to fetch row")
    }

    fn query_all<T, P, F>(&self, sql: &str, params: P, map: F) -> Result<Vec<T>>
    where
        P: Params,
        F: FnMut(&Row<'_>) -> rusqlite::Result<T>,
    {
        debug!("query_all: {}", sql.trim());
        let mut stmt = self
            .connection
            .prepare(sql)
            .db_context("Failed to prepare query")?;

        let rows = stmt
            .query_map(params, map)
            .db_context("Failed to run query")?;

        rows.collect::<rusqlite::Result<Vec<T>>>()
            .db_context("Failed to fetch rows")
    }

    fn last_insert_id(&self) -> u64 {
        self.connection.last_insert_rowid() as u64
    }

    fn commit(&self) -> Result<()> {
        if self.connection.is_autocommit() {
            trace!("commit: nothing pending");
            return Ok(());
        }

        trace!("commit");
        self.connection
            .execute_batch("COMMIT")
            .db_context("Failed to commit transaction")
    }
}
