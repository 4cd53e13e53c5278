//! The storage contract records are persisted through.

use rusqlite::{Params, Row};

use crate::error::Result;

/// Narrow statement-level interface to a SQL connection.
///
/// Implementors hold no record-specific knowledge. Statements are always
/// parameterized; callers never splice values into SQL text.
pub trait Storage {
    /// Runs a statement and returns the number of affected rows. The change
    /// is pending until [`Storage::commit`].
    fn execute<P: Params>(&self, sql: &str, params: P) -> Result<usize>;

    /// Runs a query and maps its first row, or returns `None` when the
    /// result set is empty.
    fn query_one<T, P, F>(&self, sql: &str, params: P, map: F) -> Result<Option<T>>
    where
        P: Params,
        F: FnOnce(&Row<'_>) -> rusqlite::Result<T>;

    /// Runs a query and maps every row, in the order storage yields them.
    fn query_all<T, P, F>(&self, sql: &str, params: P, map: F) -> Result<Vec<T>>
    where
        P: Params,
        F: FnMut(&Row<'_>) -> rusqlite::Result<T>;

    /// Identifier generated for the most recently inserted row.
    fn last_insert_id(&self) -> u64;

    /// Commits pending changes.
    fn commit(&self) -> Result<()>;
}
