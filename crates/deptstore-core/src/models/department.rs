//! Department model definition and row hydration.

use rusqlite::Row;
use serde::{Deserialize, Serialize};

/// A department, either transient (`id` is `None`) or mirroring one row of
/// the `departments` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    /// Storage-assigned identifier; `None` until the record is saved and
    /// again after it is deleted
    pub id: Option<u64>,

    /// Department name
    pub name: String,

    /// Free-form location
    pub location: String,
}

impl Department {
    /// Creates a transient department. No validation is applied; empty
    /// strings are accepted.
    pub fn new(name: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            location: location.into(),
        }
    }

    /// Creates a department that refers to the row with the given id.
    pub fn with_id(id: u64, name: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            name: name.into(),
            location: location.into(),
        }
    }

    /// Returns true once the record has a storage-assigned id.
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    /// Builds a department from a `departments` row, looking columns up by
    /// name.
    ///
    /// The table does not forbid NULL in `name` or `location`; a NULL column
    /// hydrates as an empty string.
    pub fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: Some(row.get::<_, i64>("id")? as u64),
            name: row.get::<_, Option<String>>("name")?.unwrap_or_default(),
            location: row.get::<_, Option<String>>("location")?.unwrap_or_default(),
        })
    }
}
