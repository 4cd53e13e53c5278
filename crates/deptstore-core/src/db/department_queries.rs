//! Department CRUD operations and queries.
//!
//! Every write issues one statement and commits it before returning. Reads
//! never commit.

use log::{info, warn};
use rusqlite::params;

use super::Storage;
use crate::{
    error::{DeptStoreError, Result},
    models::Department,
};

const CREATE_TABLE_SQL: &str = "CREATE TABLE IF NOT EXISTS departments (
    id INTEGER PRIMARY KEY,
    name TEXT,
    location TEXT)";
const DROP_TABLE_SQL: &str = "DROP TABLE IF EXISTS departments";
const INSERT_DEPARTMENT_SQL: &str = "INSERT INTO departments (name, location) VALUES (?1, ?2)";
const UPDATE_DEPARTMENT_SQL: &str =
    "UPDATE departments SET name = ?1, location = ?2 WHERE id = ?3";
const DELETE_DEPARTMENT_SQL: &str = "DELETE FROM departments WHERE id = ?1";
const SELECT_ALL_SQL: &str = "SELECT id, name, location FROM departments";
const SELECT_BY_ID_SQL: &str = "SELECT id, name, location FROM departments WHERE id = ?1";
const SELECT_BY_NAME_SQL: &str =
    "SELECT id, name, location FROM departments WHERE name = ?1 LIMIT 1";

impl Department {
    /// Creates the `departments` table if it does not exist yet.
    pub fn ensure_table_exists<S: Storage>(storage: &S) -> Result<()> {
        storage.execute(CREATE_TABLE_SQL, [])?;
        storage.commit()?;
        info!("departments table ready");
        Ok(())
    }

    /// Drops the `departments` table if it exists.
    pub fn drop_table<S: Storage>(storage: &S) -> Result<()> {
        storage.execute(DROP_TABLE_SQL, [])?;
        storage.commit()?;
        info!("departments table dropped");
        Ok(())
    }

    /// Inserts this department as a new row and takes the generated id.
    ///
    /// Saving a record that already has an id inserts another row and moves
    /// `self.id` to it; the original row is left untouched.
    pub fn save<S: Storage>(&mut self, storage: &S) -> Result<()> {
        if let Some(id) = self.id {
            warn!("Department {id} saved again; inserting a new row");
        }

        storage.execute(INSERT_DEPARTMENT_SQL, params![self.name, self.location])?;
        storage.commit()?;
        self.id = Some(storage.last_insert_id());
        Ok(())
    }

    /// Creates a department and saves it immediately.
    pub fn create<S: Storage>(
        storage: &S,
        name: impl Into<String>,
        location: impl Into<String>,
    ) -> Result<Self> {
        let mut department = Self::new(name, location);
        department.save(storage)?;
        Ok(department)
    }

    /// Writes the current name and location to the row with this id.
    ///
    /// Updating an id that no longer has a row affects nothing and is not an
    /// error.
    ///
    /// # Errors
    ///
    /// Returns `DeptStoreError::InvalidState` if the department was never
    /// saved.
    pub fn update<S: Storage>(&self, storage: &S) -> Result<()> {
        let id = self.id.ok_or_else(|| DeptStoreError::unsaved("updating"))?;

        storage.execute(
            UPDATE_DEPARTMENT_SQL,
            params![self.name, self.location, id as i64],
        )?;
        storage.commit()
    }

    /// Deletes the row with this id and makes the record transient again.
    ///
    /// The id is cleared even when no row matched.
    ///
    /// # Errors
    ///
    /// Returns `DeptStoreError::InvalidState` if the department was never
    /// saved.
    pub fn delete<S: Storage>(&mut self, storage: &S) -> Result<()> {
        let id = self.id.ok_or_else(|| DeptStoreError::unsaved("deleting"))?;

        storage.execute(DELETE_DEPARTMENT_SQL, params![id as i64])?;
        storage.commit()?;
        self.id = None;
        Ok(())
    }

    /// Returns every department in storage order.
    pub fn get_all<S: Storage>(storage: &S) -> Result<Vec<Self>> {
        storage.query_all(SELECT_ALL_SQL, [], Self::from_row)
    }

    /// Looks a department up by id. Ids above `i64::MAX` wrap to negative
    /// rowids and never match.
    pub fn find_by_id<S: Storage>(storage: &S, id: u64) -> Result<Option<Self>> {
        storage.query_one(SELECT_BY_ID_SQL, params![id as i64], Self::from_row)
    }

    /// Returns the first department with exactly this name. Which one wins
    /// among duplicates is unspecified.
    pub fn find_by_name<S: Storage>(storage: &S, name: &str) -> Result<Option<Self>> {
        storage.query_one(SELECT_BY_NAME_SQL, params![name], Self::from_row)
    }
}
