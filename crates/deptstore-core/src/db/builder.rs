//! Builder for opening and configuring [`Database`] handles.

use std::path::{Path, PathBuf};

use log::info;

use super::Database;
use crate::{
    error::{DeptStoreError, Result},
    models::Department,
};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Location {
    Default,
    File(PathBuf),
    Memory,
}

/// Builder for creating and configuring Database instances.
#[derive(Debug, Clone)]
pub struct DatabaseBuilder {
    location: Location,
    ensure_table: bool,
}

impl DatabaseBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            location: Location::Default,
            ensure_table: true,
        }
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/deptstore/departments.db` or
    /// `~/.local/share/deptstore/departments.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.location = Location::File(path.as_ref().to_path_buf());
        }
        self
    }

    /// Uses a private in-memory database instead of a file.
    pub fn in_memory(mut self) -> Self {
        self.location = Location::Memory;
        self
    }

    /// Whether `build` should create the departments table. Defaults to
    /// true.
    pub fn with_table(mut self, ensure_table: bool) -> Self {
        self.ensure_table = ensure_table;
        self
    }

    /// Builds the configured database handle.
    ///
    /// # Errors
    ///
    /// Returns `DeptStoreError::FileSystem` if the parent directory cannot be
    /// created
    /// Returns `DeptStoreError::Database` if opening the database or creating
    /// the table fails
    pub fn build(self) -> Result<Database> {
        let db = match self.location {
            Location::Memory => Database::open_in_memory()?,
            Location::File(path) => Self::open_file(&path)?,
            Location::Default => Self::open_file(&Self::default_database_path()?)?,
        };

        if self.ensure_table {
            Department::ensure_table_exists(&db)?;
        }

        Ok(db)
    }

    fn open_file(db_path: &Path) -> Result<Database> {
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| DeptStoreError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        info!("Opening department database at {}", db_path.display());
        Database::new(db_path)
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("deptstore")
            .place_data_file("departments.db")
            .map_err(|e| DeptStoreError::XdgDirectory(e.to_string()))
    }
}

impl Default for DatabaseBuilder {
    fn default() -> Self {
        Self::new()
    }
}
