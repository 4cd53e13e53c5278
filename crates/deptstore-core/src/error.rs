//! Error types for the department store.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for all department store operations.
#[derive(Error, Debug)]
pub enum DeptStoreError {
    /// Storage errors, passed through with the underlying SQLite error as
    /// source
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// Operation requires a persisted record but was called on a transient
    /// one
    #[error("Invalid state for {operation}: {message}")]
    InvalidState {
        operation: &'static str,
        message: String,
    },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
}

/// Builder for creating database errors with optional context.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    /// Create a new database error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> DeptStoreError {
        DeptStoreError::Database {
            message: self.message,
            source,
        }
    }
}

impl DeptStoreError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates an invalid-state error for `operation` on a record that was
    /// never saved.
    pub fn unsaved(operation: &'static str) -> Self {
        Self::InvalidState {
            operation,
            message: format!("Department instance must be saved before {operation}"),
        }
    }

    /// Returns true for the invalid-state variant.
    pub fn is_invalid_state(&self) -> bool {
        matches!(self, Self::InvalidState { .. })
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| DeptStoreError::database(message).with_source(e))
    }
}

/// Result type alias for department store operations
pub type Result<T> = std::result::Result<T, DeptStoreError>;
