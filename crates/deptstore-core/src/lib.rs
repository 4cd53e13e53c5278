//! Core library for the department store.
//!
//! A [`Department`] maps onto one row of the `departments` SQLite table and
//! carries its own create, read, update and delete operations. Every
//! operation receives the storage handle explicitly; there is no global
//! connection.
//!
//! # Lifecycle
//!
//! - `Department::new` builds a transient record (`id` is `None`)
//! - `save` / `create` insert a row and assign the generated id
//! - `update` writes the in-memory fields back (requires an id)
//! - `delete` removes the row and clears the id again
//!
//! # Quick Start
//!
//! ```rust
//! use deptstore_core::{DatabaseBuilder, Department};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let db = DatabaseBuilder::new().in_memory().build()?;
//!
//! let mut engineering = Department::create(&db, "Engineering", "Building A")?;
//! assert_eq!(engineering.id, Some(1));
//!
//! engineering.location = "Building C".to_string();
//! engineering.update(&db)?;
//!
//! let found = Department::find_by_name(&db, "Engineering")?;
//! assert_eq!(found.map(|d| d.location), Some("Building C".to_string()));
//!
//! engineering.delete(&db)?;
//! assert!(Department::get_all(&db)?.is_empty());
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod db;
pub mod display;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use db::{Database, DatabaseBuilder, Storage};
pub use error::{DeptStoreError, Result};
pub use models::Department;
