//! Data models for the department store.
//!
//! [`Department`] is both the in-memory value and the active record: its
//! persistence operations live in [`crate::db::department_queries`] and its
//! `Display` implementation in [`crate::display`].

pub mod department;


pub use department::Department;
