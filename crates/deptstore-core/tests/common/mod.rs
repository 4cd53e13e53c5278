use deptstore_core::{Database, DatabaseBuilder};
use tempfile::NamedTempFile;

/// Helper function to create a temporary database with the departments
/// table in place
pub fn create_test_db() -> (NamedTempFile, Database) {
    init_logging();
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    let db = DatabaseBuilder::new()
        .with_database_path(Some(temp_file.path()))
        .build()
        .expect("Failed to create test database");
    (temp_file, db)
}

/// Installs a test logger once; later calls are no-ops.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
