mod common;

use common::{create_test_db, init_logging};
use deptstore_core::{Database, DatabaseBuilder, Department, Storage};
use rusqlite::params;
use tempfile::TempDir;

#[test]
fn test_database_initialization() {
    let (temp_file, db) = create_test_db();

    assert!(temp_file.path().exists());
    assert!(db.table_exists("departments").unwrap());
    assert!(!db.has_pending_changes());
}

#[test]
fn test_builder_creates_parent_directories() {
    init_logging();
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("nested").join("dir").join("departments.db");

    let db = DatabaseBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .expect("Failed to build database");

    assert!(db_path.exists());
    assert!(db.table_exists("departments").unwrap());
}

#[test]
fn test_builder_in_memory() {
    let db = DatabaseBuilder::new().in_memory().build().unwrap();

    Department::create(&db, "Engineering", "Building A").unwrap();
    assert_eq!(Department::get_all(&db).unwrap().len(), 1);
}

#[test]
fn test_builder_without_table() {
    let db = DatabaseBuilder::new()
        .in_memory()
        .with_table(false)
        .build()
        .unwrap();

    assert!(!db.table_exists("departments").unwrap());
}

#[test]
fn test_in_memory_databases_are_isolated() {
    let first = DatabaseBuilder::new().in_memory().build().unwrap();
    let second = DatabaseBuilder::new().in_memory().build().unwrap();

    Department::create(&first, "Engineering", "Building A").unwrap();

    assert_eq!(Department::get_all(&first).unwrap().len(), 1);
    assert!(Department::get_all(&second).unwrap().is_empty());
}

#[test]
fn test_ensure_table_exists_is_idempotent() {
    let (_temp_file, db) = create_test_db();
    let dept = Department::create(&db, "Engineering", "Building A").unwrap();

    Department::ensure_table_exists(&db).expect("first call failed");
    Department::ensure_table_exists(&db).expect("second call failed");

    assert_eq!(Department::get_all(&db).unwrap(), vec![dept]);
}

#[test]
fn test_drop_table_is_idempotent() {
    let (_temp_file, db) = create_test_db();

    Department::drop_table(&db).expect("first drop failed");
    Department::drop_table(&db).expect("second drop failed");

    assert!(!db.table_exists("departments").unwrap());
}

#[test]
fn test_drop_then_recreate_starts_empty() {
    let (_temp_file, db) = create_test_db();
    Department::create(&db, "Engineering", "Building A").unwrap();

    Department::drop_table(&db).unwrap();
    Department::ensure_table_exists(&db).unwrap();

    assert!(Department::get_all(&db).unwrap().is_empty());
    let dept = Department::create(&db, "Sales", "Building B").unwrap();
    assert_eq!(dept.id, Some(1));
}

#[test]
fn test_committed_rows_survive_reopen() {
    let (temp_file, db) = create_test_db();
    let dept = Department::create(&db, "Engineering", "Building A").unwrap();
    drop(db);

    let reopened = Database::new(temp_file.path()).unwrap();
    let found = Department::find_by_id(&reopened, dept.id.unwrap()).unwrap();
    assert_eq!(found, Some(dept));
}

#[test]
fn test_execute_stays_pending_until_commit() {
    let (_temp_file, db) = create_test_db();

    let affected = db
        .execute(
            "INSERT INTO departments (name, location) VALUES (?1, ?2)",
            params!["Engineering", "Building A"],
        )
        .unwrap();
    assert_eq!(affected, 1);
    assert!(db.has_pending_changes());

    db.commit().unwrap();
    assert!(!db.has_pending_changes());
}

#[test]
fn test_uncommitted_changes_are_discarded_on_close() {
    let (temp_file, db) = create_test_db();

    db.execute(
        "INSERT INTO departments (name, location) VALUES (?1, ?2)",
        params!["Engineering", "Building A"],
    )
    .unwrap();
    drop(db);

    let reopened = Database::new(temp_file.path()).unwrap();
    assert!(Department::get_all(&reopened).unwrap().is_empty());
}

#[test]
fn test_commit_without_pending_changes_is_noop() {
    let (_temp_file, db) = create_test_db();

    db.commit().expect("empty commit should succeed");
    db.commit().expect("repeated commit should succeed");
}

#[test]
fn test_query_one_and_query_all() {
    let (_temp_file, db) = create_test_db();
    Department::create(&db, "Engineering", "Building A").unwrap();
    Department::create(&db, "Sales", "Building B").unwrap();

    let count: Option<i64> = db
        .query_one("SELECT COUNT(*) FROM departments", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, Some(2));

    let none: Option<String> = db
        .query_one(
            "SELECT name FROM departments WHERE id = ?1",
            params![10],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(none, None);

    let names: Vec<String> = db
        .query_all("SELECT name FROM departments", [], |row| row.get(0))
        .unwrap();
    assert_eq!(names, vec!["Engineering".to_string(), "Sales".to_string()]);
}

#[test]
fn test_invalid_sql_is_database_error() {
    let (_temp_file, db) = create_test_db();

    let result: deptstore_core::Result<Vec<i64>> =
        db.query_all("SELECT nope FROM nowhere", [], |row| row.get(0));
    assert!(matches!(
        result,
        Err(deptstore_core::DeptStoreError::Database { .. })
    ));
}

#[test]
fn test_failed_write_leaves_no_open_transaction() {
    let (_temp_file, db) = create_test_db();
    Department::drop_table(&db).unwrap();

    assert!(Department::create(&db, "X", "Y").is_err());
    assert!(!db.has_pending_changes());

    Department::ensure_table_exists(&db).unwrap();
    let dept = Department::create(&db, "Engineering", "Building A").unwrap();
    assert!(!db.has_pending_changes());
    assert_eq!(Department::get_all(&db).unwrap(), vec![dept]);
}

#[test]
fn test_failed_write_keeps_earlier_pending_changes() {
    let (temp_file, db) = create_test_db();

    db.execute(
        "INSERT INTO departments (name, location) VALUES (?1, ?2)",
        params!["Engineering", "Building A"],
    )
    .unwrap();
    assert!(db
        .execute("INSERT INTO nowhere (name) VALUES (?1)", params!["X"])
        .is_err());
    assert!(db.has_pending_changes());

    db.commit().unwrap();
    drop(db);

    let reopened = Database::new(temp_file.path()).unwrap();
    assert_eq!(Department::get_all(&reopened).unwrap().len(), 1);
}
