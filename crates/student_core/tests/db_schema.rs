use rusqlite::Connection;
use student_core::db::schema::{ensure_schema, verify_schema};
use student_core::db::{open_db, open_db_in_memory, DbError};
use student_core::{RecordStore, Student};

#[test]
fn open_db_in_memory_creates_students_table() {
    let conn = open_db_in_memory().unwrap();

    assert_table_exists(&conn, "students");
    verify_schema(&conn).unwrap();
}

#[test]
fn open_db_creates_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("students.db");
    assert!(!path.exists());

    let conn = open_db(&path).unwrap();
    assert!(path.exists());
    assert_table_exists(&conn, "students");
}

#[test]
fn ensure_schema_is_idempotent_and_keeps_rows() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO students (student_id, name, department, marks) VALUES (1, 'A', 'B', 2.5);",
        [],
    )
    .unwrap();

    ensure_schema(&conn).unwrap();
    ensure_schema(&conn).unwrap();

    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM students;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 1);
}

#[test]
fn records_survive_reopening_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("students.db");

    let store = RecordStore::initialize(&path).unwrap();
    store.add(&Student::new(5, "Meera", "Physics", 72.0)).unwrap();
    drop(store);

    let reopened = RecordStore::initialize(&path).unwrap();
    let students = reopened.list_all().unwrap();
    assert_eq!(students, vec![Student::new(5, "Meera", "Physics", 72.0)]);
}

#[test]
fn opening_a_non_database_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("garbage.db");
    std::fs::write(&path, "not a sqlite database\n".repeat(512)).unwrap();

    let err = open_db(&path).unwrap_err();
    assert!(matches!(err, DbError::Sqlite(_)));
}

#[test]
fn opening_a_directory_path_fails() {
    let dir = tempfile::tempdir().unwrap();

    assert!(RecordStore::initialize(dir.path()).is_err());
}

#[test]
fn verify_schema_rejects_missing_table() {
    let conn = Connection::open_in_memory().unwrap();

    let err = verify_schema(&conn).unwrap_err();
    assert!(matches!(err, DbError::MissingRequiredTable("students")));
}

#[test]
fn verify_schema_rejects_missing_column() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(
        "CREATE TABLE students (
            student_id INTEGER PRIMARY KEY,
            name TEXT,
            department TEXT
        );",
    )
    .unwrap();

    let err = verify_schema(&conn).unwrap_err();
    assert!(matches!(
        err,
        DbError::MissingRequiredColumn {
            table: "students",
            column: "marks"
        }
    ));
}

fn assert_table_exists(conn: &Connection, table_name: &str) {
    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM sqlite_master
                WHERE type = 'table' AND name = ?1
            );",
            [table_name],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(exists, 1, "table {table_name} does not exist");
}
