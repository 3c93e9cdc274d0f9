//! `students` table definition and shape checks.
//!
//! # Invariants
//! - `ensure_schema` never drops or alters existing data.
//! - `verify_schema` only reads `sqlite_master` / `table_info`.

use crate::db::{DbError, DbResult};
use rusqlite::Connection;

pub const STUDENTS_TABLE: &str = "students";

const STUDENTS_COLUMNS: &[&str] = &["student_id", "name", "department", "marks"];

/// Creates the `students` table when absent.
pub fn ensure_schema(conn: &Connection) -> DbResult<()> {
    conn.execute_batch(include_str!("schema.sql"))?;
    Ok(())
}

/// Rejects connections that were not bootstrapped through `ensure_schema`.
pub fn verify_schema(conn: &Connection) -> DbResult<()> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [STUDENTS_TABLE],
        |row| row.get(0),
    )?;
    if exists == 0 {
        return Err(DbError::MissingRequiredTable(STUDENTS_TABLE));
    }

    let mut stmt = conn.prepare("SELECT name FROM pragma_table_info(?1);")?;
    let present = stmt
        .query_map([STUDENTS_TABLE], |row| row.get::<_, String>(0))?
        .collect::<Result<Vec<_>, _>>()?;

    for &column in STUDENTS_COLUMNS {
        if !present.iter().any(|name| name.as_str() == column) {
            return Err(DbError::MissingRequiredColumn {
                table: STUDENTS_TABLE,
                column,
            });
        }
    }

    Ok(())
}
