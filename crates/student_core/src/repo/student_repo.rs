//! Student repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide insert, select-all, update-by-key and delete-by-key over `students`.
//! - Translate primary-key collisions into `RepoError::DuplicateKey`.
//!
//! # Invariants
//! - `list_all` applies no ordering; callers must not depend on row order.
//! - `update_marks` never touches `name`, `department` or `student_id`.

use crate::db::schema::verify_schema;
use crate::db::DbError;
use crate::model::student::{Student, StudentId};
use rusqlite::{ffi, params, Connection, ErrorCode, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for student persistence operations.
#[derive(Debug)]
pub enum RepoError {
    /// Insert collided with an existing `student_id`.
    DuplicateKey(StudentId),
    Db(DbError),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateKey(id) => write!(f, "student id {id} already exists"),
            Self::Db(err) => write!(f, "{err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::DuplicateKey(_) => None,
            Self::Db(err) => Some(err),
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for student CRUD operations.
pub trait StudentRepository {
    fn add(&self, student: &Student) -> RepoResult<()>;
    fn list_all(&self) -> RepoResult<Vec<Student>>;
    /// Returns affected rows: `0` when `id` is unknown, otherwise `1`.
    fn update_marks(&self, id: StudentId, marks: f64) -> RepoResult<usize>;
    /// Returns affected rows with the same semantics as `update_marks`.
    fn delete(&self, id: StudentId) -> RepoResult<usize>;
}

/// SQLite-backed student repository.
pub struct SqliteStudentRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteStudentRepository<'conn> {
    /// Wraps a connection whose schema is already ensured.
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    /// Wraps a connection after checking that `students` has the expected shape.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        verify_schema(conn)?;
        Ok(Self::new(conn))
    }
}

impl StudentRepository for SqliteStudentRepository<'_> {
    fn add(&self, student: &Student) -> RepoResult<()> {
        let result = self.conn.execute(
            "INSERT INTO students (student_id, name, department, marks)
             VALUES (?1, ?2, ?3, ?4);",
            params![
                student.student_id,
                student.name.as_str(),
                student.department.as_str(),
                student.marks,
            ],
        );

        match result {
            Ok(_) => Ok(()),
            Err(err) if is_key_collision(&err) => Err(RepoError::DuplicateKey(student.student_id)),
            Err(err) => Err(err.into()),
        }
    }

    fn list_all(&self) -> RepoResult<Vec<Student>> {
        let mut stmt = self
            .conn
            .prepare("SELECT student_id, name, department, marks FROM students;")?;
        let mut rows = stmt.query([])?;
        let mut students = Vec::new();

        while let Some(row) = rows.next()? {
            students.push(parse_student_row(row)?);
        }

        Ok(students)
    }

    fn update_marks(&self, id: StudentId, marks: f64) -> RepoResult<usize> {
        let changed = self.conn.execute(
            "UPDATE students SET marks = ?1 WHERE student_id = ?2;",
            params![marks, id],
        )?;
        Ok(changed)
    }

    fn delete(&self, id: StudentId) -> RepoResult<usize> {
        let changed = self
            .conn
            .execute("DELETE FROM students WHERE student_id = ?1;", [id])?;
        Ok(changed)
    }
}

fn parse_student_row(row: &Row<'_>) -> rusqlite::Result<Student> {
    // Columns are nullable in the table definition; absent text reads as empty.
    Ok(Student {
        student_id: row.get("student_id")?,
        name: row.get::<_, Option<String>>("name")?.unwrap_or_default(),
        department: row
            .get::<_, Option<String>>("department")?
            .unwrap_or_default(),
        marks: row.get::<_, Option<f64>>("marks")?.unwrap_or_default(),
    })
}

fn is_key_collision(err: &rusqlite::Error) -> bool {
    match err {
        rusqlite::Error::SqliteFailure(failure, _) => {
            failure.code == ErrorCode::ConstraintViolation
                && matches!(
                    failure.extended_code,
                    ffi::SQLITE_CONSTRAINT_PRIMARYKEY | ffi::SQLITE_CONSTRAINT_UNIQUE
                )
        }
        _ => false,
    }
}
