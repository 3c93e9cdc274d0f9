//! Record store: exclusive owner of the process-wide storage connection.
//!
//! # Responsibility
//! - Open the backing database once and reuse it for every operation.
//! - Expose exactly four operations: add, list, update marks, delete.
//!
//! # Invariants
//! - No other component touches the `Connection` handle.
//! - Every operation is a single statement; no transactions are opened.
//! - The connection is closed when the store is dropped.

use crate::db::{open_db, open_db_in_memory, DbResult};
use crate::model::student::{Student, StudentId};
use crate::repo::student_repo::{
    RepoError, RepoResult, SqliteStudentRepository, StudentRepository,
};
use log::{debug, info, warn};
use rusqlite::Connection;
use std::path::Path;

/// Durable CRUD access to the `students` table.
pub struct RecordStore {
    conn: Connection,
}

impl RecordStore {
    /// Opens (or creates) the database file and ensures the schema.
    ///
    /// Idempotent across restarts. An error here means storage is unavailable
    /// and callers should not proceed.
    pub fn initialize(path: impl AsRef<Path>) -> DbResult<Self> {
        Ok(Self {
            conn: open_db(path)?,
        })
    }

    /// Opens a throwaway in-memory store.
    pub fn in_memory() -> DbResult<Self> {
        Ok(Self {
            conn: open_db_in_memory()?,
        })
    }

    /// Inserts a new record. Fails with `RepoError::DuplicateKey` on id collision.
    pub fn add(&self, student: &Student) -> RepoResult<()> {
        match self.repo().add(student) {
            Ok(()) => {
                info!(
                    "event=student_add module=store status=ok student_id={}",
                    student.student_id
                );
                Ok(())
            }
            Err(err @ RepoError::DuplicateKey(_)) => {
                warn!(
                    "event=student_add module=store status=error student_id={} error_code=duplicate_key",
                    student.student_id
                );
                Err(err)
            }
            Err(err) => {
                warn!(
                    "event=student_add module=store status=error student_id={} error_code=db_error error={}",
                    student.student_id, err
                );
                Err(err)
            }
        }
    }

    /// Returns every stored record in storage-native order.
    pub fn list_all(&self) -> RepoResult<Vec<Student>> {
        let students = self.repo().list_all().inspect_err(|err| {
            warn!("event=student_list module=store status=error error={err}");
        })?;
        debug!(
            "event=student_list module=store status=ok count={}",
            students.len()
        );
        Ok(students)
    }

    /// Sets `marks` for `id`. Returns affected rows; `0` means not found.
    pub fn update_marks(&self, id: StudentId, marks: f64) -> RepoResult<usize> {
        let changed = self.repo().update_marks(id, marks).inspect_err(|err| {
            warn!(
                "event=student_update module=store status=error student_id={id} error={err}"
            );
        })?;
        info!(
            "event=student_update module=store status={} student_id={id}",
            outcome(changed)
        );
        Ok(changed)
    }

    /// Deletes `id`. Returns affected rows; `0` means not found.
    pub fn delete(&self, id: StudentId) -> RepoResult<usize> {
        let changed = self.repo().delete(id).inspect_err(|err| {
            warn!(
                "event=student_delete module=store status=error student_id={id} error={err}"
            );
        })?;
        info!(
            "event=student_delete module=store status={} student_id={id}",
            outcome(changed)
        );
        Ok(changed)
    }

    fn repo(&self) -> SqliteStudentRepository<'_> {
        SqliteStudentRepository::new(&self.conn)
    }
}

fn outcome(changed: usize) -> &'static str {
    if changed == 0 {
        "not_found"
    } else {
        "ok"
    }
}
