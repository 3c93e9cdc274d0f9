//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the data access contract for student records.
//! - Isolate SQLite query details from the record store.
//!
//! # Invariants
//! - Every statement binds values as parameters, never by string formatting.
//! - Update/delete report affected rows; zero rows is not an error.

pub mod student_repo;
