//! Student record domain model.
//!
//! # Responsibility
//! - Define the single persisted entity handled by the record store.
//!
//! # Invariants
//! - Every record is identified by a caller-assigned `StudentId`.
//! - Only `marks` changes after a record is created.

pub mod student;
