//! Core use-case services.
//!
//! # Responsibility
//! - Own the storage connection and expose the student operations.
//! - Keep the console front end decoupled from SQLite details.

pub mod record_store;
