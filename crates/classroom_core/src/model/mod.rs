//! Domain records for the course exercises.
//!
//! # Responsibility
//! - Hold identity and attribute values for every record kind.
//! - Provide the small derived computations the labs ask for.
//!
//! # Invariants
//! - Persisted kinds carry `id: Option<EntityId>`; `None` means transient.
//! - Once assigned, an id is never changed. Only the repository layer
//!   assigns it, right after a successful insert.
//! - Models never validate attribute values.

pub mod album;
pub mod artist;
pub mod bank_account;
pub mod library;
pub mod student;
pub mod task;
pub mod team;
pub mod user;

/// Store-generated primary key shared by every persisted record kind.
pub type EntityId = i64;
