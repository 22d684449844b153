//! Data access layer over the query executor.
//!
//! # Responsibility
//! - Translate record operations into single, parameter-bound statements.
//! - Map column-keyed rows back into typed records, field by field.
//!
//! # Invariants
//! - Every operation issues exactly one statement; nothing is cached or
//!   batched, and no transaction spans two operations.
//! - "Not found" on a keyed select is `Ok(None)`, never an error.
//! - Executor failures reach the caller unchanged inside `RepoError::Db`.

use crate::db::DbError;
use crate::model::EntityId;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod crud;
pub mod music_repo;
pub mod record;
pub mod student_repo;
pub mod task_repo;

pub use crud::{CrudRepository, SqlRepository};
pub use music_repo::AlbumRepository;
pub use record::{BelongsTo, Record};
pub use student_repo::StudentRepository;
pub use task_repo::TaskRepository;

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for record persistence and queries.
#[derive(Debug)]
pub enum RepoError {
    /// Store or driver failure, including constraint violations.
    Db(DbError),
    /// A row could not be mapped into its record type.
    InvalidData(String),
    /// `save` was called on a record that already has an id.
    AlreadyPersisted(EntityId),
    /// `update` was called on a record that was never saved.
    NotPersisted(&'static str),
}

impl RepoError {
    pub fn is_constraint_violation(&self) -> bool {
        matches!(self, Self::Db(err) if err.is_constraint_violation())
    }

    pub fn is_connection_error(&self) -> bool {
        matches!(self, Self::Db(err) if err.is_connection_error())
    }
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted record data: {message}"),
            Self::AlreadyPersisted(id) => write!(f, "record already persisted with id {id}"),
            Self::NotPersisted(table) => {
                write!(f, "record in `{table}` has no id; save it before updating")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::InvalidData(_) | Self::AlreadyPersisted(_) | Self::NotPersisted(_) => None,
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
