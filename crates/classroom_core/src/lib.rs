//! Core records and data access for the classroom exercises.
//! Entities, the query executor, repositories and storage bootstrap live here.

pub mod db;
pub mod executor;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use executor::{QueryExecutor, Row, SqliteExecutor, Value};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::album::Album;
pub use model::artist::Artist;
pub use model::bank_account::{AccountKind, BankAccount};
pub use model::library::{Book, Library, LibraryError, RentalDetails};
pub use model::student::Student;
pub use model::task::Task;
pub use model::team::Team;
pub use model::user::User;
pub use model::EntityId;
pub use repo::{
    AlbumRepository, BelongsTo, CrudRepository, Record, RepoError, RepoResult, SqlRepository,
    StudentRepository, TaskRepository,
};
pub use service::music_service::{CatalogueEntry, MusicLibraryService};
pub use service::student_service::StudentService;

/// Minimal health-check API for wiring checks.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
