//! `students` table mapping and lookups.
//!
//! # Invariants
//! - Surname lookups are exact and bound, so quotes or SQL fragments in
//!   a surname are matched literally.
//! - When several students share a surname the lowest id wins.

use super::crud::{select_sql, CrudRepository, SqlRepository};
use super::record::{sealed::AssignId, text_value, Record, RowReader};
use super::RepoResult;
use crate::executor::{QueryExecutor, Row};
use crate::model::student::Student;
use crate::model::EntityId;
use rusqlite::types::Value;

impl AssignId for Student {
    fn assign_id(&mut self, id: EntityId) {
        self.mark_persisted(id);
    }
}

impl Record for Student {
    const TABLE: &'static str = "students";
    const COLUMNS: &'static [&'static str] = &["first_name", "surname", "age"];

    fn id(&self) -> Option<EntityId> {
        Student::id(self)
    }

    fn values(&self) -> Vec<Value> {
        vec![
            text_value(self.first_name()),
            text_value(self.surname()),
            Value::Integer(self.age()),
        ]
    }

    fn from_row(row: &Row) -> RepoResult<Self> {
        let reader = RowReader::new(row, Self::TABLE);
        Ok(Self::with_id(
            reader.int("id")?,
            reader.text("first_name")?,
            reader.text("surname")?,
            reader.int("age")?,
        ))
    }
}

/// Student queries beyond plain CRUD.
pub trait StudentRepository: CrudRepository<Student> {
    fn find_by_surname(&self, surname: &str) -> RepoResult<Option<Student>>;

    /// Sets only the `age` column; a missing id is a no-op.
    fn update_age(&self, id: EntityId, age: i64) -> RepoResult<()>;
}

impl<X: QueryExecutor + ?Sized> StudentRepository for SqlRepository<'_, Student, X> {
    fn find_by_surname(&self, surname: &str) -> RepoResult<Option<Student>> {
        self.fetch_one(
            &format!(
                "{} WHERE surname = ?1 ORDER BY id LIMIT 1",
                select_sql::<Student>()
            ),
            &[text_value(surname)],
        )
    }

    fn update_age(&self, id: EntityId, age: i64) -> RepoResult<()> {
        self.run(
            "UPDATE students SET age = ?1 WHERE id = ?2",
            &[Value::Integer(age), Value::Integer(id)],
        )
    }
}
