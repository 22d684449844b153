//! `users` and `tasks` mapping.
//!
//! # Invariants
//! - `tasks.user_id` is nullable; an unowned task resolves to no user.
//! - `tasks.done` is stored as 0/1.

use super::crud::{select_sql, CrudRepository, SqlRepository};
use super::record::{
    flag_value, opt_int_value, opt_text_value, sealed::AssignId, text_value, BelongsTo, Record,
    RowReader,
};
use super::RepoResult;
use crate::executor::{QueryExecutor, Row};
use crate::model::task::Task;
use crate::model::user::User;
use crate::model::EntityId;
use rusqlite::types::Value;

impl AssignId for User {
    fn assign_id(&mut self, id: EntityId) {
        self.mark_persisted(id);
    }
}

impl Record for User {
    const TABLE: &'static str = "users";
    const COLUMNS: &'static [&'static str] = &["name"];

    fn id(&self) -> Option<EntityId> {
        User::id(self)
    }

    fn values(&self) -> Vec<Value> {
        vec![text_value(self.name())]
    }

    fn from_row(row: &Row) -> RepoResult<Self> {
        let reader = RowReader::new(row, Self::TABLE);
        Ok(Self::with_id(reader.int("id")?, reader.text("name")?))
    }
}

impl AssignId for Task {
    fn assign_id(&mut self, id: EntityId) {
        self.mark_persisted(id);
    }
}

impl Record for Task {
    const TABLE: &'static str = "tasks";
    const COLUMNS: &'static [&'static str] = &["title", "description", "done", "user_id"];

    fn id(&self) -> Option<EntityId> {
        Task::id(self)
    }

    fn values(&self) -> Vec<Value> {
        vec![
            text_value(self.title()),
            opt_text_value(self.description()),
            flag_value(self.is_done()),
            opt_int_value(self.user_id()),
        ]
    }

    fn from_row(row: &Row) -> RepoResult<Self> {
        let reader = RowReader::new(row, Self::TABLE);
        Ok(Self::with_id(
            reader.int("id")?,
            reader.text("title")?,
            reader.opt_text("description")?,
            reader.flag("done")?,
            reader.opt_int("user_id")?,
        ))
    }
}

impl BelongsTo<User> for Task {
    fn parent_id(&self) -> Option<EntityId> {
        self.user_id()
    }
}

/// Task queries beyond plain CRUD.
pub trait TaskRepository: CrudRepository<Task> {
    /// Tasks owned by `user_id`, in id order.
    fn tasks_for_user(&self, user_id: EntityId) -> RepoResult<Vec<Task>>;

    fn user(&self, task: &Task) -> RepoResult<Option<User>> {
        self.resolve(task)
    }
}

impl<X: QueryExecutor + ?Sized> TaskRepository for SqlRepository<'_, Task, X> {
    fn tasks_for_user(&self, user_id: EntityId) -> RepoResult<Vec<Task>> {
        self.fetch(
            &format!("{} WHERE user_id = ?1 ORDER BY id", select_sql::<Task>()),
            &[Value::Integer(user_id)],
        )
    }
}
