//! Generic CRUD repository over any `Record` kind.
//!
//! # Responsibility
//! - Provide save/select/update/delete for one table per record kind.
//! - Resolve foreign-key links with a separate keyed select.
//!
//! # Invariants
//! - Exactly one executor round trip per operation.
//! - Statement text comes from `Record::TABLE`/`Record::COLUMNS` only; every
//!   value is bound positionally.
//! - `save` never overwrites an existing id.

use super::record::{BelongsTo, Record, RowReader};
use super::{RepoError, RepoResult};
use crate::executor::QueryExecutor;
use crate::model::EntityId;
use rusqlite::types::Value;
use std::marker::PhantomData;

/// CRUD contract shared by every persisted record kind.
pub trait CrudRepository<T: Record> {
    /// Inserts a transient record and assigns the generated id onto it.
    fn save(&self, record: &mut T) -> RepoResult<EntityId>;
    /// Returns every row in store order.
    fn select_all(&self) -> RepoResult<Vec<T>>;
    fn select(&self, id: EntityId) -> RepoResult<Option<T>>;
    /// Overwrites all attribute columns of the row with `record.id`.
    ///
    /// Does not report whether a row matched.
    fn update(&self, record: &T) -> RepoResult<()>;
    /// Deleting a missing id is a no-op.
    fn delete(&self, id: EntityId) -> RepoResult<()>;
    /// Removes every row of the table. Test fixtures only.
    fn delete_all(&self) -> RepoResult<()>;
    /// Fetches the parent named by the record's foreign key.
    ///
    /// Returns `None` for an unlinked record or a dangling key.
    fn resolve<P>(&self, record: &T) -> RepoResult<Option<P>>
    where
        T: BelongsTo<P>,
        P: Record;
}

/// Statement-building repository bound to a borrowed executor.
pub struct SqlRepository<'x, T, X: ?Sized> {
    executor: &'x X,
    _record: PhantomData<fn() -> T>,
}

impl<'x, T: Record, X: QueryExecutor + ?Sized> SqlRepository<'x, T, X> {
    pub fn new(executor: &'x X) -> Self {
        Self {
            executor,
            _record: PhantomData,
        }
    }

    pub fn executor(&self) -> &'x X {
        self.executor
    }

    /// Runs a row-returning statement and maps every row into `T`.
    pub(crate) fn fetch(&self, sql: &str, params: &[Value]) -> RepoResult<Vec<T>> {
        self.executor
            .execute(sql, params)?
            .iter()
            .map(T::from_row)
            .collect()
    }

    pub(crate) fn fetch_one(&self, sql: &str, params: &[Value]) -> RepoResult<Option<T>> {
        Ok(self.fetch(sql, params)?.into_iter().next())
    }

    pub(crate) fn run(&self, sql: &str, params: &[Value]) -> RepoResult<()> {
        self.executor.execute(sql, params)?;
        Ok(())
    }
}

impl<T: Record, X: QueryExecutor + ?Sized> CrudRepository<T> for SqlRepository<'_, T, X> {
    fn save(&self, record: &mut T) -> RepoResult<EntityId> {
        if let Some(id) = record.id() {
            return Err(RepoError::AlreadyPersisted(id));
        }

        let rows = self
            .executor
            .execute(&insert_sql::<T>(), &record.values())?;
        let row = rows.first().ok_or_else(|| {
            RepoError::InvalidData(format!("insert into {} returned no id", T::TABLE))
        })?;
        let id = RowReader::new(row, T::TABLE).int("id")?;

        record.assign_id(id);
        Ok(id)
    }

    fn select_all(&self) -> RepoResult<Vec<T>> {
        self.fetch(&select_sql::<T>(), &[])
    }

    fn select(&self, id: EntityId) -> RepoResult<Option<T>> {
        self.fetch_one(
            &format!("{} WHERE id = ?1", select_sql::<T>()),
            &[Value::Integer(id)],
        )
    }

    fn update(&self, record: &T) -> RepoResult<()> {
        let id = record.id().ok_or(RepoError::NotPersisted(T::TABLE))?;
        let mut params = record.values();
        params.push(Value::Integer(id));
        self.run(&update_sql::<T>(), &params)
    }

    fn delete(&self, id: EntityId) -> RepoResult<()> {
        self.run(
            &format!("DELETE FROM {} WHERE id = ?1", T::TABLE),
            &[Value::Integer(id)],
        )
    }

    fn delete_all(&self) -> RepoResult<()> {
        self.run(&format!("DELETE FROM {}", T::TABLE), &[])
    }

    fn resolve<P>(&self, record: &T) -> RepoResult<Option<P>>
    where
        T: BelongsTo<P>,
        P: Record,
    {
        match record.parent_id() {
            Some(parent_id) => SqlRepository::<P, X>::new(self.executor).select(parent_id),
            None => Ok(None),
        }
    }
}

/// `SELECT id, <columns> FROM <table>`; callers append filters.
pub(crate) fn select_sql<T: Record>() -> String {
    format!("SELECT id, {} FROM {}", T::COLUMNS.join(", "), T::TABLE)
}

fn insert_sql<T: Record>() -> String {
    let placeholders = (1..=T::COLUMNS.len())
        .map(|idx| format!("?{idx}"))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "INSERT INTO {} ({}) VALUES ({placeholders}) RETURNING id",
        T::TABLE,
        T::COLUMNS.join(", ")
    )
}

fn update_sql<T: Record>() -> String {
    let assignments = T::COLUMNS
        .iter()
        .enumerate()
        .map(|(idx, column)| format!("{column} = ?{}", idx + 1))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "UPDATE {} SET {assignments} WHERE id = ?{}",
        T::TABLE,
        T::COLUMNS.len() + 1
    )
}
