//! Table mapping contract for persisted record kinds.
//!
//! # Responsibility
//! - Name each kind's table and attribute columns.
//! - Convert records to bind values and rows back to records.
//!
//! # Invariants
//! - `COLUMNS` lists attribute columns only (never `id`), in the same order
//!   as `values()`.
//! - Table and column names are compile-time constants; they are the only
//!   text ever spliced into statements.
//! - `Record` is sealed: id assignment stays inside this crate.

use super::{RepoError, RepoResult};
use crate::executor::Row;
use crate::model::EntityId;
use rusqlite::types::Value;

pub(crate) mod sealed {
    use crate::model::EntityId;

    pub trait AssignId {
        fn assign_id(&mut self, id: EntityId);
    }
}

/// A record kind stored one-to-one in a table with an `id` primary key.
pub trait Record: sealed::AssignId + Sized {
    const TABLE: &'static str;
    const COLUMNS: &'static [&'static str];

    fn id(&self) -> Option<EntityId>;

    /// Bind values for `COLUMNS`, in order.
    fn values(&self) -> Vec<Value>;

    fn from_row(row: &Row) -> RepoResult<Self>;
}

/// Foreign-key style link from a record to a parent of another kind.
pub trait BelongsTo<P: Record>: Record {
    /// `None` when the record is not linked.
    fn parent_id(&self) -> Option<EntityId>;
}

/// Typed, table-aware access to one result row.
pub(crate) struct RowReader<'r> {
    row: &'r Row,
    table: &'static str,
}

impl<'r> RowReader<'r> {
    pub(crate) fn new(row: &'r Row, table: &'static str) -> Self {
        Self { row, table }
    }

    fn value(&self, column: &str) -> RepoResult<&'r Value> {
        self.row.get(column).ok_or_else(|| {
            RepoError::InvalidData(format!("missing column {}.{column}", self.table))
        })
    }

    fn mismatch(&self, column: &str, expected: &str, found: &Value) -> RepoError {
        RepoError::InvalidData(format!(
            "expected {expected} in {}.{column}, found {}",
            self.table,
            found.data_type()
        ))
    }

    pub(crate) fn int(&self, column: &str) -> RepoResult<i64> {
        match self.value(column)? {
            Value::Integer(value) => Ok(*value),
            other => Err(self.mismatch(column, "integer", other)),
        }
    }

    pub(crate) fn opt_int(&self, column: &str) -> RepoResult<Option<i64>> {
        match self.value(column)? {
            Value::Null => Ok(None),
            Value::Integer(value) => Ok(Some(*value)),
            other => Err(self.mismatch(column, "integer or null", other)),
        }
    }

    pub(crate) fn text(&self, column: &str) -> RepoResult<String> {
        match self.value(column)? {
            Value::Text(value) => Ok(value.clone()),
            other => Err(self.mismatch(column, "text", other)),
        }
    }

    pub(crate) fn opt_text(&self, column: &str) -> RepoResult<Option<String>> {
        match self.value(column)? {
            Value::Null => Ok(None),
            Value::Text(value) => Ok(Some(value.clone())),
            other => Err(self.mismatch(column, "text or null", other)),
        }
    }

    /// Booleans are stored as 0/1 integers.
    pub(crate) fn flag(&self, column: &str) -> RepoResult<bool> {
        match self.int(column)? {
            0 => Ok(false),
            1 => Ok(true),
            other => Err(RepoError::InvalidData(format!(
                "invalid flag value `{other}` in {}.{column}",
                self.table
            ))),
        }
    }
}

pub(crate) fn text_value(value: &str) -> Value {
    Value::Text(value.to_owned())
}

pub(crate) fn opt_text_value(value: Option<&str>) -> Value {
    value.map_or(Value::Null, text_value)
}

pub(crate) fn opt_int_value(value: Option<i64>) -> Value {
    value.map_or(Value::Null, Value::Integer)
}

pub(crate) fn flag_value(value: bool) -> Value {
    Value::Integer(i64::from(value))
}
