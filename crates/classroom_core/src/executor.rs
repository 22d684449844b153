//! Statement execution boundary between repositories and the store.
//!
//! # Responsibility
//! - Run one statement with positionally bound parameters per call.
//! - Hand back every result row as a column-name keyed map.
//!
//! # Invariants
//! - Caller values only ever travel as bound parameters.
//! - Failures from the driver are returned unchanged.
//! - Log lines carry statement metadata, never parameter values.

use crate::db::migrations::{current_version, latest_version, RECORD_TABLES};
use crate::db::{DbError, DbResult};
use log::{debug, warn};
use rusqlite::{params_from_iter, Connection};
use std::collections::BTreeMap;
use std::time::Instant;

pub use rusqlite::types::Value;

/// One result row: column name to value.
pub type Row = BTreeMap<String, Value>;

/// Executes a single statement and collects its rows.
///
/// Statements that produce no rows (plain `UPDATE`/`DELETE`) yield an empty
/// vector.
pub trait QueryExecutor {
    fn execute(&self, sql: &str, params: &[Value]) -> DbResult<Vec<Row>>;
}

impl<X: QueryExecutor + ?Sized> QueryExecutor for &X {
    fn execute(&self, sql: &str, params: &[Value]) -> DbResult<Vec<Row>> {
        (**self).execute(sql, params)
    }
}

/// Executor over a caller-owned SQLite connection.
pub struct SqliteExecutor<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteExecutor<'conn> {
    /// Wraps a connection opened through `db::open_db*`.
    ///
    /// # Errors
    /// - `UninitializedConnection` when the schema version is not current.
    /// - `MissingRequiredTable` when a record table is absent.
    pub fn try_new(conn: &'conn Connection) -> DbResult<Self> {
        let expected_version = latest_version();
        let actual_version = current_version(conn)?;
        if actual_version != expected_version {
            return Err(DbError::UninitializedConnection {
                expected_version,
                actual_version,
            });
        }

        for &table in RECORD_TABLES {
            if !table_exists(conn, table)? {
                return Err(DbError::MissingRequiredTable(table));
            }
        }

        Ok(Self { conn })
    }

    pub fn connection(&self) -> &'conn Connection {
        self.conn
    }

    fn run(&self, sql: &str, params: &[Value]) -> DbResult<Vec<Row>> {
        let mut stmt = self.conn.prepare_cached(sql)?;
        let columns: Vec<String> = stmt
            .column_names()
            .into_iter()
            .map(str::to_owned)
            .collect();

        let mut rows = stmt.query(params_from_iter(params.iter()))?;
        let mut collected = Vec::new();
        while let Some(row) = rows.next()? {
            let mut mapped = Row::new();
            for (idx, column) in columns.iter().enumerate() {
                mapped.insert(column.clone(), row.get::<_, Value>(idx)?);
            }
            collected.push(mapped);
        }

        Ok(collected)
    }
}

impl QueryExecutor for SqliteExecutor<'_> {
    fn execute(&self, sql: &str, params: &[Value]) -> DbResult<Vec<Row>> {
        let started_at = Instant::now();
        let kind = statement_kind(sql);

        match self.run(sql, params) {
            Ok(rows) => {
                debug!(
                    "event=sql_execute module=executor status=ok kind={kind} params={} rows={} duration_ms={}",
                    params.len(),
                    rows.len(),
                    started_at.elapsed().as_millis()
                );
                Ok(rows)
            }
            Err(err) => {
                warn!(
                    "event=sql_execute module=executor status=error kind={kind} params={} duration_ms={} constraint={} error={err}",
                    params.len(),
                    started_at.elapsed().as_millis(),
                    err.is_constraint_violation()
                );
                Err(err)
            }
        }
    }
}

fn statement_kind(sql: &str) -> String {
    sql.split_whitespace()
        .next()
        .unwrap_or("empty")
        .to_ascii_lowercase()
}

fn table_exists(conn: &Connection, table: &str) -> DbResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

#[cfg(test)]
mod tests {
    use super::{statement_kind, QueryExecutor, SqliteExecutor};
    use crate::db::open_db_in_memory;
    use rusqlite::types::Value;

    #[test]
    fn statement_kind_takes_leading_keyword() {
        assert_eq!(statement_kind("  SELECT * FROM albums"), "select");
        assert_eq!(statement_kind("INSERT INTO t"), "insert");
        assert_eq!(statement_kind(""), "empty");
    }

    #[test]
    fn rows_are_keyed_by_column_name() {
        let conn = open_db_in_memory().unwrap();
        let executor = SqliteExecutor::try_new(&conn).unwrap();

        let inserted = executor
            .execute(
                "INSERT INTO artists (name) VALUES (?1) RETURNING id, name",
                &[Value::Text("The Beatles".to_string())],
            )
            .unwrap();

        assert_eq!(inserted.len(), 1);
        assert_eq!(inserted[0]["id"], Value::Integer(1));
        assert_eq!(inserted[0]["name"], Value::Text("The Beatles".to_string()));
    }

    #[test]
    fn statements_without_result_columns_return_no_rows() {
        let conn = open_db_in_memory().unwrap();
        let executor = SqliteExecutor::try_new(&conn).unwrap();

        let rows = executor
            .execute("DELETE FROM artists WHERE id = ?1", &[Value::Integer(7)])
            .unwrap();
        assert!(rows.is_empty());
    }
}
