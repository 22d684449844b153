use classroom_core::db::{DbError, DbResult};
use classroom_core::{
    Album, CrudRepository, QueryExecutor, RepoError, Row, SqlRepository, Student,
    StudentRepository, Value,
};
use std::cell::RefCell;
use std::collections::VecDeque;

/// Records every statement and answers with queued rows.
#[derive(Default)]
struct ScriptedExecutor {
    calls: RefCell<Vec<(String, Vec<Value>)>>,
    responses: RefCell<VecDeque<DbResult<Vec<Row>>>>,
}

impl ScriptedExecutor {
    fn respond(&self, response: DbResult<Vec<Row>>) {
        self.responses.borrow_mut().push_back(response);
    }

    fn calls(&self) -> Vec<(String, Vec<Value>)> {
        self.calls.borrow().clone()
    }
}

impl QueryExecutor for ScriptedExecutor {
    fn execute(&self, sql: &str, params: &[Value]) -> DbResult<Vec<Row>> {
        self.calls
            .borrow_mut()
            .push((sql.to_string(), params.to_vec()));
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}

fn row(entries: &[(&str, Value)]) -> Row {
    entries
        .iter()
        .map(|(name, value)| ((*name).to_string(), value.clone()))
        .collect()
}

fn text(value: &str) -> Value {
    Value::Text(value.to_string())
}

#[test]
fn save_binds_attributes_and_assigns_returned_id() {
    let executor = ScriptedExecutor::default();
    executor.respond(Ok(vec![row(&[("id", Value::Integer(12))])]));
    let repo: SqlRepository<Album, _> = SqlRepository::new(&executor);

    let mut album = Album::new("Abbey Road", 1, "Rock");
    assert_eq!(repo.save(&mut album).unwrap(), 12);
    assert_eq!(album.id(), Some(12));

    let calls = executor.calls();
    assert_eq!(calls.len(), 1);
    assert!(calls[0].0.starts_with("INSERT INTO albums"));
    assert_eq!(
        calls[0].1,
        vec![text("Abbey Road"), Value::Integer(1), text("Rock")]
    );
}

#[test]
fn update_binds_id_after_attributes() {
    let executor = ScriptedExecutor::default();
    let repo: SqlRepository<Student, _> = SqlRepository::new(&executor);

    repo.update(&Student::with_id(4, "Colin", "Bell", 36))
        .unwrap();

    let calls = executor.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(
        calls[0].1,
        vec![text("Colin"), text("Bell"), Value::Integer(36), Value::Integer(4)]
    );
}

#[test]
fn caller_text_never_reaches_statement_text() {
    let executor = ScriptedExecutor::default();
    let repo: SqlRepository<Student, _> = SqlRepository::new(&executor);

    repo.find_by_surname("Bell'; DELETE FROM students; --")
        .unwrap();

    let calls = executor.calls();
    assert!(!calls[0].0.contains("Bell"));
    assert_eq!(calls[0].1, vec![text("Bell'; DELETE FROM students; --")]);
}

#[test]
fn executor_failures_propagate_unchanged() {
    let executor = ScriptedExecutor::default();
    executor.respond(Err(DbError::MissingRequiredTable("students")));
    let repo: SqlRepository<Student, _> = SqlRepository::new(&executor);

    let err = repo.select_all().unwrap_err();
    assert!(matches!(
        err,
        RepoError::Db(DbError::MissingRequiredTable("students"))
    ));
    assert_eq!(executor.calls().len(), 1);
}

#[test]
fn malformed_rows_are_reported_as_invalid_data() {
    let executor = ScriptedExecutor::default();
    executor.respond(Ok(vec![row(&[
        ("id", Value::Integer(1)),
        ("first_name", text("John")),
        ("surname", text("McCollum")),
        ("age", text("thirty-eight")),
    ])]));
    let repo: SqlRepository<Student, _> = SqlRepository::new(&executor);

    let err = repo.select(1).unwrap_err();
    assert!(
        matches!(err, RepoError::InvalidData(ref message) if message.contains("students.age")),
        "unexpected error: {err}"
    );
}

#[test]
fn insert_without_returned_row_is_invalid_data() {
    let executor = ScriptedExecutor::default();
    let repo: SqlRepository<Album, _> = SqlRepository::new(&executor);

    let mut album = Album::new("Abbey Road", 1, "Rock");
    let err = repo.save(&mut album).unwrap_err();

    assert!(matches!(err, RepoError::InvalidData(_)));
    assert_eq!(album.id(), None);
}
