use classroom_core::db::open_db_in_memory;
use classroom_core::{
    CrudRepository, SqlRepository, SqliteExecutor, Task, TaskRepository, User,
};

#[test]
fn tasks_round_trip_optional_columns() {
    let conn = open_db_in_memory().unwrap();
    let executor = SqliteExecutor::try_new(&conn).unwrap();
    let users: SqlRepository<User, _> = SqlRepository::new(&executor);
    let tasks: SqlRepository<Task, _> = SqlRepository::new(&executor);

    let sandy = users.save(&mut User::new("Sandy")).unwrap();

    let mut learn = Task::new("Learn Python", Some("Learn how to code in Python".to_string()))
        .owned_by(sandy);
    learn.set_done(true);
    let learn_id = tasks.save(&mut learn).unwrap();

    let mut loose = Task::new("Buy Milk", None);
    let loose_id = tasks.save(&mut loose).unwrap();

    assert_eq!(tasks.select(learn_id).unwrap().unwrap(), learn);
    let loaded = tasks.select(loose_id).unwrap().unwrap();
    assert_eq!(loaded.description(), None);
    assert!(!loaded.is_done());
    assert_eq!(loaded.user_id(), None);
}

#[test]
fn user_resolves_for_owned_unowned_and_dangling_tasks() {
    let conn = open_db_in_memory().unwrap();
    let executor = SqliteExecutor::try_new(&conn).unwrap();
    let users: SqlRepository<User, _> = SqlRepository::new(&executor);
    let tasks: SqlRepository<Task, _> = SqlRepository::new(&executor);

    let mut sandy = User::new("Sandy");
    let sandy_id = users.save(&mut sandy).unwrap();
    let mut owned = Task::new("Buy Milk", None).owned_by(sandy_id);
    tasks.save(&mut owned).unwrap();

    assert_eq!(tasks.user(&owned).unwrap(), Some(sandy));
    assert_eq!(tasks.user(&Task::new("Unowned", None)).unwrap(), None);

    let dangling = Task::with_id(3, "Ghost", None, false, Some(999));
    assert_eq!(tasks.user(&dangling).unwrap(), None);
}

#[test]
fn tasks_for_user_only_returns_that_users_tasks() {
    let conn = open_db_in_memory().unwrap();
    let executor = SqliteExecutor::try_new(&conn).unwrap();
    let users: SqlRepository<User, _> = SqlRepository::new(&executor);
    let tasks: SqlRepository<Task, _> = SqlRepository::new(&executor);

    let sandy = users.save(&mut User::new("Sandy")).unwrap();
    let alex = users.save(&mut User::new("Alex")).unwrap();
    tasks
        .save(&mut Task::new("Learn Python", None).owned_by(sandy))
        .unwrap();
    tasks
        .save(&mut Task::new("Walk dog", None).owned_by(alex))
        .unwrap();
    tasks
        .save(&mut Task::new("Buy Milk", None).owned_by(sandy))
        .unwrap();

    let titles: Vec<String> = tasks
        .tasks_for_user(sandy)
        .unwrap()
        .iter()
        .map(|task| task.title().to_string())
        .collect();
    assert_eq!(titles, vec!["Learn Python", "Buy Milk"]);
}

#[test]
fn deleting_a_referenced_user_is_a_constraint_violation() {
    let conn = open_db_in_memory().unwrap();
    let executor = SqliteExecutor::try_new(&conn).unwrap();
    let users: SqlRepository<User, _> = SqlRepository::new(&executor);
    let tasks: SqlRepository<Task, _> = SqlRepository::new(&executor);

    let sandy = users.save(&mut User::new("Sandy")).unwrap();
    tasks
        .save(&mut Task::new("Buy Milk", None).owned_by(sandy))
        .unwrap();

    let err = users.delete(sandy).unwrap_err();
    assert!(err.is_constraint_violation(), "unexpected error: {err}");

    tasks.delete_all().unwrap();
    users.delete(sandy).unwrap();
    assert!(users.select(sandy).unwrap().is_none());
}

#[test]
fn marking_done_persists_through_update() {
    let conn = open_db_in_memory().unwrap();
    let executor = SqliteExecutor::try_new(&conn).unwrap();
    let tasks: SqlRepository<Task, _> = SqlRepository::new(&executor);

    let mut task = Task::new("Buy Milk", Some("I need milk for my tea!".to_string()));
    let id = tasks.save(&mut task).unwrap();
    task.set_done(true);
    task.set_description(None);
    tasks.update(&task).unwrap();

    let loaded = tasks.select(id).unwrap().unwrap();
    assert!(loaded.is_done());
    assert_eq!(loaded.description(), None);
}
