use rusqlite::Connection;
use todo_core::db::migrations::latest_version;
use todo_core::db::open_db_in_memory;
use todo_core::{
    Item, ItemRepository, RepoError, SqliteItemRepository, SqliteTodoListRepository, TodoList,
    TodoListRepository, TodoListService,
};

fn populate(conn: &mut Connection) {
    let mut repo = SqliteTodoListRepository::try_new(conn).unwrap();
    repo.insert(&TodoList::with_id(1, "Task 1")).unwrap();
    repo.insert(&TodoList::with_id(2, "Task 2")).unwrap();
}

#[test]
fn list_all_returns_every_inserted_list() {
    let mut conn = open_db_in_memory().unwrap();
    populate(&mut conn);

    let repo = SqliteTodoListRepository::try_new(&mut conn).unwrap();
    let lists = repo.list_all().unwrap();

    assert_eq!(lists.len(), 2);
    assert_eq!(lists[0].id, 1);
    assert_eq!(lists[1].name.as_deref(), Some("Task 2"));
}

#[test]
fn insert_then_get_roundtrip() {
    let mut conn = open_db_in_memory().unwrap();
    let mut repo = SqliteTodoListRepository::try_new(&mut conn).unwrap();

    let created = repo.insert(&TodoList::new("groceries")).unwrap();
    assert!(created.id > 0);

    let loaded = repo.get_by_id(created.id).unwrap().unwrap();
    assert_eq!(loaded, created);
}

#[test]
fn insert_without_name_is_allowed() {
    let mut conn = open_db_in_memory().unwrap();
    let mut repo = SqliteTodoListRepository::try_new(&mut conn).unwrap();

    let unnamed = TodoList {
        id: 0,
        name: None,
        items: Vec::new(),
    };
    let created = repo.insert(&unnamed).unwrap();

    let loaded = repo.get_by_id(created.id).unwrap().unwrap();
    assert_eq!(loaded.name, None);
}

#[test]
fn store_assigned_ids_follow_explicit_ones() {
    let mut conn = open_db_in_memory().unwrap();
    populate(&mut conn);
    let mut repo = SqliteTodoListRepository::try_new(&mut conn).unwrap();

    let created = repo.insert(&TodoList::new("third")).unwrap();
    assert_eq!(created.id, 3);
}

#[test]
fn insert_with_taken_id_fails_and_keeps_original() {
    let mut conn = open_db_in_memory().unwrap();
    populate(&mut conn);
    let mut repo = SqliteTodoListRepository::try_new(&mut conn).unwrap();

    let err = repo.insert(&TodoList::with_id(1, "imposter")).unwrap_err();
    assert!(matches!(err, RepoError::DuplicateId(1)));

    let kept = repo.get_by_id(1).unwrap().unwrap();
    assert_eq!(kept.name.as_deref(), Some("Task 1"));
}

#[test]
fn get_missing_list_returns_none() {
    let mut conn = open_db_in_memory().unwrap();
    let repo = SqliteTodoListRepository::try_new(&mut conn).unwrap();

    assert!(repo.get_by_id(42).unwrap().is_none());
}

#[test]
fn replace_with_mismatched_id_fails_and_leaves_store_unchanged() {
    let mut conn = open_db_in_memory().unwrap();
    populate(&mut conn);
    let mut repo = SqliteTodoListRepository::try_new(&mut conn).unwrap();

    let second = repo.get_by_id(2).unwrap().unwrap();
    let err = repo.replace(1, &second).unwrap_err();
    assert!(matches!(
        err,
        RepoError::IdMismatch {
            path_id: 1,
            body_id: 2
        }
    ));

    let first = repo.get_by_id(1).unwrap().unwrap();
    assert_eq!(first.name.as_deref(), Some("Task 1"));
}

#[test]
fn replace_missing_list_returns_not_found() {
    let mut conn = open_db_in_memory().unwrap();
    let mut repo = SqliteTodoListRepository::try_new(&mut conn).unwrap();

    let err = repo
        .replace(7, &TodoList::with_id(7, "ghost"))
        .unwrap_err();
    assert!(matches!(err, RepoError::ListNotFound(7)));
}

#[test]
fn replace_overwrites_name_and_keeps_items() {
    let mut conn = open_db_in_memory().unwrap();
    populate(&mut conn);
    {
        let mut items = SqliteItemRepository::try_new(&mut conn).unwrap();
        items.insert_item(1, &Item::new("FirstItem")).unwrap();
    }

    let mut repo = SqliteTodoListRepository::try_new(&mut conn).unwrap();
    repo.replace(1, &TodoList::with_id(1, "Renamed")).unwrap();

    let loaded = repo.get_by_id(1).unwrap().unwrap();
    assert_eq!(loaded.name.as_deref(), Some("Renamed"));
    assert_eq!(loaded.items.len(), 1);
}

#[test]
fn delete_removes_list_and_its_items() {
    let mut conn = open_db_in_memory().unwrap();
    populate(&mut conn);
    {
        let mut items = SqliteItemRepository::try_new(&mut conn).unwrap();
        items.insert_item(1, &Item::new("FirstItem")).unwrap();
        items.insert_item(1, &Item::new("SecondItem")).unwrap();
        items.insert_item(2, &Item::new("Other")).unwrap();
    }

    {
        let mut repo = SqliteTodoListRepository::try_new(&mut conn).unwrap();
        repo.delete(1).unwrap();
        assert!(repo.get_by_id(1).unwrap().is_none());
    }

    let items = SqliteItemRepository::try_new(&mut conn).unwrap();
    assert!(matches!(
        items.list_items(1).unwrap_err(),
        RepoError::ListNotFound(1)
    ));
    assert_eq!(items.list_items(2).unwrap().len(), 1);

    let orphaned: i64 = conn
        .query_row("SELECT COUNT(*) FROM items WHERE list_id = 1;", [], |row| {
            row.get(0)
        })
        .unwrap();
    assert_eq!(orphaned, 0);
}

#[test]
fn delete_missing_list_returns_not_found() {
    let mut conn = open_db_in_memory().unwrap();
    let mut repo = SqliteTodoListRepository::try_new(&mut conn).unwrap();

    assert!(matches!(
        repo.delete(5).unwrap_err(),
        RepoError::ListNotFound(5)
    ));
}

#[test]
fn list_all_attaches_items_to_their_own_list() {
    let mut conn = open_db_in_memory().unwrap();
    populate(&mut conn);
    {
        let mut items = SqliteItemRepository::try_new(&mut conn).unwrap();
        items.insert_item(2, &Item::new("b1")).unwrap();
        items.insert_item(1, &Item::new("a1")).unwrap();
        items.insert_item(2, &Item::new("b2")).unwrap();
    }

    let repo = SqliteTodoListRepository::try_new(&mut conn).unwrap();
    let lists = repo.list_all().unwrap();

    let names = |list: &TodoList| -> Vec<String> {
        list.items.iter().map(|item| item.name.clone()).collect()
    };
    assert_eq!(names(&lists[0]), vec!["a1"]);
    assert_eq!(names(&lists[1]), vec!["b1", "b2"]);
}

#[test]
fn service_maps_missing_list_to_not_found() {
    let mut conn = open_db_in_memory().unwrap();
    populate(&mut conn);
    let repo = SqliteTodoListRepository::try_new(&mut conn).unwrap();
    let service = TodoListService::new(repo);

    assert_eq!(service.get(1).unwrap().name.as_deref(), Some("Task 1"));
    assert!(matches!(
        service.get(999).unwrap_err(),
        RepoError::ListNotFound(999)
    ));
    assert_eq!(service.list_all().unwrap().len(), 2);
}

#[test]
fn repository_rejects_uninitialized_connection() {
    let mut conn = Connection::open_in_memory().unwrap();

    let result = SqliteTodoListRepository::try_new(&mut conn);
    match result {
        Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version: 0,
        }) => assert!(expected_version > 0),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("expected uninitialized connection error"),
    }
}

#[test]
fn repository_rejects_connection_without_required_tables() {
    let mut conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version()))
        .unwrap();

    let result = SqliteTodoListRepository::try_new(&mut conn);
    assert!(matches!(
        result,
        Err(RepoError::MissingRequiredTable("todo_lists"))
    ));
}

#[test]
fn repository_rejects_connection_missing_required_column() {
    let mut conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(
        "CREATE TABLE todo_lists (
            id INTEGER PRIMARY KEY,
            name TEXT,
            created_at INTEGER,
            updated_at INTEGER
        );
        CREATE TABLE items (
            id INTEGER PRIMARY KEY,
            list_id INTEGER NOT NULL,
            name TEXT NOT NULL
        );",
    )
    .unwrap();
    conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version()))
        .unwrap();

    let result = SqliteItemRepository::try_new(&mut conn);
    assert!(matches!(
        result,
        Err(RepoError::MissingRequiredColumn {
            table: "items",
            column: "done"
        })
    ));
}
