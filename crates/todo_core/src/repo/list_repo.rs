//! Todo list repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide list-all/get/insert/replace/delete over the `todo_lists` table.
//! - Return lists with their items attached in insertion order.
//!
//! # Invariants
//! - `replace` checks the id match before touching storage.
//! - `delete` removes the list's items in the same transaction.

use crate::model::todo_list::{TodoList, TodoListId};
use crate::repo::error::{RepoError, RepoResult};
use crate::repo::item_repo::{load_items, load_items_by_list};
use crate::repo::schema_guard::ensure_connection_ready;
use rusqlite::{params, Connection, OptionalExtension, TransactionBehavior};

/// Repository interface for todo list operations.
pub trait TodoListRepository {
    /// Returns every list ordered by id, items included.
    fn list_all(&self) -> RepoResult<Vec<TodoList>>;
    /// Returns the list with `id`, or `None`.
    fn get_by_id(&self, id: TodoListId) -> RepoResult<Option<TodoList>>;
    /// Persists a new list and returns it with its assigned id.
    ///
    /// An unassigned id (`0`) is chosen by the store; any other id is used
    /// as-is and fails with `DuplicateId` when taken.
    fn insert(&mut self, list: &TodoList) -> RepoResult<TodoList>;
    /// Overwrites the stored list's fields.
    fn replace(&mut self, id: TodoListId, list: &TodoList) -> RepoResult<()>;
    /// Removes the list and all of its items.
    fn delete(&mut self, id: TodoListId) -> RepoResult<()>;
}

/// SQLite-backed todo list repository.
pub struct SqliteTodoListRepository<'conn> {
    conn: &'conn mut Connection,
}

impl<'conn> SqliteTodoListRepository<'conn> {
    /// Constructs a repository from a migrated connection.
    pub fn try_new(conn: &'conn mut Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn)?;
        Ok(Self { conn })
    }
}

impl TodoListRepository for SqliteTodoListRepository<'_> {
    fn list_all(&self) -> RepoResult<Vec<TodoList>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name FROM todo_lists ORDER BY id ASC;")?;
        let mut rows = stmt.query([])?;
        let mut lists = Vec::new();
        while let Some(row) = rows.next()? {
            lists.push(TodoList {
                id: row.get("id")?,
                name: row.get("name")?,
                items: Vec::new(),
            });
        }

        let mut items_by_list = load_items_by_list(self.conn)?;
        for list in &mut lists {
            if let Some(items) = items_by_list.remove(&list.id) {
                list.items = items;
            }
        }

        Ok(lists)
    }

    fn get_by_id(&self, id: TodoListId) -> RepoResult<Option<TodoList>> {
        let name: Option<Option<String>> = self
            .conn
            .query_row(
                "SELECT name FROM todo_lists WHERE id = ?1;",
                [id],
                |row| row.get(0),
            )
            .optional()?;

        match name {
            Some(name) => Ok(Some(TodoList {
                id,
                name,
                items: load_items(self.conn, id)?,
            })),
            None => Ok(None),
        }
    }

    fn insert(&mut self, list: &TodoList) -> RepoResult<TodoList> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        let id = if list.has_assigned_id() {
            if list_exists(&tx, list.id)? {
                return Err(RepoError::DuplicateId(list.id));
            }
            tx.execute(
                "INSERT INTO todo_lists (id, name) VALUES (?1, ?2);",
                params![list.id, list.name.as_deref()],
            )?;
            list.id
        } else {
            tx.execute(
                "INSERT INTO todo_lists (name) VALUES (?1);",
                params![list.name.as_deref()],
            )?;
            tx.last_insert_rowid()
        };

        tx.commit()?;
        Ok(TodoList {
            id,
            name: list.name.clone(),
            items: Vec::new(),
        })
    }

    fn replace(&mut self, id: TodoListId, list: &TodoList) -> RepoResult<()> {
        if list.id != id {
            return Err(RepoError::IdMismatch {
                path_id: id,
                body_id: list.id,
            });
        }

        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;
        let changed = tx.execute(
            "UPDATE todo_lists
             SET
                name = ?2,
                updated_at = (strftime('%s', 'now') * 1000)
             WHERE id = ?1;",
            params![id, list.name.as_deref()],
        )?;
        if changed == 0 {
            return Err(RepoError::ListNotFound(id));
        }

        tx.commit()?;
        Ok(())
    }

    fn delete(&mut self, id: TodoListId) -> RepoResult<()> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;
        tx.execute("DELETE FROM items WHERE list_id = ?1;", [id])?;
        let changed = tx.execute("DELETE FROM todo_lists WHERE id = ?1;", [id])?;
        if changed == 0 {
            return Err(RepoError::ListNotFound(id));
        }

        tx.commit()?;
        Ok(())
    }
}

/// Returns whether a list row with `id` exists.
pub(crate) fn list_exists(conn: &Connection, id: TodoListId) -> RepoResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM todo_lists WHERE id = ?1);",
        [id],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}
