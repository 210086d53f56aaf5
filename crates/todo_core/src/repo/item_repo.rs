//! Item repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide list-scoped CRUD over the `items` table.
//!
//! # Invariants
//! - Items are addressed by `(list_id, item_id)`; an item id under the wrong
//!   list is reported as not found.
//! - Items are returned in insertion order (`id ASC`).
//! - A lookup matching more than one row fails with `AmbiguousItem`.

use crate::model::item::{Item, ItemId};
use crate::model::todo_list::TodoListId;
use crate::repo::error::{RepoError, RepoResult};
use crate::repo::list_repo::list_exists;
use crate::repo::schema_guard::ensure_connection_ready;
use rusqlite::{params, Connection, Row, TransactionBehavior};
use std::collections::HashMap;

const ITEM_SELECT_SQL: &str = "SELECT id, list_id, name, done FROM items";

/// Repository interface for item operations scoped by parent list.
pub trait ItemRepository {
    /// Returns the list's items in insertion order.
    fn list_items(&self, list_id: TodoListId) -> RepoResult<Vec<Item>>;
    /// Returns the item with `item_id` inside the list, or `None`.
    fn get_item(&self, list_id: TodoListId, item_id: ItemId) -> RepoResult<Option<Item>>;
    /// Appends a new item to the list and returns it with its assigned id.
    fn insert_item(&mut self, list_id: TodoListId, item: &Item) -> RepoResult<Item>;
    /// Overwrites `name` and `done` of an existing item and returns it.
    fn update_item(
        &mut self,
        list_id: TodoListId,
        item_id: ItemId,
        changes: &Item,
    ) -> RepoResult<Item>;
    /// Removes the item from the list and returns its last state.
    fn delete_item(&mut self, list_id: TodoListId, item_id: ItemId) -> RepoResult<Item>;
}

/// SQLite-backed item repository.
pub struct SqliteItemRepository<'conn> {
    conn: &'conn mut Connection,
}

impl<'conn> SqliteItemRepository<'conn> {
    /// Constructs a repository from a migrated connection.
    pub fn try_new(conn: &'conn mut Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn)?;
        Ok(Self { conn })
    }
}

impl ItemRepository for SqliteItemRepository<'_> {
    fn list_items(&self, list_id: TodoListId) -> RepoResult<Vec<Item>> {
        ensure_list_exists(self.conn, list_id)?;
        load_items(self.conn, list_id)
    }

    fn get_item(&self, list_id: TodoListId, item_id: ItemId) -> RepoResult<Option<Item>> {
        ensure_list_exists(self.conn, list_id)?;
        find_item(self.conn, list_id, item_id)
    }

    fn insert_item(&mut self, list_id: TodoListId, item: &Item) -> RepoResult<Item> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;
        ensure_list_exists(&tx, list_id)?;

        tx.execute(
            "INSERT INTO items (list_id, name, done) VALUES (?1, ?2, ?3);",
            params![list_id, item.name.as_str(), bool_to_int(item.done)],
        )?;
        let created = Item {
            id: tx.last_insert_rowid(),
            name: item.name.clone(),
            done: item.done,
        };

        tx.commit()?;
        Ok(created)
    }

    fn update_item(
        &mut self,
        list_id: TodoListId,
        item_id: ItemId,
        changes: &Item,
    ) -> RepoResult<Item> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;
        ensure_list_exists(&tx, list_id)?;
        let mut item = find_item(&tx, list_id, item_id)?
            .ok_or(RepoError::ItemNotFound { list_id, item_id })?;

        item.apply_changes(changes);
        tx.execute(
            "UPDATE items
             SET
                name = ?3,
                done = ?4,
                updated_at = (strftime('%s', 'now') * 1000)
             WHERE id = ?1
               AND list_id = ?2;",
            params![item_id, list_id, item.name.as_str(), bool_to_int(item.done)],
        )?;

        tx.commit()?;
        Ok(item)
    }

    fn delete_item(&mut self, list_id: TodoListId, item_id: ItemId) -> RepoResult<Item> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;
        ensure_list_exists(&tx, list_id)?;
        let item = find_item(&tx, list_id, item_id)?
            .ok_or(RepoError::ItemNotFound { list_id, item_id })?;

        tx.execute(
            "DELETE FROM items WHERE id = ?1 AND list_id = ?2;",
            params![item_id, list_id],
        )?;

        tx.commit()?;
        Ok(item)
    }
}

/// Loads the items of one list in insertion order.
pub(crate) fn load_items(conn: &Connection, list_id: TodoListId) -> RepoResult<Vec<Item>> {
    let mut stmt = conn.prepare(&format!(
        "{ITEM_SELECT_SQL} WHERE list_id = ?1 ORDER BY id ASC;"
    ))?;
    let mut rows = stmt.query([list_id])?;
    let mut items = Vec::new();
    while let Some(row) = rows.next()? {
        items.push(parse_item_row(row)?);
    }
    Ok(items)
}

/// Loads every item grouped by parent list, each group in insertion order.
pub(crate) fn load_items_by_list(conn: &Connection) -> RepoResult<HashMap<TodoListId, Vec<Item>>> {
    let mut stmt = conn.prepare(&format!("{ITEM_SELECT_SQL} ORDER BY list_id ASC, id ASC;"))?;
    let mut rows = stmt.query([])?;
    let mut grouped: HashMap<TodoListId, Vec<Item>> = HashMap::new();
    while let Some(row) = rows.next()? {
        let list_id: TodoListId = row.get("list_id")?;
        grouped.entry(list_id).or_default().push(parse_item_row(row)?);
    }
    Ok(grouped)
}

fn find_item(conn: &Connection, list_id: TodoListId, item_id: ItemId) -> RepoResult<Option<Item>> {
    let mut stmt = conn.prepare(&format!(
        "{ITEM_SELECT_SQL} WHERE list_id = ?1 AND id = ?2;"
    ))?;
    let mut rows = stmt.query(params![list_id, item_id])?;
    let mut matches = Vec::new();
    while let Some(row) = rows.next()? {
        matches.push(parse_item_row(row)?);
    }

    match matches.len() {
        0 => Ok(None),
        1 => Ok(matches.pop()),
        count => Err(RepoError::AmbiguousItem {
            list_id,
            item_id,
            matches: count,
        }),
    }
}

fn ensure_list_exists(conn: &Connection, list_id: TodoListId) -> RepoResult<()> {
    if list_exists(conn, list_id)? {
        Ok(())
    } else {
        Err(RepoError::ListNotFound(list_id))
    }
}

fn parse_item_row(row: &Row<'_>) -> RepoResult<Item> {
    let done = match row.get::<_, i64>("done")? {
        0 => false,
        1 => true,
        other => {
            return Err(RepoError::InvalidData(format!(
                "invalid done value `{other}` in items.done"
            )));
        }
    };

    Ok(Item {
        id: row.get("id")?,
        name: row.get("name")?,
        done,
    })
}

fn bool_to_int(value: bool) -> i64 {
    if value {
        1
    } else {
        0
    }
}
