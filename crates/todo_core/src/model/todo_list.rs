//! Todo list record.

use crate::model::item::Item;
use crate::model::UNASSIGNED_ID;
use serde::{Deserialize, Serialize};

pub type TodoListId = i64;

/// Named container of items.
///
/// `items` is owned by the list: deleting the list deletes its items, and an
/// item is never shared between lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoList {
    pub id: TodoListId,
    pub name: Option<String>,
    /// Insertion-ordered. Ignored on writes; items are managed through the
    /// item repository.
    #[serde(default)]
    pub items: Vec<Item>,
}

impl TodoList {
    /// Creates an unsaved list. The store assigns the id on insert.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_id(UNASSIGNED_ID, name)
    }

    /// Creates a list with a caller-provided id.
    pub fn with_id(id: TodoListId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: Some(name.into()),
            items: Vec::new(),
        }
    }

    /// Returns whether the store still has to assign an id.
    pub fn has_assigned_id(&self) -> bool {
        self.id != UNASSIGNED_ID
    }
}
