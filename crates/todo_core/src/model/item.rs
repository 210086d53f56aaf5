//! Todo item record.

use crate::model::UNASSIGNED_ID;
use serde::{Deserialize, Serialize};

pub type ItemId = i64;

/// Labeled, completable unit of a todo list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    #[serde(default)]
    pub done: bool,
}

impl Item {
    /// Creates an unsaved, not-done item.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: UNASSIGNED_ID,
            name: name.into(),
            done: false,
        }
    }

    /// Overwrites the mutable fields (`name`, `done`) from `other`.
    ///
    /// Identity is kept, so the item stays in its list under the same id.
    pub fn apply_changes(&mut self, other: &Item) {
        self.name.clone_from(&other.name);
        self.done = other.done;
    }
}
