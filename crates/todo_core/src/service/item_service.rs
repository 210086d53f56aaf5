//! Item use-case service.

use crate::model::item::{Item, ItemId};
use crate::model::todo_list::TodoListId;
use crate::repo::error::{RepoError, RepoResult};
use crate::repo::item_repo::ItemRepository;

/// Use-case service wrapper for list-scoped item operations.
pub struct ItemService<R: ItemRepository> {
    repo: R,
}

impl<R: ItemRepository> ItemService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn list(&self, list_id: TodoListId) -> RepoResult<Vec<Item>> {
        self.repo.list_items(list_id)
    }

    /// Gets one item, failing with `ItemNotFound` when the list has no such item.
    pub fn get(&self, list_id: TodoListId, item_id: ItemId) -> RepoResult<Item> {
        self.repo
            .get_item(list_id, item_id)?
            .ok_or(RepoError::ItemNotFound { list_id, item_id })
    }

    pub fn create(&mut self, list_id: TodoListId, item: &Item) -> RepoResult<Item> {
        self.repo.insert_item(list_id, item)
    }

    pub fn update(
        &mut self,
        list_id: TodoListId,
        item_id: ItemId,
        changes: &Item,
    ) -> RepoResult<Item> {
        self.repo.update_item(list_id, item_id, changes)
    }

    pub fn delete(&mut self, list_id: TodoListId, item_id: ItemId) -> RepoResult<Item> {
        self.repo.delete_item(list_id, item_id)
    }
}
