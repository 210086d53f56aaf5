//! Todo list use-case service.
//!
//! # Invariants
//! - Service APIs never bypass repository persistence contracts.
//! - Service layer remains storage-agnostic.

use crate::model::todo_list::{TodoList, TodoListId};
use crate::repo::error::{RepoError, RepoResult};
use crate::repo::list_repo::TodoListRepository;

/// Use-case service wrapper for todo list operations.
pub struct TodoListService<R: TodoListRepository> {
    repo: R,
}

impl<R: TodoListRepository> TodoListService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Lists all todo lists with their items.
    pub fn list_all(&self) -> RepoResult<Vec<TodoList>> {
        self.repo.list_all()
    }

    /// Gets one list, failing with `ListNotFound` when absent.
    pub fn get(&self, id: TodoListId) -> RepoResult<TodoList> {
        self.repo.get_by_id(id)?.ok_or(RepoError::ListNotFound(id))
    }

    /// Creates a list and returns the stored record.
    pub fn create(&mut self, list: &TodoList) -> RepoResult<TodoList> {
        self.repo.insert(list)
    }

    /// Replaces the list at `id` with `list`.
    ///
    /// Returns `IdMismatch` before `ListNotFound` when both apply.
    pub fn replace(&mut self, id: TodoListId, list: &TodoList) -> RepoResult<()> {
        self.repo.replace(id, list)
    }

    /// Deletes the list and its items.
    pub fn delete(&mut self, id: TodoListId) -> RepoResult<()> {
        self.repo.delete(id)
    }
}
