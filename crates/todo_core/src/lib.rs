//! Core domain logic for the todo list service.
//! Model, validation, SQLite persistence and use-case services live here;
//! transports depend on this crate and never touch SQL directly.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod validation;

pub use logging::{default_log_level, init_logging, logging_status, LogSink};
pub use model::item::{Item, ItemId};
pub use model::todo_list::{TodoList, TodoListId};
pub use repo::error::{RepoError, RepoResult};
pub use repo::item_repo::{ItemRepository, SqliteItemRepository};
pub use repo::list_repo::{SqliteTodoListRepository, TodoListRepository};
pub use service::item_service::ItemService;
pub use service::list_service::TodoListService;
pub use validation::{
    parse_item_payload, parse_todo_list_payload, ItemPayload, TodoListPayload, ValidationError,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
