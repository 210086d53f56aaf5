//! Repository error type shared by list and item persistence.

use crate::db::DbError;
use crate::model::item::ItemId;
use crate::model::todo_list::TodoListId;
use rusqlite::ErrorCode;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

#[derive(Debug)]
pub enum RepoError {
    /// Storage failure not covered by a more specific variant.
    Db(DbError),
    ListNotFound(TodoListId),
    ItemNotFound {
        list_id: TodoListId,
        item_id: ItemId,
    },
    /// Path id and body id of a replace request disagree.
    IdMismatch {
        path_id: TodoListId,
        body_id: TodoListId,
    },
    /// Caller-supplied list id is already taken.
    DuplicateId(TodoListId),
    /// More than one row matched a lookup that must be unique.
    AmbiguousItem {
        list_id: TodoListId,
        item_id: ItemId,
        matches: usize,
    },
    /// Another writer holds the database; the operation was not applied.
    ConcurrencyConflict(String),
    InvalidData(String),
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::ListNotFound(id) => write!(f, "todo list not found: {id}"),
            Self::ItemNotFound { list_id, item_id } => {
                write!(f, "item {item_id} not found in todo list {list_id}")
            }
            Self::IdMismatch { path_id, body_id } => write!(
                f,
                "todo list id {body_id} in body does not match id {path_id} in path"
            ),
            Self::DuplicateId(id) => write!(f, "todo list id already exists: {id}"),
            Self::AmbiguousItem {
                list_id,
                item_id,
                matches,
            } => write!(
                f,
                "item {item_id} matched {matches} rows in todo list {list_id}"
            ),
            Self::ConcurrencyConflict(details) => {
                write!(f, "conflicting concurrent write: {details}")
            }
            Self::InvalidData(message) => write!(f, "invalid persisted data: {message}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version {actual_version} does not match expected {expected_version}"
            ),
            Self::MissingRequiredTable(table) => write!(f, "missing required table `{table}`"),
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "missing required column `{table}.{column}`")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        match value {
            DbError::Sqlite(err) => err.into(),
            other => Self::Db(other),
        }
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        let conflict = matches!(
            &value,
            rusqlite::Error::SqliteFailure(failure, _)
                if matches!(failure.code, ErrorCode::DatabaseBusy | ErrorCode::DatabaseLocked)
        );
        if conflict {
            Self::ConcurrencyConflict(value.to_string())
        } else {
            Self::Db(DbError::Sqlite(value))
        }
    }
}
