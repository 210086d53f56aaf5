//! Shared state threaded through all axum handlers.

use std::sync::{Arc, Mutex, MutexGuard};

use rusqlite::Connection;

use crate::error::ApiError;

/// Owns the single migrated SQLite connection used by every request.
#[derive(Clone)]
pub struct AppState {
    db: Arc<Mutex<Connection>>,
}

impl AppState {
    /// Wraps a connection returned by `todo_core::db::open_db*`.
    pub fn new(conn: Connection) -> Self {
        Self {
            db: Arc::new(Mutex::new(conn)),
        }
    }

    /// Locks the connection for the duration of one request.
    pub(crate) fn connection(&self) -> Result<MutexGuard<'_, Connection>, ApiError> {
        self.db.lock().map_err(|_| ApiError::LockPoisoned)
    }
}
