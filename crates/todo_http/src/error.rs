//! Error types for the HTTP layer and their response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use log::{error, warn};
use serde_json::json;
use thiserror::Error;
use todo_core::{RepoError, ValidationError};

/// Request-level failure rendered as a JSON error body.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A path segment could not be parsed as an id.
    #[error("invalid path parameter: {0}")]
    InvalidPath(String),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Repo(#[from] RepoError),
    #[error("database connection lock poisoned")]
    LockPoisoned,
}

impl ApiError {
    /// HTTP status returned to the caller.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidPath(_) | Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Repo(err) => match err {
                RepoError::ListNotFound(_) | RepoError::ItemNotFound { .. } => {
                    StatusCode::NOT_FOUND
                }
                RepoError::IdMismatch { .. } => StatusCode::BAD_REQUEST,
                RepoError::DuplicateId(_) => StatusCode::CONFLICT,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::LockPoisoned => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Stable machine-readable error code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidPath(_) | Self::Validation(_) => "invalid_input",
            Self::Repo(err) => match err {
                RepoError::ListNotFound(_) | RepoError::ItemNotFound { .. } => "not_found",
                RepoError::IdMismatch { .. } => "id_mismatch",
                RepoError::DuplicateId(_) => "duplicate_id",
                RepoError::ConcurrencyConflict(_) => "concurrency_conflict",
                _ => "internal",
            },
            Self::LockPoisoned => "internal",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.code();
        let message = if code == "internal" {
            error!(
                "event=http_error module=http status=error code={} error={}",
                code, self
            );
            "internal server error".to_string()
        } else if status.is_server_error() {
            error!(
                "event=http_error module=http status=error code={} error={}",
                code, self
            );
            self.to_string()
        } else {
            warn!(
                "event=http_error module=http status=rejected code={} error={}",
                code, self
            );
            self.to_string()
        };

        (status, Json(json!({ "error": code, "message": message }))).into_response()
    }
}

/// Errors that can occur while binding or running the server.
#[derive(Debug, Error)]
pub enum HttpServerError {
    /// Failed to bind to the TCP address.
    #[error("failed to bind on {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },
    /// The bound socket has no readable local address.
    #[error("failed to read local address: {0}")]
    LocalAddr(#[source] std::io::Error),
    /// The HTTP server encountered an I/O error while serving.
    #[error("server error: {0}")]
    Serve(String),
}
