//! Request handlers. Each handler validates its input, locks the shared
//! connection, and runs exactly one service call.

pub(crate) mod items;
pub(crate) mod lists;

use axum::extract::rejection::PathRejection;
use axum::extract::Path;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::error::ApiError;

/// Unwraps an extracted path, turning rejections into `InvalidPath`.
fn path_value<T>(path: Result<Path<T>, PathRejection>) -> Result<T, ApiError> {
    path.map(|Path(value)| value)
        .map_err(|rejection| ApiError::InvalidPath(rejection.body_text()))
}

/// `201 Created` with a `Location` header and the created record as body.
fn created<T: Serialize>(location: String, body: T) -> Response {
    (
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(body),
    )
        .into_response()
}
