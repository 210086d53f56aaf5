//! Axum router for the todo REST API.
//!
//! Routes:
//! - `GET|POST /api/todolists`
//! - `GET|PUT|DELETE /api/todolists/{id}`
//! - `GET|POST /api/todolists/{id}/item`
//! - `GET|PUT|DELETE /api/todolists/{id}/item/{item_id}`
//! - `GET /health`

use axum::response::IntoResponse;
use axum::routing::get;
use axum::{middleware, Json, Router};
use serde_json::json;

use crate::handlers::{items, lists};
use crate::middleware::log_requests;
use crate::state::AppState;

/// Builds the axum `Router` with all API routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handle_health))
        .route(
            "/api/todolists",
            get(lists::list_todo_lists).post(lists::create_todo_list),
        )
        .route(
            "/api/todolists/{id}",
            get(lists::get_todo_list)
                .put(lists::replace_todo_list)
                .delete(lists::delete_todo_list),
        )
        .route(
            "/api/todolists/{id}/item",
            get(items::list_items).post(items::create_item),
        )
        .route(
            "/api/todolists/{id}/item/{item_id}",
            get(items::get_item)
                .put(items::update_item)
                .delete(items::delete_item),
        )
        .layer(middleware::from_fn(log_requests))
        .with_state(state)
}

async fn handle_health() -> impl IntoResponse {
    Json(json!({"status": "ok", "service": "todo"}))
}
