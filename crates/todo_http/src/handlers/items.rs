//! Handlers for `/api/todolists/{id}/item` and its `{item_id}` sub-resource.

use axum::body::Bytes;
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::response::Response;
use axum::Json;
use log::info;
use todo_core::{parse_item_payload, Item, ItemId, ItemService, SqliteItemRepository, TodoListId};

use super::{created, path_value};
use crate::error::ApiError;
use crate::state::AppState;

pub(crate) async fn list_items(
    State(state): State<AppState>,
    path: Result<Path<TodoListId>, PathRejection>,
) -> Result<Json<Vec<Item>>, ApiError> {
    let list_id = path_value(path)?;
    let mut conn = state.connection()?;
    let service = ItemService::new(SqliteItemRepository::try_new(&mut conn)?);
    Ok(Json(service.list(list_id)?))
}

pub(crate) async fn get_item(
    State(state): State<AppState>,
    path: Result<Path<(TodoListId, ItemId)>, PathRejection>,
) -> Result<Json<Item>, ApiError> {
    let (list_id, item_id) = path_value(path)?;
    let mut conn = state.connection()?;
    let service = ItemService::new(SqliteItemRepository::try_new(&mut conn)?);
    Ok(Json(service.get(list_id, item_id)?))
}

/// Appends an item. `Location` points at the item under its list.
pub(crate) async fn create_item(
    State(state): State<AppState>,
    path: Result<Path<TodoListId>, PathRejection>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let list_id = path_value(path)?;
    let item = parse_item_payload(&body)?.into_item();

    let mut conn = state.connection()?;
    let mut service = ItemService::new(SqliteItemRepository::try_new(&mut conn)?);
    let created_item = service.create(list_id, &item)?;

    info!(
        "event=item_create module=http status=ok list_id={list_id} item_id={}",
        created_item.id
    );
    Ok(created(
        format!("/api/todolists/{list_id}/item/{}", created_item.id),
        created_item,
    ))
}

pub(crate) async fn update_item(
    State(state): State<AppState>,
    path: Result<Path<(TodoListId, ItemId)>, PathRejection>,
    body: Bytes,
) -> Result<Json<Item>, ApiError> {
    let (list_id, item_id) = path_value(path)?;
    let changes = parse_item_payload(&body)?.into_item();

    let mut conn = state.connection()?;
    let mut service = ItemService::new(SqliteItemRepository::try_new(&mut conn)?);
    let updated = service.update(list_id, item_id, &changes)?;

    info!("event=item_update module=http status=ok list_id={list_id} item_id={item_id}");
    Ok(Json(updated))
}

pub(crate) async fn delete_item(
    State(state): State<AppState>,
    path: Result<Path<(TodoListId, ItemId)>, PathRejection>,
) -> Result<Json<Item>, ApiError> {
    let (list_id, item_id) = path_value(path)?;

    let mut conn = state.connection()?;
    let mut service = ItemService::new(SqliteItemRepository::try_new(&mut conn)?);
    let deleted = service.delete(list_id, item_id)?;

    info!("event=item_delete module=http status=ok list_id={list_id} item_id={item_id}");
    Ok(Json(deleted))
}
