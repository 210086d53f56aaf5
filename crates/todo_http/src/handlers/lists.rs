//! Handlers for `/api/todolists` and `/api/todolists/{id}`.

use axum::body::Bytes;
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Response;
use axum::Json;
use log::info;
use todo_core::{
    parse_todo_list_payload, SqliteTodoListRepository, TodoList, TodoListId, TodoListService,
};

use super::{created, path_value};
use crate::error::ApiError;
use crate::state::AppState;

pub(crate) async fn list_todo_lists(
    State(state): State<AppState>,
) -> Result<Json<Vec<TodoList>>, ApiError> {
    let mut conn = state.connection()?;
    let service = TodoListService::new(SqliteTodoListRepository::try_new(&mut conn)?);
    Ok(Json(service.list_all()?))
}

pub(crate) async fn get_todo_list(
    State(state): State<AppState>,
    path: Result<Path<TodoListId>, PathRejection>,
) -> Result<Json<TodoList>, ApiError> {
    let id = path_value(path)?;
    let mut conn = state.connection()?;
    let service = TodoListService::new(SqliteTodoListRepository::try_new(&mut conn)?);
    Ok(Json(service.get(id)?))
}

pub(crate) async fn create_todo_list(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let list = parse_todo_list_payload(&body)?.into_list();

    let mut conn = state.connection()?;
    let mut service = TodoListService::new(SqliteTodoListRepository::try_new(&mut conn)?);
    let created_list = service.create(&list)?;

    info!(
        "event=list_create module=http status=ok list_id={}",
        created_list.id
    );
    Ok(created(
        format!("/api/todolists/{}", created_list.id),
        created_list,
    ))
}

/// Replaces the list's fields. The body id must equal the path id.
pub(crate) async fn replace_todo_list(
    State(state): State<AppState>,
    path: Result<Path<TodoListId>, PathRejection>,
    body: Bytes,
) -> Result<StatusCode, ApiError> {
    let id = path_value(path)?;
    let list = parse_todo_list_payload(&body)?.into_list();

    let mut conn = state.connection()?;
    let mut service = TodoListService::new(SqliteTodoListRepository::try_new(&mut conn)?);
    service.replace(id, &list)?;

    info!("event=list_replace module=http status=ok list_id={id}");
    Ok(StatusCode::NO_CONTENT)
}

pub(crate) async fn delete_todo_list(
    State(state): State<AppState>,
    path: Result<Path<TodoListId>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let id = path_value(path)?;

    let mut conn = state.connection()?;
    let mut service = TodoListService::new(SqliteTodoListRepository::try_new(&mut conn)?);
    service.delete(id)?;

    info!("event=list_delete module=http status=ok list_id={id}");
    Ok(StatusCode::NO_CONTENT)
}
