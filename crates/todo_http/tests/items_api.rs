//! Integration tests for the `/api/todolists/{id}/item` routes.

mod common;

use axum::http::StatusCode;
use axum::Router;
use common::{get, seeded_app, send};

/// Adds `FirstItem` and `SecondItem` to list 1 and returns their ids.
async fn add_two_items(app: &Router) -> (i64, i64) {
    let first = send(app, "POST", "/api/todolists/1/item", Some(r#"{"name":"FirstItem"}"#)).await;
    let second = send(
        app,
        "POST",
        "/api/todolists/1/item",
        Some(r#"{"name":"SecondItem"}"#),
    )
    .await;
    (
        first.body["id"].as_i64().expect("id"),
        second.body["id"].as_i64().expect("id"),
    )
}

#[tokio::test]
async fn list_items_in_insertion_order() {
    let app = seeded_app();
    add_two_items(&app).await;

    let resp = get(&app, "/api/todolists/1/item").await;
    assert_eq!(resp.status, StatusCode::OK);
    let items = resp.body.as_array().expect("array");
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["name"], "FirstItem");
    assert_eq!(items[1]["name"], "SecondItem");

    let other = get(&app, "/api/todolists/2/item").await;
    assert_eq!(other.body.as_array().expect("array").len(), 0);
}

#[tokio::test]
async fn list_items_of_missing_list_is_not_found() {
    let app = seeded_app();
    let resp = get(&app, "/api/todolists/77/item").await;
    assert_eq!(resp.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn get_item_by_id_and_missing_id() {
    let app = seeded_app();
    let (first_id, _) = add_two_items(&app).await;

    let found = get(&app, &format!("/api/todolists/1/item/{first_id}")).await;
    assert_eq!(found.status, StatusCode::OK);
    assert_eq!(found.body["name"], "FirstItem");
    assert_eq!(found.body["done"], false);

    let missing = get(&app, "/api/todolists/1/item/999").await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);

    let wrong_list = get(&app, &format!("/api/todolists/2/item/{first_id}")).await;
    assert_eq!(wrong_list.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn post_item_creates_with_list_scoped_location() {
    let app = seeded_app();
    send(&app, "POST", "/api/todolists/2/item", Some(r#"{"name":"Existing"}"#)).await;

    let resp = send(&app, "POST", "/api/todolists/2/item", Some(r#"{"name":"NewItem"}"#)).await;
    assert_eq!(resp.status, StatusCode::CREATED);
    let id = resp.body["id"].as_i64().expect("id");
    assert_eq!(resp.location(), format!("/api/todolists/2/item/{id}"));

    let items = get(&app, "/api/todolists/2/item").await;
    assert_eq!(items.body.as_array().expect("array").len(), 2);

    let fetched = get(&app, resp.location()).await;
    assert_eq!(fetched.body["name"], "NewItem");
}

#[tokio::test]
async fn post_item_to_missing_list_is_not_found() {
    let app = seeded_app();
    let resp = send(&app, "POST", "/api/todolists/5/item", Some(r#"{"name":"x"}"#)).await;
    assert_eq!(resp.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn post_item_without_name_is_bad_request() {
    let app = seeded_app();
    let resp = send(&app, "POST", "/api/todolists/1/item", Some(r#"{"done":true}"#)).await;
    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
    assert_eq!(resp.body["error"], "invalid_input");
    assert!(resp.body["message"]
        .as_str()
        .expect("message")
        .contains("name"));
}

#[tokio::test]
async fn put_item_updates_name_and_done() {
    let app = seeded_app();
    let (first_id, _) = add_two_items(&app).await;
    let uri = format!("/api/todolists/1/item/{first_id}");

    let resp = send(&app, "PUT", &uri, Some(r#"{"name":"NameChange","done":false}"#)).await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.body["id"], first_id);
    assert_eq!(resp.body["name"], "NameChange");

    let done = send(&app, "PUT", &uri, Some(r#"{"name":"NameChange","done":true}"#)).await;
    assert_eq!(done.body["done"], true);

    let fetched = get(&app, &uri).await;
    assert_eq!(fetched.body["name"], "NameChange");
    assert_eq!(fetched.body["done"], true);
}

#[tokio::test]
async fn put_missing_item_is_not_found() {
    let app = seeded_app();
    let resp = send(
        &app,
        "PUT",
        "/api/todolists/1/item/999",
        Some(r#"{"name":"x"}"#),
    )
    .await;
    assert_eq!(resp.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_item_returns_snapshot_and_shrinks_list() {
    let app = seeded_app();
    let (first_id, second_id) = add_two_items(&app).await;
    let uri = format!("/api/todolists/1/item/{first_id}");

    let resp = send(&app, "DELETE", &uri, None).await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.body["name"], "FirstItem");

    let items = get(&app, "/api/todolists/1/item").await;
    let items = items.body.as_array().expect("array").clone();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["id"], second_id);

    assert_eq!(get(&app, &uri).await.status, StatusCode::NOT_FOUND);
    assert_eq!(
        send(&app, "DELETE", &uri, None).await.status,
        StatusCode::NOT_FOUND
    );
}

#[tokio::test]
async fn list_detail_embeds_items() {
    let app = seeded_app();
    add_two_items(&app).await;

    let list = get(&app, "/api/todolists/1").await;
    let items = list.body["items"].as_array().expect("items");
    assert_eq!(items.len(), 2);
}
