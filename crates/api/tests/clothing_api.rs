//! `/clothing` over the JSON file backend.
//!
//! The catalog database is unreachable; clothing never touches it when the
//! file backend is selected.

mod common;

use axum::http::StatusCode;
use axum::Router;
use common::{body_json, build_test_app, delete, get, post_json, unreachable_pool};
use marquee_db::clothing_store::{ClothingBackend, JsonClothingStore};
use serde_json::json;
use tempfile::TempDir;

async fn json_backed_app(dir: &TempDir) -> Router {
    let store = JsonClothingStore::new(dir.path().join("clothes.json"));
    build_test_app(unreachable_pool().await, ClothingBackend::JsonFile(store))
}

#[tokio::test]
async fn empty_catalogue_lists_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let response = get(json_backed_app(&dir).await, "/api/v1/clothing").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "data": [] }));
}

#[tokio::test]
async fn create_list_delete_cycle() {
    let dir = tempfile::tempdir().unwrap();
    let app = json_backed_app(&dir).await;

    let response = post_json(
        app.clone(),
        "/api/v1/clothing",
        json!({ "type": "Jacket", "price": 120, "size": 42, "gender": "M" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    let id = created["id"].as_str().expect("id should be assigned").to_string();
    assert_eq!(created["type"], "Jacket");

    let listed = body_json(get(app.clone(), "/api/v1/clothing").await).await;
    assert_eq!(listed["data"].as_array().unwrap().len(), 1);
    assert_eq!(listed["data"][0]["id"], id.as_str());

    let response = delete(app.clone(), &format!("/api/v1/clothing/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let listed = body_json(get(app, "/api/v1/clothing").await).await;
    assert!(listed["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn deleting_unknown_item_returns_404() {
    let dir = tempfile::tempdir().unwrap();
    let response = delete(json_backed_app(&dir).await, "/api/v1/clothing/missing").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "NOT_FOUND");
}

#[tokio::test]
async fn negative_price_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let response = post_json(
        json_backed_app(&dir).await,
        "/api/v1/clothing",
        json!({ "type": "Scarf", "price": -5, "size": 1 }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(!dir.path().join("clothes.json").exists());
}

#[tokio::test]
async fn health_reports_json_backend() {
    let dir = tempfile::tempdir().unwrap();
    let json = body_json(get(json_backed_app(&dir).await, "/health").await).await;

    assert_eq!(json["clothing_backend"], "json");
}
