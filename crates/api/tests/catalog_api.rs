//! End-to-end catalog behaviour against a live MongoDB.
//!
//! Run with `MONGODB_URI=... cargo test -- --ignored`. Each test works in
//! its own throwaway database.

mod common;

use axum::http::StatusCode;
use axum::Router;
use common::{body_json, build_test_app, delete, get, live_pool, post_json, put_json};
use marquee_db::clothing_store::ClothingBackend;
use serde_json::{json, Value};

async fn live_app() -> Router {
    let pool = live_pool().await;
    build_test_app(pool.clone(), ClothingBackend::Mongo(pool))
}

async fn create(app: &Router, uri: &str, body: Value) -> Value {
    let response = post_json(app.clone(), uri, body).await;
    assert_eq!(response.status(), StatusCode::CREATED, "POST {uri}");
    body_json(response).await
}

/// An actress plus a show that stars her.
async fn seed_actor_and_show(app: &Router) -> (String, String) {
    let celebrity = create(
        app,
        "/api/v1/celebrities",
        json!({ "name": "Jane Doe", "occupation": ["Actress"], "dateOfBirth": "1980-04-02" }),
    )
    .await;
    let celebrity_id = celebrity["id"].as_str().unwrap().to_string();

    let show = create(
        app,
        "/api/v1/shows",
        json!({
            "title": "Breaking Bad",
            "type": "Series",
            "releaseDate": "2008-01-20",
            "starring": [{
                "id": celebrity_id,
                "name": "Jane Doe",
                "roleName": "Skyler White",
                "postersPath": []
            }]
        }),
    )
    .await;
    (celebrity_id, show["id"].as_str().unwrap().to_string())
}

#[tokio::test]
#[ignore = "requires a running MongoDB instance"]
async fn celebrity_rename_reaches_embedded_copies() {
    let app = live_app().await;
    let (celebrity_id, show_id) = seed_actor_and_show(&app).await;

    let response = put_json(
        app.clone(),
        &format!("/api/v1/celebrities/{celebrity_id}"),
        json!({ "name": "Jane Smith" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let show = body_json(get(app, &format!("/api/v1/shows/{show_id}")).await).await;
    assert_eq!(show["starring"][0]["name"], "Jane Smith");
    assert_eq!(show["starring"][0]["roleName"], "Skyler White");
}

#[tokio::test]
#[ignore = "requires a running MongoDB instance"]
async fn celebrity_poster_upload_and_delete_reach_embedded_copies() {
    let app = live_app().await;
    let (celebrity_id, show_id) = seed_actor_and_show(&app).await;

    let response = post_json(
        app.clone(),
        &format!("/api/v1/celebrities/{celebrity_id}/posters"),
        json!({ "images": ["headshot.jpg", "premiere.jpg"] }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let headshot = format!("/celebrities/{celebrity_id}/headshot.jpg");
    let premiere = format!("/celebrities/{celebrity_id}/premiere.jpg");
    assert_eq!(body_json(response).await["postersPath"], json!([headshot, premiere]));

    let show = body_json(get(app.clone(), &format!("/api/v1/shows/{show_id}")).await).await;
    assert_eq!(show["starring"][0]["postersPath"], json!([headshot, premiere]));

    let response = delete(
        app.clone(),
        &format!("/api/v1/celebrities/{celebrity_id}/posters/headshot.jpg"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let celebrity =
        body_json(get(app.clone(), &format!("/api/v1/celebrities/{celebrity_id}")).await).await;
    assert_eq!(celebrity["postersPath"], json!([premiere]));
    let show = body_json(get(app, &format!("/api/v1/shows/{show_id}")).await).await;
    assert_eq!(show["starring"][0]["postersPath"], json!([premiere]));
}

#[tokio::test]
#[ignore = "requires a running MongoDB instance"]
async fn duplicate_celebrity_is_a_conflict() {
    let app = live_app().await;
    let body = json!({ "name": "Aaron Paul", "dateOfBirth": "1979-08-27" });
    create(&app, "/api/v1/celebrities", body.clone()).await;

    let response = post_json(app.clone(), "/api/v1/celebrities", body).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let namesake = json!({ "name": "Aaron Paul", "dateOfBirth": "1990-01-01" });
    create(&app, "/api/v1/celebrities", namesake).await;
}

#[tokio::test]
#[ignore = "requires a running MongoDB instance"]
async fn season_changes_are_mirrored_in_the_show() {
    let app = live_app().await;
    let (_, show_id) = seed_actor_and_show(&app).await;

    let season = create(
        &app,
        &format!("/api/v1/shows/{show_id}/seasons"),
        json!({ "title": "Season 1", "releaseDate": "2008-01-20", "rating": 8.0 }),
    )
    .await;
    let season_id = season["id"].as_str().unwrap().to_string();

    let show = body_json(get(app.clone(), &format!("/api/v1/shows/{show_id}")).await).await;
    assert_eq!(show["seasons"][0]["id"], season_id.as_str());

    put_json(
        app.clone(),
        &format!("/api/v1/seasons/{season_id}"),
        json!({ "title": "Season One", "rating": 8.7 }),
    )
    .await;
    post_json(
        app.clone(),
        &format!("/api/v1/seasons/{season_id}/posters"),
        json!({ "images": ["s1.jpg"] }),
    )
    .await;

    let show = body_json(get(app.clone(), &format!("/api/v1/shows/{show_id}")).await).await;
    assert_eq!(show["seasons"][0]["title"], "Season One");
    assert_eq!(show["seasons"][0]["rating"], 8.7);
    assert_eq!(
        show["seasons"][0]["postersPath"],
        json!([format!("/series/{show_id}/{season_id}/s1.jpg")])
    );

    let response = post_json(
        app,
        &format!("/api/v1/shows/{show_id}/seasons"),
        json!({ "title": "Season One", "releaseDate": "2009-03-08" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
#[ignore = "requires a running MongoDB instance"]
async fn episode_poster_delete_checks_the_owning_show() {
    let app = live_app().await;
    let (_, show_id) = seed_actor_and_show(&app).await;
    let other = create(
        &app,
        "/api/v1/shows",
        json!({ "title": "Better Call Saul", "type": "Series", "releaseDate": "2015-02-08" }),
    )
    .await;
    let other_show_id = other["id"].as_str().unwrap();

    let season = create(
        &app,
        &format!("/api/v1/shows/{show_id}/seasons"),
        json!({ "title": "Season 1", "releaseDate": "2008-01-20" }),
    )
    .await;
    let season_id = season["id"].as_str().unwrap().to_string();
    let episode = create(
        &app,
        &format!("/api/v1/seasons/{season_id}/episodes"),
        json!({ "title": "Pilot" }),
    )
    .await;
    let episode_id = episode["id"].as_str().unwrap().to_string();

    let response = post_json(
        app.clone(),
        &format!("/api/v1/episodes/{episode_id}/posters"),
        json!({ "images": ["e1.jpg"] }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = delete(
        app.clone(),
        &format!(
            "/api/v1/shows/{other_show_id}/seasons/{season_id}/episodes/{episode_id}/posters/e1.jpg"
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let episode = body_json(get(app.clone(), &format!("/api/v1/episodes/{episode_id}")).await).await;
    assert_eq!(episode["postersPath"].as_array().unwrap().len(), 1);

    let response = delete(
        app.clone(),
        &format!("/api/v1/shows/{show_id}/seasons/{season_id}/episodes/{episode_id}/posters/e1.jpg"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let episode = body_json(get(app, &format!("/api/v1/episodes/{episode_id}")).await).await;
    assert_eq!(episode["postersPath"], json!([]));
}

#[tokio::test]
#[ignore = "requires a running MongoDB instance"]
async fn articles_resolve_journalists_and_respect_limit() {
    let app = live_app().await;
    let journalist = create(&app, "/api/v1/journalists", json!({ "name": "Jane Doe" })).await;

    for (title, date) in [("Old", "2020-01-01"), ("New", "2024-01-01")] {
        create(
            &app,
            "/api/v1/articles",
            json!({ "title": title, "releaseDate": date, "journalistName": "Jane Doe" }),
        )
        .await;
    }

    let latest = body_json(get(app.clone(), "/api/v1/articles?limit=1").await).await;
    assert_eq!(latest["data"].as_array().unwrap().len(), 1);
    assert_eq!(latest["data"][0]["title"], "New");
    assert_eq!(latest["data"][0]["journalist"]["id"], journalist["id"]);

    let response = post_json(
        app,
        "/api/v1/articles",
        json!({ "title": "Ghost", "releaseDate": "2024-02-02", "journalistName": "Nobody" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
