#![allow(dead_code)]

use std::path::PathBuf;
use std::time::Duration;

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderName, Method, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use marquee_api::config::{ClothingBackendKind, LogFormat, ServerConfig};
use marquee_api::routes;
use marquee_api::state::AppState;
use marquee_db::clothing_store::ClothingBackend;
use marquee_db::DbPool;

/// A MongoDB URI nothing listens on. The driver connects lazily, so a pool
/// built from it is usable until the first query, which fails fast.
pub const UNREACHABLE_MONGODB_URI: &str = "mongodb://127.0.0.1:1/?serverSelectionTimeoutMS=100";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        mongodb_uri: UNREACHABLE_MONGODB_URI.to_string(),
        mongodb_database: "marquee_test".to_string(),
        clothing_backend: ClothingBackendKind::Mongo,
        clothing_file: PathBuf::from("clothes.json"),
        log_format: LogFormat::Text,
    }
}

/// A pool pointing at a server that does not exist.
pub async fn unreachable_pool() -> DbPool {
    marquee_db::create_pool(UNREACHABLE_MONGODB_URI, "marquee_test")
        .await
        .expect("client options should parse")
}

/// A pool against `MONGODB_URI` using a fresh, uniquely named database.
/// Only used by tests marked `#[ignore]`.
pub async fn live_pool() -> DbPool {
    let uri = std::env::var("MONGODB_URI").unwrap_or_else(|_| "mongodb://localhost:27017".into());
    let db_name = format!("marquee_test_{}", uuid::Uuid::new_v4().simple());
    let pool = marquee_db::create_pool(&uri, &db_name)
        .await
        .expect("client options should parse");
    marquee_db::ensure_indexes(&pool)
        .await
        .expect("indexes should be created");
    pool
}

/// Build the full application router with all middleware layers.
///
/// This mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack (CORS, request ID, timeout, tracing,
/// panic recovery) that production uses.
pub fn build_test_app(pool: DbPool, clothing: ClothingBackend) -> Router {
    let state = AppState::new(pool, test_config(), clothing);

    let cors = CorsLayer::new()
        .allow_origin(["http://localhost:5173".parse().unwrap()])
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(3600));

    let request_id_header = HeaderName::from_static("x-request-id");

    Router::new()
        .merge(routes::health::router())
        .nest("/api/v1", routes::api_routes())
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(30),
        ))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(cors)
        .with_state(state)
}

/// Router over an unreachable database, with the Mongo clothing backend.
pub async fn build_offline_app() -> Router {
    let pool = unreachable_pool().await;
    build_test_app(pool.clone(), ClothingBackend::Mongo(pool))
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn send(app: Router, method: Method, uri: &str, body: Option<serde_json::Value>) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None).await
}
