use axum::routing::get;
use axum::Router;

use crate::handlers::journalist;
use crate::state::AppState;

/// Routes mounted at `/journalists`.
///
/// ```text
/// GET    /                  -> list
/// POST   /                  -> create
/// GET    /{id}              -> get_by_id
/// PUT    /{id}              -> update
/// GET    /by-name/{name}    -> get_by_name
/// GET    /{id}/articles     -> list_articles
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(journalist::list).post(journalist::create))
        .route("/{id}", get(journalist::get_by_id).put(journalist::update))
        .route("/by-name/{name}", get(journalist::get_by_name))
        .route("/{id}/articles", get(journalist::list_articles))
}
