use axum::routing::{get, post};
use axum::Router;

use crate::handlers::episode;
use crate::state::AppState;

/// Routes mounted at `/episodes`.
///
/// ```text
/// GET    /                  -> list
/// GET    /{id}              -> get_by_id
/// PUT    /{id}              -> update
/// POST   /{id}/posters      -> upload_posters
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(episode::list))
        .route("/{id}", get(episode::get_by_id).put(episode::update))
        .route("/{id}/posters", post(episode::upload_posters))
}
