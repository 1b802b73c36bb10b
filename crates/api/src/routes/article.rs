use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::article;
use crate::state::AppState;

/// Routes mounted at `/articles`.
///
/// ```text
/// GET    /                        -> list (?limit=N)
/// POST   /                        -> create
/// GET    /{id}                    -> get_by_id
/// PUT    /{id}                    -> update
/// POST   /{id}/posters            -> upload_posters
/// DELETE /{id}/posters/{image}    -> delete_poster
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(article::list).post(article::create))
        .route("/{id}", get(article::get_by_id).put(article::update))
        .route("/{id}/posters", post(article::upload_posters))
        .route("/{id}/posters/{image}", delete(article::delete_poster))
}
