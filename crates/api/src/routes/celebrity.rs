use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::celebrity;
use crate::state::AppState;

/// Routes mounted at `/celebrities`.
///
/// ```text
/// GET    /                        -> list
/// POST   /                        -> create
/// GET    /{id}                    -> get_by_id
/// PUT    /{id}                    -> update
/// POST   /{id}/posters            -> upload_posters
/// DELETE /{id}/posters/{image}    -> delete_poster
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(celebrity::list).post(celebrity::create))
        .route("/{id}", get(celebrity::get_by_id).put(celebrity::update))
        .route("/{id}/posters", post(celebrity::upload_posters))
        .route("/{id}/posters/{image}", delete(celebrity::delete_poster))
}
