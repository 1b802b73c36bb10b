use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{episode, season};
use crate::state::AppState;

/// Routes mounted at `/seasons`.
///
/// ```text
/// GET    /                  -> season::list
/// GET    /{id}              -> season::get_by_id
/// PUT    /{id}              -> season::update
/// POST   /{id}/posters      -> season::upload_posters
/// GET    /{id}/episodes     -> episode::list_by_season
/// POST   /{id}/episodes     -> episode::create
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(season::list))
        .route("/{id}", get(season::get_by_id).put(season::update))
        .route("/{id}/posters", post(season::upload_posters))
        .route("/{id}/episodes", get(episode::list_by_season).post(episode::create))
}
