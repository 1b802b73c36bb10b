//! Route definitions for shows and the show-scoped season/episode routes.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::{episode, season, show};
use crate::state::AppState;

/// Routes mounted at `/shows`.
///
/// ```text
/// GET    /                                                        -> show::list
/// POST   /                                                        -> show::create
/// GET    /{id}                                                    -> show::get_by_id
/// PUT    /{id}                                                    -> show::update
/// POST   /{id}/series-posters                                     -> show::upload_series_posters
/// DELETE /{id}/series-posters/{image}                             -> show::delete_series_poster
/// POST   /{id}/movie-posters                                      -> show::upload_movie_posters
/// DELETE /{id}/movie-posters/{image}                              -> show::delete_movie_poster
/// GET    /{id}/seasons                                            -> season::list_by_show
/// POST   /{id}/seasons                                            -> season::create
/// DELETE /{id}/seasons/{season_id}/posters/{image}                -> season::delete_poster
/// DELETE /{id}/seasons/{season_id}/episodes/{episode_id}/posters/{image}
///                                                                 -> episode::delete_poster
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(show::list).post(show::create))
        .route("/{id}", get(show::get_by_id).put(show::update))
        .route("/{id}/series-posters", post(show::upload_series_posters))
        .route("/{id}/series-posters/{image}", delete(show::delete_series_poster))
        .route("/{id}/movie-posters", post(show::upload_movie_posters))
        .route("/{id}/movie-posters/{image}", delete(show::delete_movie_poster))
        .route("/{id}/seasons", get(season::list_by_show).post(season::create))
        .route(
            "/{id}/seasons/{season_id}/posters/{image}",
            delete(season::delete_poster),
        )
        .route(
            "/{id}/seasons/{season_id}/episodes/{episode_id}/posters/{image}",
            delete(episode::delete_poster),
        )
}
