pub mod article;
pub mod celebrity;
pub mod clothing;
pub mod episode;
pub mod genre;
pub mod health;
pub mod journalist;
pub mod season;
pub mod show;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /celebrities                                    list, create
/// /celebrities/{id}                               get, update
/// /celebrities/{id}/posters                       upload (POST)
/// /celebrities/{id}/posters/{image}               delete poster
///
/// /shows                                          list, create
/// /shows/{id}                                     get, update
/// /shows/{id}/series-posters                      upload (POST)
/// /shows/{id}/series-posters/{image}              delete poster
/// /shows/{id}/movie-posters                       upload (POST)
/// /shows/{id}/movie-posters/{image}               delete poster
/// /shows/{id}/seasons                             list by show, create season
/// /shows/{id}/seasons/{sid}/posters/{image}       delete season poster
/// /shows/{id}/seasons/{sid}/episodes/{eid}/posters/{image}
///                                                 delete episode poster
///
/// /seasons                                        list
/// /seasons/{id}                                   get, update
/// /seasons/{id}/posters                           upload (POST)
/// /seasons/{id}/episodes                          list by season, create episode
///
/// /episodes                                       list
/// /episodes/{id}                                  get, update
/// /episodes/{id}/posters                          upload (POST)
///
/// /genres                                         list, create
/// /genres/{id}                                    get, update
/// /genres/by-name/{name}                          get by name
///
/// /journalists                                    list, create
/// /journalists/{id}                               get, update
/// /journalists/by-name/{name}                     get by name
/// /journalists/{id}/articles                      articles by journalist
///
/// /articles                                       list (?limit=N), create
/// /articles/{id}                                  get, update
/// /articles/{id}/posters                          upload (POST)
/// /articles/{id}/posters/{image}                  delete poster
///
/// /clothing                                       list, create
/// /clothing/{id}                                  delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/celebrities", celebrity::router())
        // Shows also carry the show-scoped season and episode poster routes.
        .nest("/shows", show::router())
        .nest("/seasons", season::router())
        .nest("/episodes", episode::router())
        .nest("/genres", genre::router())
        .nest("/journalists", journalist::router())
        .nest("/articles", article::router())
        .nest("/clothing", clothing::router())
}
