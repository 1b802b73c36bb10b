//! Handlers for episodes.
//!
//! An episode belongs to one season and is mirrored in that season's
//! `episodes` array. Its poster paths nest under the owning show, so
//! uploads look the season up to find the show id.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use marquee_core::error::CoreError;
use marquee_core::posters;
use marquee_core::projection::{FilmCrew, ShortCelebrity};
use marquee_core::propagation;
use marquee_core::types::{new_entity_id, EntityId};
use marquee_core::uniqueness;
use marquee_db::models::episode::{Episode, UpdateEpisode};
use marquee_db::models::ShowLength;
use marquee_db::repositories::{EpisodeRepo, SeasonRepo};
use serde::Deserialize;
use validator::Validate;

use super::{log_propagation, UploadPostersRequest};
use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateEpisodeRequest {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    #[serde(default)]
    pub trailer_url: String,
    #[serde(default)]
    pub length: ShowLength,
    #[serde(default)]
    #[validate(range(min = 0.0, max = 10.0))]
    pub rating: f64,
    #[serde(default)]
    pub resume: String,
    #[serde(default)]
    pub written_by: Vec<FilmCrew>,
    #[serde(default)]
    pub produced_by: Vec<FilmCrew>,
    #[serde(default)]
    pub directed_by: Vec<FilmCrew>,
    #[serde(default)]
    pub starring: Vec<ShortCelebrity>,
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEpisodeRequest {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: Option<String>,
    pub trailer_url: Option<String>,
    pub length: Option<ShowLength>,
    #[validate(range(min = 0.0, max = 10.0))]
    pub rating: Option<f64>,
    pub resume: Option<String>,
    pub written_by: Option<Vec<FilmCrew>>,
    pub produced_by: Option<Vec<FilmCrew>>,
    pub directed_by: Option<Vec<FilmCrew>>,
    pub starring: Option<Vec<ShortCelebrity>>,
}

fn not_found(id: &str) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Episode",
        id: id.to_string(),
    })
}

fn season_not_found(id: &str) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Season",
        id: id.to_string(),
    })
}

async fn sync_projection(state: &AppState, episode: &Episode) -> AppResult<()> {
    let report = propagation::propagate_episode_update(&state.projections, &episode.to_short()).await?;
    log_propagation(&report);
    Ok(())
}

/// POST /api/v1/seasons/{season_id}/episodes
///
/// Titles are unique within a season.
pub async fn create(
    State(state): State<AppState>,
    Path(season_id): Path<EntityId>,
    Json(input): Json<CreateEpisodeRequest>,
) -> AppResult<(StatusCode, Json<Episode>)> {
    input.validate()?;

    SeasonRepo::find_by_id(&state.pool, &season_id)
        .await?
        .ok_or_else(|| season_not_found(&season_id))?;

    let siblings = EpisodeRepo::list_by_season(&state.pool, &season_id).await?;
    uniqueness::ensure_unique_title("Episode", siblings.iter().map(|e| e.title.as_str()), &input.title)?;

    let episode = Episode {
        id: new_entity_id(),
        season_id: season_id.clone(),
        title: input.title,
        posters_path: Vec::new(),
        trailer_url: input.trailer_url,
        length: input.length,
        rating: input.rating,
        resume: input.resume,
        written_by: input.written_by,
        produced_by: input.produced_by,
        directed_by: input.directed_by,
        starring: input.starring,
    };
    let episode = EpisodeRepo::create(&state.pool, episode).await?;
    if !SeasonRepo::add_episode(&state.pool, &season_id, &episode.to_short()).await? {
        tracing::warn!(season_id = %season_id, episode_id = %episode.id, "Season vanished before episode was attached");
    }
    tracing::info!(season_id = %season_id, episode_id = %episode.id, "Episode created");
    Ok((StatusCode::CREATED, Json(episode)))
}

/// GET /api/v1/episodes
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<Episode>>>> {
    let episodes = EpisodeRepo::list(&state.pool).await?;
    Ok(Json(DataResponse::new(episodes)))
}

/// GET /api/v1/seasons/{season_id}/episodes
pub async fn list_by_season(
    State(state): State<AppState>,
    Path(season_id): Path<EntityId>,
) -> AppResult<Json<DataResponse<Vec<Episode>>>> {
    let episodes = EpisodeRepo::list_by_season(&state.pool, &season_id).await?;
    Ok(Json(DataResponse::new(episodes)))
}

/// GET /api/v1/episodes/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<Json<Episode>> {
    let episode = EpisodeRepo::find_by_id(&state.pool, &id)
        .await?
        .ok_or_else(|| not_found(&id))?;
    Ok(Json(episode))
}

/// PUT /api/v1/episodes/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
    Json(input): Json<UpdateEpisodeRequest>,
) -> AppResult<Json<Episode>> {
    input.validate()?;
    let changes = UpdateEpisode {
        title: input.title,
        trailer_url: input.trailer_url,
        length: input.length,
        rating: input.rating,
        resume: input.resume,
        written_by: input.written_by,
        produced_by: input.produced_by,
        directed_by: input.directed_by,
        starring: input.starring,
    };

    let episode = EpisodeRepo::update(&state.pool, &id, &changes)
        .await?
        .ok_or_else(|| not_found(&id))?;
    tracing::info!(episode_id = %episode.id, "Episode updated");
    sync_projection(&state, &episode).await?;
    Ok(Json(episode))
}

/// POST /api/v1/episodes/{id}/posters
///
/// Paths are built as `/series/{show_id}/{season_id}/{id}/{image}`.
pub async fn upload_posters(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
    Json(input): Json<UploadPostersRequest>,
) -> AppResult<Json<Episode>> {
    let episode = EpisodeRepo::find_by_id(&state.pool, &id)
        .await?
        .ok_or_else(|| not_found(&id))?;
    let season = SeasonRepo::find_by_id(&state.pool, &episode.season_id)
        .await?
        .ok_or_else(|| season_not_found(&episode.season_id))?;
    let paths = input
        .into_paths(|image| posters::episode_poster(&season.show_id, &season.id, &episode.id, image))?;

    let episode = EpisodeRepo::push_posters(&state.pool, &id, &paths)
        .await?
        .ok_or_else(|| not_found(&id))?;
    tracing::info!(episode_id = %episode.id, count = paths.len(), "Episode posters uploaded");
    sync_projection(&state, &episode).await?;
    Ok(Json(episode))
}

/// DELETE /api/v1/shows/{show_id}/seasons/{season_id}/episodes/{id}/posters/{image}
pub async fn delete_poster(
    State(state): State<AppState>,
    Path((show_id, season_id, id, image)): Path<(EntityId, EntityId, EntityId, String)>,
) -> AppResult<StatusCode> {
    let path = posters::episode_poster(&show_id, &season_id, &id, &image)?;

    SeasonRepo::find_by_id(&state.pool, &season_id)
        .await?
        .filter(|s| s.show_id == show_id)
        .ok_or_else(|| season_not_found(&season_id))?;
    let episode = EpisodeRepo::find_by_id(&state.pool, &id)
        .await?
        .filter(|e| e.season_id == season_id)
        .ok_or_else(|| not_found(&id))?;
    EpisodeRepo::pull_poster(&state.pool, &episode.id, &path)
        .await?
        .ok_or_else(|| not_found(&id))?;
    tracing::info!(episode_id = %episode.id, %path, "Episode poster deleted");

    let report = propagation::propagate_episode_poster_delete(
        &state.projections,
        &show_id,
        &season_id,
        &episode.id,
        &image,
    )
    .await?;
    log_propagation(&report);
    Ok(StatusCode::NO_CONTENT)
}
