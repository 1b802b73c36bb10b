//! Handlers for seasons.
//!
//! A season always belongs to one show and is mirrored in that show's
//! `seasons` array as a [`ShortSeason`]. Every change to the title, rating or
//! posters rewrites the mirrored entry.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use marquee_core::error::CoreError;
use marquee_core::posters;
use marquee_core::projection::{FilmCrew, ShortEpisode};
use marquee_core::propagation;
use marquee_core::types::{new_entity_id, EntityId, Timestamp};
use marquee_core::uniqueness;
use marquee_db::models::season::{Season, UpdateSeason};
use marquee_db::repositories::{SeasonRepo, ShowRepo};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{log_propagation, parse_date, to_timestamp, UploadPostersRequest};
use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateSeasonRequest {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    #[serde(default)]
    pub trailer_url: String,
    #[serde(default)]
    pub resume: String,
    #[serde(default)]
    #[validate(range(min = 0.0, max = 10.0))]
    pub rating: f64,
    pub release_date: String,
    #[serde(default)]
    pub written_by: Vec<FilmCrew>,
    #[serde(default)]
    pub produced_by: Vec<FilmCrew>,
    #[serde(default)]
    pub directed_by: Vec<FilmCrew>,
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSeasonRequest {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: Option<String>,
    pub trailer_url: Option<String>,
    pub resume: Option<String>,
    #[validate(range(min = 0.0, max = 10.0))]
    pub rating: Option<f64>,
    pub release_date: Option<String>,
    pub written_by: Option<Vec<FilmCrew>>,
    pub produced_by: Option<Vec<FilmCrew>>,
    pub directed_by: Option<Vec<FilmCrew>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonResponse {
    pub id: EntityId,
    pub show_id: EntityId,
    pub title: String,
    pub trailer_url: String,
    pub posters_path: Vec<String>,
    pub resume: String,
    pub rating: f64,
    pub release_date: Timestamp,
    pub written_by: Vec<FilmCrew>,
    pub produced_by: Vec<FilmCrew>,
    pub directed_by: Vec<FilmCrew>,
    pub episodes: Vec<ShortEpisode>,
}

impl From<Season> for SeasonResponse {
    fn from(s: Season) -> Self {
        Self {
            id: s.id,
            show_id: s.show_id,
            title: s.title,
            trailer_url: s.trailer_url,
            posters_path: s.posters_path,
            resume: s.resume,
            rating: s.rating,
            release_date: to_timestamp(s.release_date),
            written_by: s.written_by,
            produced_by: s.produced_by,
            directed_by: s.directed_by,
            episodes: s.episodes,
        }
    }
}

fn not_found(id: &str) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Season",
        id: id.to_string(),
    })
}

fn show_not_found(id: &str) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Show",
        id: id.to_string(),
    })
}

/// Push the season's current projection into its show.
async fn sync_projection(state: &AppState, season: &Season) -> AppResult<()> {
    let report = propagation::propagate_season_update(&state.projections, &season.to_short()).await?;
    log_propagation(&report);
    Ok(())
}

/// POST /api/v1/shows/{show_id}/seasons
///
/// Titles are unique within a show. The new season is appended to the
/// show's `seasons` array.
pub async fn create(
    State(state): State<AppState>,
    Path(show_id): Path<EntityId>,
    Json(input): Json<CreateSeasonRequest>,
) -> AppResult<(StatusCode, Json<SeasonResponse>)> {
    input.validate()?;
    let release_date = parse_date("releaseDate", &input.release_date)?;

    ShowRepo::find_by_id(&state.pool, &show_id)
        .await?
        .ok_or_else(|| show_not_found(&show_id))?;

    let siblings = SeasonRepo::list_by_show(&state.pool, &show_id).await?;
    uniqueness::ensure_unique_title("Season", siblings.iter().map(|s| s.title.as_str()), &input.title)?;

    let season = Season {
        id: new_entity_id(),
        show_id: show_id.clone(),
        title: input.title,
        trailer_url: input.trailer_url,
        posters_path: Vec::new(),
        resume: input.resume,
        rating: input.rating,
        release_date,
        written_by: input.written_by,
        produced_by: input.produced_by,
        directed_by: input.directed_by,
        episodes: Vec::new(),
    };
    let season = SeasonRepo::create(&state.pool, season).await?;
    if !ShowRepo::add_season(&state.pool, &show_id, &season.to_short()).await? {
        tracing::warn!(show_id = %show_id, season_id = %season.id, "Show vanished before season was attached");
    }
    tracing::info!(show_id = %show_id, season_id = %season.id, "Season created");
    Ok((StatusCode::CREATED, Json(season.into())))
}

/// GET /api/v1/seasons
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<SeasonResponse>>>> {
    let seasons = SeasonRepo::list(&state.pool).await?;
    Ok(Json(DataResponse::new(seasons.into_iter().map(Into::into).collect())))
}

/// GET /api/v1/shows/{show_id}/seasons
pub async fn list_by_show(
    State(state): State<AppState>,
    Path(show_id): Path<EntityId>,
) -> AppResult<Json<DataResponse<Vec<SeasonResponse>>>> {
    let seasons = SeasonRepo::list_by_show(&state.pool, &show_id).await?;
    Ok(Json(DataResponse::new(seasons.into_iter().map(Into::into).collect())))
}

/// GET /api/v1/seasons/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<Json<SeasonResponse>> {
    let season = SeasonRepo::find_by_id(&state.pool, &id)
        .await?
        .ok_or_else(|| not_found(&id))?;
    Ok(Json(season.into()))
}

/// PUT /api/v1/seasons/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
    Json(input): Json<UpdateSeasonRequest>,
) -> AppResult<Json<SeasonResponse>> {
    input.validate()?;
    let changes = UpdateSeason {
        release_date: input
            .release_date
            .as_deref()
            .map(|d| parse_date("releaseDate", d))
            .transpose()?,
        title: input.title,
        trailer_url: input.trailer_url,
        resume: input.resume,
        rating: input.rating,
        written_by: input.written_by,
        produced_by: input.produced_by,
        directed_by: input.directed_by,
    };

    let season = SeasonRepo::update(&state.pool, &id, &changes)
        .await?
        .ok_or_else(|| not_found(&id))?;
    tracing::info!(season_id = %season.id, "Season updated");
    sync_projection(&state, &season).await?;
    Ok(Json(season.into()))
}

/// POST /api/v1/seasons/{id}/posters
///
/// Paths are built as `/series/{show_id}/{id}/{image}`.
pub async fn upload_posters(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
    Json(input): Json<UploadPostersRequest>,
) -> AppResult<Json<SeasonResponse>> {
    let season = SeasonRepo::find_by_id(&state.pool, &id)
        .await?
        .ok_or_else(|| not_found(&id))?;
    let paths = input.into_paths(|image| posters::season_poster(&season.show_id, &season.id, image))?;

    let season = SeasonRepo::push_posters(&state.pool, &id, &paths)
        .await?
        .ok_or_else(|| not_found(&id))?;
    tracing::info!(season_id = %season.id, count = paths.len(), "Season posters uploaded");
    sync_projection(&state, &season).await?;
    Ok(Json(season.into()))
}

/// DELETE /api/v1/shows/{show_id}/seasons/{id}/posters/{image}
pub async fn delete_poster(
    State(state): State<AppState>,
    Path((show_id, id, image)): Path<(EntityId, EntityId, String)>,
) -> AppResult<StatusCode> {
    let path = posters::season_poster(&show_id, &id, &image)?;

    let season = SeasonRepo::find_by_id(&state.pool, &id)
        .await?
        .filter(|s| s.show_id == show_id)
        .ok_or_else(|| not_found(&id))?;
    SeasonRepo::pull_poster(&state.pool, &season.id, &path)
        .await?
        .ok_or_else(|| not_found(&id))?;
    tracing::info!(season_id = %season.id, %path, "Season poster deleted");

    let report =
        propagation::propagate_season_poster_delete(&state.projections, &show_id, &season.id, &image).await?;
    log_propagation(&report);
    Ok(StatusCode::NO_CONTENT)
}
