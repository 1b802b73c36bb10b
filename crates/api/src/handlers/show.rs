//! Handlers for the `/shows` resource.
//!
//! Shows carry two poster families sharing one list: series posters under
//! `/series/{id}/` and movie posters under `/movie/{id}/`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use marquee_core::error::CoreError;
use marquee_core::posters;
use marquee_core::projection::{FilmCrew, ShortCelebrity, ShortGenre, ShortSeason};
use marquee_core::types::{new_entity_id, EntityId, Timestamp};
use marquee_core::uniqueness;
use marquee_db::models::show::{Show, UpdateShow};
use marquee_db::models::ShowLength;
use marquee_db::repositories::ShowRepo;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{parse_date, parse_optional_date, to_timestamp, UploadPostersRequest};
use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response shapes
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateShowRequest {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    pub release_date: String,
    pub end_date: Option<String>,
    #[serde(default)]
    #[validate(range(min = 0.0, max = 10.0))]
    pub rating: f64,
    #[serde(default)]
    pub length: ShowLength,
    #[serde(default)]
    pub trailer_url: String,
    #[serde(default)]
    pub genres: Vec<ShortGenre>,
    #[serde(default)]
    pub directed_by: Vec<FilmCrew>,
    #[serde(default)]
    pub produced_by: Vec<FilmCrew>,
    #[serde(default)]
    pub written_by: Vec<FilmCrew>,
    #[serde(default)]
    pub starring: Vec<ShortCelebrity>,
    #[serde(default)]
    pub description: String,
}

/// All fields optional; absent fields are left unchanged.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateShowRequest {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub release_date: Option<String>,
    pub end_date: Option<String>,
    #[validate(range(min = 0.0, max = 10.0))]
    pub rating: Option<f64>,
    pub length: Option<ShowLength>,
    pub trailer_url: Option<String>,
    pub genres: Option<Vec<ShortGenre>>,
    pub directed_by: Option<Vec<FilmCrew>>,
    pub produced_by: Option<Vec<FilmCrew>>,
    pub written_by: Option<Vec<FilmCrew>>,
    pub starring: Option<Vec<ShortCelebrity>>,
    pub description: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShowResponse {
    pub id: EntityId,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub posters_path: Vec<String>,
    pub release_date: Timestamp,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<Timestamp>,
    pub rating: f64,
    pub length: ShowLength,
    pub trailer_url: String,
    pub genres: Vec<ShortGenre>,
    pub directed_by: Vec<FilmCrew>,
    pub produced_by: Vec<FilmCrew>,
    pub written_by: Vec<FilmCrew>,
    pub starring: Vec<ShortCelebrity>,
    pub description: String,
    pub seasons: Vec<ShortSeason>,
}

impl From<Show> for ShowResponse {
    fn from(s: Show) -> Self {
        Self {
            id: s.id,
            title: s.title,
            kind: s.kind,
            posters_path: s.posters_path,
            release_date: to_timestamp(s.release_date),
            end_date: s.end_date.map(to_timestamp),
            rating: s.rating,
            length: s.length,
            trailer_url: s.trailer_url,
            genres: s.genres,
            directed_by: s.directed_by,
            produced_by: s.produced_by,
            written_by: s.written_by,
            starring: s.starring,
            description: s.description,
            seasons: s.seasons,
        }
    }
}

fn not_found(id: &str) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Show",
        id: id.to_string(),
    })
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/shows
///
/// Rejects a second show with the same title and release date. Seasons are
/// attached later through `POST /shows/{id}/seasons`.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateShowRequest>,
) -> AppResult<(StatusCode, Json<ShowResponse>)> {
    input.validate()?;
    let release_date = parse_date("releaseDate", &input.release_date)?;
    let end_date = parse_optional_date("endDate", input.end_date.as_deref())?;

    let same_title = ShowRepo::list_by_title(&state.pool, &input.title).await?;
    uniqueness::ensure_unique_name_and_date(
        "Show",
        same_title.iter().map(|s| (s.title.as_str(), to_timestamp(s.release_date))),
        &input.title,
        to_timestamp(release_date),
    )?;

    let show = Show {
        id: new_entity_id(),
        title: input.title,
        kind: input.kind,
        posters_path: Vec::new(),
        release_date,
        end_date,
        rating: input.rating,
        length: input.length,
        trailer_url: input.trailer_url,
        genres: input.genres,
        directed_by: input.directed_by,
        produced_by: input.produced_by,
        written_by: input.written_by,
        starring: input.starring,
        description: input.description,
        seasons: Vec::new(),
    };
    let show = ShowRepo::create(&state.pool, show).await?;
    tracing::info!(show_id = %show.id, "Show created");
    Ok((StatusCode::CREATED, Json(show.into())))
}

/// GET /api/v1/shows
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<ShowResponse>>>> {
    let shows = ShowRepo::list(&state.pool).await?;
    Ok(Json(DataResponse::new(shows.into_iter().map(Into::into).collect())))
}

/// GET /api/v1/shows/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<Json<ShowResponse>> {
    let show = ShowRepo::find_by_id(&state.pool, &id)
        .await?
        .ok_or_else(|| not_found(&id))?;
    Ok(Json(show.into()))
}

/// PUT /api/v1/shows/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
    Json(input): Json<UpdateShowRequest>,
) -> AppResult<Json<ShowResponse>> {
    input.validate()?;
    let changes = UpdateShow {
        release_date: input
            .release_date
            .as_deref()
            .map(|d| parse_date("releaseDate", d))
            .transpose()?,
        end_date: parse_optional_date("endDate", input.end_date.as_deref())?,
        title: input.title,
        kind: input.kind,
        rating: input.rating,
        length: input.length,
        trailer_url: input.trailer_url,
        genres: input.genres,
        directed_by: input.directed_by,
        produced_by: input.produced_by,
        written_by: input.written_by,
        starring: input.starring,
        description: input.description,
    };

    let show = ShowRepo::update(&state.pool, &id, &changes)
        .await?
        .ok_or_else(|| not_found(&id))?;
    tracing::info!(show_id = %show.id, "Show updated");
    Ok(Json(show.into()))
}

// ---------------------------------------------------------------------------
// Posters
// ---------------------------------------------------------------------------

async fn upload(state: &AppState, id: &str, paths: Vec<String>) -> AppResult<Json<ShowResponse>> {
    let show = ShowRepo::push_posters(&state.pool, id, &paths)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(show_id = %show.id, count = paths.len(), "Show posters uploaded");
    Ok(Json(show.into()))
}

async fn delete(state: &AppState, id: &str, path: String) -> AppResult<StatusCode> {
    ShowRepo::pull_poster(&state.pool, id, &path)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(show_id = %id, %path, "Show poster deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/shows/{id}/series-posters
pub async fn upload_series_posters(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
    Json(input): Json<UploadPostersRequest>,
) -> AppResult<Json<ShowResponse>> {
    let paths = input.into_paths(|image| posters::series_poster(&id, image))?;
    upload(&state, &id, paths).await
}

/// DELETE /api/v1/shows/{id}/series-posters/{image}
pub async fn delete_series_poster(
    State(state): State<AppState>,
    Path((id, image)): Path<(EntityId, String)>,
) -> AppResult<StatusCode> {
    let path = posters::series_poster(&id, &image)?;
    delete(&state, &id, path).await
}

/// POST /api/v1/shows/{id}/movie-posters
pub async fn upload_movie_posters(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
    Json(input): Json<UploadPostersRequest>,
) -> AppResult<Json<ShowResponse>> {
    let paths = input.into_paths(|image| posters::movie_poster(&id, image))?;
    upload(&state, &id, paths).await
}

/// DELETE /api/v1/shows/{id}/movie-posters/{image}
pub async fn delete_movie_poster(
    State(state): State<AppState>,
    Path((id, image)): Path<(EntityId, String)>,
) -> AppResult<StatusCode> {
    let path = posters::movie_poster(&id, &image)?;
    delete(&state, &id, path).await
}
