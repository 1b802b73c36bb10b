//! Handlers for the `/genres` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use marquee_core::error::CoreError;
use marquee_core::types::{new_entity_id, EntityId};
use marquee_core::uniqueness;
use marquee_db::models::genre::{Genre, UpdateGenre};
use marquee_db::repositories::GenreRepo;
use serde::Deserialize;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateGenreRequest {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateGenreRequest {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,
    pub description: Option<String>,
}

fn not_found(id: &str) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Genre",
        id: id.to_string(),
    })
}

/// POST /api/v1/genres
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateGenreRequest>,
) -> AppResult<(StatusCode, Json<Genre>)> {
    input.validate()?;
    let existing = GenreRepo::find_by_name(&state.pool, &input.name).await?;
    uniqueness::ensure_name_available("Genre", &input.name, existing.is_some())?;

    let genre = GenreRepo::create(
        &state.pool,
        Genre {
            id: new_entity_id(),
            name: input.name,
            description: input.description,
        },
    )
    .await?;
    tracing::info!(genre_id = %genre.id, name = %genre.name, "Genre created");
    Ok((StatusCode::CREATED, Json(genre)))
}

/// GET /api/v1/genres
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<Genre>>>> {
    let genres = GenreRepo::list(&state.pool).await?;
    Ok(Json(DataResponse::new(genres)))
}

/// GET /api/v1/genres/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<Json<Genre>> {
    let genre = GenreRepo::find_by_id(&state.pool, &id)
        .await?
        .ok_or_else(|| not_found(&id))?;
    Ok(Json(genre))
}

/// GET /api/v1/genres/by-name/{name}
pub async fn get_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<Json<Genre>> {
    let genre = GenreRepo::find_by_name(&state.pool, &name)
        .await?
        .ok_or_else(|| not_found(&name))?;
    Ok(Json(genre))
}

/// PUT /api/v1/genres/{id}
///
/// Renaming onto a name held by another genre is a conflict.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
    Json(input): Json<UpdateGenreRequest>,
) -> AppResult<Json<Genre>> {
    input.validate()?;
    if let Some(name) = &input.name {
        let holder = GenreRepo::find_by_name(&state.pool, name).await?;
        uniqueness::ensure_name_available("Genre", name, holder.is_some_and(|g| g.id != id))?;
    }

    let changes = UpdateGenre {
        name: input.name,
        description: input.description,
    };
    let genre = GenreRepo::update(&state.pool, &id, &changes)
        .await?
        .ok_or_else(|| not_found(&id))?;
    tracing::info!(genre_id = %genre.id, "Genre updated");
    Ok(Json(genre))
}
