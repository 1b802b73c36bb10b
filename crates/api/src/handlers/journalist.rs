//! Handlers for the `/journalists` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use marquee_core::error::CoreError;
use marquee_core::types::{new_entity_id, EntityId};
use marquee_core::uniqueness;
use marquee_db::models::journalist::{Journalist, UpdateJournalist};
use marquee_db::repositories::{ArticleRepo, JournalistRepo};
use serde::Deserialize;
use validator::Validate;

use super::article::ArticleResponse;
use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateJournalistRequest {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
}

#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateJournalistRequest {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,
}

fn not_found(id: &str) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Journalist",
        id: id.to_string(),
    })
}

/// POST /api/v1/journalists
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateJournalistRequest>,
) -> AppResult<(StatusCode, Json<Journalist>)> {
    input.validate()?;
    let existing = JournalistRepo::find_by_name(&state.pool, &input.name).await?;
    uniqueness::ensure_name_available("Journalist", &input.name, existing.is_some())?;

    let journalist = JournalistRepo::create(
        &state.pool,
        Journalist {
            id: new_entity_id(),
            name: input.name,
        },
    )
    .await?;
    tracing::info!(journalist_id = %journalist.id, "Journalist created");
    Ok((StatusCode::CREATED, Json(journalist)))
}

/// GET /api/v1/journalists
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<Journalist>>>> {
    let journalists = JournalistRepo::list(&state.pool).await?;
    Ok(Json(DataResponse::new(journalists)))
}

/// GET /api/v1/journalists/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<Json<Journalist>> {
    let journalist = JournalistRepo::find_by_id(&state.pool, &id)
        .await?
        .ok_or_else(|| not_found(&id))?;
    Ok(Json(journalist))
}

/// GET /api/v1/journalists/by-name/{name}
pub async fn get_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<Json<Journalist>> {
    let journalist = JournalistRepo::find_by_name(&state.pool, &name)
        .await?
        .ok_or_else(|| not_found(&name))?;
    Ok(Json(journalist))
}

/// PUT /api/v1/journalists/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
    Json(input): Json<UpdateJournalistRequest>,
) -> AppResult<Json<Journalist>> {
    input.validate()?;
    if let Some(name) = &input.name {
        let holder = JournalistRepo::find_by_name(&state.pool, name).await?;
        uniqueness::ensure_name_available("Journalist", name, holder.is_some_and(|j| j.id != id))?;
    }

    let changes = UpdateJournalist { name: input.name };
    let journalist = JournalistRepo::update(&state.pool, &id, &changes)
        .await?
        .ok_or_else(|| not_found(&id))?;
    tracing::info!(journalist_id = %journalist.id, "Journalist updated");
    Ok(Json(journalist))
}

/// GET /api/v1/journalists/{id}/articles
pub async fn list_articles(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<Json<DataResponse<Vec<ArticleResponse>>>> {
    JournalistRepo::find_by_id(&state.pool, &id)
        .await?
        .ok_or_else(|| not_found(&id))?;
    let articles = ArticleRepo::list_by_journalist(&state.pool, &id).await?;
    Ok(Json(DataResponse::new(articles.into_iter().map(Into::into).collect())))
}
