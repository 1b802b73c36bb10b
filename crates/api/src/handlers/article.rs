//! Handlers for the `/articles` resource.
//!
//! Clients name the author by journalist name; the article stores only the
//! journalist's id.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use marquee_core::error::CoreError;
use marquee_core::posters;
use marquee_core::projection::ShortJournalist;
use marquee_core::types::{new_entity_id, EntityId, Timestamp};
use marquee_db::models::article::{Article, UpdateArticle};
use marquee_db::repositories::{ArticleRepo, JournalistRepo};
use marquee_db::DbPool;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{parse_date, to_timestamp, UploadPostersRequest};
use crate::error::{AppError, AppResult};
use crate::query::LimitParams;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response shapes
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateArticleRequest {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    pub release_date: String,
    #[serde(default)]
    pub description: String,
    #[validate(length(min = 1, message = "journalistName must not be empty"))]
    pub journalist_name: String,
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateArticleRequest {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: Option<String>,
    pub release_date: Option<String>,
    pub description: Option<String>,
    pub journalist_name: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleResponse {
    pub id: EntityId,
    pub title: String,
    pub release_date: Timestamp,
    pub posters_path: Vec<String>,
    pub description: String,
    pub journalist: ShortJournalist,
}

impl From<Article> for ArticleResponse {
    fn from(a: Article) -> Self {
        Self {
            id: a.id,
            title: a.title,
            release_date: to_timestamp(a.release_date),
            posters_path: a.posters_path,
            description: a.description,
            journalist: a.journalist,
        }
    }
}

fn not_found(id: &str) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Article",
        id: id.to_string(),
    })
}

async fn resolve_journalist(pool: &DbPool, name: &str) -> AppResult<ShortJournalist> {
    let journalist = JournalistRepo::find_by_name(pool, name)
        .await?
        .ok_or_else(|| CoreError::Validation(format!("Unknown journalist '{name}'")))?;
    Ok(ShortJournalist { id: journalist.id })
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/articles
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateArticleRequest>,
) -> AppResult<(StatusCode, Json<ArticleResponse>)> {
    input.validate()?;
    let release_date = parse_date("releaseDate", &input.release_date)?;
    let journalist = resolve_journalist(&state.pool, &input.journalist_name).await?;

    let article = Article {
        id: new_entity_id(),
        title: input.title,
        release_date,
        posters_path: Vec::new(),
        description: input.description,
        journalist,
    };
    let article = ArticleRepo::create(&state.pool, article).await?;
    tracing::info!(article_id = %article.id, journalist_id = %article.journalist.id, "Article created");
    Ok((StatusCode::CREATED, Json(article.into())))
}

/// GET /api/v1/articles?limit=N
///
/// Newest first. A missing or zero limit returns every article.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<LimitParams>,
) -> AppResult<Json<DataResponse<Vec<ArticleResponse>>>> {
    if params.limit.is_some_and(|l| l < 0) {
        return Err(AppError::BadRequest("limit must not be negative".to_string()));
    }
    let articles = ArticleRepo::list(&state.pool, params.limit).await?;
    Ok(Json(DataResponse::new(articles.into_iter().map(Into::into).collect())))
}

/// GET /api/v1/articles/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<Json<ArticleResponse>> {
    let article = ArticleRepo::find_by_id(&state.pool, &id)
        .await?
        .ok_or_else(|| not_found(&id))?;
    Ok(Json(article.into()))
}

/// PUT /api/v1/articles/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
    Json(input): Json<UpdateArticleRequest>,
) -> AppResult<Json<ArticleResponse>> {
    input.validate()?;
    let journalist = match input.journalist_name.as_deref() {
        Some(name) => Some(resolve_journalist(&state.pool, name).await?),
        None => None,
    };
    let changes = UpdateArticle {
        release_date: input
            .release_date
            .as_deref()
            .map(|d| parse_date("releaseDate", d))
            .transpose()?,
        title: input.title,
        description: input.description,
        journalist,
    };

    let article = ArticleRepo::update(&state.pool, &id, &changes)
        .await?
        .ok_or_else(|| not_found(&id))?;
    tracing::info!(article_id = %article.id, "Article updated");
    Ok(Json(article.into()))
}

/// POST /api/v1/articles/{id}/posters
pub async fn upload_posters(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
    Json(input): Json<UploadPostersRequest>,
) -> AppResult<Json<ArticleResponse>> {
    let paths = input.into_paths(|image| posters::article_poster(&id, image))?;
    let article = ArticleRepo::push_posters(&state.pool, &id, &paths)
        .await?
        .ok_or_else(|| not_found(&id))?;
    tracing::info!(article_id = %article.id, count = paths.len(), "Article posters uploaded");
    Ok(Json(article.into()))
}

/// DELETE /api/v1/articles/{id}/posters/{image}
pub async fn delete_poster(
    State(state): State<AppState>,
    Path((id, image)): Path<(EntityId, String)>,
) -> AppResult<StatusCode> {
    let path = posters::article_poster(&id, &image)?;
    ArticleRepo::pull_poster(&state.pool, &id, &path)
        .await?
        .ok_or_else(|| not_found(&id))?;
    tracing::info!(article_id = %id, %path, "Article poster deleted");
    Ok(StatusCode::NO_CONTENT)
}
