//! Handlers for the `/celebrities` resource.
//!
//! Celebrities are embedded in shows, seasons and episodes under the field
//! their occupations map to. Renames and poster changes are propagated to
//! every embedded copy.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use marquee_core::error::CoreError;
use marquee_core::posters;
use marquee_core::propagation;
use marquee_core::types::{new_entity_id, EntityId, Timestamp};
use marquee_core::uniqueness;
use marquee_db::models::celebrity::{Celebrity, UpdateCelebrity};
use marquee_db::repositories::CelebrityRepo;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{log_propagation, parse_date, parse_optional_date, to_timestamp, UploadPostersRequest};
use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response shapes
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCelebrityRequest {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[serde(default)]
    pub occupation: Vec<String>,
    pub date_of_birth: String,
    pub date_of_death: Option<String>,
    #[serde(default)]
    pub place_of_birth: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub bio: String,
}

/// All fields optional; absent fields are left unchanged.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCelebrityRequest {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,
    pub occupation: Option<Vec<String>>,
    pub date_of_birth: Option<String>,
    pub date_of_death: Option<String>,
    pub place_of_birth: Option<String>,
    pub gender: Option<String>,
    pub bio: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CelebrityResponse {
    pub id: EntityId,
    pub name: String,
    pub occupation: Vec<String>,
    pub posters_path: Vec<String>,
    pub date_of_birth: Timestamp,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_death: Option<Timestamp>,
    pub place_of_birth: String,
    pub gender: String,
    pub bio: String,
}

impl From<Celebrity> for CelebrityResponse {
    fn from(c: Celebrity) -> Self {
        Self {
            id: c.id,
            name: c.name,
            occupation: c.occupation,
            posters_path: c.posters_path,
            date_of_birth: to_timestamp(c.date_of_birth),
            date_of_death: c.date_of_death.map(to_timestamp),
            place_of_birth: c.place_of_birth,
            gender: c.gender,
            bio: c.bio,
        }
    }
}

fn not_found(id: &str) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Celebrity",
        id: id.to_string(),
    })
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/celebrities
///
/// Rejects a second celebrity with the same name and date of birth.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateCelebrityRequest>,
) -> AppResult<(StatusCode, Json<CelebrityResponse>)> {
    input.validate()?;
    let date_of_birth = parse_date("dateOfBirth", &input.date_of_birth)?;
    let date_of_death = parse_optional_date("dateOfDeath", input.date_of_death.as_deref())?;

    let namesakes = CelebrityRepo::list_by_name(&state.pool, &input.name).await?;
    uniqueness::ensure_unique_name_and_date(
        "Celebrity",
        namesakes.iter().map(|c| (c.name.as_str(), to_timestamp(c.date_of_birth))),
        &input.name,
        to_timestamp(date_of_birth),
    )?;

    let celebrity = Celebrity {
        id: new_entity_id(),
        name: input.name,
        occupation: input.occupation,
        posters_path: Vec::new(),
        date_of_birth,
        date_of_death,
        place_of_birth: input.place_of_birth,
        gender: input.gender,
        bio: input.bio,
    };
    let celebrity = CelebrityRepo::create(&state.pool, celebrity).await?;
    tracing::info!(celebrity_id = %celebrity.id, "Celebrity created");
    Ok((StatusCode::CREATED, Json(celebrity.into())))
}

/// GET /api/v1/celebrities
pub async fn list(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<CelebrityResponse>>>> {
    let celebrities = CelebrityRepo::list(&state.pool).await?;
    Ok(Json(DataResponse::new(
        celebrities.into_iter().map(Into::into).collect(),
    )))
}

/// GET /api/v1/celebrities/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<Json<CelebrityResponse>> {
    let celebrity = CelebrityRepo::find_by_id(&state.pool, &id)
        .await?
        .ok_or_else(|| not_found(&id))?;
    Ok(Json(celebrity.into()))
}

/// PUT /api/v1/celebrities/{id}
///
/// Pushes the (possibly new) name into every show, season and episode that
/// embeds this celebrity.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
    Json(input): Json<UpdateCelebrityRequest>,
) -> AppResult<Json<CelebrityResponse>> {
    input.validate()?;
    let changes = UpdateCelebrity {
        date_of_birth: input
            .date_of_birth
            .as_deref()
            .map(|d| parse_date("dateOfBirth", d))
            .transpose()?,
        date_of_death: parse_optional_date("dateOfDeath", input.date_of_death.as_deref())?,
        name: input.name,
        occupation: input.occupation,
        place_of_birth: input.place_of_birth,
        gender: input.gender,
        bio: input.bio,
    };

    let celebrity = CelebrityRepo::update(&state.pool, &id, &changes)
        .await?
        .ok_or_else(|| not_found(&id))?;
    tracing::info!(celebrity_id = %celebrity.id, "Celebrity updated");

    let report = propagation::propagate_update(
        &state.projections,
        &celebrity.id,
        &celebrity.name,
        &[],
        &celebrity.occupation,
    )
    .await?;
    log_propagation(&report);

    Ok(Json(celebrity.into()))
}

/// POST /api/v1/celebrities/{id}/posters
///
/// Appends `/celebrities/{id}/{image}` for each image and adds the same
/// paths to every embedded copy.
pub async fn upload_posters(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
    Json(input): Json<UploadPostersRequest>,
) -> AppResult<Json<CelebrityResponse>> {
    let paths = input.into_paths(|image| posters::celebrity_poster(&id, image))?;

    let celebrity = CelebrityRepo::push_posters(&state.pool, &id, &paths)
        .await?
        .ok_or_else(|| not_found(&id))?;
    tracing::info!(celebrity_id = %celebrity.id, count = paths.len(), "Celebrity posters uploaded");

    let report = propagation::propagate_update(
        &state.projections,
        &celebrity.id,
        &celebrity.name,
        &paths,
        &celebrity.occupation,
    )
    .await?;
    log_propagation(&report);

    Ok(Json(celebrity.into()))
}

/// DELETE /api/v1/celebrities/{id}/posters/{image}
///
/// Removes the exact path from the celebrity and from every embedded copy.
pub async fn delete_poster(
    State(state): State<AppState>,
    Path((id, image)): Path<(EntityId, String)>,
) -> AppResult<StatusCode> {
    let path = posters::celebrity_poster(&id, &image)?;

    let celebrity = CelebrityRepo::pull_poster(&state.pool, &id, &path)
        .await?
        .ok_or_else(|| not_found(&id))?;
    tracing::info!(celebrity_id = %celebrity.id, %path, "Celebrity poster deleted");

    let report = propagation::propagate_delete(
        &state.projections,
        &celebrity.id,
        &image,
        &celebrity.occupation,
    )
    .await?;
    log_propagation(&report);

    Ok(StatusCode::NO_CONTENT)
}
