//! Handlers for the `/clothing` resource.
//!
//! Served from whichever [`ClothingBackend`](marquee_db::clothing_store::ClothingBackend)
//! the server was started with.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use marquee_core::error::CoreError;
use marquee_core::types::{new_entity_id, EntityId};
use marquee_db::models::clothing::Clothing;
use serde::Deserialize;
use validator::Validate;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateClothingRequest {
    #[serde(rename = "type")]
    #[validate(length(min = 1, message = "type must not be empty"))]
    pub kind: String,
    #[validate(range(min = 0, message = "price must not be negative"))]
    pub price: i32,
    #[validate(range(min = 0, message = "size must not be negative"))]
    pub size: i32,
    #[serde(default)]
    pub gender: String,
}

/// POST /api/v1/clothing
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateClothingRequest>,
) -> AppResult<(StatusCode, Json<Clothing>)> {
    input.validate()?;
    let item = state
        .clothing
        .create(Clothing {
            id: new_entity_id(),
            kind: input.kind,
            price: input.price,
            size: input.size,
            gender: input.gender,
        })
        .await?;
    tracing::info!(clothing_id = %item.id, backend = state.clothing.name(), "Clothing item created");
    Ok((StatusCode::CREATED, Json(item)))
}

/// GET /api/v1/clothing
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<Clothing>>>> {
    let items = state.clothing.list().await?;
    Ok(Json(DataResponse::new(items)))
}

/// DELETE /api/v1/clothing/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<StatusCode> {
    if !state.clothing.delete(&id).await? {
        return Err(CoreError::NotFound {
            entity: "Clothing",
            id,
        }
        .into());
    }
    tracing::info!(clothing_id = %id, "Clothing item deleted");
    Ok(StatusCode::NO_CONTENT)
}
