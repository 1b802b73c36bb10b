//! Shared response envelope types for API handlers.
//!
//! List endpoints answer with a `{ "data": [...] }` envelope; single-entity
//! endpoints return the entity object itself.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

impl<T: Serialize> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}
