//! HTTP handlers, one module per catalog entity.
//!
//! Handlers own the request/response shapes for their entity, run the
//! uniqueness and date checks, call the repositories and, where a
//! canonical entity is embedded elsewhere, hand the change to the
//! projection propagator.

pub mod article;
pub mod celebrity;
pub mod clothing;
pub mod episode;
pub mod genre;
pub mod journalist;
pub mod season;
pub mod show;

use marquee_core::dates;
use marquee_core::error::CoreError;
use marquee_core::propagation::PropagationReport;
use marquee_core::types::Timestamp;
use serde::Deserialize;
use validator::Validate;

use crate::error::AppResult;

/// Body of every `POST .../posters` call: image file names, not paths.
/// The server builds the full path from the entity ids.
#[derive(Debug, Deserialize, Validate)]
pub struct UploadPostersRequest {
    #[validate(length(min = 1, message = "at least one image is required"))]
    pub images: Vec<String>,
}

impl UploadPostersRequest {
    /// Validate the body and build one path per image with `build`.
    pub(crate) fn into_paths(
        self,
        build: impl Fn(&str) -> Result<String, CoreError>,
    ) -> AppResult<Vec<String>> {
        self.validate()?;
        Ok(self
            .images
            .iter()
            .map(|image| build(image))
            .collect::<Result<Vec<_>, _>>()?)
    }
}

pub(crate) fn parse_date(field: &str, value: &str) -> AppResult<bson::DateTime> {
    Ok(bson::DateTime::from_chrono(dates::parse_date(field, value)?))
}

pub(crate) fn parse_optional_date(field: &str, value: Option<&str>) -> AppResult<Option<bson::DateTime>> {
    Ok(dates::parse_optional_date(field, value)?.map(bson::DateTime::from_chrono))
}

pub(crate) fn to_timestamp(value: bson::DateTime) -> Timestamp {
    value.to_chrono()
}

pub(crate) fn log_propagation(report: &PropagationReport) {
    for write in &report.writes {
        tracing::debug!(
            entity_id = %report.entity_id,
            target = %write.target,
            matched = write.matched,
            "Projection write applied"
        );
    }
}
