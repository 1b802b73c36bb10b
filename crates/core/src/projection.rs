//! Short projections embedded inside parent documents.
//!
//! These are the exact shapes stored in the `starring`, `writtenBy`,
//! `directedBy`, `producedBy`, `seasons`, `episodes`, `genres` and
//! `journalist` fields, so they serialize with camelCase keys.

use serde::{Deserialize, Serialize};

use crate::types::EntityId;

/// Cast member embedded in `starring`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortCelebrity {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub role_name: String,
    #[serde(default)]
    pub posters_path: Vec<String>,
}

/// Crew member embedded in `writtenBy`, `directedBy` or `producedBy`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilmCrew {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub posters_path: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortSeason {
    pub id: EntityId,
    pub title: String,
    #[serde(default)]
    pub posters_path: Vec<String>,
    #[serde(default)]
    pub rating: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortEpisode {
    pub id: EntityId,
    pub title: String,
    #[serde(default)]
    pub posters_path: Vec<String>,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub resume: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortGenre {
    pub id: EntityId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortJournalist {
    pub id: EntityId,
}
