//! Episode document and update set.

use bson::Document;
use marquee_core::projection::{FilmCrew, ShortCelebrity, ShortEpisode};
use marquee_core::types::EntityId;
use serde::{Deserialize, Serialize};

use super::{SetDocument, ShowLength};

/// A document in the `Episodes` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Episode {
    pub id: EntityId,
    pub season_id: EntityId,
    pub title: String,
    #[serde(default)]
    pub posters_path: Vec<String>,
    #[serde(default)]
    pub trailer_url: String,
    #[serde(default)]
    pub length: ShowLength,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub resume: String,
    #[serde(default)]
    pub written_by: Vec<FilmCrew>,
    #[serde(default)]
    pub produced_by: Vec<FilmCrew>,
    #[serde(default)]
    pub directed_by: Vec<FilmCrew>,
    #[serde(default)]
    pub starring: Vec<ShortCelebrity>,
}

impl Episode {
    /// The projection embedded in the parent season's `episodes` array.
    pub fn to_short(&self) -> ShortEpisode {
        ShortEpisode {
            id: self.id.clone(),
            title: self.title.clone(),
            posters_path: self.posters_path.clone(),
            rating: self.rating,
            resume: self.resume.clone(),
        }
    }
}

/// Fields to change on an existing episode. `None` leaves a field as is.
#[derive(Debug, Clone, Default)]
pub struct UpdateEpisode {
    pub title: Option<String>,
    pub trailer_url: Option<String>,
    pub length: Option<ShowLength>,
    pub rating: Option<f64>,
    pub resume: Option<String>,
    pub written_by: Option<Vec<FilmCrew>>,
    pub produced_by: Option<Vec<FilmCrew>>,
    pub directed_by: Option<Vec<FilmCrew>>,
    pub starring: Option<Vec<ShortCelebrity>>,
}

impl UpdateEpisode {
    pub fn to_set_document(&self) -> Result<Document, bson::ser::Error> {
        Ok(SetDocument::default()
            .field("title", self.title.as_ref())?
            .field("trailerUrl", self.trailer_url.as_ref())?
            .field("length", self.length.as_ref())?
            .field("rating", self.rating.as_ref())?
            .field("resume", self.resume.as_ref())?
            .field("writtenBy", self.written_by.as_ref())?
            .field("producedBy", self.produced_by.as_ref())?
            .field("directedBy", self.directed_by.as_ref())?
            .field("starring", self.starring.as_ref())?
            .build())
    }
}
