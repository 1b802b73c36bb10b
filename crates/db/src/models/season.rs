//! Season document and update set.

use bson::{DateTime, Document};
use marquee_core::projection::{FilmCrew, ShortEpisode, ShortSeason};
use marquee_core::types::EntityId;
use serde::{Deserialize, Serialize};

use super::SetDocument;

/// A document in the `Seasons` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Season {
    pub id: EntityId,
    pub show_id: EntityId,
    pub title: String,
    #[serde(default)]
    pub trailer_url: String,
    #[serde(default)]
    pub posters_path: Vec<String>,
    #[serde(default)]
    pub resume: String,
    #[serde(default)]
    pub rating: f64,
    pub release_date: DateTime,
    #[serde(default)]
    pub written_by: Vec<FilmCrew>,
    #[serde(default)]
    pub produced_by: Vec<FilmCrew>,
    #[serde(default)]
    pub directed_by: Vec<FilmCrew>,
    #[serde(default)]
    pub episodes: Vec<ShortEpisode>,
}

impl Season {
    /// The projection embedded in the parent show's `seasons` array.
    pub fn to_short(&self) -> ShortSeason {
        ShortSeason {
            id: self.id.clone(),
            title: self.title.clone(),
            posters_path: self.posters_path.clone(),
            rating: self.rating,
        }
    }
}

/// Fields to change on an existing season. `None` leaves a field as is.
#[derive(Debug, Clone, Default)]
pub struct UpdateSeason {
    pub title: Option<String>,
    pub trailer_url: Option<String>,
    pub resume: Option<String>,
    pub rating: Option<f64>,
    pub release_date: Option<DateTime>,
    pub written_by: Option<Vec<FilmCrew>>,
    pub produced_by: Option<Vec<FilmCrew>>,
    pub directed_by: Option<Vec<FilmCrew>>,
}

impl UpdateSeason {
    pub fn to_set_document(&self) -> Result<Document, bson::ser::Error> {
        Ok(SetDocument::default()
            .field("title", self.title.as_ref())?
            .field("trailerUrl", self.trailer_url.as_ref())?
            .field("resume", self.resume.as_ref())?
            .field("rating", self.rating.as_ref())?
            .field("releaseDate", self.release_date.as_ref())?
            .field("writtenBy", self.written_by.as_ref())?
            .field("producedBy", self.produced_by.as_ref())?
            .field("directedBy", self.directed_by.as_ref())?
            .build())
    }
}

#[cfg(test)]
mod tests {
    use bson::doc;

    use super::*;

    #[test]
    fn short_projection_copies_identity_fields() {
        let season = Season {
            id: "se1".into(),
            show_id: "sh1".into(),
            title: "Season 1".into(),
            trailer_url: String::new(),
            posters_path: vec!["/series/sh1/se1/a.jpg".into()],
            resume: "Pilot season".into(),
            rating: 8.2,
            release_date: DateTime::from_millis(0),
            written_by: vec![],
            produced_by: vec![],
            directed_by: vec![],
            episodes: vec![],
        };
        assert_eq!(
            season.to_short(),
            ShortSeason {
                id: "se1".into(),
                title: "Season 1".into(),
                posters_path: vec!["/series/sh1/se1/a.jpg".into()],
                rating: 8.2,
            }
        );
        assert_eq!(bson::to_document(&season).unwrap().get_str("showId").unwrap(), "sh1");
    }

    #[test]
    fn update_uses_stored_key_names() {
        let update = UpdateSeason {
            trailer_url: Some("https://example.com/t".into()),
            ..Default::default()
        };
        assert_eq!(update.to_set_document().unwrap(), doc! { "trailerUrl": "https://example.com/t" });
    }
}
