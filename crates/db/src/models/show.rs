//! Show document and update set.
//!
//! A show embeds projections of its cast, crew, genres and seasons.

use bson::{DateTime, Document};
use marquee_core::projection::{FilmCrew, ShortCelebrity, ShortGenre, ShortSeason};
use marquee_core::types::EntityId;
use serde::{Deserialize, Serialize};

use super::{SetDocument, ShowLength};

/// A document in the `Shows` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Show {
    pub id: EntityId,
    pub title: String,
    /// Free-form show kind, e.g. `Movie` or `Series`.
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub posters_path: Vec<String>,
    pub release_date: DateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime>,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub length: ShowLength,
    #[serde(default)]
    pub trailer_url: String,
    #[serde(default)]
    pub genres: Vec<ShortGenre>,
    #[serde(default)]
    pub directed_by: Vec<FilmCrew>,
    #[serde(default)]
    pub produced_by: Vec<FilmCrew>,
    #[serde(default)]
    pub written_by: Vec<FilmCrew>,
    #[serde(default)]
    pub starring: Vec<ShortCelebrity>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub seasons: Vec<ShortSeason>,
}

/// Fields to change on an existing show. `None` leaves a field as is.
///
/// `seasons` is not editable here: it is maintained by season creation and
/// season propagation.
#[derive(Debug, Clone, Default)]
pub struct UpdateShow {
    pub title: Option<String>,
    pub kind: Option<String>,
    pub release_date: Option<DateTime>,
    pub end_date: Option<DateTime>,
    pub rating: Option<f64>,
    pub length: Option<ShowLength>,
    pub trailer_url: Option<String>,
    pub genres: Option<Vec<ShortGenre>>,
    pub directed_by: Option<Vec<FilmCrew>>,
    pub produced_by: Option<Vec<FilmCrew>>,
    pub written_by: Option<Vec<FilmCrew>>,
    pub starring: Option<Vec<ShortCelebrity>>,
    pub description: Option<String>,
}

impl UpdateShow {
    pub fn to_set_document(&self) -> Result<Document, bson::ser::Error> {
        Ok(SetDocument::default()
            .field("title", self.title.as_ref())?
            .field("type", self.kind.as_ref())?
            .field("releaseDate", self.release_date.as_ref())?
            .field("endDate", self.end_date.as_ref())?
            .field("rating", self.rating.as_ref())?
            .field("length", self.length.as_ref())?
            .field("trailerUrl", self.trailer_url.as_ref())?
            .field("genres", self.genres.as_ref())?
            .field("directedBy", self.directed_by.as_ref())?
            .field("producedBy", self.produced_by.as_ref())?
            .field("writtenBy", self.written_by.as_ref())?
            .field("starring", self.starring.as_ref())?
            .field("description", self.description.as_ref())?
            .build())
    }
}

#[cfg(test)]
mod tests {
    use bson::{doc, Bson};

    use super::*;

    #[test]
    fn kind_is_stored_as_type() {
        let show = Show {
            id: "s1".into(),
            title: "Breaking Bad".into(),
            kind: "Series".into(),
            posters_path: vec![],
            release_date: DateTime::from_millis(1_200_787_200_000),
            end_date: None,
            rating: 9.5,
            length: ShowLength::default(),
            trailer_url: String::new(),
            genres: vec![],
            directed_by: vec![],
            produced_by: vec![],
            written_by: vec![],
            starring: vec![ShortCelebrity {
                id: "c1".into(),
                name: "Bryan Cranston".into(),
                role_name: "Walter White".into(),
                posters_path: vec![],
            }],
            description: String::new(),
            seasons: vec![],
        };
        let stored = bson::to_document(&show).unwrap();
        assert_eq!(stored.get_str("type").unwrap(), "Series");
        let starring = stored.get_array("starring").unwrap();
        assert_eq!(
            starring[0],
            Bson::Document(doc! {
                "id": "c1",
                "name": "Bryan Cranston",
                "roleName": "Walter White",
                "postersPath": [],
            })
        );
    }

    #[test]
    fn update_encodes_embedded_lists() {
        let update = UpdateShow {
            genres: Some(vec![ShortGenre { id: "g1".into(), name: "Drama".into() }]),
            rating: Some(8.0),
            ..Default::default()
        };
        assert_eq!(
            update.to_set_document().unwrap(),
            doc! { "rating": 8.0, "genres": [{ "id": "g1", "name": "Drama" }] }
        );
    }
}
