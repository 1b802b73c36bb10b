//! Article document and update set.

use bson::{DateTime, Document};
use marquee_core::projection::ShortJournalist;
use marquee_core::types::EntityId;
use serde::{Deserialize, Serialize};

use super::SetDocument;

/// A document in the `Articles` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: EntityId,
    pub title: String,
    pub release_date: DateTime,
    #[serde(default)]
    pub posters_path: Vec<String>,
    #[serde(default)]
    pub description: String,
    pub journalist: ShortJournalist,
}

/// Fields to change on an existing article. `None` leaves a field as is.
#[derive(Debug, Clone, Default)]
pub struct UpdateArticle {
    pub title: Option<String>,
    pub release_date: Option<DateTime>,
    pub description: Option<String>,
    pub journalist: Option<ShortJournalist>,
}

impl UpdateArticle {
    pub fn to_set_document(&self) -> Result<Document, bson::ser::Error> {
        Ok(SetDocument::default()
            .field("title", self.title.as_ref())?
            .field("releaseDate", self.release_date.as_ref())?
            .field("description", self.description.as_ref())?
            .field("journalist", self.journalist.as_ref())?
            .build())
    }
}
