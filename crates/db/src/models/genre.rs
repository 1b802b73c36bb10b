use bson::Document;
use marquee_core::types::EntityId;
use serde::{Deserialize, Serialize};

use super::SetDocument;

/// A document in the `Genres` collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateGenre {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl UpdateGenre {
    pub fn to_set_document(&self) -> Result<Document, bson::ser::Error> {
        Ok(SetDocument::default()
            .field("name", self.name.as_ref())?
            .field("description", self.description.as_ref())?
            .build())
    }
}
