use bson::Document;
use marquee_core::types::EntityId;
use serde::{Deserialize, Serialize};

use super::SetDocument;

/// A document in the `Journalists` collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Journalist {
    pub id: EntityId,
    pub name: String,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateJournalist {
    pub name: Option<String>,
}

impl UpdateJournalist {
    pub fn to_set_document(&self) -> Result<Document, bson::ser::Error> {
        Ok(SetDocument::default().field("name", self.name.as_ref())?.build())
    }
}
