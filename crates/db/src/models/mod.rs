//! Document models.
//!
//! Stored documents use camelCase keys and BSON datetimes. Each `UpdateX`
//! struct carries only the fields a caller wants to change and renders them
//! as a `$set` document.

pub mod article;
pub mod celebrity;
pub mod clothing;
pub mod episode;
pub mod genre;
pub mod journalist;
pub mod season;
pub mod show;

use bson::Document;
use serde::{Deserialize, Serialize};

/// Runtime of a show or an episode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowLength {
    #[serde(default)]
    pub hours: i32,
    #[serde(default)]
    pub minutes: i32,
}

/// Accumulates `$set` entries for the fields that are present.
#[derive(Debug, Default)]
pub(crate) struct SetDocument(Document);

impl SetDocument {
    pub(crate) fn field<T: Serialize>(
        mut self,
        key: &str,
        value: Option<&T>,
    ) -> Result<Self, bson::ser::Error> {
        if let Some(value) = value {
            self.0.insert(key, bson::to_bson(value)?);
        }
        Ok(self)
    }

    pub(crate) fn build(self) -> Document {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use bson::{doc, Bson};

    use super::*;

    #[test]
    fn absent_fields_are_left_out() {
        let set = SetDocument::default()
            .field("name", Some(&"Drama".to_string()))
            .unwrap()
            .field::<String>("description", None)
            .unwrap()
            .build();
        assert_eq!(set, doc! { "name": "Drama" });
    }

    #[test]
    fn nested_values_are_encoded() {
        let length = ShowLength { hours: 1, minutes: 5 };
        let set = SetDocument::default().field("length", Some(&length)).unwrap().build();
        assert_eq!(set.get("length"), Some(&Bson::Document(doc! { "hours": 1, "minutes": 5 })));
    }
}
