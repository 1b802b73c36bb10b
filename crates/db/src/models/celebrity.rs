//! Celebrity document and update set.

use bson::{DateTime, Document};
use marquee_core::types::EntityId;
use serde::{Deserialize, Serialize};

use super::SetDocument;

/// A document in the `Celebrities` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Celebrity {
    pub id: EntityId,
    pub name: String,
    /// Free-form occupation tags; see `marquee_core::occupation`.
    #[serde(default)]
    pub occupation: Vec<String>,
    #[serde(default)]
    pub posters_path: Vec<String>,
    pub date_of_birth: DateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_death: Option<DateTime>,
    #[serde(default)]
    pub place_of_birth: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub bio: String,
}

/// Fields to change on an existing celebrity. `None` leaves a field as is.
#[derive(Debug, Clone, Default)]
pub struct UpdateCelebrity {
    pub name: Option<String>,
    pub occupation: Option<Vec<String>>,
    pub date_of_birth: Option<DateTime>,
    pub date_of_death: Option<DateTime>,
    pub place_of_birth: Option<String>,
    pub gender: Option<String>,
    pub bio: Option<String>,
}

impl UpdateCelebrity {
    pub fn to_set_document(&self) -> Result<Document, bson::ser::Error> {
        Ok(SetDocument::default()
            .field("name", self.name.as_ref())?
            .field("occupation", self.occupation.as_ref())?
            .field("dateOfBirth", self.date_of_birth.as_ref())?
            .field("dateOfDeath", self.date_of_death.as_ref())?
            .field("placeOfBirth", self.place_of_birth.as_ref())?
            .field("gender", self.gender.as_ref())?
            .field("bio", self.bio.as_ref())?
            .build())
    }
}

#[cfg(test)]
mod tests {
    use bson::doc;

    use super::*;

    #[test]
    fn stored_keys_are_camel_case() {
        let celebrity = Celebrity {
            id: "c1".into(),
            name: "Bryan Cranston".into(),
            occupation: vec!["Actor".into()],
            posters_path: vec![],
            date_of_birth: DateTime::from_millis(0),
            date_of_death: None,
            place_of_birth: "Hollywood".into(),
            gender: "Male".into(),
            bio: String::new(),
        };
        let stored = bson::to_document(&celebrity).unwrap();
        assert!(stored.contains_key("postersPath"));
        assert!(stored.contains_key("dateOfBirth"));
        assert!(stored.contains_key("placeOfBirth"));
        assert!(!stored.contains_key("dateOfDeath"));
        assert_eq!(bson::from_document::<Celebrity>(stored).unwrap(), celebrity);
    }

    #[test]
    fn update_sets_only_given_fields() {
        let update = UpdateCelebrity {
            name: Some("Jane Smith".into()),
            occupation: Some(vec!["Actress".into(), "Producer".into()]),
            ..Default::default()
        };
        assert_eq!(
            update.to_set_document().unwrap(),
            doc! { "name": "Jane Smith", "occupation": ["Actress", "Producer"] }
        );
    }
}
