use marquee_core::types::EntityId;
use serde::{Deserialize, Serialize};

/// A clothing item. The same shape is stored in MongoDB and in the JSON file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clothing {
    pub id: EntityId,
    #[serde(rename = "type")]
    pub kind: String,
    pub price: i32,
    pub size: i32,
    #[serde(default)]
    pub gender: String,
}
