/// All catalog documents are keyed by a UUID v4 rendered as a string.
pub type EntityId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Generate a fresh identifier for a new catalog document.
pub fn new_entity_id() -> EntityId {
    uuid::Uuid::new_v4().to_string()
}
