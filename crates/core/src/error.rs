use crate::catalog::ProjectionTarget;
use crate::types::EntityId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: EntityId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error(transparent)]
    Propagation(#[from] PropagationFailure),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// A projection write failed part-way through a fan-out.
///
/// Writes listed in `applied` are committed and stay committed; writes after
/// `target` were never attempted. Enough context to reconcile by hand.
#[derive(Debug, thiserror::Error)]
#[error("Failed to propagate {entity_id} into {target} after {} applied write(s): {message}", .applied.len())]
pub struct PropagationFailure {
    pub entity_id: EntityId,
    pub target: ProjectionTarget,
    pub applied: Vec<ProjectionTarget>,
    pub message: String,
}
