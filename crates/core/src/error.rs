use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unknown status code: {0}")]
    UnknownStatus(String),

    #[error("Unknown priority code: {0}")]
    UnknownPriority(String),

    #[error("Tree depth limit exceeded at {0}")]
    DepthExceeded(usize),

    #[error("Internal error: {0}")]
    Internal(String),
}
