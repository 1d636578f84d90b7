use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Shorthand for a missing employee record.
    pub fn employee_not_found(id: DbId) -> Self {
        CoreError::NotFound {
            entity: crate::employee::ENTITY_NAME,
            id,
        }
    }
}
