//! Domain errors shared by every Trackside crate.
//!
//! The API layer maps each variant onto an HTTP status; nothing here knows
//! about HTTP.

use crate::types::EntityId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The row does not exist, or exists but belongs to someone else.
    #[error("{entity} {id} not found")]
    NotFound {
        entity: &'static str,
        id: EntityId,
    },

    /// Input failed a domain rule. The message is shown to the user as is.
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    Unauthorized(String),

    /// Signed in, but not allowed to touch this resource.
    #[error("{0}")]
    Forbidden(String),
}

impl CoreError {
    /// Shorthand for a [`CoreError::NotFound`] keyed by a string id.
    pub fn not_found(entity: &'static str, id: impl Into<EntityId>) -> Self {
        Self::NotFound {
            entity,
            id: id.into(),
        }
    }
}
