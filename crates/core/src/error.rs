//! Domain errors shared by every crate in the portal.

use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A looked-up record does not exist, or is outside the caller's portal.
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// Caller input was rejected before anything was written.
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
