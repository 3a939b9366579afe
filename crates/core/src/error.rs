use crate::types::DbId;

/// Domain-level error taxonomy.
///
/// The API layer maps each variant to an HTTP status and a client-safe
/// message. `InvalidCredential` and `Unauthorized` both surface as 401, but
/// stay distinct internally so login failures can be logged precisely
/// without leaking which half of the credential was wrong.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Invalid credential for user: {0}")]
    InvalidCredential(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
