//! Domain-level error types.

use thiserror::Error;

/// Domain errors - business rules a request can break.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Post content cannot be empty")]
    EmptyContent,

    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: &'static str, id: String },

    #[error("Phone number must contain at least {min} digits")]
    PhoneTooShort { min: usize },

    #[error("No verification code has been requested")]
    NoPendingChallenge,

    #[error("Verification code expired")]
    CodeExpired,

    #[error("Verification code rejected")]
    CodeRejected,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }
}
