//! Domain error model.

use thiserror::Error;

use crate::validation::ValidationErrors;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, client-caused failures. Transport
/// concerns (status codes, body shapes) belong to the API layer.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// Input failed schema validation; carries every offending field.
    #[error("validation failed: {0}")]
    Validation(ValidationErrors),

    /// A requested item does not exist.
    #[error("not found")]
    NotFound,
}

impl DomainError {
    pub fn not_found() -> Self {
        Self::NotFound
    }
}

impl From<ValidationErrors> for DomainError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value)
    }
}
