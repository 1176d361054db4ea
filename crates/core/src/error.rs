//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Only deterministic, user-recoverable failures live here. A failed operation
/// never mutates state, so retrying the user action is always safe.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A required input field was left empty.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// A value failed validation (out of range, malformed).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier could not be parsed.
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn missing(field: &'static str) -> Self {
        Self::MissingField(field)
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    /// True for input problems the user can fix in the form they submitted.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::MissingField(_) | Self::Validation(_))
    }
}
