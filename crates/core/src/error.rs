//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Deterministic failures of domain values.
///
/// AI enrichment has its own error type and never surfaces here; a save gate
/// that fails is reported as `Validation` and handled as a no-op by callers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A record or value is not in a savable shape (empty recipe name,
    /// product sheet without a stock item, margin of 100% or more...).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A textual identifier did not parse.
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}
