//! Validation error model.

use thiserror::Error;

/// Result type used by request validation.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// A recoverable, expected rejection of caller input.
///
/// Distinct from a system fault: validation failures are converted into
/// failure envelopes at the operation boundary, never propagated as panics.
/// The display strings are part of the public contract — callers receive
/// them verbatim — so rewording one is a breaking change.
#[derive(Debug, Error, Copy, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The request body was entirely absent.
    #[error("Request body is required.")]
    MissingBody,

    /// `name` was absent, or empty after trimming.
    #[error("Item name is required.")]
    NameRequired,

    /// `name` exceeded the maximum length after trimming.
    #[error("Item name must not exceed 100 characters.")]
    NameTooLong,
}

impl ValidationError {
    /// Name of the request field that failed validation.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::MissingBody => "body",
            ValidationError::NameRequired | ValidationError::NameTooLong => "name",
        }
    }
}
