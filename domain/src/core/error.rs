//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid question: {0}")]
    InvalidQuestion(#[from] ValidationError),

    #[error("No eligible questions remain")]
    NoEligibleQuestions,
}

/// A rule violated by a write payload.
///
/// The payload carries the name of the offending field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} is required")]
    Missing(&'static str),

    #[error("{0} must not be blank")]
    Blank(&'static str),

    #[error("{0} must not be empty")]
    Empty(&'static str),

    #[error("{0} must be a positive whole number")]
    OutOfRange(&'static str),
}

impl ValidationError {
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::Missing(field)
            | ValidationError::Blank(field)
            | ValidationError::Empty(field)
            | ValidationError::OutOfRange(field) => field,
        }
    }
}

/// Failures reported by repository adapters.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// The store could not be reached or the operation could not complete.
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    /// The store rejected a write (e.g. unknown category reference).
    #[error("Constraint violation: {0}")]
    Constraint(String),
}

impl RepositoryError {
    pub fn is_constraint(&self) -> bool {
        matches!(self, RepositoryError::Constraint(_))
    }
}
