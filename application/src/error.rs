//! Errors surfaced by the use cases.
//!
//! Every operation fails with one of a fixed set of kinds so the transport
//! layer can map them without inspecting messages.

use crate::ports::permission_checker::AccessDenied;
use thiserror::Error;
use trivia_domain::{DomainError, QuizScope, RepositoryError, ValidationError};

/// Errors that can occur while serving a question-bank operation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TriviaError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("No eligible questions remain in {0}")]
    NoEligibleQuestions(QuizScope),

    #[error("Repository failure: {0}")]
    Repository(#[from] RepositoryError),

    #[error("Access denied: {0}")]
    Access(#[from] AccessDenied),
}

impl TriviaError {
    pub fn not_found(resource: impl std::fmt::Display) -> Self {
        TriviaError::NotFound(resource.to_string())
    }

    /// Stable machine-readable code for this failure.
    pub fn kind(&self) -> &'static str {
        match self {
            TriviaError::Validation(_) => "validation_failed",
            TriviaError::NotFound(_) => "not_found",
            TriviaError::NoEligibleQuestions(_) => "no_eligible_questions",
            TriviaError::Repository(e) if e.is_constraint() => "unprocessable",
            TriviaError::Repository(_) => "repository_unavailable",
            TriviaError::Access(AccessDenied::Unauthenticated(_)) => "unauthorized",
            TriviaError::Access(AccessDenied::Forbidden(_)) => "forbidden",
        }
    }

    /// Lift a domain error raised while serving a quiz in `scope`.
    pub fn from_domain(error: DomainError, scope: QuizScope) -> Self {
        match error {
            DomainError::InvalidQuestion(e) => TriviaError::Validation(e),
            DomainError::NoEligibleQuestions => TriviaError::NoEligibleQuestions(scope),
        }
    }
}
