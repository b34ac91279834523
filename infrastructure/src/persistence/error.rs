//! Storage adapter errors and their mapping onto [`RepositoryError`].

use std::path::PathBuf;
use thiserror::Error;
use trivia_domain::RepositoryError;

/// Errors raised inside the SQLite adapter.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Failed to create database directory {path:?}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Database lock poisoned")]
    LockPoisoned,

    #[error("Database task failed: {0}")]
    Task(String),

    #[error("Stored recipe could not be encoded: {0}")]
    Recipe(#[from] serde_json::Error),
}

impl StoreError {
    pub fn is_constraint_violation(&self) -> bool {
        matches!(
            self,
            StoreError::Sqlite(rusqlite::Error::SqliteFailure(e, _))
                if e.code == rusqlite::ErrorCode::ConstraintViolation
        )
    }
}

impl From<StoreError> for RepositoryError {
    fn from(error: StoreError) -> Self {
        if error.is_constraint_violation() {
            RepositoryError::Constraint(error.to_string())
        } else {
            RepositoryError::Unavailable(error.to_string())
        }
    }
}
