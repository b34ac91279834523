//! Infrastructure layer for trivia-api
//!
//! This crate contains adapters that implement the repository ports defined
//! in the domain layer and the permission port defined in the application
//! layer, plus configuration file loading.

pub mod access;
pub mod config;
pub mod persistence;

// Re-export commonly used types
pub use access::StaticTokenPermissions;
pub use config::{ConfigIssue, ConfigLoader, FileConfig, Severity};
pub use persistence::{
    Database, SeedReport, SqliteCategoryRepository, SqliteDrinkRepository,
    SqliteQuestionRepository, StoreError, seed_if_empty,
};
