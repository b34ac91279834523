//! SQLite persistence for the question bank and the drink catalog.
//!
//! - [`connection::Database`]: shared connection, blocking-pool execution
//! - [`question_repository::SqliteQuestionRepository`]: `questions` table
//! - [`category_repository::SqliteCategoryRepository`]: `categories` table
//! - [`drink_repository::SqliteDrinkRepository`]: `drinks` table
//! - [`seed`]: starter data for empty databases

pub mod category_repository;
pub mod connection;
pub mod drink_repository;
pub mod error;
pub mod question_repository;
pub mod schema;
pub mod seed;

pub use category_repository::SqliteCategoryRepository;
pub use connection::Database;
pub use drink_repository::SqliteDrinkRepository;
pub use error::StoreError;
pub use question_repository::SqliteQuestionRepository;
pub use seed::{SeedReport, seed_if_empty};
