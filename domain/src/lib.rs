//! Domain layer for trivia-api
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Question bank
//!
//! - **Question**: a question/answer pair with a category and a difficulty
//! - **Category**: read-only seed data, listed in label order
//!
//! ## Selection engine
//!
//! - **Pagination**: fixed-size windows over id-ordered question lists
//! - **Quiz selection**: a uniform random draw from the questions in scope
//!   that the player has not seen yet (category `0` means all categories)
//! - **Validation**: creation payloads are trimmed and checked before any write
//!
//! ## Drink catalog
//!
//! - **Drink**: a titled recipe with a public short form and a gated long form
//! - **Permission**: the capability a caller needs for gated drink operations

pub mod access;
pub mod category;
pub mod core;
pub mod drink;
pub mod pagination;
pub mod question;
pub mod quiz;

// Re-export commonly used types
pub use access::permission::{Permission, UnknownPermission};
pub use category::{
    entities::{Category, CategoryIndex},
    repository::CategoryRepository,
    value_objects::CategoryId,
};
pub use core::error::{DomainError, RepositoryError, ValidationError};
pub use core::lenient;
pub use drink::{
    entities::{Drink, DrinkChanges, DrinkDetail, DrinkSummary, NewDrink},
    repository::DrinkRepository,
    validation::{
        DrinkPayload, IngredientPayload, RecipePayload, validate_drink_changes, validate_new_drink,
    },
    value_objects::{DrinkId, Ingredient, ShortIngredient},
};
pub use pagination::{DEFAULT_PAGE_SIZE, PageNumber, PageSize, paginate};
pub use question::{
    entities::{FormattedQuestion, NewQuestion, Question},
    repository::QuestionRepository,
    validation::{CreateQuestionPayload, validate_create},
    value_objects::{Difficulty, QuestionId},
};
pub use quiz::selector::{QuizScope, draw, eligible_questions};
