//! Question domain.
//!
//! - [`entities::Question`]: a persisted trivia question
//! - [`entities::FormattedQuestion`]: its wire projection
//! - [`validation::validate_create`]: creation payload rules
//! - [`repository::QuestionRepository`]: trait for question persistence

pub mod entities;
pub mod repository;
pub mod validation;
pub mod value_objects;
