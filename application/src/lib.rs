//! Application layer for trivia-api
//!
//! This crate contains use cases, the error taxonomy they share, the ports
//! adapters implement, and application configuration. It depends only on the
//! domain layer.

pub mod config;
pub mod error;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::ListingParams;
pub use error::TriviaError;
pub use ports::permission_checker::{AccessDenied, Credentials, PermissionChecker};
pub use use_cases::create_question::{CreateQuestionInput, CreateQuestionUseCase, CreatedQuestion};
pub use use_cases::create_drink::{CreateDrinkInput, CreateDrinkUseCase};
pub use use_cases::delete_drink::DeleteDrinkUseCase;
pub use use_cases::delete_question::DeleteQuestionUseCase;
pub use use_cases::drink_details::DrinkDetailsUseCase;
pub use use_cases::list_drinks::ListDrinksUseCase;
pub use use_cases::list_categories::ListCategoriesUseCase;
pub use use_cases::list_questions::{ListQuestionsInput, ListQuestionsUseCase, QuestionPage};
pub use use_cases::play_quiz::{PlayQuizInput, PlayQuizUseCase, QuizTurn};
pub use use_cases::questions_by_category::{CategoryQuestions, QuestionsByCategoryUseCase};
pub use use_cases::search_or_create::{QuestionsCommand, QuestionsOutcome, SearchOrCreateUseCase};
pub use use_cases::search_questions::{SearchQuestionsInput, SearchQuestionsUseCase, SearchResults};
pub use use_cases::update_drink::{UpdateDrinkInput, UpdateDrinkUseCase};
