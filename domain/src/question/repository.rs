//! Question repository trait

use super::entities::{NewQuestion, Question};
use super::value_objects::QuestionId;
use crate::category::value_objects::CategoryId;
use crate::core::error::RepositoryError;
use async_trait::async_trait;

/// Repository trait for persisted questions
///
/// This is a domain-level abstraction over the question store.
/// Implementations live in the infrastructure layer and must read committed
/// data on every call; callers never cache results across requests.
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// All questions, ordered by identifier ascending
    async fn list_all(&self) -> Result<Vec<Question>, RepositoryError>;

    /// A single question, or `None` if no question has this id
    async fn get_by_id(&self, id: QuestionId) -> Result<Option<Question>, RepositoryError>;

    /// Questions in one category (order is not significant)
    async fn filter_by_category(
        &self,
        category: CategoryId,
    ) -> Result<Vec<Question>, RepositoryError>;

    /// Questions whose text contains `term`, ignoring case (Unicode lowercase)
    ///
    /// A blank term is executed as-is.
    async fn search(&self, term: &str) -> Result<Vec<Question>, RepositoryError>;

    /// Total number of questions, independent of any filter
    async fn count(&self) -> Result<u64, RepositoryError>;

    /// Store a new question and return it with its assigned identifier
    async fn insert(&self, question: NewQuestion) -> Result<Question, RepositoryError>;

    /// Delete a question, returning whether a row was removed
    async fn delete_by_id(&self, id: QuestionId) -> Result<bool, RepositoryError>;
}
