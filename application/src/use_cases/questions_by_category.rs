//! Questions By Category use case.

use crate::error::TriviaError;
use std::sync::Arc;
use tracing::debug;
use trivia_domain::{CategoryId, CategoryRepository, FormattedQuestion, QuestionRepository};

/// All questions in one category, unpaginated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryQuestions {
    pub questions: Vec<FormattedQuestion>,
    pub total_questions: u64,
    pub current_category: CategoryId,
}

#[derive(Clone)]
pub struct QuestionsByCategoryUseCase {
    questions: Arc<dyn QuestionRepository>,
    categories: Arc<dyn CategoryRepository>,
}

impl QuestionsByCategoryUseCase {
    pub fn new(
        questions: Arc<dyn QuestionRepository>,
        categories: Arc<dyn CategoryRepository>,
    ) -> Self {
        Self {
            questions,
            categories,
        }
    }

    /// Fails with `NotFound` when no category has this id.
    pub async fn execute(&self, category: CategoryId) -> Result<CategoryQuestions, TriviaError> {
        if self.categories.get_by_id(category).await?.is_none() {
            return Err(TriviaError::not_found(format!("category {category}")));
        }

        let mut questions = self.questions.filter_by_category(category).await?;
        questions.sort_by_key(|q| q.id());
        debug!("Category {}: {} questions", category, questions.len());

        Ok(CategoryQuestions {
            total_questions: questions.len() as u64,
            questions: questions.iter().map(FormattedQuestion::from).collect(),
            current_category: category,
        })
    }
}
