//! Delete Question use case.

use crate::error::TriviaError;
use std::sync::Arc;
use tracing::info;
use trivia_domain::{QuestionId, QuestionRepository};

#[derive(Clone)]
pub struct DeleteQuestionUseCase {
    questions: Arc<dyn QuestionRepository>,
}

impl DeleteQuestionUseCase {
    pub fn new(questions: Arc<dyn QuestionRepository>) -> Self {
        Self { questions }
    }

    /// Deletes the question and returns its id, or `NotFound`.
    pub async fn execute(&self, id: QuestionId) -> Result<QuestionId, TriviaError> {
        if self.questions.get_by_id(id).await?.is_none() {
            return Err(TriviaError::not_found(format!("question {id}")));
        }

        // A concurrent delete may win between the lookup and this call.
        if !self.questions.delete_by_id(id).await? {
            return Err(TriviaError::not_found(format!("question {id}")));
        }

        info!("Deleted question {}", id);
        Ok(id)
    }
}
