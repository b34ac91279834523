//! Create Question use case.

use crate::config::ListingParams;
use crate::error::TriviaError;
use std::sync::Arc;
use tracing::{info, warn};
use trivia_domain::{
    CreateQuestionPayload, FormattedQuestion, PageNumber, QuestionRepository, paginate,
    validate_create,
};

/// Input for the [`CreateQuestionUseCase`].
#[derive(Debug, Clone, Default)]
pub struct CreateQuestionInput {
    pub payload: CreateQuestionPayload,
    /// Page of the refreshed listing returned with the result.
    pub page: PageNumber,
}

impl CreateQuestionInput {
    pub fn new(payload: CreateQuestionPayload) -> Self {
        Self {
            payload,
            page: PageNumber::FIRST,
        }
    }

    pub fn with_page(mut self, page: PageNumber) -> Self {
        self.page = page;
        self
    }
}

/// The stored question and the listing as it looks after the write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedQuestion {
    pub question: FormattedQuestion,
    pub questions: Vec<FormattedQuestion>,
    pub total_questions: u64,
}

/// Validates a payload and stores it.
///
/// Nothing is written unless every validation rule holds. Unknown categories
/// are rejected by the store, not here.
#[derive(Clone)]
pub struct CreateQuestionUseCase {
    questions: Arc<dyn QuestionRepository>,
    params: ListingParams,
}

impl CreateQuestionUseCase {
    pub fn new(questions: Arc<dyn QuestionRepository>) -> Self {
        Self {
            questions,
            params: ListingParams::default(),
        }
    }

    pub fn with_params(mut self, params: ListingParams) -> Self {
        self.params = params;
        self
    }

    pub async fn execute(&self, input: CreateQuestionInput) -> Result<CreatedQuestion, TriviaError> {
        let new = validate_create(input.payload).inspect_err(|e| {
            warn!("Rejected question payload: {}", e);
        })?;

        let stored = self.questions.insert(new).await?;
        info!(
            "Created question {} in category {}",
            stored.id(),
            stored.category()
        );

        let all = self.questions.list_all().await?;
        let page = paginate(&all, input.page, self.params.questions_per_page);
        let total_questions = self.questions.count().await?;

        Ok(CreatedQuestion {
            question: stored.format(),
            questions: page.iter().map(FormattedQuestion::from).collect(),
            total_questions,
        })
    }
}
