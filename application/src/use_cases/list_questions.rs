//! List Questions use case.

use crate::config::ListingParams;
use crate::error::TriviaError;
use std::sync::Arc;
use tracing::debug;
use trivia_domain::{
    CategoryIndex, CategoryRepository, FormattedQuestion, PageNumber, QuestionRepository,
    paginate,
};

/// Input for the [`ListQuestionsUseCase`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ListQuestionsInput {
    pub page: PageNumber,
}

impl ListQuestionsInput {
    pub fn new(page: PageNumber) -> Self {
        Self { page }
    }
}

/// One page of the question bank plus the data a listing screen needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionPage {
    pub questions: Vec<FormattedQuestion>,
    /// Size of the whole bank, not of this page.
    pub total_questions: u64,
    pub categories: CategoryIndex,
}

/// Pages through all questions in identifier order.
#[derive(Clone)]
pub struct ListQuestionsUseCase {
    questions: Arc<dyn QuestionRepository>,
    categories: Arc<dyn CategoryRepository>,
    params: ListingParams,
}

impl ListQuestionsUseCase {
    pub fn new(
        questions: Arc<dyn QuestionRepository>,
        categories: Arc<dyn CategoryRepository>,
    ) -> Self {
        Self {
            questions,
            categories,
            params: ListingParams::default(),
        }
    }

    pub fn with_params(mut self, params: ListingParams) -> Self {
        self.params = params;
        self
    }

    pub async fn execute(&self, input: ListQuestionsInput) -> Result<QuestionPage, TriviaError> {
        let all = self.questions.list_all().await?;
        let page = paginate(&all, input.page, self.params.questions_per_page);
        debug!(
            "Question page {}: {} of {} questions",
            input.page.get(),
            page.len(),
            all.len()
        );

        let categories = self.categories.list_ordered_by_label().await?;

        Ok(QuestionPage {
            questions: page.iter().map(FormattedQuestion::from).collect(),
            total_questions: all.len() as u64,
            categories: CategoryIndex::from_categories(categories),
        })
    }
}
