//! Search Questions use case.

use crate::config::ListingParams;
use crate::error::TriviaError;
use std::sync::Arc;
use tracing::{debug, info};
use trivia_domain::{FormattedQuestion, PageNumber, QuestionRepository, paginate};

/// Input for the [`SearchQuestionsUseCase`].
#[derive(Debug, Clone, Default)]
pub struct SearchQuestionsInput {
    /// Raw search term; surrounding whitespace is ignored.
    pub term: String,
    pub page: PageNumber,
}

impl SearchQuestionsInput {
    pub fn new(term: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            page: PageNumber::FIRST,
        }
    }

    pub fn with_page(mut self, page: PageNumber) -> Self {
        self.page = page;
        self
    }
}

/// One page of matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResults {
    pub questions: Vec<FormattedQuestion>,
    /// Number of matches across all pages.
    pub total_questions: u64,
}

/// Case-insensitive substring search over question text.
///
/// A blank term is passed through to the repository like any other term.
#[derive(Clone)]
pub struct SearchQuestionsUseCase {
    questions: Arc<dyn QuestionRepository>,
    params: ListingParams,
}

impl SearchQuestionsUseCase {
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

    pub async fn execute(&self, input: SearchQuestionsInput) -> Result<SearchResults, TriviaError> {
        let term = input.term.trim();
        info!("Searching questions for {:?}", term);

        let mut matches = self.questions.search(term).await?;
        matches.sort_by_key(|q| q.id());
        let page = paginate(&matches, input.page, self.params.questions_per_page);
        debug!("Search {:?}: {} matches", term, matches.len());

        Ok(SearchResults {
            questions: page.iter().map(FormattedQuestion::from).collect(),
            total_questions: matches.len() as u64,
        })
    }
}
