//! Dispatch for the combined search/create endpoint.
//!
//! The transport decodes its body once into a [`QuestionsCommand`]; this use
//! case routes it to search or create.

use super::create_question::{CreateQuestionInput, CreateQuestionUseCase, CreatedQuestion};
use super::search_questions::{SearchQuestionsInput, SearchQuestionsUseCase, SearchResults};
use crate::error::TriviaError;
use trivia_domain::{CreateQuestionPayload, PageNumber};

/// A decoded `POST /questions` request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionsCommand {
    Search { term: String },
    Create(CreateQuestionPayload),
}

/// Result of a [`QuestionsCommand`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionsOutcome {
    Found(SearchResults),
    Created(CreatedQuestion),
}

#[derive(Clone)]
pub struct SearchOrCreateUseCase {
    search: SearchQuestionsUseCase,
    create: CreateQuestionUseCase,
}

impl SearchOrCreateUseCase {
    pub fn new(search: SearchQuestionsUseCase, create: CreateQuestionUseCase) -> Self {
        Self { search, create }
    }

    pub async fn execute(
        &self,
        command: QuestionsCommand,
        page: PageNumber,
    ) -> Result<QuestionsOutcome, TriviaError> {
        match command {
            QuestionsCommand::Search { term } => self
                .search
                .execute(SearchQuestionsInput::new(term).with_page(page))
                .await
                .map(QuestionsOutcome::Found),
            QuestionsCommand::Create(payload) => self
                .create
                .execute(CreateQuestionInput::new(payload).with_page(page))
                .await
                .map(QuestionsOutcome::Created),
        }
    }
}
