//! Play Quiz use case.
//!
//! Serves one quiz turn: a random question from the chosen category (or from
//! all categories when the category id is `0`) that is not among the
//! previously asked questions. The client owns the session state and sends it
//! with every turn.

use crate::error::TriviaError;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, info};
use trivia_domain::{
    CategoryId, FormattedQuestion, QuestionId, QuestionRepository, QuizScope, draw,
    eligible_questions,
};

/// Input for the [`PlayQuizUseCase`].
#[derive(Debug, Clone, Default)]
pub struct PlayQuizInput {
    /// Questions already asked in this session, in the order the client sent them.
    pub previous_questions: Vec<QuestionId>,
    /// Selected category, or [`CategoryId::ALL`].
    pub quiz_category: CategoryId,
}

impl PlayQuizInput {
    pub fn new(quiz_category: CategoryId, previous_questions: Vec<QuestionId>) -> Self {
        Self {
            previous_questions,
            quiz_category,
        }
    }
}

/// The drawn question plus the echoed session state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizTurn {
    pub question: FormattedQuestion,
    pub previous_questions: Vec<QuestionId>,
    pub quiz_category: CategoryId,
}

#[derive(Clone)]
pub struct PlayQuizUseCase {
    questions: Arc<dyn QuestionRepository>,
}

impl PlayQuizUseCase {
    pub fn new(questions: Arc<dyn QuestionRepository>) -> Self {
        Self { questions }
    }

    /// Draw the next question.
    ///
    /// Fails with `NoEligibleQuestions` once every question in scope has been
    /// asked (or the category has no questions at all).
    pub async fn execute(&self, input: PlayQuizInput) -> Result<QuizTurn, TriviaError> {
        let scope = QuizScope::from(input.quiz_category);
        let previous: HashSet<QuestionId> = input.previous_questions.iter().copied().collect();

        let candidates = match scope.category() {
            None => self.questions.list_all().await?,
            Some(id) => self.questions.filter_by_category(id).await?,
        };
        let eligible = eligible_questions(candidates, scope, &previous);
        debug!(
            "Quiz turn in {}: {} eligible, {} previously asked",
            scope,
            eligible.len(),
            previous.len()
        );

        let question = draw(&eligible, &mut rand::rng())
            .map_err(|e| TriviaError::from_domain(e, scope))?
            .format();
        info!("Quiz turn in {} served question {}", scope, question.id);

        Ok(QuizTurn {
            question,
            previous_questions: input.previous_questions,
            quiz_category: input.quiz_category,
        })
    }
}
