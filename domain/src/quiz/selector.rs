//! Quiz question selection.

use crate::category::value_objects::CategoryId;
use crate::core::error::DomainError;
use crate::question::entities::Question;
use crate::question::value_objects::QuestionId;
use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Category filter for a quiz turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuizScope {
    /// No category filter (sentinel id `0`).
    All,
    Category(CategoryId),
}

impl QuizScope {
    pub fn category(self) -> Option<CategoryId> {
        match self {
            QuizScope::All => None,
            QuizScope::Category(id) => Some(id),
        }
    }

    pub fn includes(self, question: &Question) -> bool {
        match self {
            QuizScope::All => true,
            QuizScope::Category(id) => question.category() == id,
        }
    }
}

impl From<CategoryId> for QuizScope {
    fn from(id: CategoryId) -> Self {
        if id.is_all() {
            QuizScope::All
        } else {
            QuizScope::Category(id)
        }
    }
}

impl std::fmt::Display for QuizScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuizScope::All => write!(f, "all categories"),
            QuizScope::Category(id) => write!(f, "category {}", id),
        }
    }
}

/// Questions in `scope` whose id is not in `previous`.
pub fn eligible_questions(
    candidates: impl IntoIterator<Item = Question>,
    scope: QuizScope,
    previous: &HashSet<QuestionId>,
) -> Vec<Question> {
    candidates
        .into_iter()
        .filter(|q| scope.includes(q) && !previous.contains(&q.id()))
        .collect()
}

/// Pick one eligible question uniformly at random.
pub fn draw<'a, R>(eligible: &'a [Question], rng: &mut R) -> Result<&'a Question, DomainError>
where
    R: Rng + ?Sized,
{
    eligible.choose(rng).ok_or(DomainError::NoEligibleQuestions)
}
