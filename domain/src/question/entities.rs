//! Question entity, its creation value, and its external projection.

use super::value_objects::{Difficulty, QuestionId};
use crate::category::value_objects::CategoryId;
use serde::{Deserialize, Serialize};

/// A persisted trivia question (Entity)
///
/// Question and answer text are never blank; that invariant is established by
/// [`validate_create`](super::validation::validate_create) before a
/// [`NewQuestion`] reaches the repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    id: QuestionId,
    question: String,
    answer: String,
    category: CategoryId,
    difficulty: Difficulty,
}

impl Question {
    /// Rehydrate a stored question (used by repository adapters).
    pub fn new(
        id: QuestionId,
        question: impl Into<String>,
        answer: impl Into<String>,
        category: CategoryId,
        difficulty: Difficulty,
    ) -> Self {
        Self {
            id,
            question: question.into(),
            answer: answer.into(),
            category,
            difficulty,
        }
    }

    /// Attach a repository-assigned identifier to a new question.
    pub fn from_new(id: QuestionId, new: NewQuestion) -> Self {
        Self {
            id,
            question: new.question,
            answer: new.answer,
            category: new.category,
            difficulty: new.difficulty,
        }
    }

    pub fn id(&self) -> QuestionId {
        self.id
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn category(&self) -> CategoryId {
        self.category
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Externally visible projection. The answer is included so clients can reveal it.
    pub fn format(&self) -> FormattedQuestion {
        FormattedQuestion {
            id: self.id,
            question: self.question.clone(),
            answer: self.answer.clone(),
            category: self.category,
            difficulty: self.difficulty,
        }
    }
}

/// A validated, normalized question that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    question: String,
    answer: String,
    category: CategoryId,
    difficulty: Difficulty,
}

impl NewQuestion {
    /// Only the validator builds these, so the trimmed/non-blank invariant holds.
    pub(crate) fn new(
        question: String,
        answer: String,
        category: CategoryId,
        difficulty: Difficulty,
    ) -> Self {
        Self {
            question,
            answer,
            category,
            difficulty,
        }
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn category(&self) -> CategoryId {
        self.category
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }
}

/// Wire representation of a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedQuestion {
    pub id: QuestionId,
    pub question: String,
    pub answer: String,
    pub category: CategoryId,
    pub difficulty: Difficulty,
}

impl From<&Question> for FormattedQuestion {
    fn from(question: &Question) -> Self {
        question.format()
    }
}
