//! Listing parameters: how use cases shape question lists.
//!
//! [`ListingParams`] groups the static parameters shared by every use case
//! that returns a page of questions. These are application-layer concerns,
//! not domain policy.

use serde::{Deserialize, Serialize};
use trivia_domain::PageSize;

/// Listing control parameters.
///
/// | Use case            | Uses ListingParams? |
/// |---------------------|---------------------|
/// | ListQuestions       | Yes                 |
/// | SearchQuestions     | Yes                 |
/// | CreateQuestion      | Yes                 |
/// | QuestionsByCategory | No (unpaginated)    |
/// | PlayQuiz            | No                  |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ListingParams {
    /// Number of questions per page.
    pub questions_per_page: PageSize,
}

impl ListingParams {
    // ==================== Builder Methods ====================

    pub fn with_questions_per_page(mut self, size: PageSize) -> Self {
        self.questions_per_page = size;
        self
    }
}
