//! Request and response bodies.
//!
//! Field names follow the wire format clients already use (`searchTerm`,
//! `previous_questions`, `quiz_category.type`), so some differ from the Rust
//! names on the application side.

use serde::{Deserialize, Deserializer, Serialize};
use trivia_application::{
    CategoryQuestions, CreatedQuestion, QuestionPage, QuestionsCommand, QuizTurn, SearchResults,
};
use trivia_domain::lenient;
use trivia_domain::{
    CategoryId, CategoryIndex, CreateQuestionPayload, DrinkId, FormattedQuestion, QuestionId,
};

/// `?page=N` query string.
///
/// Kept as raw text so that a malformed page falls back to page 1 instead of
/// rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    #[serde(default)]
    pub page: Option<String>,
}

/// `POST /questions` body.
///
/// A body with `searchTerm` is a search; anything else is a creation payload.
#[derive(Debug, Deserialize)]
pub struct QuestionsRequest {
    #[serde(rename = "searchTerm", default)]
    pub search_term: Option<String>,
    #[serde(flatten)]
    pub payload: CreateQuestionPayload,
}

impl QuestionsRequest {
    pub fn into_command(self) -> QuestionsCommand {
        match self.search_term {
            Some(term) => QuestionsCommand::Search { term },
            None => QuestionsCommand::Create(self.payload),
        }
    }
}

/// `POST /quizzes` body.
#[derive(Debug, Deserialize)]
pub struct QuizRequest {
    pub previous_questions: Vec<QuestionId>,
    pub quiz_category: QuizCategory,
}

/// Category selector of a quiz turn; id `0` means all categories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizCategory {
    #[serde(deserialize_with = "deserialize_category_id")]
    pub id: CategoryId,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// Accept a JSON number or a string holding one.
fn deserialize_category_id<'de, D: Deserializer<'de>>(d: D) -> Result<CategoryId, D::Error> {
    lenient::int_or_string::<D, i64>(d).map(CategoryId::new)
}

#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: CategoryIndex,
}

/// Listing and search results share this shape; `current_category` is
/// always `null` for them.
#[derive(Debug, Serialize)]
pub struct QuestionsResponse {
    pub success: bool,
    pub questions: Vec<FormattedQuestion>,
    pub total_questions: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<CategoryIndex>,
    pub current_category: Option<CategoryId>,
}

impl From<QuestionPage> for QuestionsResponse {
    fn from(page: QuestionPage) -> Self {
        Self {
            success: true,
            questions: page.questions,
            total_questions: page.total_questions,
            categories: Some(page.categories),
            current_category: None,
        }
    }
}

impl From<SearchResults> for QuestionsResponse {
    fn from(results: SearchResults) -> Self {
        Self {
            success: true,
            questions: results.questions,
            total_questions: results.total_questions,
            categories: None,
            current_category: None,
        }
    }
}

impl From<CategoryQuestions> for QuestionsResponse {
    fn from(listing: CategoryQuestions) -> Self {
        Self {
            success: true,
            questions: listing.questions,
            total_questions: listing.total_questions,
            categories: None,
            current_category: Some(listing.current_category),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub success: bool,
    pub created: QuestionId,
    pub question: FormattedQuestion,
    pub questions: Vec<FormattedQuestion>,
    pub total_questions: u64,
}

impl From<CreatedQuestion> for CreatedResponse {
    fn from(created: CreatedQuestion) -> Self {
        Self {
            success: true,
            created: created.question.id,
            question: created.question,
            questions: created.questions,
            total_questions: created.total_questions,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub success: bool,
    pub deleted: QuestionId,
}

#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub success: bool,
    pub question: FormattedQuestion,
    pub previous_questions: Vec<QuestionId>,
    pub quiz_category: QuizCategory,
}

impl QuizResponse {
    pub fn new(turn: QuizTurn, label: Option<String>) -> Self {
        Self {
            success: true,
            question: turn.question,
            previous_questions: turn.previous_questions,
            quiz_category: QuizCategory {
                id: turn.quiz_category,
                label,
            },
        }
    }
}

/// `{"success": true, "drinks": [...]}`, in either projection.
///
/// A single created or updated drink is still sent as a one-element list.
#[derive(Debug, Serialize)]
pub struct DrinksResponse<T> {
    pub success: bool,
    pub drinks: Vec<T>,
}

impl<T> DrinksResponse<T> {
    pub fn new(drinks: Vec<T>) -> Self {
        Self {
            success: true,
            drinks,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DrinkDeletedResponse {
    pub success: bool,
    pub delete: DrinkId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_term_selects_search() {
        let request: QuestionsRequest =
            serde_json::from_str(r#"{"searchTerm": "title"}"#).unwrap();
        assert_eq!(
            request.into_command(),
            QuestionsCommand::Search {
                term: "title".to_string()
            }
        );
    }

    #[test]
    fn test_other_body_selects_create() {
        let request: QuestionsRequest = serde_json::from_str(
            r#"{"question": "Q", "answer": "A", "difficulty": 2, "category": 1}"#,
        )
        .unwrap();
        assert_eq!(
            request.into_command(),
            QuestionsCommand::Create(CreateQuestionPayload::new("Q", "A", 2, 1))
        );
    }

    #[test]
    fn test_create_accepts_numeric_strings_through_flatten() {
        let request: QuestionsRequest = serde_json::from_str(
            r#"{"question": "Q", "answer": "A", "difficulty": "2", "category": "1"}"#,
        )
        .unwrap();
        assert_eq!(
            request.into_command(),
            QuestionsCommand::Create(CreateQuestionPayload::new("Q", "A", 2, 1))
        );
    }

    #[test]
    fn test_empty_body_is_incomplete_create() {
        let request: QuestionsRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(
            request.into_command(),
            QuestionsCommand::Create(CreateQuestionPayload::default())
        );
    }

    #[test]
    fn test_quiz_category_id_number_or_string() {
        let numeric: QuizRequest =
            serde_json::from_str(r#"{"previous_questions": [1, 2], "quiz_category": {"id": 3}}"#)
                .unwrap();
        let text: QuizRequest = serde_json::from_str(
            r#"{"previous_questions": [], "quiz_category": {"id": "3", "type": "Geography"}}"#,
        )
        .unwrap();
        assert_eq!(numeric.quiz_category.id, CategoryId::new(3));
        assert_eq!(text.quiz_category.id, CategoryId::new(3));
        assert_eq!(text.quiz_category.label.as_deref(), Some("Geography"));
        assert_eq!(numeric.previous_questions, vec![QuestionId::new(1), QuestionId::new(2)]);
    }

    #[test]
    fn test_quiz_category_rejects_non_numeric() {
        let result: Result<QuizRequest, _> = serde_json::from_str(
            r#"{"previous_questions": [], "quiz_category": {"id": "art"}}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_quiz_requires_previous_questions() {
        let result: Result<QuizRequest, _> =
            serde_json::from_str(r#"{"quiz_category": {"id": 0}}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_listing_serializes_null_current_category() {
        let response = QuestionsResponse::from(SearchResults {
            questions: Vec::new(),
            total_questions: 0,
        });
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["current_category"], serde_json::Value::Null);
        assert!(json.get("categories").is_none());
    }
}
