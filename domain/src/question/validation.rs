//! Validation of question-creation payloads.
//!
//! [`validate_create`] is the only way to obtain a [`NewQuestion`]. It never
//! partially accepts a payload: either every rule holds and a normalized value
//! comes back, or the first violated rule is reported.
//!
//! Referential checks (does the category exist?) and range checks on the
//! difficulty are left to the store.

use super::entities::NewQuestion;
use super::value_objects::Difficulty;
use crate::category::value_objects::CategoryId;
use crate::core::error::ValidationError;
use crate::core::lenient;
use serde::Deserialize;

/// Raw creation payload as received from a client.
///
/// Every field is optional so that a missing or `null` field is reported as a
/// validation failure instead of a decoding error. `difficulty` and
/// `category` also accept numeric strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CreateQuestionPayload {
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional_int_or_string")]
    pub difficulty: Option<i32>,
    #[serde(default, deserialize_with = "lenient::optional_int_or_string")]
    pub category: Option<i64>,
}

impl CreateQuestionPayload {
    pub fn new(question: &str, answer: &str, difficulty: i32, category: i64) -> Self {
        Self {
            question: Some(question.to_string()),
            answer: Some(answer.to_string()),
            difficulty: Some(difficulty),
            category: Some(category),
        }
    }
}

/// Validate and normalize a creation payload.
pub fn validate_create(payload: CreateQuestionPayload) -> Result<NewQuestion, ValidationError> {
    let question = required_text("question", payload.question)?;
    let answer = required_text("answer", payload.answer)?;
    let difficulty = payload
        .difficulty
        .map(Difficulty::new)
        .ok_or(ValidationError::Missing("difficulty"))?;
    let category = payload
        .category
        .map(CategoryId::new)
        .ok_or(ValidationError::Missing("category"))?;

    Ok(NewQuestion::new(question, answer, category, difficulty))
}

pub(crate) fn required_text(
    field: &'static str,
    value: Option<String>,
) -> Result<String, ValidationError> {
    let value = value.ok_or(ValidationError::Missing(field))?;
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Blank(field));
    }
    Ok(trimmed.to_string())
}
