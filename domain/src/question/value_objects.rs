//! Question domain value objects.
//!
//! # Identifiers
//! - [`QuestionId`] - Identifier assigned by the repository on insert
//!
//! # Attributes
//! - [`Difficulty`] - Caller-defined difficulty score (e.g. 1-5)

use serde::{Deserialize, Serialize};

/// Unique identifier for a persisted question.
///
/// Assigned by the repository when a [`NewQuestion`](super::entities::NewQuestion)
/// is inserted; never chosen by clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(i64);

impl QuestionId {
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    pub const fn value(self) -> i64 {
        self.0
    }
}

impl From<i64> for QuestionId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for QuestionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Difficulty score of a question.
///
/// The scale belongs to the caller; no range is enforced here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Difficulty(i32);

impl Difficulty {
    pub const fn new(score: i32) -> Self {
        Self(score)
    }

    pub const fn value(self) -> i32 {
        self.0
    }
}

impl From<i32> for Difficulty {
    fn from(score: i32) -> Self {
        Self(score)
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_id_serializes_as_number() {
        let json = serde_json::to_string(&QuestionId::new(42)).unwrap();
        assert_eq!(json, "42");
        let id: QuestionId = serde_json::from_str("7").unwrap();
        assert_eq!(id, QuestionId::new(7));
    }

    #[test]
    fn test_question_id_ordering_follows_value() {
        let mut ids = vec![QuestionId::new(3), QuestionId::new(1), QuestionId::new(2)];
        ids.sort();
        assert_eq!(ids, vec![QuestionId::new(1), QuestionId::new(2), QuestionId::new(3)]);
    }
}
