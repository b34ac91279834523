//! Category entity and the ordered category index.

use super::value_objects::CategoryId;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A question category (seed data, read-only).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    /// Human-readable type name, e.g. "Science".
    #[serde(rename = "type")]
    pub label: String,
}

impl Category {
    pub fn new(id: i64, label: impl Into<String>) -> Self {
        Self {
            id: CategoryId::new(id),
            label: label.into(),
        }
    }
}

/// Ordered `id -> label` mapping of all categories.
///
/// Iteration (and JSON serialization) order is the order the categories were
/// supplied in, which the repository guarantees to be label-ascending.
/// An empty index is a valid state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryIndex(IndexMap<CategoryId, String>);

impl CategoryIndex {
    pub fn from_categories(categories: impl IntoIterator<Item = Category>) -> Self {
        Self(
            categories
                .into_iter()
                .map(|category| (category.id, category.label))
                .collect(),
        )
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
