//! List Categories use case.

use crate::error::TriviaError;
use std::sync::Arc;
use tracing::debug;
use trivia_domain::{CategoryIndex, CategoryRepository};

/// Loads every category into a label-ordered index.
///
/// An empty index is returned as-is; whether that is an error is the
/// caller's decision.
#[derive(Clone)]
pub struct ListCategoriesUseCase {
    categories: Arc<dyn CategoryRepository>,
}

impl ListCategoriesUseCase {
    pub fn new(categories: Arc<dyn CategoryRepository>) -> Self {
        Self { categories }
    }

    pub async fn execute(&self) -> Result<CategoryIndex, TriviaError> {
        let index = CategoryIndex::from_categories(self.categories.list_ordered_by_label().await?);
        debug!("Loaded {} categories", index.len());
        Ok(index)
    }
}
