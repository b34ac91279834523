//! Category repository trait

use super::entities::Category;
use super::value_objects::CategoryId;
use crate::core::error::RepositoryError;
use async_trait::async_trait;

/// Read-only access to the seeded categories
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// All categories, ordered by label ascending
    async fn list_ordered_by_label(&self) -> Result<Vec<Category>, RepositoryError>;

    async fn get_by_id(&self, id: CategoryId) -> Result<Option<Category>, RepositoryError>;
}
