//! Drink repository trait

use super::entities::{Drink, DrinkChanges, NewDrink};
use super::value_objects::DrinkId;
use crate::core::error::RepositoryError;
use async_trait::async_trait;

/// Repository trait for the drink catalog
#[async_trait]
pub trait DrinkRepository: Send + Sync {
    /// All drinks, ordered by identifier ascending
    async fn list_all(&self) -> Result<Vec<Drink>, RepositoryError>;

    /// Store a new drink; a duplicate title is a `Constraint` failure
    async fn insert(&self, drink: NewDrink) -> Result<Drink, RepositoryError>;

    /// Apply `changes` to a stored drink, or `None` if no drink has this id
    async fn update(
        &self,
        id: DrinkId,
        changes: DrinkChanges,
    ) -> Result<Option<Drink>, RepositoryError>;

    /// Delete a drink, returning whether a row was removed
    async fn delete_by_id(&self, id: DrinkId) -> Result<bool, RepositoryError>;
}
