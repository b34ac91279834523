//! Delete Drink use case.

use crate::error::TriviaError;
use crate::ports::permission_checker::{Credentials, PermissionChecker};
use std::sync::Arc;
use tracing::info;
use trivia_domain::{DrinkId, DrinkRepository, Permission};

/// Deletes a drink. Requires `delete:drinks`.
#[derive(Clone)]
pub struct DeleteDrinkUseCase {
    drinks: Arc<dyn DrinkRepository>,
    permissions: Arc<dyn PermissionChecker>,
}

impl DeleteDrinkUseCase {
    pub fn new(drinks: Arc<dyn DrinkRepository>, permissions: Arc<dyn PermissionChecker>) -> Self {
        Self {
            drinks,
            permissions,
        }
    }

    /// Deletes the drink and returns its id, or `NotFound`.
    pub async fn execute(
        &self,
        credentials: &Credentials,
        id: DrinkId,
    ) -> Result<DrinkId, TriviaError> {
        self.permissions
            .check(credentials, Permission::DeleteDrinks)
            .await?;
        if !self.drinks.delete_by_id(id).await? {
            return Err(TriviaError::not_found(format!("drink {id}")));
        }
        info!("Deleted drink {}", id);
        Ok(id)
    }
}
