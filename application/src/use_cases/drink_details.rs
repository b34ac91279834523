//! Drink Details use case.

use crate::error::TriviaError;
use crate::ports::permission_checker::{Credentials, PermissionChecker};
use std::sync::Arc;
use trivia_domain::{DrinkDetail, DrinkRepository, Permission};

/// Full drink listing, ingredient names included. Requires
/// `get:drinks-detail`.
#[derive(Clone)]
pub struct DrinkDetailsUseCase {
    drinks: Arc<dyn DrinkRepository>,
    permissions: Arc<dyn PermissionChecker>,
}

impl DrinkDetailsUseCase {
    pub fn new(drinks: Arc<dyn DrinkRepository>, permissions: Arc<dyn PermissionChecker>) -> Self {
        Self {
            drinks,
            permissions,
        }
    }

    pub async fn execute(
        &self,
        credentials: &Credentials,
    ) -> Result<Vec<DrinkDetail>, TriviaError> {
        self.permissions
            .check(credentials, Permission::ReadDrinkDetails)
            .await?;
        let drinks = self.drinks.list_all().await?;
        Ok(drinks.iter().map(|d| d.long()).collect())
    }
}
