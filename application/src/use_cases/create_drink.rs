//! Create Drink use case.

use crate::error::TriviaError;
use crate::ports::permission_checker::{Credentials, PermissionChecker};
use std::sync::Arc;
use tracing::info;
use trivia_domain::{DrinkDetail, DrinkPayload, DrinkRepository, Permission, validate_new_drink};

/// Input for the [`CreateDrinkUseCase`].
#[derive(Debug, Clone)]
pub struct CreateDrinkInput {
    pub credentials: Credentials,
    pub payload: DrinkPayload,
}

/// Stores a new drink. Requires `post:drinks`.
///
/// The permission is checked before the payload is looked at, so an
/// unauthorized caller learns nothing about validation rules.
#[derive(Clone)]
pub struct CreateDrinkUseCase {
    drinks: Arc<dyn DrinkRepository>,
    permissions: Arc<dyn PermissionChecker>,
}

impl CreateDrinkUseCase {
    pub fn new(drinks: Arc<dyn DrinkRepository>, permissions: Arc<dyn PermissionChecker>) -> Self {
        Self {
            drinks,
            permissions,
        }
    }

    pub async fn execute(&self, input: CreateDrinkInput) -> Result<DrinkDetail, TriviaError> {
        self.permissions
            .check(&input.credentials, Permission::CreateDrinks)
            .await?;
        let new = validate_new_drink(input.payload)?;
        let stored = self.drinks.insert(new).await?;
        info!("Created drink {} ({})", stored.id(), stored.title());
        Ok(stored.long())
    }
}
