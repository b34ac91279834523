//! Update Drink use case.

use crate::error::TriviaError;
use crate::ports::permission_checker::{Credentials, PermissionChecker};
use std::sync::Arc;
use tracing::info;
use trivia_domain::{
    DrinkDetail, DrinkId, DrinkPayload, DrinkRepository, Permission, validate_drink_changes,
};

/// Input for the [`UpdateDrinkUseCase`].
#[derive(Debug, Clone)]
pub struct UpdateDrinkInput {
    pub credentials: Credentials,
    pub id: DrinkId,
    pub payload: DrinkPayload,
}

/// Applies a partial update to a drink. Requires `patch:drinks`.
#[derive(Clone)]
pub struct UpdateDrinkUseCase {
    drinks: Arc<dyn DrinkRepository>,
    permissions: Arc<dyn PermissionChecker>,
}

impl UpdateDrinkUseCase {
    pub fn new(drinks: Arc<dyn DrinkRepository>, permissions: Arc<dyn PermissionChecker>) -> Self {
        Self {
            drinks,
            permissions,
        }
    }

    pub async fn execute(&self, input: UpdateDrinkInput) -> Result<DrinkDetail, TriviaError> {
        self.permissions
            .check(&input.credentials, Permission::UpdateDrinks)
            .await?;
        let changes = validate_drink_changes(input.payload)?;
        let updated = self
            .drinks
            .update(input.id, changes)
            .await?
            .ok_or_else(|| TriviaError::not_found(format!("drink {}", input.id)))?;
        info!("Updated drink {}", updated.id());
        Ok(updated.long())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::test_support::{MockDrinks, MockPermissions};

    fn use_case(drinks: Arc<MockDrinks>) -> UpdateDrinkUseCase {
        UpdateDrinkUseCase::new(
            drinks,
            Arc::new(MockPermissions::granting(&[Permission::UpdateDrinks])),
        )
    }

    fn rename(id: i64, title: &str) -> UpdateDrinkInput {
        UpdateDrinkInput {
            credentials: MockPermissions::valid_token(),
            id: DrinkId::new(id),
            payload: DrinkPayload {
                title: Some(title.to_string()),
                recipe: None,
            },
        }
    }

    #[tokio::test]
    async fn test_rename_keeps_recipe() {
        let drinks = Arc::new(MockDrinks::small());
        let updated = use_case(drinks.clone())
            .execute(rename(2, "Flat white"))
            .await
            .unwrap();
        assert_eq!(updated.title, "Flat white");
        assert_eq!(updated.recipe[0].name, "Latte base");
        assert_eq!(drinks.titles(), vec!["Water", "Flat white"]);
    }

    #[tokio::test]
    async fn test_missing_drink_is_not_found() {
        let err = use_case(Arc::new(MockDrinks::small()))
            .execute(rename(9, "Ghost"))
            .await
            .unwrap_err();
        assert_eq!(err, TriviaError::not_found("drink 9"));
    }

    #[tokio::test]
    async fn test_empty_patch_rejected() {
        let mut input = rename(1, "unused");
        input.payload = DrinkPayload::default();
        let err = use_case(Arc::new(MockDrinks::small()))
            .execute(input)
            .await
            .unwrap_err();
        assert!(matches!(err, TriviaError::Validation(_)));
    }
}
