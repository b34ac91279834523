//! List Drinks use case.

use crate::error::TriviaError;
use std::sync::Arc;
use tracing::debug;
use trivia_domain::{DrinkRepository, DrinkSummary};

/// Public drink listing in the short form. Needs no credentials.
#[derive(Clone)]
pub struct ListDrinksUseCase {
    drinks: Arc<dyn DrinkRepository>,
}

impl ListDrinksUseCase {
    pub fn new(drinks: Arc<dyn DrinkRepository>) -> Self {
        Self { drinks }
    }

    pub async fn execute(&self) -> Result<Vec<DrinkSummary>, TriviaError> {
        let drinks = self.drinks.list_all().await?;
        debug!("Listing {} drinks", drinks.len());
        Ok(drinks.iter().map(|d| d.short()).collect())
    }
}
