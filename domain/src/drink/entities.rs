//! Drink entity and its projections.

use super::value_objects::{DrinkId, Ingredient, ShortIngredient};
use serde::{Deserialize, Serialize};

/// A catalog drink (Entity)
///
/// The title is non-blank and unique across the catalog; the recipe has at
/// least one ingredient.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Drink {
    id: DrinkId,
    title: String,
    recipe: Vec<Ingredient>,
}

impl Drink {
    /// Rehydrate a stored drink (used by repository adapters).
    pub fn new(id: DrinkId, title: impl Into<String>, recipe: Vec<Ingredient>) -> Self {
        Self {
            id,
            title: title.into(),
            recipe,
        }
    }

    pub fn from_new(id: DrinkId, new: NewDrink) -> Self {
        Self {
            id,
            title: new.title,
            recipe: new.recipe,
        }
    }

    pub fn id(&self) -> DrinkId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn recipe(&self) -> &[Ingredient] {
        &self.recipe
    }

    /// Apply a validated partial update.
    pub fn apply(mut self, changes: DrinkChanges) -> Self {
        if let Some(title) = changes.title {
            self.title = title;
        }
        if let Some(recipe) = changes.recipe {
            self.recipe = recipe;
        }
        self
    }

    /// Public projection: ingredient names are withheld.
    pub fn short(&self) -> DrinkSummary {
        DrinkSummary {
            id: self.id,
            title: self.title.clone(),
            recipe: self.recipe.iter().map(ShortIngredient::from).collect(),
        }
    }

    /// Full projection, including ingredient names.
    pub fn long(&self) -> DrinkDetail {
        DrinkDetail {
            id: self.id,
            title: self.title.clone(),
            recipe: self.recipe.clone(),
        }
    }
}

/// A validated drink that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDrink {
    title: String,
    recipe: Vec<Ingredient>,
}

impl NewDrink {
    pub(crate) fn new(title: String, recipe: Vec<Ingredient>) -> Self {
        Self { title, recipe }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn recipe(&self) -> &[Ingredient] {
        &self.recipe
    }
}

/// A validated partial update; at least one field is set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrinkChanges {
    title: Option<String>,
    recipe: Option<Vec<Ingredient>>,
}

impl DrinkChanges {
    pub(crate) fn new(title: Option<String>, recipe: Option<Vec<Ingredient>>) -> Self {
        Self { title, recipe }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrinkSummary {
    pub id: DrinkId,
    pub title: String,
    pub recipe: Vec<ShortIngredient>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrinkDetail {
    pub id: DrinkId,
    pub title: String,
    pub recipe: Vec<Ingredient>,
}
