//! Validation of drink payloads.
//!
//! A recipe may be sent either as a list of ingredients or as a single
//! ingredient object. Text is trimmed; `parts` must be a positive integer and
//! may arrive as a numeric string.

use super::entities::{DrinkChanges, NewDrink};
use super::value_objects::Ingredient;
use crate::core::error::ValidationError;
use crate::core::lenient;
use crate::question::validation::required_text;
use serde::Deserialize;

/// Raw drink payload, shared by create and partial update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DrinkPayload {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub recipe: Option<RecipePayload>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RecipePayload {
    Many(Vec<IngredientPayload>),
    One(IngredientPayload),
}

impl RecipePayload {
    fn into_vec(self) -> Vec<IngredientPayload> {
        match self {
            RecipePayload::Many(items) => items,
            RecipePayload::One(item) => vec![item],
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct IngredientPayload {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional_int_or_string")]
    pub parts: Option<i64>,
}

impl IngredientPayload {
    pub fn new(name: &str, color: &str, parts: i64) -> Self {
        Self {
            name: Some(name.to_string()),
            color: Some(color.to_string()),
            parts: Some(parts),
        }
    }
}

/// Validate a payload for a new drink: title and recipe are both required.
pub fn validate_new_drink(payload: DrinkPayload) -> Result<NewDrink, ValidationError> {
    let title = required_text("title", payload.title)?;
    let recipe = payload.recipe.ok_or(ValidationError::Missing("recipe"))?;
    Ok(NewDrink::new(title, validate_recipe(recipe)?))
}

/// Validate a partial update: each given field follows the creation rules,
/// and at least one field must be given.
pub fn validate_drink_changes(payload: DrinkPayload) -> Result<DrinkChanges, ValidationError> {
    if payload.title.is_none() && payload.recipe.is_none() {
        return Err(ValidationError::Missing("title or recipe"));
    }
    let title = payload
        .title
        .map(|title| required_text("title", Some(title)))
        .transpose()?;
    let recipe = payload.recipe.map(validate_recipe).transpose()?;
    Ok(DrinkChanges::new(title, recipe))
}

fn validate_recipe(recipe: RecipePayload) -> Result<Vec<Ingredient>, ValidationError> {
    let items = recipe.into_vec();
    if items.is_empty() {
        return Err(ValidationError::Empty("recipe"));
    }
    items.into_iter().map(validate_ingredient).collect()
}

fn validate_ingredient(item: IngredientPayload) -> Result<Ingredient, ValidationError> {
    let name = required_text("recipe.name", item.name)?;
    let color = required_text("recipe.color", item.color)?;
    let parts = item.parts.ok_or(ValidationError::Missing("recipe.parts"))?;
    let parts = u32::try_from(parts)
        .ok()
        .filter(|p| *p > 0)
        .ok_or(ValidationError::OutOfRange("recipe.parts"))?;
    Ok(Ingredient { name, color, parts })
}
