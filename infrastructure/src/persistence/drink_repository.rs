//! SQLite implementation of [`DrinkRepository`].
//!
//! Recipes are stored as a JSON array in the `recipe` column.

use super::connection::Database;
use super::error::StoreError;
use async_trait::async_trait;
use rusqlite::types::Type;
use rusqlite::{Connection, OptionalExtension, Row, params};
use tracing::debug;
use trivia_domain::{
    Drink, DrinkChanges, DrinkId, DrinkRepository, Ingredient, NewDrink, RepositoryError,
};

const SELECT_DRINK: &str = "SELECT id, title, recipe FROM drinks";

/// Drinks table adapter
#[derive(Clone)]
pub struct SqliteDrinkRepository {
    db: Database,
}

impl SqliteDrinkRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

fn drink_from_row(row: &Row<'_>) -> rusqlite::Result<Drink> {
    let recipe: String = row.get(2)?;
    let recipe: Vec<Ingredient> = serde_json::from_str(&recipe)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(2, Type::Text, Box::new(e)))?;
    Ok(Drink::new(
        DrinkId::new(row.get(0)?),
        row.get::<_, String>(1)?,
        recipe,
    ))
}

pub(crate) fn encode_recipe(recipe: &[Ingredient]) -> Result<String, StoreError> {
    Ok(serde_json::to_string(recipe)?)
}

fn find(conn: &Connection, id: DrinkId) -> Result<Option<Drink>, StoreError> {
    Ok(conn
        .query_row(
            &format!("{SELECT_DRINK} WHERE id = ?1"),
            [id.value()],
            drink_from_row,
        )
        .optional()?)
}

#[async_trait]
impl DrinkRepository for SqliteDrinkRepository {
    async fn list_all(&self) -> Result<Vec<Drink>, RepositoryError> {
        let drinks = self
            .db
            .execute_async(|conn| {
                let mut stmt = conn.prepare(&format!("{SELECT_DRINK} ORDER BY id"))?;
                let rows = stmt.query_map([], drink_from_row)?;
                Ok(rows.collect::<Result<Vec<_>, _>>()?)
            })
            .await?;
        Ok(drinks)
    }

    async fn insert(&self, drink: NewDrink) -> Result<Drink, RepositoryError> {
        let stored = self
            .db
            .execute_async(move |conn| {
                conn.execute(
                    "INSERT INTO drinks (title, recipe) VALUES (?1, ?2)",
                    params![drink.title(), encode_recipe(drink.recipe())?],
                )?;
                let id = DrinkId::new(conn.last_insert_rowid());
                Ok(Drink::from_new(id, drink))
            })
            .await?;
        debug!("Inserted drink {}", stored.id());
        Ok(stored)
    }

    async fn update(
        &self,
        id: DrinkId,
        changes: DrinkChanges,
    ) -> Result<Option<Drink>, RepositoryError> {
        let updated = self
            .db
            .transaction_async(move |tx| {
                let Some(current) = find(tx, id)? else {
                    return Ok(None);
                };
                let updated = current.apply(changes);
                tx.execute(
                    "UPDATE drinks SET title = ?1, recipe = ?2 WHERE id = ?3",
                    params![
                        updated.title(),
                        encode_recipe(updated.recipe())?,
                        id.value()
                    ],
                )?;
                Ok(Some(updated))
            })
            .await?;
        Ok(updated)
    }

    async fn delete_by_id(&self, id: DrinkId) -> Result<bool, RepositoryError> {
        let removed = self
            .db
            .execute_async(move |conn| {
                Ok(conn.execute("DELETE FROM drinks WHERE id = ?1", [id.value()])?)
            })
            .await?;
        Ok(removed > 0)
    }
}
