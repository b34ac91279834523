//! SQLite implementation of [`CategoryRepository`].

use super::connection::Database;
use async_trait::async_trait;
use rusqlite::{OptionalExtension, Row};
use trivia_domain::{Category, CategoryId, CategoryRepository, RepositoryError};

/// Categories table adapter
#[derive(Clone)]
pub struct SqliteCategoryRepository {
    db: Database,
}

impl SqliteCategoryRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

fn category_from_row(row: &Row<'_>) -> rusqlite::Result<Category> {
    Ok(Category {
        id: CategoryId::new(row.get(0)?),
        label: row.get(1)?,
    })
}

#[async_trait]
impl CategoryRepository for SqliteCategoryRepository {
    async fn list_ordered_by_label(&self) -> Result<Vec<Category>, RepositoryError> {
        let categories = self
            .db
            .execute_async(|conn| {
                let mut stmt = conn.prepare("SELECT id, type FROM categories ORDER BY type, id")?;
                let rows = stmt.query_map([], category_from_row)?;
                Ok(rows.collect::<Result<Vec<_>, _>>()?)
            })
            .await?;
        Ok(categories)
    }

    async fn get_by_id(&self, id: CategoryId) -> Result<Option<Category>, RepositoryError> {
        let category = self
            .db
            .execute_async(move |conn| {
                Ok(conn
                    .query_row(
                        "SELECT id, type FROM categories WHERE id = ?1",
                        [id.value()],
                        category_from_row,
                    )
                    .optional()?)
            })
            .await?;
        Ok(category)
    }
}
