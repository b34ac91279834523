//! SQLite implementation of [`QuestionRepository`].

use super::connection::{Database, UNICODE_LOWER};
use super::error::StoreError;
use async_trait::async_trait;
use rusqlite::{OptionalExtension, Row, params};
use tracing::debug;
use trivia_domain::{
    CategoryId, Difficulty, NewQuestion, Question, QuestionId, QuestionRepository,
    RepositoryError,
};

const SELECT_QUESTION: &str = "SELECT id, question, answer, category, difficulty FROM questions";

/// Questions table adapter
#[derive(Clone)]
pub struct SqliteQuestionRepository {
    db: Database,
}

impl SqliteQuestionRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    async fn query_questions<P>(&self, sql: String, params: P) -> Result<Vec<Question>, StoreError>
    where
        P: rusqlite::Params + Send + 'static,
    {
        self.db
            .execute_async(move |conn| {
                let mut stmt = conn.prepare(&sql)?;
                let rows = stmt.query_map(params, question_from_row)?;
                Ok(rows.collect::<Result<Vec<_>, _>>()?)
            })
            .await
    }
}

fn question_from_row(row: &Row<'_>) -> rusqlite::Result<Question> {
    Ok(Question::new(
        QuestionId::new(row.get(0)?),
        row.get::<_, String>(1)?,
        row.get::<_, String>(2)?,
        CategoryId::new(row.get(3)?),
        Difficulty::new(row.get(4)?),
    ))
}

#[async_trait]
impl QuestionRepository for SqliteQuestionRepository {
    async fn list_all(&self) -> Result<Vec<Question>, RepositoryError> {
        Ok(self
            .query_questions(format!("{SELECT_QUESTION} ORDER BY id"), [])
            .await?)
    }

    async fn get_by_id(&self, id: QuestionId) -> Result<Option<Question>, RepositoryError> {
        let found = self
            .db
            .execute_async(move |conn| {
                Ok(conn
                    .query_row(
                        &format!("{SELECT_QUESTION} WHERE id = ?1"),
                        [id.value()],
                        question_from_row,
                    )
                    .optional()?)
            })
            .await?;
        Ok(found)
    }

    async fn filter_by_category(
        &self,
        category: CategoryId,
    ) -> Result<Vec<Question>, RepositoryError> {
        Ok(self
            .query_questions(
                format!("{SELECT_QUESTION} WHERE category = ?1 ORDER BY id"),
                [category.value()],
            )
            .await?)
    }

    async fn search(&self, term: &str) -> Result<Vec<Question>, RepositoryError> {
        // instr() instead of LIKE so '%' and '_' in the term match literally
        Ok(self
            .query_questions(
                format!(
                    "{SELECT_QUESTION} WHERE ?1 = '' OR instr({UNICODE_LOWER}(question), ?1) > 0 ORDER BY id"
                ),
                [term.to_lowercase()],
            )
            .await?)
    }

    async fn count(&self) -> Result<u64, RepositoryError> {
        let count: i64 = self
            .db
            .execute_async(|conn| {
                Ok(conn.query_row("SELECT COUNT(*) FROM questions", [], |row| row.get(0))?)
            })
            .await?;
        Ok(count.max(0) as u64)
    }

    async fn insert(&self, question: NewQuestion) -> Result<Question, RepositoryError> {
        let stored = self
            .db
            .execute_async(move |conn| {
                conn.execute(
                    "INSERT INTO questions (question, answer, category, difficulty) VALUES (?1, ?2, ?3, ?4)",
                    params![
                        question.question(),
                        question.answer(),
                        question.category().value(),
                        question.difficulty().value(),
                    ],
                )?;
                let id = QuestionId::new(conn.last_insert_rowid());
                Ok(Question::from_new(id, question))
            })
            .await?;
        debug!("Inserted question {}", stored.id());
        Ok(stored)
    }

    async fn delete_by_id(&self, id: QuestionId) -> Result<bool, RepositoryError> {
        let removed = self
            .db
            .execute_async(move |conn| {
                Ok(conn.execute("DELETE FROM questions WHERE id = ?1", [id.value()])?)
            })
            .await?;
        Ok(removed > 0)
    }
}
