//! In-memory repository and port doubles shared by the use-case tests.

use crate::ports::permission_checker::{AccessDenied, Credentials, PermissionChecker};
use async_trait::async_trait;
use std::sync::Mutex;
use trivia_domain::{
    Category, CategoryId, CategoryRepository, Difficulty, Drink, DrinkChanges, DrinkId,
    DrinkRepository, Ingredient, NewDrink, NewQuestion, Permission, Question, QuestionId,
    QuestionRepository, RepositoryError,
};

pub(crate) fn question(id: i64, category: i64) -> Question {
    Question::new(
        QuestionId::new(id),
        format!("Question {id}"),
        format!("Answer {id}"),
        CategoryId::new(category),
        Difficulty::new(1),
    )
}

/// Question/category store backed by vectors.
pub(crate) struct MockBank {
    categories: Vec<Category>,
    questions: Mutex<Vec<Question>>,
    fail_with: Option<RepositoryError>,
}

impl MockBank {
    pub(crate) fn new(categories: Vec<Category>, questions: Vec<Question>) -> Self {
        Self {
            categories,
            questions: Mutex::new(questions),
            fail_with: None,
        }
    }

    /// Categories 1 "Science", 2 "Art" and questions 1,2 (cat 1) and 3 (cat 2).
    pub(crate) fn small() -> Self {
        Self::new(
            vec![Category::new(1, "Science"), Category::new(2, "Art")],
            vec![question(1, 1), question(2, 1), question(3, 2)],
        )
    }

    pub(crate) fn failing(error: RepositoryError) -> Self {
        Self {
            fail_with: Some(error),
            ..Self::new(Vec::new(), Vec::new())
        }
    }

    fn check(&self) -> Result<(), RepositoryError> {
        match &self.fail_with {
            Some(e) => Err(e.clone()),
            None => Ok(()),
        }
    }

    pub(crate) fn ids(&self) -> Vec<i64> {
        self.questions
            .lock()
            .unwrap()
            .iter()
            .map(|q| q.id().value())
            .collect()
    }
}

#[async_trait]
impl QuestionRepository for MockBank {
    async fn list_all(&self) -> Result<Vec<Question>, RepositoryError> {
        self.check()?;
        let mut all = self.questions.lock().unwrap().clone();
        all.sort_by_key(Question::id);
        Ok(all)
    }

    async fn get_by_id(&self, id: QuestionId) -> Result<Option<Question>, RepositoryError> {
        self.check()?;
        Ok(self
            .questions
            .lock()
            .unwrap()
            .iter()
            .find(|q| q.id() == id)
            .cloned())
    }

    async fn filter_by_category(
        &self,
        category: CategoryId,
    ) -> Result<Vec<Question>, RepositoryError> {
        self.check()?;
        Ok(self
            .questions
            .lock()
            .unwrap()
            .iter()
            .filter(|q| q.category() == category)
            .cloned()
            .collect())
    }

    async fn search(&self, term: &str) -> Result<Vec<Question>, RepositoryError> {
        self.check()?;
        let needle = term.to_lowercase();
        Ok(self
            .questions
            .lock()
            .unwrap()
            .iter()
            .filter(|q| q.question().to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    async fn count(&self) -> Result<u64, RepositoryError> {
        self.check()?;
        Ok(self.questions.lock().unwrap().len() as u64)
    }

    async fn insert(&self, question: NewQuestion) -> Result<Question, RepositoryError> {
        self.check()?;
        if !self.categories.iter().any(|c| c.id == question.category()) {
            return Err(RepositoryError::Constraint(
                "FOREIGN KEY constraint failed".to_string(),
            ));
        }
        let mut questions = self.questions.lock().unwrap();
        let next = questions.iter().map(|q| q.id().value()).max().unwrap_or(0) + 1;
        let stored = Question::from_new(QuestionId::new(next), question);
        questions.push(stored.clone());
        Ok(stored)
    }

    async fn delete_by_id(&self, id: QuestionId) -> Result<bool, RepositoryError> {
        self.check()?;
        let mut questions = self.questions.lock().unwrap();
        let before = questions.len();
        questions.retain(|q| q.id() != id);
        Ok(questions.len() != before)
    }
}

#[async_trait]
impl CategoryRepository for MockBank {
    async fn list_ordered_by_label(&self) -> Result<Vec<Category>, RepositoryError> {
        self.check()?;
        let mut categories = self.categories.clone();
        categories.sort_by(|a, b| a.label.cmp(&b.label));
        Ok(categories)
    }

    async fn get_by_id(&self, id: CategoryId) -> Result<Option<Category>, RepositoryError> {
        self.check()?;
        Ok(self.categories.iter().find(|c| c.id == id).cloned())
    }
}

pub(crate) fn drink(id: i64, title: &str) -> Drink {
    Drink::new(
        DrinkId::new(id),
        title,
        vec![Ingredient {
            name: format!("{title} base"),
            color: "brown".to_string(),
            parts: 1,
        }],
    )
}

/// Drink catalog backed by a vector.
pub(crate) struct MockDrinks {
    drinks: Mutex<Vec<Drink>>,
}

impl MockDrinks {
    pub(crate) fn new(drinks: Vec<Drink>) -> Self {
        Self {
            drinks: Mutex::new(drinks),
        }
    }

    /// Drinks 1 "Water" and 2 "Latte".
    pub(crate) fn small() -> Self {
        Self::new(vec![drink(1, "Water"), drink(2, "Latte")])
    }

    pub(crate) fn titles(&self) -> Vec<String> {
        self.drinks
            .lock()
            .unwrap()
            .iter()
            .map(|d| d.title().to_string())
            .collect()
    }
}

#[async_trait]
impl DrinkRepository for MockDrinks {
    async fn list_all(&self) -> Result<Vec<Drink>, RepositoryError> {
        Ok(self.drinks.lock().unwrap().clone())
    }

    async fn insert(&self, new: NewDrink) -> Result<Drink, RepositoryError> {
        let mut drinks = self.drinks.lock().unwrap();
        if drinks.iter().any(|d| d.title() == new.title()) {
            return Err(RepositoryError::Constraint(
                "UNIQUE constraint failed: drinks.title".to_string(),
            ));
        }
        let next = drinks.iter().map(|d| d.id().value()).max().unwrap_or(0) + 1;
        let stored = Drink::from_new(DrinkId::new(next), new);
        drinks.push(stored.clone());
        Ok(stored)
    }

    async fn update(
        &self,
        id: DrinkId,
        changes: DrinkChanges,
    ) -> Result<Option<Drink>, RepositoryError> {
        let mut drinks = self.drinks.lock().unwrap();
        let Some(slot) = drinks.iter_mut().find(|d| d.id() == id) else {
            return Ok(None);
        };
        *slot = slot.clone().apply(changes);
        Ok(Some(slot.clone()))
    }

    async fn delete_by_id(&self, id: DrinkId) -> Result<bool, RepositoryError> {
        let mut drinks = self.drinks.lock().unwrap();
        let before = drinks.len();
        drinks.retain(|d| d.id() != id);
        Ok(drinks.len() != before)
    }
}

/// Accepts the bearer token `"valid"` and grants it a fixed permission list.
pub(crate) struct MockPermissions {
    granted: Vec<Permission>,
}

impl MockPermissions {
    pub(crate) fn granting(granted: &[Permission]) -> Self {
        Self {
            granted: granted.to_vec(),
        }
    }

    pub(crate) fn valid_token() -> Credentials {
        Credentials::Bearer("valid".to_string())
    }
}

#[async_trait]
impl PermissionChecker for MockPermissions {
    async fn check(
        &self,
        credentials: &Credentials,
        required: Permission,
    ) -> Result<(), AccessDenied> {
        match credentials {
            Credentials::Bearer(token) if token == "valid" => {
                if self.granted.contains(&required) {
                    Ok(())
                } else {
                    Err(AccessDenied::Forbidden(required))
                }
            }
            _ => Err(AccessDenied::Unauthenticated("invalid token".to_string())),
        }
    }
}
