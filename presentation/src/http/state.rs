//! Shared handler state.

use std::sync::Arc;
use trivia_application::{
    CreateDrinkUseCase, CreateQuestionUseCase, DeleteDrinkUseCase, DeleteQuestionUseCase,
    DrinkDetailsUseCase, ListCategoriesUseCase, ListDrinksUseCase, ListQuestionsUseCase,
    ListingParams, PermissionChecker, PlayQuizUseCase, QuestionsByCategoryUseCase,
    SearchOrCreateUseCase, SearchQuestionsUseCase, UpdateDrinkUseCase,
};
use trivia_domain::{CategoryRepository, DrinkRepository, QuestionRepository};

/// Ports the HTTP surface is built over.
#[derive(Clone)]
pub struct Ports {
    pub questions: Arc<dyn QuestionRepository>,
    pub categories: Arc<dyn CategoryRepository>,
    pub drinks: Arc<dyn DrinkRepository>,
    pub permissions: Arc<dyn PermissionChecker>,
}

/// Use cases available to the HTTP handlers.
///
/// Cloned per request by axum; every field is a thin handle over the same
/// repositories.
#[derive(Clone)]
pub struct AppState {
    pub list_categories: ListCategoriesUseCase,
    pub list_questions: ListQuestionsUseCase,
    pub questions_by_category: QuestionsByCategoryUseCase,
    pub search_or_create: SearchOrCreateUseCase,
    pub delete_question: DeleteQuestionUseCase,
    pub play_quiz: PlayQuizUseCase,
    pub list_drinks: ListDrinksUseCase,
    pub drink_details: DrinkDetailsUseCase,
    pub create_drink: CreateDrinkUseCase,
    pub update_drink: UpdateDrinkUseCase,
    pub delete_drink: DeleteDrinkUseCase,
}

impl AppState {
    pub fn new(ports: Ports, params: ListingParams) -> Self {
        let Ports {
            questions,
            categories,
            drinks,
            permissions,
        } = ports;
        let search = SearchQuestionsUseCase::new(questions.clone()).with_params(params);
        let create = CreateQuestionUseCase::new(questions.clone()).with_params(params);

        Self {
            list_categories: ListCategoriesUseCase::new(categories.clone()),
            list_questions: ListQuestionsUseCase::new(questions.clone(), categories.clone())
                .with_params(params),
            questions_by_category: QuestionsByCategoryUseCase::new(questions.clone(), categories),
            search_or_create: SearchOrCreateUseCase::new(search, create),
            delete_question: DeleteQuestionUseCase::new(questions.clone()),
            play_quiz: PlayQuizUseCase::new(questions),
            list_drinks: ListDrinksUseCase::new(drinks.clone()),
            drink_details: DrinkDetailsUseCase::new(drinks.clone(), permissions.clone()),
            create_drink: CreateDrinkUseCase::new(drinks.clone(), permissions.clone()),
            update_drink: UpdateDrinkUseCase::new(drinks.clone(), permissions.clone()),
            delete_drink: DeleteDrinkUseCase::new(drinks, permissions),
        }
    }
}
