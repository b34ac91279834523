//! Route handlers.
//!
//! Each handler decodes its inputs, calls exactly one use case, and shapes the
//! JSON reply. Empty listings are reported as 404 here; the use cases return
//! them as ordinary empty results.

use super::dto::{
    CategoriesResponse, CreatedResponse, DeletedResponse, DrinkDeletedResponse, DrinksResponse,
    PageQuery, QuestionsRequest, QuestionsResponse, QuizRequest, QuizResponse,
};
use super::error::ApiError;
use super::state::AppState;
use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use tracing::{debug, info};
use trivia_application::{
    CreateDrinkInput, Credentials, ListQuestionsInput, PlayQuizInput, QuestionsOutcome,
    TriviaError, UpdateDrinkInput,
};
use trivia_domain::{
    CategoryId, DrinkDetail, DrinkId, DrinkPayload, DrinkSummary, PageNumber, QuestionId,
};

fn json_body<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    body.map(|Json(value)| value).map_err(|rejection| {
        debug!("Rejected request body: {}", rejection.body_text());
        ApiError::BadRequest(rejection.body_text())
    })
}

fn path_id(id: Result<Path<i64>, PathRejection>) -> Result<i64, ApiError> {
    id.map(|Path(id)| id).map_err(|_| ApiError::RouteNotFound)
}

/// A header that is present but not valid text counts as malformed.
fn credentials(headers: &HeaderMap) -> Credentials {
    match headers.get(header::AUTHORIZATION) {
        None => Credentials::Anonymous,
        Some(value) => match value.to_str() {
            Ok(text) => Credentials::from_authorization_header(Some(text)),
            Err(_) => Credentials::Malformed,
        },
    }
}

/// `GET /categories`
pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<CategoriesResponse>, ApiError> {
    let categories = state.list_categories.execute().await?;
    if categories.is_empty() {
        return Err(TriviaError::not_found("categories").into());
    }
    Ok(Json(CategoriesResponse {
        success: true,
        categories,
    }))
}

/// `GET /questions?page=N`
pub async fn list_questions(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Json<QuestionsResponse>, ApiError> {
    let page = PageNumber::parse(query.page.as_deref());
    let listing = state
        .list_questions
        .execute(ListQuestionsInput::new(page))
        .await?;
    if listing.questions.is_empty() {
        return Err(TriviaError::not_found(format!("questions page {}", page.get())).into());
    }
    Ok(Json(listing.into()))
}

/// `GET /categories/{category_id}/questions`
pub async fn questions_by_category(
    State(state): State<AppState>,
    category_id: Result<Path<i64>, PathRejection>,
) -> Result<Json<QuestionsResponse>, ApiError> {
    let category = CategoryId::new(path_id(category_id)?);
    let listing = state.questions_by_category.execute(category).await?;
    Ok(Json(listing.into()))
}

/// `POST /questions?page=N`, either a search or a creation.
pub async fn search_or_create(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
    body: Result<Json<QuestionsRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let page = PageNumber::parse(query.page.as_deref());
    let command = json_body(body)?.into_command();

    match state.search_or_create.execute(command, page).await? {
        QuestionsOutcome::Found(results) => {
            Ok(Json(QuestionsResponse::from(results)).into_response())
        }
        QuestionsOutcome::Created(created) => {
            info!("Created question {}", created.question.id);
            Ok((StatusCode::CREATED, Json(CreatedResponse::from(created))).into_response())
        }
    }
}

/// `DELETE /questions/{question_id}`
pub async fn delete_question(
    State(state): State<AppState>,
    question_id: Result<Path<i64>, PathRejection>,
) -> Result<Json<DeletedResponse>, ApiError> {
    let id = QuestionId::new(path_id(question_id)?);
    let deleted = state.delete_question.execute(id).await?;
    info!("Deleted question {}", deleted);
    Ok(Json(DeletedResponse {
        success: true,
        deleted,
    }))
}

/// `POST /quizzes`
pub async fn play_quiz(
    State(state): State<AppState>,
    body: Result<Json<QuizRequest>, JsonRejection>,
) -> Result<Json<QuizResponse>, ApiError> {
    let request = json_body(body)?;
    let label = request.quiz_category.label;
    let turn = state
        .play_quiz
        .execute(PlayQuizInput::new(
            request.quiz_category.id,
            request.previous_questions,
        ))
        .await?;
    Ok(Json(QuizResponse::new(turn, label)))
}

/// `GET /drinks`, public short form.
pub async fn list_drinks(
    State(state): State<AppState>,
) -> Result<Json<DrinksResponse<DrinkSummary>>, ApiError> {
    let drinks = state.list_drinks.execute().await?;
    if drinks.is_empty() {
        return Err(TriviaError::not_found("drinks").into());
    }
    Ok(Json(DrinksResponse::new(drinks)))
}

/// `GET /drinks-detail`
pub async fn drink_details(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<DrinksResponse<DrinkDetail>>, ApiError> {
    let drinks = state.drink_details.execute(&credentials(&headers)).await?;
    if drinks.is_empty() {
        return Err(TriviaError::not_found("drinks").into());
    }
    Ok(Json(DrinksResponse::new(drinks)))
}

/// `POST /drinks`
pub async fn create_drink(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Result<Json<DrinkPayload>, JsonRejection>,
) -> Result<Response, ApiError> {
    let credentials = credentials(&headers);
    let payload = json_body(body)?;
    let created = state
        .create_drink
        .execute(CreateDrinkInput {
            credentials,
            payload,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(DrinksResponse::new(vec![created]))).into_response())
}

/// `PATCH /drinks/{drink_id}`
pub async fn update_drink(
    State(state): State<AppState>,
    headers: HeaderMap,
    drink_id: Result<Path<i64>, PathRejection>,
    body: Result<Json<DrinkPayload>, JsonRejection>,
) -> Result<Json<DrinksResponse<DrinkDetail>>, ApiError> {
    let id = DrinkId::new(path_id(drink_id)?);
    let credentials = credentials(&headers);
    let payload = json_body(body)?;
    let updated = state
        .update_drink
        .execute(UpdateDrinkInput {
            credentials,
            id,
            payload,
        })
        .await?;
    Ok(Json(DrinksResponse::new(vec![updated])))
}

/// `DELETE /drinks/{drink_id}`
pub async fn delete_drink(
    State(state): State<AppState>,
    headers: HeaderMap,
    drink_id: Result<Path<i64>, PathRejection>,
) -> Result<Json<DrinkDeletedResponse>, ApiError> {
    let id = DrinkId::new(path_id(drink_id)?);
    let deleted = state
        .delete_drink
        .execute(&credentials(&headers), id)
        .await?;
    Ok(Json(DrinkDeletedResponse {
        success: true,
        delete: deleted,
    }))
}

pub async fn route_not_found() -> ApiError {
    ApiError::RouteNotFound
}

pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
