//! Route table and middleware.

use super::handlers;
use super::state::AppState;
use axum::Router;
use axum::http::{HeaderName, Method, header};
use axum::routing::{delete, get, patch, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

const ALLOWED_HEADERS: [HeaderName; 2] = [header::CONTENT_TYPE, header::AUTHORIZATION];

const ALLOWED_METHODS: [Method; 5] = [
    Method::GET,
    Method::POST,
    Method::PATCH,
    Method::DELETE,
    Method::OPTIONS,
];

pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_headers(ALLOWED_HEADERS)
        .allow_methods(ALLOWED_METHODS)
}

/// Build the application router over `state`.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/categories", get(handlers::list_categories))
        .route(
            "/categories/{category_id}/questions",
            get(handlers::questions_by_category),
        )
        .route(
            "/questions",
            get(handlers::list_questions).post(handlers::search_or_create),
        )
        .route("/questions/{question_id}", delete(handlers::delete_question))
        .route("/quizzes", post(handlers::play_quiz))
        .route(
            "/drinks",
            get(handlers::list_drinks).post(handlers::create_drink),
        )
        .route("/drinks-detail", get(handlers::drink_details))
        .route(
            "/drinks/{drink_id}",
            patch(handlers::update_drink).delete(handlers::delete_drink),
        )
        .fallback(handlers::route_not_found)
        .method_not_allowed_fallback(handlers::method_not_allowed)
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode};
    use axum::response::Response;
    use serde_json::{Value, json};
    use std::sync::Arc;
    use tower::ServiceExt;
    use trivia_application::ListingParams;
    use crate::http::state::Ports;
    use trivia_domain::{PageSize, Permission};
    use trivia_infrastructure::{
        Database, SqliteCategoryRepository, SqliteDrinkRepository, SqliteQuestionRepository,
        StaticTokenPermissions, seed_if_empty,
    };

    async fn seeded_db() -> Database {
        let db = Database::open_in_memory().unwrap();
        seed_if_empty(&db).await.unwrap();
        db
    }

    fn app_over(db: Database, page_size: usize) -> Router {
        let permissions = StaticTokenPermissions::new([
            ("barista".to_string(), vec![Permission::ReadDrinkDetails]),
            ("manager".to_string(), Permission::ALL.to_vec()),
        ]);
        let ports = Ports {
            questions: Arc::new(SqliteQuestionRepository::new(db.clone())),
            categories: Arc::new(SqliteCategoryRepository::new(db.clone())),
            drinks: Arc::new(SqliteDrinkRepository::new(db)),
            permissions: Arc::new(permissions),
        };
        let state = AppState::new(
            ports,
            ListingParams::default().with_questions_per_page(PageSize::new(page_size).unwrap()),
        );
        build_router(state)
    }

    async fn app() -> Router {
        app_over(seeded_db().await, 10)
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response: Response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    fn get_req(uri: &str) -> Request<Body> {
        Request::get(uri).body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn with_token(mut request: Request<Body>, token: &str) -> Request<Body> {
        request.headers_mut().insert(
            header::AUTHORIZATION,
            format!("Bearer {token}").parse().unwrap(),
        );
        request
    }

    fn ids(body: &Value) -> Vec<i64> {
        body["questions"]
            .as_array()
            .unwrap()
            .iter()
            .map(|q| q["id"].as_i64().unwrap())
            .collect()
    }

    #[tokio::test]
    async fn test_categories_in_label_order() {
        let response = app().await.oneshot(get_req("/categories")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let text = String::from_utf8(bytes.to_vec()).unwrap();

        // Key order is only visible in the raw text
        let labels = ["Art", "Entertainment", "Geography", "History", "Science", "Sports"];
        let positions: Vec<usize> = labels
            .iter()
            .map(|label| text.find(&format!("\"{label}\"")).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{text}");

        let body: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(body["success"], true);
        assert_eq!(body["categories"]["1"], "Science");
    }

    #[tokio::test]
    async fn test_empty_categories_is_not_found() {
        let db = Database::open_in_memory().unwrap();
        let (status, body) = send(app_over(db, 10), get_req("/categories")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "not_found");
    }

    #[tokio::test]
    async fn test_questions_first_page() {
        let (status, body) = send(app().await, get_req("/questions")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["questions"].as_array().unwrap().len(), 10);
        assert_eq!(body["total_questions"], 19);
        assert_eq!(body["current_category"], Value::Null);
        assert!(body["categories"].is_object());
        assert!(body["questions"][0]["answer"].is_string());
    }

    #[tokio::test]
    async fn test_questions_pages_are_disjoint() {
        let (_, first) = send(app().await, get_req("/questions?page=1")).await;
        let (status, second) = send(app().await, get_req("/questions?page=2")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(ids(&second).len(), 9);
        assert!(ids(&first).iter().all(|id| !ids(&second).contains(id)));
        assert!(ids(&first).last() < ids(&second).first());
    }

    #[tokio::test]
    async fn test_bad_page_falls_back_to_first() {
        let (_, first) = send(app().await, get_req("/questions?page=1")).await;
        for uri in ["/questions?page=abc", "/questions?page=0", "/questions?page=-2"] {
            let (status, body) = send(app().await, get_req(uri)).await;
            assert_eq!(status, StatusCode::OK, "{uri}");
            assert_eq!(ids(&body), ids(&first), "{uri}");
        }
    }

    #[tokio::test]
    async fn test_page_past_end_is_not_found() {
        let (status, body) = send(app().await, get_req("/questions?page=1000")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "not_found");
    }

    #[tokio::test]
    async fn test_questions_by_category() {
        let (status, body) = send(app().await, get_req("/categories/1/questions")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["current_category"], 1);
        let questions = body["questions"].as_array().unwrap();
        assert!(!questions.is_empty());
        assert!(questions.iter().all(|q| q["category"] == 1));
        assert_eq!(body["total_questions"], questions.len());
    }

    #[tokio::test]
    async fn test_unknown_category_is_not_found() {
        let (status, body) = send(app().await, get_req("/categories/999/questions")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "not_found");

        let (status, _) = send(app().await, get_req("/categories/abc/questions")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_search_is_case_insensitive() {
        let db = seeded_db().await;
        let (status, lower) = send(
            app_over(db.clone(), 10),
            post_json("/questions", json!({"searchTerm": "title"})),
        )
        .await;
        let (_, upper) = send(
            app_over(db, 10),
            post_json("/questions", json!({"searchTerm": "TITLE"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(!ids(&lower).is_empty());
        assert_eq!(ids(&lower), ids(&upper));
        assert_eq!(lower["current_category"], Value::Null);
    }

    #[tokio::test]
    async fn test_search_without_matches() {
        let (status, body) = send(
            app().await,
            post_json("/questions", json!({"searchTerm": "zzzz-nothing"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total_questions"], 0);
        assert!(body["questions"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_question() {
        let db = seeded_db().await;
        let (status, body) = send(
            app_over(db.clone(), 10),
            post_json(
                "/questions",
                json!({"question": "  What is 2+2?  ", "answer": "4", "difficulty": 1, "category": 1}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["success"], true);
        assert_eq!(body["total_questions"], 20);
        assert_eq!(body["question"]["question"], "What is 2+2?");
        let created = body["created"].as_i64().unwrap();

        let (_, category) = send(app_over(db, 10), get_req("/categories/1/questions")).await;
        assert!(ids(&category).contains(&created));
    }

    #[tokio::test]
    async fn test_create_accepts_form_style_numbers() {
        let (status, body) = send(
            app().await,
            post_json(
                "/questions",
                json!({"question": "Q?", "answer": "A", "difficulty": "2", "category": "1"}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["question"]["difficulty"], 2);
        assert_eq!(body["question"]["category"], 1);
    }

    #[tokio::test]
    async fn test_create_rejects_blank_fields() {
        let (status, body) = send(
            app().await,
            post_json(
                "/questions",
                json!({"question": "   ", "answer": "A", "difficulty": 1, "category": 1}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "validation_failed");
        assert_eq!(body["field"], "question");

        let (status, _) = send(app().await, post_json("/questions", json!({}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_create_with_unknown_category_is_unprocessable() {
        let (status, body) = send(
            app().await,
            post_json(
                "/questions",
                json!({"question": "Q", "answer": "A", "difficulty": 1, "category": 999}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"], "unprocessable");
    }

    #[tokio::test]
    async fn test_malformed_json_is_bad_request() {
        let request = Request::post("/questions")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let (status, body) = send(app().await, request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "bad_request");
    }

    #[tokio::test]
    async fn test_delete_question() {
        let db = seeded_db().await;
        let request = || Request::delete("/questions/1").body(Body::empty()).unwrap();

        let (status, body) = send(app_over(db.clone(), 10), request()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["deleted"], 1);

        let (status, body) = send(app_over(db.clone(), 10), request()).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "not_found");

        let (_, listing) = send(app_over(db, 10), get_req("/questions")).await;
        assert_eq!(listing["total_questions"], 18);
    }

    #[tokio::test]
    async fn test_quiz_excludes_previous_questions() {
        let db = seeded_db().await;
        let (_, science) = send(app_over(db.clone(), 10), get_req("/categories/1/questions")).await;
        let all = ids(&science);
        let (keep, previous) = all.split_last().unwrap();

        let (status, body) = send(
            app_over(db, 10),
            post_json(
                "/quizzes",
                json!({"previous_questions": previous, "quiz_category": {"id": "1", "type": "Science"}}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["question"]["id"], *keep);
        assert_eq!(body["quiz_category"]["id"], 1);
        assert_eq!(body["quiz_category"]["type"], "Science");
    }

    #[tokio::test]
    async fn test_quiz_exhausted() {
        let all: Vec<i64> = (1..=19).collect();
        let (status, body) = send(
            app().await,
            post_json(
                "/quizzes",
                json!({"previous_questions": all, "quiz_category": {"id": 0}}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "no_eligible_questions");
    }

    #[tokio::test]
    async fn test_quiz_malformed_body() {
        let (status, _) = send(
            app().await,
            post_json("/quizzes", json!({"quiz_category": {"id": 0}})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_unknown_route_and_wrong_method() {
        let (status, body) = send(app().await, get_req("/nope")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["success"], false);

        let request = Request::delete("/categories").body(Body::empty()).unwrap();
        let (status, body) = send(app().await, request).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(body["error"], "method_not_allowed");
    }

    #[tokio::test]
    async fn test_cors_preflight() {
        let request = Request::builder()
            .method(Method::OPTIONS)
            .uri("/questions")
            .header(header::ORIGIN, "http://localhost:3000")
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .body(Body::empty())
            .unwrap();
        let response = app().await.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "*"
        );
    }

    #[tokio::test]
    async fn test_public_drinks_hide_ingredient_names() {
        let (status, body) = send(app().await, get_req("/drinks")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        let drink = &body["drinks"][0];
        assert_eq!(drink["title"], "water");
        assert_eq!(drink["recipe"][0], json!({"color": "blue", "parts": 1}));
    }

    #[tokio::test]
    async fn test_drink_details_need_a_token() {
        let (status, body) = send(app().await, get_req("/drinks-detail")).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"], "unauthorized");

        let request = with_token(get_req("/drinks-detail"), "stranger");
        let (status, _) = send(app().await, request).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let request = with_token(get_req("/drinks-detail"), "barista");
        let (status, body) = send(app().await, request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["drinks"][0]["recipe"][0]["name"], "water");
    }

    #[tokio::test]
    async fn test_missing_permission_is_forbidden() {
        let db = seeded_db().await;
        let request = with_token(
            post_json(
                "/drinks",
                json!({"title": "Tea", "recipe": {"name": "tea", "color": "green", "parts": 1}}),
            ),
            "barista",
        );
        let (status, body) = send(app_over(db.clone(), 10), request).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["error"], "forbidden");

        let (_, body) = send(app_over(db, 10), get_req("/drinks")).await;
        assert_eq!(body["drinks"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_drink_lifecycle() {
        let db = seeded_db().await;

        let request = with_token(
            post_json(
                "/drinks",
                json!({"title": "Latte", "recipe": [
                    {"name": "espresso", "color": "brown", "parts": 1},
                    {"name": "milk", "color": "white", "parts": "3"}
                ]}),
            ),
            "manager",
        );
        let (status, body) = send(app_over(db.clone(), 10), request).await;
        assert_eq!(status, StatusCode::CREATED);
        let id = body["drinks"][0]["id"].as_i64().unwrap();
        assert_eq!(body["drinks"][0]["recipe"][1]["parts"], 3);

        let mut request = with_token(
            post_json(&format!("/drinks/{id}"), json!({"title": "Flat white"})),
            "manager",
        );
        *request.method_mut() = Method::PATCH;
        let (status, body) = send(app_over(db.clone(), 10), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["drinks"][0]["title"], "Flat white");
        assert_eq!(body["drinks"][0]["recipe"][0]["name"], "espresso");

        let delete = |id: i64| {
            with_token(
                Request::delete(format!("/drinks/{id}"))
                    .body(Body::empty())
                    .unwrap(),
                "manager",
            )
        };
        let (status, body) = send(app_over(db.clone(), 10), delete(id)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"success": true, "delete": id}));

        let (status, body) = send(app_over(db, 10), delete(id)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "not_found");
    }

    #[tokio::test]
    async fn test_patch_missing_drink_is_not_found() {
        let mut request = with_token(
            post_json("/drinks/999", json!({"title": "Ghost"})),
            "manager",
        );
        *request.method_mut() = Method::PATCH;
        let (status, _) = send(app().await, request).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_duplicate_drink_title_is_unprocessable() {
        let request = with_token(
            post_json(
                "/drinks",
                json!({"title": "water", "recipe": {"name": "water", "color": "blue", "parts": 1}}),
            ),
            "manager",
        );
        let (status, body) = send(app().await, request).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"], "unprocessable");
    }
}
