//! Error responses.
//!
//! Every failure leaves as `{"success": false, "error": <kind>, "message": ...}`
//! with a real HTTP status code.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use tracing::{error, warn};
use trivia_application::{AccessDenied, TriviaError};
use trivia_domain::RepositoryError;

/// JSON body of an error response
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub success: bool,
    pub error: &'static str,
    pub message: String,
    /// Offending field of a rejected payload
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<&'static str>,
}

/// Errors a handler can return
#[derive(Debug)]
pub enum ApiError {
    /// A use case failed
    Trivia(TriviaError),
    /// The request could not be decoded
    BadRequest(String),
    /// No route matches the path
    RouteNotFound,
    /// The path exists but not for this method
    MethodNotAllowed,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Trivia(TriviaError::Validation(_)) => StatusCode::BAD_REQUEST,
            ApiError::Trivia(TriviaError::NotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Trivia(TriviaError::NoEligibleQuestions(_)) => StatusCode::NOT_FOUND,
            ApiError::Trivia(TriviaError::Repository(e)) if e.is_constraint() => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            ApiError::Trivia(TriviaError::Repository(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Trivia(TriviaError::Access(AccessDenied::Unauthenticated(_))) => {
                StatusCode::UNAUTHORIZED
            }
            ApiError::Trivia(TriviaError::Access(AccessDenied::Forbidden(_))) => {
                StatusCode::FORBIDDEN
            }
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::RouteNotFound => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            ApiError::Trivia(e) => e.kind(),
            ApiError::BadRequest(_) => "bad_request",
            ApiError::RouteNotFound => "not_found",
            ApiError::MethodNotAllowed => "method_not_allowed",
        }
    }

    fn field(&self) -> Option<&'static str> {
        match self {
            ApiError::Trivia(TriviaError::Validation(e)) => Some(e.field()),
            _ => None,
        }
    }

    fn message(&self) -> String {
        match self {
            // Store details stay in the logs
            ApiError::Trivia(TriviaError::Repository(RepositoryError::Unavailable(_))) => {
                "Internal server error".to_string()
            }
            ApiError::Trivia(TriviaError::Repository(RepositoryError::Constraint(_))) => {
                "Unable to process".to_string()
            }
            ApiError::Trivia(e) => e.to_string(),
            ApiError::BadRequest(detail) => format!("Bad request: {detail}"),
            ApiError::RouteNotFound => "Resource not found".to_string(),
            ApiError::MethodNotAllowed => "Method not allowed".to_string(),
        }
    }
}

impl From<TriviaError> for ApiError {
    fn from(error: TriviaError) -> Self {
        ApiError::Trivia(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!("{} failed: {:?}", status, self);
        } else if let ApiError::Trivia(TriviaError::Repository(e)) = &self {
            warn!("Write rejected by store: {}", e);
        } else if let ApiError::Trivia(TriviaError::Access(e)) = &self {
            warn!("{}", e);
        }

        let body = ErrorBody {
            success: false,
            error: self.kind(),
            message: self.message(),
            field: self.field(),
        };
        (status, Json(body)).into_response()
    }
}
