// Mapping from application errors to HTTP responses.
//
// Responsibilities
// - Domain rejections are 400, missing records 404, uniqueness clashes 409, backend failures 500.
// - Bodies carry `{"error": "<message>"}`. Backend details are logged, not returned.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::shared::core::errors::ApplicationError;
use crate::shared::infrastructure::repository::RepositoryError;

pub fn error_body(status: StatusCode, message: impl std::fmt::Display) -> Response {
    (status, Json(json!({ "error": message.to_string() }))).into_response()
}

pub fn error_response(error: ApplicationError) -> Response {
    match error {
        ApplicationError::Domain(reason) => error_body(StatusCode::BAD_REQUEST, reason),
        ApplicationError::Repository(RepositoryError::NotFound(what)) => {
            error_body(StatusCode::NOT_FOUND, format!("{what} not found"))
        }
        ApplicationError::Repository(RepositoryError::Conflict(reason)) => {
            error_body(StatusCode::CONFLICT, reason)
        }
        ApplicationError::Repository(RepositoryError::Backend(reason)) => {
            tracing::error!(%reason, "repository failure");
            error_body(StatusCode::INTERNAL_SERVER_ERROR, "internal server error")
        }
    }
}
