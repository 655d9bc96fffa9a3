use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use rihla_core::{RepoError, ValidationError};

#[derive(Debug)]
pub enum AppError {
    Authentication(String),
    Validation(String),
    NotFound(String),
    Conflict(String),
    Internal(String),
    Anyhow(anyhow::Error),
}

impl AppError {
    /// Store failures keep their classification: a duplicate row is a
    /// conflict, a missing row a 404, anything else carries the raw error
    /// text for the transient notification.
    pub fn from_repo(err: RepoError) -> Self {
        match err {
            RepoError::Duplicate => AppError::Conflict("السجل موجود بالفعل".to_string()),
            RepoError::NotFound => AppError::NotFound("السجل غير موجود".to_string()),
            RepoError::Backend(msg) => AppError::Internal(msg),
        }
    }

    pub fn from_validation(err: ValidationError) -> Self {
        AppError::Validation(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::Authentication(msg) => (StatusCode::UNAUTHORIZED, msg),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            AppError::Internal(msg) => {
                tracing::error!("Internal Server Error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
            AppError::Anyhow(err) => {
                tracing::error!("Internal Server Error: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self::Anyhow(err.into())
    }
}
