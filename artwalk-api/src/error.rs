use artwalk_core::CoreError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    AuthenticationError(String),
    #[error("{0}")]
    ValidationError(String),
    #[error("Only {available} ticket(s) available")]
    CapacityExceeded { available: i64 },
    #[error("{0}")]
    NotFoundError(String),
    /// `message` is shown to the caller; `details` carries the underlying
    /// cause and is only set outside production.
    #[error("{message}")]
    InternalServerError {
        message: String,
        details: Option<String>,
    },
}

impl AppError {
    /// Maps a domain error, using `context` as the public message for
    /// storage failures.
    pub fn from_core(err: CoreError, context: &str, expose_details: bool) -> Self {
        match err {
            CoreError::ValidationError(msg) => AppError::ValidationError(msg),
            CoreError::CapacityExceeded { available } => AppError::CapacityExceeded { available },
            CoreError::NotFound(msg) => AppError::NotFoundError(msg),
            CoreError::StorageError(cause) => {
                tracing::error!("{}: {}", context, cause);
                AppError::InternalServerError {
                    message: context.to_string(),
                    details: expose_details.then_some(cause),
                }
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        let (status, body) = match self {
            AppError::AuthenticationError(_) => (StatusCode::UNAUTHORIZED, json!({ "error": message })),
            AppError::ValidationError(_) => (StatusCode::BAD_REQUEST, json!({ "error": message })),
            AppError::CapacityExceeded { available } => (
                StatusCode::BAD_REQUEST,
                json!({ "error": message, "available": available }),
            ),
            AppError::NotFoundError(_) => (StatusCode::NOT_FOUND, json!({ "error": message })),
            AppError::InternalServerError { details: Some(details), .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": message, "details": details }),
            ),
            AppError::InternalServerError { details: None, .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, json!({ "error": message }))
            }
        };

        (status, Json(body)).into_response()
    }
}
