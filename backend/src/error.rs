//! Error handling for the Inventory Management backend
//!
//! Every failure a handler can produce is an [`AppError`], rendered as
//! `{"error": {"code", "message", "field"}}` with a matching status code.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use shared::ValidationError;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Validation errors
    #[error("Validation error: {field}: {message}")]
    Validation { field: String, message: String },

    #[error("Resource not found: {0}")]
    NotFound(String),

    // Business logic errors
    #[error("Invalid state transition: {0}")]
    InvalidStateTransition(String),

    // Database errors
    #[error("Database unavailable: {0}")]
    DatabaseUnavailable(String),

    #[error("Database error: {0}")]
    DatabaseError(sqlx::Error),

    // Internal errors
    #[error("Internal server error")]
    InternalError(#[from] anyhow::Error),
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => {
                AppError::DatabaseUnavailable(err.to_string())
            }
            other => AppError::DatabaseError(other),
        }
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::Validation {
            field: err.field.to_string(),
            message: err.message.to_string(),
        }
    }
}

/// Error response structure
///
/// `detail` repeats the message at the top level, where the front-end reads it.
#[derive(Serialize)]
pub struct ErrorResponse {
    pub detail: String,
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl AppError {
    /// HTTP status this error is reported with
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InvalidStateTransition(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::DatabaseUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn detail(&self) -> ErrorDetail {
        match self {
            AppError::Validation { field, message } => ErrorDetail {
                code: "VALIDATION_ERROR".to_string(),
                message: format!("{} {}", field, message),
                field: Some(field.clone()),
            },
            AppError::NotFound(resource) => ErrorDetail {
                code: "NOT_FOUND".to_string(),
                message: format!("{} not found", resource),
                field: None,
            },
            AppError::InvalidStateTransition(msg) => ErrorDetail {
                code: "INVALID_STATE_TRANSITION".to_string(),
                message: msg.clone(),
                field: None,
            },
            AppError::DatabaseUnavailable(msg) => ErrorDetail {
                code: "DATABASE_UNAVAILABLE".to_string(),
                message: format!("Database unavailable: {}", msg),
                field: None,
            },
            AppError::DatabaseError(err) => ErrorDetail {
                code: "DATABASE_ERROR".to_string(),
                message: format!("Database error: {}", err),
                field: None,
            },
            AppError::InternalError(_) => ErrorDetail {
                code: "INTERNAL_ERROR".to_string(),
                message: "An internal server error occurred".to_string(),
                field: None,
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_detail = self.detail();

        // Log the error for debugging
        if status.is_server_error() {
            tracing::error!("Error: {:?}", self);
        } else {
            tracing::warn!("Request rejected: {}", self);
        }

        let body = ErrorResponse {
            detail: error_detail.message.clone(),
            error: error_detail,
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::Value;

    async fn render(err: AppError) -> (StatusCode, Value) {
        let response = err.into_response();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_validation_error_response() {
        let err: AppError = ValidationError::new("reorder_quantity", "must be positive").into();
        let (status, body) = render(err).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(body["error"]["field"], "reorder_quantity");
        assert_eq!(body["error"]["message"], "reorder_quantity must be positive");
        assert_eq!(body["detail"], "reorder_quantity must be positive");
    }

    #[tokio::test]
    async fn test_database_error_embeds_driver_text() {
        let (status, body) = render(sqlx::Error::RowNotFound.into()).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"]["code"], "DATABASE_ERROR");
        let message = body["error"]["message"].as_str().unwrap();
        assert!(message.starts_with("Database error: "));
        assert!(message.len() > "Database error: ".len());
        assert_eq!(body["detail"].as_str(), Some(message));
        assert!(body["error"].get("field").is_none());
    }

    #[tokio::test]
    async fn test_pool_timeout_is_unavailable() {
        let (status, body) = render(sqlx::Error::PoolTimedOut.into()).await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["error"]["code"], "DATABASE_UNAVAILABLE");
    }

    #[tokio::test]
    async fn test_not_found_and_transition_statuses() {
        let (status, body) = render(AppError::NotFound("Reorder 7".to_string())).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["message"], "Reorder 7 not found");
        assert_eq!(body["detail"], "Reorder 7 not found");

        let (status, _) =
            render(AppError::InvalidStateTransition("already received".to_string())).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_internal_error_hides_details() {
        let err = AppError::from(anyhow::anyhow!("secret detail"));
        let (status, body) = render(err).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"]["message"], "An internal server error occurred");
    }
}
