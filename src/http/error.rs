//! HTTP error handling and response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::services::SyncError;

/// API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Resource not found
    NotFound(String),
    /// Invalid request (validation error)
    BadRequest(String),
    /// Caller did not identify itself
    Unauthorized(String),
    /// Caller identified but lacks the admin role
    Forbidden(String),
    /// A required collaborator is not configured
    ServiceUnavailable(String),
    /// Internal server error
    Internal(String),
    /// Repository error
    Repository(crate::db::repository::RepositoryError),
    /// Flight sync error, tagged with the failing stage
    Sync(SyncError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, ApiError::new("NOT_FOUND", msg)),
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ApiError::new("BAD_REQUEST", msg))
            }
            AppError::Unauthorized(msg) => (
                StatusCode::UNAUTHORIZED,
                ApiError::new("UNAUTHORIZED", msg),
            ),
            AppError::Forbidden(msg) => (StatusCode::FORBIDDEN, ApiError::new("FORBIDDEN", msg)),
            AppError::ServiceUnavailable(msg) => (
                StatusCode::SERVICE_UNAVAILABLE,
                ApiError::new("SERVICE_UNAVAILABLE", msg),
            ),
            AppError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::new("INTERNAL_ERROR", msg),
            ),
            AppError::Repository(e) => {
                if e.is_not_found() {
                    (StatusCode::NOT_FOUND, ApiError::new("NOT_FOUND", e.to_string()))
                } else {
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        ApiError::new("REPOSITORY_ERROR", e.to_string()),
                    )
                }
            }
            AppError::Sync(e) => {
                // Upstream trouble (fetch/shape) is a gateway problem; only a
                // persistence failure is ours.
                let status = match e {
                    SyncError::Fetch(_) | SyncError::Locate(_) => StatusCode::BAD_GATEWAY,
                    SyncError::Persist(_) => StatusCode::INTERNAL_SERVER_ERROR,
                };
                let stage = e.stage();
                (
                    status,
                    ApiError::new("SYNC_FAILED", e.to_string())
                        .with_details(format!("stage={}", stage)),
                )
            }
        };

        (status, Json(error)).into_response()
    }
}

impl From<crate::db::repository::RepositoryError> for AppError {
    fn from(err: crate::db::repository::RepositoryError) -> Self {
        AppError::Repository(err)
    }
}

impl From<SyncError> for AppError {
    fn from(err: SyncError) -> Self {
        AppError::Sync(err)
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}
