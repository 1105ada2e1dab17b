use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::domain::store::StoreRejection;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Resource not found: {0}")]
    NotFound(String),
    #[error("Unauthorized")]
    Unauthorized,
    #[error("Invalid input: {0}")]
    Validation(String),
    /// Raw rejection text from the external auth service. Mapped to a
    /// friendly message before it ever reaches a response.
    #[error("Auth provider rejected the request: {0}")]
    AuthProvider(String),
    /// User-facing auth failure, already friendly.
    #[error("{0}")]
    Auth(String),
    #[error("Auth service unreachable: {0}")]
    AuthUpstream(String),
    #[error("Internal server error")]
    Internal,
}

impl From<StoreRejection> for AppError {
    fn from(rejection: StoreRejection) -> Self {
        match rejection {
            StoreRejection::NotFound { entity, id } => {
                AppError::NotFound(format!("{} not found: {}", entity, id))
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Database(e) => {
                error!("Database error: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string())
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, "Unauthorized".to_string()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::AuthProvider(raw) => {
                // Should have been rewritten by the auth service.
                error!("Unmapped auth provider error: {}", raw);
                (StatusCode::UNAUTHORIZED, raw.clone())
            }
            AppError::Auth(msg) => (StatusCode::UNAUTHORIZED, msg.clone()),
            AppError::AuthUpstream(msg) => {
                error!("Auth service failure: {}", msg);
                (StatusCode::BAD_GATEWAY, "잠시 후 다시 시도해 주세요.".to_string())
            }
            AppError::Internal => (StatusCode::INTERNAL_SERVER_ERROR, "Internal error".to_string()),
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}
