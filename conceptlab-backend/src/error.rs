use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] mongodb::error::Error),

    #[error("Database connection attempt timed out")]
    DatabaseTimeout,

    #[error("Origin not allowed: {0}")]
    OriginNotAllowed(String),

    #[error("Not implemented: {0}")]
    NotImplemented(&'static str),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Server error: {0}")]
    ServerError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            AppError::OriginNotAllowed(_) => {
                (StatusCode::FORBIDDEN, "Cross-origin request denied")
            }
            AppError::NotImplemented(_) => (StatusCode::NOT_IMPLEMENTED, "Not implemented"),
            AppError::ConfigError(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Configuration error"),
            AppError::DatabaseError(_) => {
                tracing::error!("Database error: {}", self);
                (StatusCode::INTERNAL_SERVER_ERROR, "Database error")
            }
            AppError::DatabaseTimeout => {
                tracing::error!("Database timeout: {}", self);
                (StatusCode::INTERNAL_SERVER_ERROR, "Database error")
            }
            AppError::IoError(_) => {
                tracing::error!("IO error: {}", self);
                (StatusCode::INTERNAL_SERVER_ERROR, "IO error")
            }
            AppError::ServerError(_) => {
                tracing::error!("Server error: {}", self);
                (StatusCode::INTERNAL_SERVER_ERROR, "Server error")
            }
        };

        let body = Json(json!({
            "error": error_message,
            "message": self.to_string()
        }));

        (status, body).into_response()
    }
}
