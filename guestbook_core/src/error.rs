//! Application error types and handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

/// Shown to visitors for every failure whose cause stays server-side.
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred. Please try again.";

pub const MISSING_FIELDS_MESSAGE: &str = "Missing required fields (name, email, or message)";

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Notification error: {0}")]
    Notification(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl AppError {
    pub fn missing_fields() -> Self {
        AppError::BadRequest(MISSING_FIELDS_MESSAGE.to_string())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = match self {
            AppError::BadRequest(msg) => msg,
            AppError::Database(msg) => {
                tracing::error!("Database error: {}", msg);
                GENERIC_ERROR_MESSAGE.to_string()
            }
            AppError::Storage(msg) => {
                tracing::error!("Storage error: {}", msg);
                GENERIC_ERROR_MESSAGE.to_string()
            }
            AppError::Notification(msg) => {
                tracing::error!("Notification error: {}", msg);
                GENERIC_ERROR_MESSAGE.to_string()
            }
            AppError::IoError(err) => {
                tracing::error!("IO error: {:?}", err);
                GENERIC_ERROR_MESSAGE.to_string()
            }
        };

        let body = Json(json!({
            "message": message,
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::Database(err.to_string())
    }
}
