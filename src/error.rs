use crate::models::api::ErrorResponse;
use axum::{Json, http::StatusCode, response::IntoResponse};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Misconfigured: {0}")]
    Misconfigured(String),

    #[error("Upstream failure: {details}")]
    Upstream { details: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

pub const UPSTREAM_FAILURE_MESSAGE: &str = "Failed to invite user";

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Misconfigured(_)
            | AppError::Upstream { .. }
            | AppError::Config(_)
            | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status_code();
        let response = match self {
            AppError::BadRequest(message) => {
                tracing::warn!("Bad request: {}", message);
                ErrorResponse::new(message)
            }
            AppError::Misconfigured(message) => {
                tracing::error!("Misconfigured: {}", message);
                ErrorResponse::new(message)
            }
            AppError::Upstream { details } => {
                tracing::error!("Upstream failure: {}", details);
                ErrorResponse::with_details(UPSTREAM_FAILURE_MESSAGE, details)
            }
            AppError::Config(ref e) => {
                tracing::error!("Configuration error: {}", e);
                ErrorResponse::new("Configuration error")
            }
            AppError::Internal(message) => {
                tracing::error!("Internal error: {}", message);
                ErrorResponse::new(message)
            }
        };

        (status, Json(response)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

// 便捷的错误创建函数
impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn misconfigured(message: impl Into<String>) -> Self {
        Self::Misconfigured(message.into())
    }

    pub fn upstream(details: impl Into<String>) -> Self {
        Self::Upstream {
            details: details.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}
