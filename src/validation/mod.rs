pub mod invitation;

use axum::{
    Json, async_trait,
    extract::{FromRequest, rejection::JsonRejection},
    http::Request,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::AppError;

/// 验证的 JSON 提取器
///
/// Malformed bodies are reported with the parser's own message; bodies that
/// parse but fail validation get the caller-supplied message from
/// [`ValidationMessage`].
pub struct ValidatedJson<T>(pub T);

/// Message returned when a parsed payload fails validation.
pub trait ValidationMessage {
    fn validation_message(errors: &validator::ValidationErrors) -> String;
}

#[async_trait]
impl<T, S> FromRequest<S, axum::body::Body> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + ValidationMessage,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(
        req: Request<axum::body::Body>,
        state: &S,
    ) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(json_rejection_to_error)?;

        value
            .validate()
            .map_err(|errors| AppError::bad_request(T::validation_message(&errors)))?;

        Ok(ValidatedJson(value))
    }
}

fn json_rejection_to_error(rejection: JsonRejection) -> AppError {
    let message = match rejection {
        JsonRejection::MissingJsonContentType(_) => {
            "No JSON data provided: expected `Content-Type: application/json`".to_string()
        }
        JsonRejection::JsonSyntaxError(e) => format!("Invalid JSON: {}", e.body_text()),
        JsonRejection::JsonDataError(e) => format!("Invalid JSON payload: {}", e.body_text()),
        other => other.body_text(),
    };
    AppError::bad_request(message)
}
