use axum::{
    body::{Bytes, Full},
    http::{HeaderValue, Response, StatusCode, header::CONTENT_TYPE},
};
use std::any::Any;

use crate::models::api::ErrorResponse;

/// Converts a handler panic into a 500 JSON error so one bad request
/// cannot take the process down.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response<Full<Bytes>> {
    let message = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Unknown internal error".to_string()
    };

    tracing::error!("Handler panicked: {}", message);

    let body = serde_json::to_vec(&ErrorResponse::new(message)).unwrap_or_default();

    let mut response = Response::new(Full::from(body));
    *response.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
    response
        .headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    response
}
