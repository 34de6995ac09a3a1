use axum::{Json, http::StatusCode, response::IntoResponse};

use crate::models::api::HealthResponse;

pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(HealthResponse::healthy()))
}
