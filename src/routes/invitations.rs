use crate::AppState;
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use std::sync::Arc;

use crate::models::api::InviteRequest;
use crate::services::invitations_service::InvitationsService;
use crate::validation::ValidatedJson;

/// 邀请邮箱用户以访客身份加入指定频道
pub async fn invite_to_channel(
    State(state): State<Arc<AppState>>,
    ValidatedJson(payload): ValidatedJson<InviteRequest>,
) -> impl IntoResponse {
    match InvitationsService::invite_to_channel(&state.config, state.slack.as_ref(), &payload)
        .await
    {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(err) => err.into_response(),
    }
}
