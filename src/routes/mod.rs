pub mod health;
pub mod invitations;

use crate::AppState;
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/invite-to-channel", post(invitations::invite_to_channel))
        .route("/health", get(health::health_check))
        .with_state(state)
}
