pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod slack;
pub mod validation;

use crate::config::{Config, LoggingConfig};
use crate::error::AppResult;
use crate::slack::{InviteClient, SlackInviteClient};
use axum::{Router, middleware::from_fn};
use std::sync::Arc;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any, CorsLayer},
};
use tracing_subscriber::EnvFilter;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub slack: Arc<dyn InviteClient>,
}

impl AppState {
    pub fn new(config: Config) -> AppResult<Self> {
        let slack = SlackInviteClient::new(config.slack())?;
        Ok(Self::with_client(config, Arc::new(slack)))
    }

    /// Wires a custom invite client, e.g. a stub in tests.
    pub fn with_client(config: Config, slack: Arc<dyn InviteClient>) -> Self {
        Self {
            config: Arc::new(config),
            slack,
        }
    }
}

/// Full application: routes plus request tracking, CORS and panic isolation.
pub fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    routes::create_router(Arc::new(state))
        .layer(cors)
        .layer(CatchPanicLayer::custom(middleware::handle_panic))
        .layer(from_fn(middleware::request_tracking_middleware))
}

pub fn init_tracing(config: &LoggingConfig) {
    let level_filter = match config.level.as_str() {
        "trace" => "trace",
        "debug" => "debug",
        "info" => "info",
        "warn" => "warn",
        "error" => "error",
        _ => "info",
    };

    // RUST_LOG 优先
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level_filter));

    match config.format.as_str() {
        "json" => {
            tracing_subscriber::fmt().with_env_filter(filter).json().init();
        }
        _ => {
            tracing_subscriber::fmt().with_env_filter(filter).init();
        }
    }
}
