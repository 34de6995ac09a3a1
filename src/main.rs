use slack_invite_relay::{
    AppState, config::Config, create_app, error::AppError, init_tracing,
};
use std::net::SocketAddr;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let config = Config::from_env()?;
    init_tracing(&config.logging());

    tracing::info!(config = ?config, "Configuration loaded");
    if config.slack_credentials().is_err() {
        tracing::warn!("SLACK_XOXC / SLACK_XOXD not set; invites will fail until configured");
    }

    let addr: SocketAddr = config
        .server_address()
        .parse()
        .map_err(|e| AppError::Config(format!("Invalid server address: {}", e)))?;

    let app = create_app(AppState::new(config)?);

    tracing::info!("Server running at http://{}", addr);
    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    Ok(())
}
