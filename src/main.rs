//! brand-token-sync — webhook server for Figma design-token exports.
//!
//! See `brand_token_sync::config` for the environment variables it reads.

use anyhow::{Context, Result};
use brand_token_sync::api::{build_router, AppState};
use brand_token_sync::AppConfig;
use tokio::net::TcpListener;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,brand_token_sync=debug,tower_http=debug".into()),
        )
        .init();

    let config = AppConfig::from_env();
    info!("Theme stylesheet: {}", config.theme_css_path.display());

    let state = AppState::from_config(&config).context("failed to build GitHub client")?;
    if !state.sync.is_configured() {
        warn!("GITHUB_TOKEN not set; repository sync will be skipped");
    }
    let app = build_router(state);

    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind to {addr}"))?;
    info!("brand-token-sync listening on {addr}");

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
