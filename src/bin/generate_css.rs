//! Regenerate the `@theme inline` block at build time.
//!
//! Reads the webhook payload JSON from `FIGMA_DATA` and rewrites the
//! stylesheet at `THEME_CSS_PATH`. With no `FIGMA_DATA` the stylesheet keeps
//! its default colors. Failures are logged and never fail the build.

use anyhow::Result;
use brand_token_sync::theme::ThemeFile;
use brand_token_sync::{AppConfig, WebhookPayload};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let Ok(figma_data) = std::env::var("FIGMA_DATA") else {
        info!("No FIGMA_DATA environment variable found, using default colors");
        return Ok(());
    };

    let payload = match WebhookPayload::from_slice(figma_data.as_bytes()) {
        Ok(payload) => payload,
        Err(e) => {
            error!("Error generating CSS from Figma data: {}", e);
            return Ok(());
        }
    };

    let config = AppConfig::from_env();
    let collection = payload.extract_collection();
    let theme = ThemeFile::new(&config.theme_css_path);

    match theme.apply(&collection.tokens).await {
        Ok(written) => info!(
            "CSS generated from Figma data during build ({} colors)",
            written
        ),
        Err(e) => error!("Error generating CSS from Figma data: {}", e),
    }

    Ok(())
}
