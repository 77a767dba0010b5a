//! HTTP API
//!
//! POST    /api/webhook  — receive a Figma token export
//! GET     /api/webhook  — liveness probe
//! OPTIONS /api/webhook  — CORS preflight
//! GET     /api/palette  — current brand swatches with RGB/CMYK formats

pub mod palette_routes;
pub mod webhook;

use std::sync::Arc;

use axum::{
    http::{header, HeaderName},
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;
use crate::error::GitHubError;
use crate::github::{ContentsApi, GitHubClient, RepositorySynchronizer};
use crate::theme::ThemeFile;

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub theme: ThemeFile,
    pub sync: RepositorySynchronizer,
}

impl AppState {
    pub fn new(theme: ThemeFile, sync: RepositorySynchronizer) -> Self {
        Self { theme, sync }
    }

    /// Wire the real GitHub client when a token is configured.
    pub fn from_config(config: &AppConfig) -> Result<Self, GitHubError> {
        let api = match &config.github_token {
            Some(token) => {
                let client = GitHubClient::new(&config.github_api_url, token)?;
                Some(Arc::new(client) as Arc<dyn ContentsApi>)
            }
            None => None,
        };

        Ok(Self::new(
            ThemeFile::new(&config.theme_css_path),
            RepositorySynchronizer::new(api),
        ))
    }
}

/// Cross-origin headers sent with every response
pub fn cors_headers() -> [(HeaderName, &'static str); 3] {
    [
        (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
        (
            header::ACCESS_CONTROL_ALLOW_METHODS,
            "GET, POST, PUT, DELETE, OPTIONS",
        ),
        (
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            "Content-Type, Authorization",
        ),
    ]
}

/// Build the full axum router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/webhook",
            post(webhook::receive)
                .get(webhook::liveness)
                .options(webhook::preflight),
        )
        .route("/api/palette", get(palette_routes::get_palette))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
