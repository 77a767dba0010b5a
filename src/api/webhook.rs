//! Webhook handlers
//!
//! A parsed payload always gets a 200: the local rewrite and the GitHub sync
//! are both attempted and their outcomes reported in the body. Only a body
//! that is not JSON produces a 500.

use axum::{
    body::Bytes,
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use tracing::{debug, error, info};

use super::{cors_headers, AppState};
use crate::error::AppError;
use crate::generators::brand_guide_files;
use crate::github::SyncResult;
use crate::tokens::WebhookPayload;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookResponse {
    pub success: bool,
    pub message: String,
    pub timestamp: String,
    pub data_received: bool,
    pub theme_updated: bool,
    pub color_count: usize,
    pub github: SyncResult,
}

#[derive(Debug, Serialize)]
pub struct LivenessResponse {
    pub message: &'static str,
    pub timestamp: String,
    pub method: &'static str,
}

fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// POST /api/webhook
pub async fn receive(State(state): State<AppState>, body: Bytes) -> Result<Response, AppError> {
    let payload = WebhookPayload::from_slice(&body)?;

    info!("Figma webhook data received at {}", timestamp());
    if let Ok(pretty) = serde_json::to_string_pretty(payload.raw()) {
        debug!("Data: {}", pretty);
    }

    let collection = payload.extract_collection();
    let meta = payload.file_meta();

    let theme_updated = match state.theme.apply(&collection.tokens).await {
        Ok(_) => true,
        Err(e) => {
            error!("Failed to update @theme section: {}", e);
            false
        }
    };

    let files = brand_guide_files(&collection.tokens, &meta);
    let github = state
        .sync
        .sync(payload.github_target().as_ref(), &meta.name, &files)
        .await;

    log_collections(&payload);

    let message = if theme_updated {
        "Data received and @theme section updated successfully"
    } else {
        "Data received but @theme update failed"
    };

    let response = WebhookResponse {
        success: true,
        message: message.to_string(),
        timestamp: timestamp(),
        data_received: true,
        theme_updated,
        color_count: collection.variable_count,
        github,
    };
    Ok((StatusCode::OK, cors_headers(), Json(response)).into_response())
}

fn log_collections(payload: &WebhookPayload) {
    for (index, collection) in payload.collections().iter().enumerate() {
        let variables = collection["variables"]
            .as_array()
            .map(Vec::as_slice)
            .unwrap_or(&[]);
        debug!(
            "Collection {}: {} (id: {}, variables: {})",
            index + 1,
            collection["name"],
            collection["id"],
            variables.len()
        );
        for (var_index, variable) in variables.iter().enumerate() {
            debug!(
                "  Variable {}: {} type={} values={}",
                var_index + 1,
                variable["name"],
                variable["type"],
                variable["values"]
            );
        }
    }
}

/// GET /api/webhook
pub async fn liveness() -> impl IntoResponse {
    let body = LivenessResponse {
        message: "Webhook endpoint is active",
        timestamp: timestamp(),
        method: "GET",
    };
    (StatusCode::OK, cors_headers(), Json(body))
}

/// OPTIONS /api/webhook
pub async fn preflight() -> impl IntoResponse {
    (
        StatusCode::OK,
        cors_headers(),
        [(header::ACCESS_CONTROL_MAX_AGE, "86400")],
    )
}
