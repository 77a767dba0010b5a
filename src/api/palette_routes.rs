//! GET /api/palette — brand swatches resolved against the local stylesheet.

use axum::{extract::State, response::IntoResponse, Json};
use tracing::warn;

use super::{cors_headers, AppState};
use crate::palette::resolve_palette;

pub async fn get_palette(State(state): State<AppState>) -> impl IntoResponse {
    let css = match state.theme.read().await {
        Ok(css) => Some(css),
        Err(e) => {
            warn!(
                "Could not read {}; using default swatches: {}",
                state.theme.path().display(),
                e
            );
            None
        }
    };

    (cors_headers(), Json(resolve_palette(css.as_deref())))
}
