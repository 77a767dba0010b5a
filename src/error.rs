//! Error types for the token sync service
//!
//! Library code reports failures through these `thiserror` enums. Only a
//! malformed webhook body ever reaches the HTTP layer as an error; every other
//! failure is folded into the response body by the handlers.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::api::cors_headers;

/// Failures of the local theme block rewrite
#[derive(Error, Debug)]
pub enum ThemeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("no '@theme inline {{ ... }}' block found in {path}")]
    BlockNotFound { path: String },
}

/// Failures talking to the GitHub contents API
#[derive(Error, Debug)]
pub enum GitHubError {
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("GitHub API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("invalid GitHub client configuration: {0}")]
    Config(String),
}

impl GitHubError {
    /// True when the API answered 404 for the requested path
    pub fn is_not_found(&self) -> bool {
        matches!(self, GitHubError::Api { status: 404, .. })
    }
}

/// Errors surfaced by the HTTP handlers
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    MalformedPayload(#[from] serde_json::Error),
}

#[derive(Serialize)]
struct ErrorBody {
    success: bool,
    message: &'static str,
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!("Error processing webhook: {}", self);
        let body = ErrorBody {
            success: false,
            message: "Error processing webhook data",
            error: self.to_string(),
        };
        (StatusCode::INTERNAL_SERVER_ERROR, cors_headers(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_detection() {
        let err = GitHubError::Api {
            status: 404,
            message: "Not Found".into(),
        };
        assert!(err.is_not_found());

        let err = GitHubError::Api {
            status: 409,
            message: "sha mismatch".into(),
        };
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_api_error_message() {
        let err = GitHubError::Api {
            status: 422,
            message: "Invalid request".into(),
        };
        assert_eq!(err.to_string(), "GitHub API error: 422 - Invalid request");
    }

    #[test]
    fn test_malformed_payload_is_500() {
        let err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let response = AppError::from(err).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.headers()["access-control-allow-origin"], "*");
    }
}
