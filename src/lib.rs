//! Brand Token Sync
//!
//! Receives design-token exports from Figma over a webhook and turns them into
//! a brand guide:
//!
//! - rewrites the `@theme inline { ... }` block of the local stylesheet
//! - renders `styles/colors.css`, `README.md`, `package.json` and `index.html`
//! - pushes those files to a GitHub repository through the contents API
//!
//! ## Call chain
//! Payload -> [`tokens::extract_collection`] -> {[`theme::ThemeFile`],
//! [`generators::brand_guide_files`] -> [`github::RepositorySynchronizer`]}
//! -> aggregated webhook response.

// Core error handling
pub mod error;

pub mod config;

// Token model and conversions
pub mod color;
pub mod tokens;

// Artifact rendering
pub mod generators;
pub mod theme;

// Remote synchronization
pub mod github;

pub mod palette;

// HTTP surface
pub mod api;

pub use config::AppConfig;
pub use error::{AppError, GitHubError, ThemeError};
pub use github::{GitHubClient, RepoTarget, RepositorySynchronizer, SyncResult};
pub use tokens::{Collection, FileMeta, Token, WebhookPayload};
