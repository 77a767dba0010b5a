//! Brand guide repository synchronization
//!
//! Files are pushed one at a time, in order. For each file the current blob
//! SHA is looked up first; a failed lookup of any kind falls through to a
//! plain create. A failed write counts against that file only and the batch
//! carries on. Nothing is retried.

use std::sync::Arc;

use serde::Serialize;
use tracing::{error, info, warn};

use super::{ContentsApi, FileUpdate, RepoTarget};
use crate::generators::FileDescriptor;

pub const MISSING_TARGET_MESSAGE: &str = "GitHub configuration missing from request";
pub const MISSING_TOKEN_MESSAGE: &str = "GitHub token not configured";

/// Outcome of one synchronization run
///
/// `success` means the run got past configuration and attempted every file,
/// not that every file landed; see `files_updated`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncResult {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repo_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub figma_file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub files_attempted: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub files_updated: Option<usize>,
}

impl SyncResult {
    pub fn skipped(message: &str) -> Self {
        Self {
            success: false,
            message: message.to_string(),
            repo_url: None,
            repo_name: None,
            figma_file: None,
            files_attempted: None,
            files_updated: None,
        }
    }
}

#[derive(Clone)]
pub struct RepositorySynchronizer {
    api: Option<Arc<dyn ContentsApi>>,
}

impl RepositorySynchronizer {
    /// `api` is `None` when no credential is configured.
    pub fn new(api: Option<Arc<dyn ContentsApi>>) -> Self {
        Self { api }
    }

    pub fn unconfigured() -> Self {
        Self { api: None }
    }

    pub fn is_configured(&self) -> bool {
        self.api.is_some()
    }

    /// Push `files` to `target` in order.
    pub async fn sync(
        &self,
        target: Option<&RepoTarget>,
        source_name: &str,
        files: &[FileDescriptor],
    ) -> SyncResult {
        let Some(target) = target else {
            warn!("{}", MISSING_TARGET_MESSAGE);
            return SyncResult::skipped(MISSING_TARGET_MESSAGE);
        };
        let Some(api) = self.api.as_deref() else {
            warn!("{}", MISSING_TOKEN_MESSAGE);
            return SyncResult::skipped(MISSING_TOKEN_MESSAGE);
        };

        info!("Processing brand guide for: {}", source_name);
        info!("Updating repository: {}", target);

        let mut updated = 0;
        for file in files {
            match push_file(api, target, file).await {
                Ok(()) => {
                    updated += 1;
                    info!("Updated: {}", file.path);
                }
                Err(e) => error!("Failed to update {}: {}", file.path, e),
            }
        }

        info!(
            "GitHub repository sync finished: {}/{} files updated",
            updated,
            files.len()
        );
        SyncResult {
            success: true,
            message: format!("Repository updated successfully. {} files updated.", updated),
            repo_url: Some(target.html_url()),
            repo_name: Some(target.repo.clone()),
            figma_file: Some(source_name.to_string()),
            files_attempted: Some(files.len()),
            files_updated: Some(updated),
        }
    }
}

async fn push_file(
    api: &dyn ContentsApi,
    target: &RepoTarget,
    file: &FileDescriptor,
) -> Result<(), crate::error::GitHubError> {
    let existing = match api.get_file(target, &file.path).await {
        Ok(handle) => handle.version_token,
        Err(e) => {
            warn!("Could not read {} ({}); creating instead", file.path, e);
            None
        }
    };

    let update = FileUpdate {
        path: &file.path,
        content: &file.content,
        message: &file.message,
        version_token: existing.as_deref(),
    };
    api.put_file(target, &update).await
}
