//! GitHub integration
//!
//! This module provides:
//! - [`ContentsApi`], the seam between the synchronizer and the hosting API
//! - [`GitHubClient`], the reqwest-backed implementation of the contents API
//! - [`RepositorySynchronizer`], which pushes the brand guide file by file

pub mod client;
pub mod sync;

use async_trait::async_trait;
use serde::Serialize;

use crate::error::GitHubError;

pub use client::GitHubClient;
pub use sync::{RepositorySynchronizer, SyncResult};

/// Owner and name of the repository receiving the brand guide
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepoTarget {
    pub owner: String,
    pub repo: String,
}

impl RepoTarget {
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
        }
    }

    pub fn html_url(&self) -> String {
        format!("https://github.com/{}/{}", self.owner, self.repo)
    }
}

impl std::fmt::Display for RepoTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

/// What the API knows about a stored file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemoteFileHandle {
    /// Blob SHA of the current revision; `None` means the file does not exist
    pub version_token: Option<String>,
}

/// A create-or-update request for one path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileUpdate<'a> {
    pub path: &'a str,
    pub content: &'a str,
    pub message: &'a str,
    /// Must be present when updating an existing file, absent when creating
    pub version_token: Option<&'a str>,
}

/// Minimal contents API contract: read file metadata, create or update a file
#[async_trait]
pub trait ContentsApi: Send + Sync {
    /// Fetch metadata for `path`. A missing file is `Ok` with no version token.
    async fn get_file(
        &self,
        target: &RepoTarget,
        path: &str,
    ) -> Result<RemoteFileHandle, GitHubError>;

    /// Create or update `path`. Non-success statuses are errors.
    async fn put_file(
        &self,
        target: &RepoTarget,
        update: &FileUpdate<'_>,
    ) -> Result<(), GitHubError>;
}
