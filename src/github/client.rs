//! GitHub contents API client
//!
//! `GET` and `PUT` on `/repos/{owner}/{repo}/contents/{path}`. File content is
//! sent base64 encoded, and the current blob SHA is echoed back on update so
//! GitHub can reject a write against a stale revision.

use async_trait::async_trait;
use base64::Engine;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::{Deserialize, Serialize};

use super::{ContentsApi, FileUpdate, RemoteFileHandle, RepoTarget};
use crate::error::GitHubError;

const ACCEPT_V3: &str = "application/vnd.github.v3+json";
const USER_AGENT: &str = concat!("brand-token-sync/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Deserialize)]
struct ContentsResponse {
    sha: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: Option<String>,
}

#[derive(Debug, Serialize)]
struct PutContentsBody<'a> {
    message: &'a str,
    content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    sha: Option<&'a str>,
}

impl<'a> PutContentsBody<'a> {
    fn from_update(update: &FileUpdate<'a>) -> Self {
        Self {
            message: update.message,
            content: base64::engine::general_purpose::STANDARD.encode(update.content),
            sha: update.version_token,
        }
    }
}

#[derive(Clone)]
pub struct GitHubClient {
    client: Client,
    api_base: String,
    token: String,
}

impl GitHubClient {
    pub fn new(api_base: impl Into<String>, token: impl Into<String>) -> Result<Self, GitHubError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| GitHubError::Config(e.to_string()))?;

        Ok(Self {
            client,
            api_base: api_base.into().trim_end_matches('/').to_string(),
            token: token.into(),
        })
    }

    fn contents_url(&self, target: &RepoTarget, path: &str) -> String {
        format!(
            "{}/repos/{}/{}/contents/{}",
            self.api_base,
            target.owner,
            target.repo,
            path.trim_start_matches('/')
        )
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("Authorization", format!("token {}", self.token))
            .header("Accept", ACCEPT_V3)
    }

    async fn api_error(response: Response) -> GitHubError {
        let status = response.status();
        let message = response
            .json::<ApiErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message)
            .unwrap_or_else(|| status.canonical_reason().unwrap_or("Unknown").to_string());
        GitHubError::Api {
            status: status.as_u16(),
            message,
        }
    }
}

#[async_trait]
impl ContentsApi for GitHubClient {
    async fn get_file(
        &self,
        target: &RepoTarget,
        path: &str,
    ) -> Result<RemoteFileHandle, GitHubError> {
        let url = self.contents_url(target, path);
        let response = self.authorized(self.client.get(&url)).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(RemoteFileHandle::default());
        }
        if !response.status().is_success() {
            return Err(Self::api_error(response).await);
        }

        let contents: ContentsResponse = response.json().await?;
        Ok(RemoteFileHandle {
            version_token: contents.sha,
        })
    }

    async fn put_file(
        &self,
        target: &RepoTarget,
        update: &FileUpdate<'_>,
    ) -> Result<(), GitHubError> {
        let url = self.contents_url(target, update.path);
        let body = PutContentsBody::from_update(update);

        let response = self
            .authorized(self.client.put(&url))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::api_error(response).await);
        }
        Ok(())
    }
}
