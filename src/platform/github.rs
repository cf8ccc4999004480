//! GitHub repository host implementation

use crate::error::{Error, Result};
use crate::platform::RepoService;
use crate::types::{Commit, PullRequestDetails, RepoConfig};
use async_trait::async_trait;
use octocrab::Octocrab;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

// REST response types for the commit endpoints (octocrab's commit models
// carry far more than we need, so we deserialize the minimal shape ourselves)

#[derive(Deserialize)]
struct RestCommit {
    sha: String,
    commit: RestCommitInner,
}

#[derive(Deserialize)]
struct RestCommitInner {
    message: String,
}

impl From<RestCommit> for Commit {
    fn from(c: RestCommit) -> Self {
        Self {
            sha: c.sha,
            message: c.commit.message,
        }
    }
}

#[derive(Deserialize)]
struct RestError {
    message: String,
}

/// Extract the `message` field from a GitHub REST error body, if present.
///
/// GitHub reports failures as `{"message": "...", ...}`; anything else
/// (HTML error pages, truncated bodies) yields `None` and the caller falls
/// back to the bare HTTP status.
pub fn rest_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<RestError>(body)
        .ok()
        .map(|e| e.message)
}

/// GitHub service using octocrab
pub struct GitHubService {
    client: Octocrab,
    config: RepoConfig,
    /// Token for raw HTTP requests (commit endpoints)
    token: String,
    /// HTTP client for raw requests (commit endpoints)
    http_client: Client,
    /// API host for raw requests
    api_host: String,
}

impl GitHubService {
    /// Create a new GitHub service
    pub fn new(token: &str, config: RepoConfig) -> Result<Self> {
        let mut builder = Octocrab::builder().personal_token(token.to_string());

        let api_host = if let Some(ref h) = config.host {
            let base_url = format!("https://{h}/api/v3");
            builder = builder
                .base_uri(&base_url)
                .map_err(|e| Error::GitHubApi(e.to_string()))?;
            format!("{h}/api/v3")
        } else {
            "api.github.com".to_string()
        };

        let client = builder
            .build()
            .map_err(|e| Error::GitHubApi(e.to_string()))?;

        let http_client = Client::builder()
            .user_agent("pr2doc")
            .build()
            .map_err(|e| Error::GitHubApi(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            config,
            token: token.to_string(),
            http_client,
            api_host,
        })
    }

    /// Perform an authenticated GET against the REST API and decode the body
    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str, what: &str) -> Result<T> {
        let response = self
            .http_client
            .get(url)
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Accept", "application/vnd.github+json")
            .header("X-GitHub-Api-Version", "2022-11-28")
            .send()
            .await
            .map_err(|e| Error::GitHubApi(format!("Failed to fetch {what}: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let detail = response
                .text()
                .await
                .ok()
                .and_then(|body| rest_error_message(&body))
                .map(|msg| format!(" ({msg})"))
                .unwrap_or_default();
            return Err(Error::GitHubApi(format!(
                "Failed to fetch {what}: HTTP {status}{detail}"
            )));
        }

        response
            .json()
            .await
            .map_err(|e| Error::GitHubApi(format!("Failed to parse {what}: {e}")))
    }
}

#[async_trait]
impl RepoService for GitHubService {
    async fn get_commit(&self, sha: &str) -> Result<Commit> {
        debug!(sha, "fetching commit");
        let url = format!(
            "https://{}/repos/{}/{}/commits/{sha}",
            self.api_host, self.config.owner, self.config.repo
        );

        let commit: RestCommit = self.get_json(&url, &format!("commit {sha}")).await?;
        debug!(sha, "fetched commit");
        Ok(commit.into())
    }

    async fn get_pull_request(&self, number: u64) -> Result<PullRequestDetails> {
        debug!(number, "fetching pull request");
        let pr = self
            .client
            .pulls(&self.config.owner, &self.config.repo)
            .get(number)
            .await?;

        let details = PullRequestDetails {
            title: pr.title.clone().unwrap_or_default(),
            body: pr.body.clone(),
        };
        debug!(number, title = %details.title, "fetched pull request");
        Ok(details)
    }

    async fn get_pull_request_commits(&self, number: u64) -> Result<Vec<Commit>> {
        debug!(number, "listing pull request commits");
        let url = format!(
            "https://{}/repos/{}/{}/pulls/{number}/commits",
            self.api_host, self.config.owner, self.config.repo
        );

        let commits: Vec<RestCommit> = self
            .get_json(&url, &format!("commits of PR #{number}"))
            .await?;
        debug!(number, count = commits.len(), "listed pull request commits");
        Ok(commits.into_iter().map(Commit::from).collect())
    }
}
