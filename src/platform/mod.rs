//! Repository host access
//!
//! Provides the capability interface the collector consumes, plus the
//! GitHub implementation. The trait is the seam that keeps the collector
//! testable without network access.

mod github;

pub use github::{GitHubService, rest_error_message};

use crate::error::Result;
use crate::types::{Commit, PullRequestDetails, RepoConfig};
use async_trait::async_trait;

/// Repository host operations consumed by the document collector
///
/// Three read-only lookups are all the pipeline needs. A mock implementing
/// this trait substitutes fixture data in tests.
#[async_trait]
pub trait RepoService: Send + Sync {
    /// Fetch a single commit by SHA. Fails when the SHA is unknown.
    async fn get_commit(&self, sha: &str) -> Result<Commit>;

    /// Fetch a pull request's title and body. Fails when the number is unknown.
    async fn get_pull_request(&self, number: u64) -> Result<PullRequestDetails>;

    /// Fetch the ordered commits that make up a pull request.
    /// Fails when the number is unknown.
    async fn get_pull_request_commits(&self, number: u64) -> Result<Vec<Commit>>;
}

/// Create a repository host service for the configured repo
pub fn create_repo_service(config: RepoConfig, token: &str) -> Result<Box<dyn RepoService>> {
    Ok(Box::new(GitHubService::new(token, config)?))
}
