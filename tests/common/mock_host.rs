//! Mock repository host for testing
//!
//! These are test utilities - not all may be used in current tests but are
//! available for future test development.

#![allow(dead_code)]

use async_trait::async_trait;
use pr2doc::error::{Error, Result};
use pr2doc::platform::RepoService;
use pr2doc::types::{Commit, PullRequestDetails};
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

/// Simple mock repository host for testing
///
/// Features:
/// - Fixture maps for commits, pull requests, and PR commit listings
/// - Call tracking for verification
/// - Error injection for failure path testing
#[derive(Default)]
pub struct MockRepoService {
    commits: Mutex<HashMap<String, Commit>>,
    pull_requests: Mutex<HashMap<u64, PullRequestDetails>>,
    pr_commits: Mutex<HashMap<u64, Vec<Commit>>>,
    // Call tracking
    get_commit_calls: Mutex<Vec<String>>,
    get_pull_request_calls: Mutex<Vec<u64>>,
    get_pr_commits_calls: Mutex<Vec<u64>>,
    // Error injection
    failing_pull_requests: Mutex<HashSet<u64>>,
}

impl MockRepoService {
    /// Create an empty mock
    pub fn new() -> Self {
        Self::default()
    }

    // === Fixture setup ===

    /// Register a commit fixture
    pub fn add_commit(&self, sha: &str, message: &str) {
        self.commits.lock().unwrap().insert(
            sha.to_string(),
            Commit {
                sha: sha.to_string(),
                message: message.to_string(),
            },
        );
    }

    /// Register a pull request fixture
    pub fn add_pull_request(&self, number: u64, title: &str, body: Option<&str>) {
        self.pull_requests.lock().unwrap().insert(
            number,
            PullRequestDetails {
                title: title.to_string(),
                body: body.map(String::from),
            },
        );
    }

    /// Register the constituent commits of a pull request
    pub fn add_pr_commits(&self, number: u64, messages: &[&str]) {
        let commits = messages
            .iter()
            .enumerate()
            .map(|(i, message)| Commit {
                sha: format!("{number:x}{i:07x}"),
                message: (*message).to_string(),
            })
            .collect();
        self.pr_commits.lock().unwrap().insert(number, commits);
    }

    // === Error injection ===

    /// Make `get_pull_request` fail for this number even if a fixture exists
    pub fn fail_pull_request(&self, number: u64) {
        self.failing_pull_requests.lock().unwrap().insert(number);
    }

    // === Call verification ===

    /// SHAs passed to `get_commit`, in order
    pub fn get_commit_calls(&self) -> Vec<String> {
        self.get_commit_calls.lock().unwrap().clone()
    }

    /// PR numbers passed to `get_pull_request`, in order
    pub fn get_pull_request_calls(&self) -> Vec<u64> {
        self.get_pull_request_calls.lock().unwrap().clone()
    }

    /// PR numbers passed to `get_pull_request_commits`, in order
    pub fn get_pr_commits_calls(&self) -> Vec<u64> {
        self.get_pr_commits_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl RepoService for MockRepoService {
    async fn get_commit(&self, sha: &str) -> Result<Commit> {
        self.get_commit_calls.lock().unwrap().push(sha.to_string());
        self.commits
            .lock()
            .unwrap()
            .get(sha)
            .cloned()
            .ok_or_else(|| Error::GitHubApi(format!("unknown commit {sha}")))
    }

    async fn get_pull_request(&self, number: u64) -> Result<PullRequestDetails> {
        self.get_pull_request_calls.lock().unwrap().push(number);
        if self.failing_pull_requests.lock().unwrap().contains(&number) {
            return Err(Error::GitHubApi(format!("injected failure for PR #{number}")));
        }
        self.pull_requests
            .lock()
            .unwrap()
            .get(&number)
            .cloned()
            .ok_or_else(|| Error::GitHubApi(format!("unknown PR #{number}")))
    }

    async fn get_pull_request_commits(&self, number: u64) -> Result<Vec<Commit>> {
        self.get_pr_commits_calls.lock().unwrap().push(number);
        self.pr_commits
            .lock()
            .unwrap()
            .get(&number)
            .cloned()
            .ok_or_else(|| Error::GitHubApi(format!("unknown PR #{number}")))
    }
}
