//! Core types for pr2doc

use serde::{Deserialize, Serialize};

/// A single changelog entry collected from one pull request
///
/// One `Document` is produced per resolved PR number, in the order the
/// constituent commits referenced them. A failed PR lookup still yields a
/// `Document` (with an error placeholder title), so the output keeps its
/// slot in the sequence.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Document {
    /// Pull request title, or an error placeholder when the lookup failed
    pub title: String,
    /// Content of the tagged description block, empty when absent
    pub description: String,
}

/// A commit as returned by the repository host
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Commit {
    /// Commit SHA (hex)
    pub sha: String,
    /// Full commit message
    pub message: String,
}

/// Title and body of a pull request
///
/// The collector already knows the number it asked for, so only the text
/// fields come back from the host.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PullRequestDetails {
    /// PR title
    pub title: String,
    /// PR body/description (None when the PR has no body)
    pub body: Option<String>,
}

/// GitHub repository coordinates
#[derive(Debug, Clone)]
pub struct RepoConfig {
    /// Repository owner (user or organization)
    pub owner: String,
    /// Repository name
    pub repo: String,
    /// Custom API host (None for github.com)
    pub host: Option<String>,
}
