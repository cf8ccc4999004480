//! Document collection - walk from a commit hash to the PRs behind it
//!
//! The pipeline is strictly sequential: one host lookup at a time, in the
//! order the constituent commits dictate. Each invocation is independent
//! and carries no state across calls.

use crate::error::{Error, Result};
use crate::extract::{find_description, find_pr_number};
use crate::platform::RepoService;
use crate::types::Document;
use tracing::{debug, warn};

/// Identifier tagging the description block inside a PR body
pub const DESCRIPTION_IDENTIFIER: &str = "share";

/// Collect one [`Document`] per pull request bundled into the merge that
/// produced `commit_hash`.
///
/// The originating commit, its PR reference, and the constituent commit
/// listing are all required: failure at any of those steps aborts the whole
/// operation. Per-PR lookups are softer - a failed fetch yields a
/// placeholder entry and the batch continues.
///
/// Duplicate references are kept; the result preserves the order of the
/// constituent commits.
pub async fn collect_docs(
    host: &dyn RepoService,
    commit_hash: &str,
    identifier: &str,
) -> Result<Vec<Document>> {
    let commit = host.get_commit(commit_hash).await.map_err(|e| {
        Error::GitHubApi(format!("failed to fetch commit {commit_hash}: {e}"))
    })?;

    // Extractor errors and "no reference" are both fatal for the
    // originating commit, unlike the per-constituent handling below.
    let parent_pr = find_pr_number(&commit.message)?
        .ok_or_else(|| Error::NoPrReference(commit_hash.to_string()))?;
    debug!(parent_pr, "resolved originating pull request");

    let commits = host.get_pull_request_commits(parent_pr).await.map_err(|e| {
        Error::GitHubApi(format!("failed to list commits of PR #{parent_pr}: {e}"))
    })?;

    let mut pr_numbers = Vec::with_capacity(commits.len());
    for commit in &commits {
        match find_pr_number(&commit.message) {
            Ok(Some(number)) => pr_numbers.push(number),
            Ok(None) => {}
            Err(e) => {
                warn!(sha = %commit.sha, error = %e, "failed to extract PR number, skipping commit");
            }
        }
    }
    debug!(count = pr_numbers.len(), "resolved constituent pull requests");

    let mut docs = Vec::with_capacity(pr_numbers.len());
    for number in pr_numbers {
        let doc = match host.get_pull_request(number).await {
            Ok(pr) => Document {
                title: pr.title,
                description: pr
                    .body
                    .as_deref()
                    .map(|body| find_description(body, identifier))
                    .unwrap_or_default(),
            },
            Err(e) => {
                warn!(number, error = %e, "failed to fetch pull request, emitting placeholder");
                Document {
                    title: format!("[ERROR] failed to fetch #{number}"),
                    description: String::new(),
                }
            }
        };
        docs.push(doc);
    }

    Ok(docs)
}
