//! Shared test utilities

#![allow(dead_code)]

mod mock_host;

pub use mock_host::MockRepoService;

/// Build a mock preloaded with the standard three-commit merge fixture:
/// a merge commit for PR #12345 whose constituents reference PR #123,
/// PR #456, and nothing.
pub fn standard_merge_fixture(merge_sha: &str) -> MockRepoService {
    let mock = MockRepoService::new();
    mock.add_commit(merge_sha, "Merge pull request #12345 from feature/batch");
    mock.add_pr_commits(
        12345,
        &[
            "Merge pull request #123 from feature/one",
            "Merge pull request #456 from feature/two",
            "fix typo in readme",
        ],
    );
    mock.add_pull_request(
        123,
        "Test title 1",
        Some("intro\n```share\nPlease share this message 1\n```"),
    );
    mock.add_pull_request(
        456,
        "Test title 2",
        Some("intro\n```share\nPlease share this message 2\n```"),
    );
    mock
}
