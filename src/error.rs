//! Error types for pr2doc

use thiserror::Error;

/// Result alias using the pr2doc [`Error`] type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced while collecting and rendering pull request documents
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration file could not be read or parsed
    #[error("config error: {0}")]
    Config(String),

    /// No usable GitHub token could be found
    #[error("auth error: {0}")]
    Auth(String),

    /// A GitHub API call failed
    #[error("GitHub API error: {0}")]
    GitHubApi(String),

    /// octocrab-level failure, forwarded as-is
    #[error(transparent)]
    Octocrab(#[from] octocrab::Error),

    /// The originating commit message carried no pull request reference
    #[error("no PR reference found in commit {0}")]
    NoPrReference(String),

    /// A matched PR reference could not be converted to a number
    #[error("invalid PR number in {context}: {source}")]
    PrNumber {
        /// Where the bad reference was seen
        context: String,
        /// The underlying conversion failure
        #[source]
        source: std::num::ParseIntError,
    },

    /// Template could not be loaded or rendered
    #[error("template error: {0}")]
    Template(String),
}
