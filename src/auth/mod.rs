//! Authentication for GitHub
//!
//! Supports environment variables and CLI-based auth (gh).

use crate::error::{Error, Result};
use std::process::Command;

/// Environment variables checked for a token, in order
const TOKEN_ENV_VARS: [&str; 2] = ["GITHUB_TOKEN", "GH_TOKEN"];

/// Source of authentication token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthSource {
    /// Token from environment variable
    EnvVar,
    /// Token from the gh CLI tool
    Cli,
}

impl std::fmt::Display for AuthSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EnvVar => write!(f, "environment variable"),
            Self::Cli => write!(f, "gh CLI"),
        }
    }
}

/// A resolved GitHub token and where it came from
#[derive(Debug, Clone)]
pub struct GitHubAuth {
    /// The access token
    pub token: String,
    /// Where the token was found
    pub source: AuthSource,
}

/// Resolve a GitHub token.
///
/// Checks `GITHUB_TOKEN` then `GH_TOKEN`, then falls back to
/// `gh auth token`. Errors when none of these yields a token.
pub fn get_github_auth() -> Result<GitHubAuth> {
    for var in TOKEN_ENV_VARS {
        if let Ok(token) = std::env::var(var)
            && !token.trim().is_empty()
        {
            return Ok(GitHubAuth {
                token: token.trim().to_string(),
                source: AuthSource::EnvVar,
            });
        }
    }

    let output = Command::new("gh")
        .args(["auth", "token"])
        .output()
        .map_err(|e| Error::Auth(format!("failed to run gh: {e}")))?;

    if !output.status.success() {
        return Err(Error::Auth(
            "no token in GITHUB_TOKEN/GH_TOKEN and 'gh auth token' failed".to_string(),
        ));
    }

    let token = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if token.is_empty() {
        return Err(Error::Auth("'gh auth token' returned no token".to_string()));
    }

    Ok(GitHubAuth {
        token,
        source: AuthSource::Cli,
    })
}
