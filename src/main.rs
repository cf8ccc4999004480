//! pr2doc CLI entry point

use anstream::{eprintln, println};
use clap::Parser;
use owo_colors::OwoColorize;
use pr2doc::auth::get_github_auth;
use pr2doc::collect::{DESCRIPTION_IDENTIFIER, collect_docs};
use pr2doc::config::load_config;
use pr2doc::error::{Error, Result};
use pr2doc::platform::create_repo_service;
use pr2doc::render::render_docs;
use pr2doc::types::RepoConfig;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

/// Collect changelog fragments from the pull requests behind a merge commit
#[derive(Debug, Parser)]
#[command(name = "pr2doc", version)]
struct Cli {
    /// Commit hash of the merge to document
    commit_hash: String,

    /// Repository owner (overrides config file)
    #[arg(long)]
    owner: Option<String>,

    /// Repository name (overrides config file)
    #[arg(long)]
    repo: Option<String>,

    /// Custom API host for GitHub Enterprise (overrides config file)
    #[arg(long)]
    host: Option<String>,

    /// Path to a pr2doc.toml config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Path to a template file for rendering
    #[arg(long)]
    template: Option<PathBuf>,

    /// Identifier tagging the description block in PR bodies
    #[arg(long)]
    identifier: Option<String>,
}

async fn run(cli: Cli) -> Result<String> {
    let config = load_config(cli.config.as_deref())?;

    let owner = cli
        .owner
        .or(config.owner)
        .ok_or_else(|| Error::Config("repository owner not set (--owner or config file)".to_string()))?;
    let repo = cli
        .repo
        .or(config.repo)
        .ok_or_else(|| Error::Config("repository name not set (--repo or config file)".to_string()))?;
    let host = cli.host.or(config.host);
    let identifier = cli
        .identifier
        .or(config.identifier)
        .unwrap_or_else(|| DESCRIPTION_IDENTIFIER.to_string());
    let template = cli.template.or(config.template);

    let auth = get_github_auth()?;
    debug!(source = %auth.source, "resolved GitHub token");
    let service = create_repo_service(RepoConfig { owner, repo, host }, &auth.token)?;

    let docs = collect_docs(service.as_ref(), &cli.commit_hash, &identifier).await?;
    render_docs(&docs, template.as_deref())
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(text) => {
            println!("{text}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{} {e}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}
