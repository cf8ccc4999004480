//! Configuration file loading
//!
//! Settings live in a `pr2doc.toml`: an explicit `--config` path, else one
//! in the working directory, else `~/.config/pr2doc/config.toml`. CLI flags
//! override whatever the file provides.

use crate::error::{Error, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Filename looked up in the working directory
const CONFIG_FILE: &str = "pr2doc.toml";

/// Settings read from a `pr2doc.toml` file
///
/// Every field is optional; the CLI validates that owner and repo are
/// present once flags have been merged in.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Repository owner (user or organization)
    pub owner: Option<String>,
    /// Repository name
    pub repo: Option<String>,
    /// Custom API host for GitHub Enterprise
    pub host: Option<String>,
    /// Identifier tagging the description block (defaults to "share")
    pub identifier: Option<String>,
    /// Path to a template file for rendering
    pub template: Option<PathBuf>,
}

/// Load configuration.
///
/// An explicitly given path must exist and parse; the default locations are
/// optional and fall through to an empty config when absent.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    if let Some(path) = explicit {
        return read_config(path);
    }

    let local = PathBuf::from(CONFIG_FILE);
    if local.exists() {
        return read_config(&local);
    }

    if let Some(dir) = dirs::config_dir() {
        let path = dir.join("pr2doc").join("config.toml");
        if path.exists() {
            return read_config(&path);
        }
    }

    Ok(Config::default())
}

fn read_config(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .map_err(|e| Error::Config(format!("failed to read {}: {e}", path.display())))?;

    let config: Config = toml::from_str(&content)
        .map_err(|e| Error::Config(format!("failed to parse {}: {e}", path.display())))?;

    Ok(config)
}
