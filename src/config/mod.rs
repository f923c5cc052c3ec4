//! config
//!
//! Configuration schema and loading.
//!
//! # Overview
//!
//! gitcmd has two configuration scopes:
//! - **Global**: User-level settings
//! - **Repo**: Repository-level overrides
//!
//! # Precedence
//!
//! Configuration values are resolved in this order (later overrides earlier):
//! 1. Default values
//! 2. Global config file
//! 3. Repo config file
//! 4. CLI flags (not handled here)
//!
//! # Global Config Locations
//!
//! Searched in order:
//! 1. `$GITCMD_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/gitcmd/config.toml`
//! 3. `~/.gitcmd/config.toml`
//!
//! # Repo Config Location
//!
//! `gitcmd/config.toml` inside the repository's git directory (usually
//! `<repo>/.git`). Callers resolve the git directory first, e.g. with
//! [`crate::git::Git::git_dir`], so the file is found from any subdirectory.
//!
//! # Environment
//!
//! Locating the global file is the only place the crate reads environment
//! variables. [`crate::exec`] and [`crate::git`] never read or set any; the
//! child process inherits the caller's environment unchanged.
//!
//! # Example
//!
//! ```no_run
//! use gitcmd::config::Config;
//! use std::path::Path;
//!
//! let config = Config::load(Some(Path::new("/path/to/repo/.git"))).unwrap();
//! println!("binary: {}", config.binary());
//! println!("remote: {}", config.remote());
//! println!("fallback branch: {}", config.default_branch());
//! ```

pub mod schema;

pub use schema::{GlobalConfig, RepoConfig};

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

use crate::exec::DEFAULT_BINARY;

/// Remote used when none is configured.
pub const DEFAULT_REMOTE: &str = "origin";

/// Branch reported when the remote HEAD cannot be resolved.
pub const FALLBACK_BRANCH: &str = "master";

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

/// Merged configuration from all sources.
///
/// Accessors apply precedence: repo config overrides global config, and
/// both fall back to the built-in defaults.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Global configuration
    pub global: GlobalConfig,
    /// Repository configuration (if one was found)
    pub repo: Option<RepoConfig>,
    global_path: Option<PathBuf>,
    repo_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the default locations.
    ///
    /// If `git_dir` is provided, also loads repo-specific config from it.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be read, parsed
    /// or validated. Missing files are not an error.
    pub fn load(git_dir: Option<&Path>) -> Result<Self, ConfigError> {
        let global_file = Self::find_global();
        let repo_file = git_dir.map(Self::repo_config_path);
        Self::load_files(global_file.as_deref(), repo_file.as_deref())
    }

    /// Load configuration from explicit file paths.
    ///
    /// Paths that do not exist are skipped.
    pub fn load_files(global: Option<&Path>, repo: Option<&Path>) -> Result<Self, ConfigError> {
        let global_path = global.filter(|p| p.exists()).map(Path::to_path_buf);
        let repo_path = repo.filter(|p| p.exists()).map(Path::to_path_buf);

        let global = match &global_path {
            Some(path) => read_config::<GlobalConfig>(path)?,
            None => GlobalConfig::default(),
        };
        let repo = match &repo_path {
            Some(path) => Some(read_config::<RepoConfig>(path)?),
            None => None,
        };

        global.validate()?;
        if let Some(ref r) = repo {
            r.validate()?;
        }

        debug!(global = ?global_path, repo = ?repo_path, "loaded config");

        Ok(Config {
            global,
            repo,
            global_path,
            repo_path,
        })
    }

    /// First global config file candidate, whether or not it exists yet.
    fn find_global() -> Option<PathBuf> {
        if let Ok(path) = std::env::var("GITCMD_CONFIG") {
            return Some(PathBuf::from(path));
        }

        if let Ok(xdg_home) = std::env::var("XDG_CONFIG_HOME") {
            let path = PathBuf::from(xdg_home).join("gitcmd/config.toml");
            if path.exists() {
                return Some(path);
            }
        }

        dirs::home_dir().map(|home| home.join(".gitcmd/config.toml"))
    }

    /// Get the path for repo config inside `git_dir`.
    pub fn repo_config_path(git_dir: &Path) -> PathBuf {
        git_dir.join("gitcmd/config.toml")
    }

    /// Executable invoked for every git call.
    ///
    /// Defaults to "git" if not configured.
    pub fn binary(&self) -> &str {
        self.global.binary.as_deref().unwrap_or(DEFAULT_BINARY)
    }

    /// Remote consulted by the default-branch query.
    ///
    /// Defaults to "origin" if not configured.
    pub fn remote(&self) -> &str {
        self.repo
            .as_ref()
            .and_then(|r| r.remote.as_deref())
            .or(self.global.remote.as_deref())
            .unwrap_or(DEFAULT_REMOTE)
    }

    /// Fallback for the default-branch query.
    ///
    /// Defaults to "master" if not configured.
    pub fn default_branch(&self) -> &str {
        self.repo
            .as_ref()
            .and_then(|r| r.default_branch.as_deref())
            .or(self.global.default_branch.as_deref())
            .unwrap_or(FALLBACK_BRANCH)
    }

    /// Get the path to the loaded global config file.
    pub fn global_config_loaded_from(&self) -> Option<&Path> {
        self.global_path.as_deref()
    }

    /// Get the path to the loaded repo config file.
    pub fn repo_config_loaded_from(&self) -> Option<&Path> {
        self.repo_path.as_deref()
    }
}

fn read_config<T: DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;

    toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
