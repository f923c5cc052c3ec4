//! config::schema
//!
//! Configuration schema types.
//!
//! # Global Config
//!
//! Located at (in order of precedence):
//! 1. `$GITCMD_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/gitcmd/config.toml`
//! 3. `~/.gitcmd/config.toml`
//!
//! # Repo Config
//!
//! Located at `gitcmd/config.toml` inside the git directory.
//!
//! # Validation
//!
//! Every configured value is passed to git as a single argument or used as
//! the binary name, so none may be empty or contain whitespace.

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Global configuration (user scope).
///
/// # Example
///
/// ```toml
/// binary = "/usr/local/bin/git"
/// remote = "origin"
/// default_branch = "main"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Executable to invoke (default: "git")
    pub binary: Option<String>,

    /// Remote consulted for the default branch (default: "origin")
    pub remote: Option<String>,

    /// Default branch when the remote HEAD cannot be resolved (default: "master")
    pub default_branch: Option<String>,
}

impl GlobalConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_token("binary", self.binary.as_deref())?;
        validate_token("remote", self.remote.as_deref())?;
        validate_token("default_branch", self.default_branch.as_deref())
    }
}

/// Repository configuration.
///
/// # Example
///
/// ```toml
/// remote = "upstream"
/// default_branch = "trunk"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct RepoConfig {
    /// Remote consulted for the default branch
    pub remote: Option<String>,

    /// Default branch when the remote HEAD cannot be resolved
    pub default_branch: Option<String>,
}

impl RepoConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_token("remote", self.remote.as_deref())?;
        validate_token("default_branch", self.default_branch.as_deref())
    }
}

fn validate_token(key: &str, value: Option<&str>) -> Result<(), ConfigError> {
    let Some(value) = value else {
        return Ok(());
    };

    if value.is_empty() {
        return Err(ConfigError::InvalidValue(format!("{} cannot be empty", key)));
    }
    if value.chars().any(char::is_whitespace) {
        return Err(ConfigError::InvalidValue(format!(
            "{} cannot contain whitespace: '{}'",
            key, value
        )));
    }

    Ok(())
}
