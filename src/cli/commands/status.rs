//! status command - Summarize repository state

use crate::cli::Context;
use anyhow::{bail, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Snapshot printed by `gitcmd status`.
#[derive(Debug, Serialize)]
struct StatusReport {
    dirty: bool,
    current_branch: String,
    default_branch: String,
    last_tag: String,
    current_tag: String,
    global_config: Option<PathBuf>,
    repo_config: Option<PathBuf>,
}

/// Summarize repository state.
pub fn status(ctx: &Context) -> Result<()> {
    let (git, config) = ctx.open()?;

    if !git.is_repo() {
        bail!("Not a git repository");
    }

    let report = StatusReport {
        dirty: git.is_dirty(),
        current_branch: git.current_branch(),
        default_branch: git.default_branch(),
        last_tag: git.last_tag(),
        current_tag: git.current_tag(),
        global_config: config.global_config_loaded_from().map(PathBuf::from),
        repo_config: config.repo_config_loaded_from().map(PathBuf::from),
    };

    if ctx.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("dirty:          {}", report.dirty);
    println!("current branch: {}", or_none(&report.current_branch));
    println!("default branch: {}", report.default_branch);
    println!("last tag:       {}", or_none(&report.last_tag));
    println!("current tag:    {}", or_none(&report.current_tag));
    println!("global config:  {}", path_or_none(report.global_config.as_deref()));
    println!("repo config:    {}", path_or_none(report.repo_config.as_deref()));

    Ok(())
}

fn or_none(value: &str) -> &str {
    if value.is_empty() {
        "(none)"
    } else {
        value
    }
}

fn path_or_none(path: Option<&Path>) -> String {
    path.map_or_else(|| "(none)".to_string(), |p| p.display().to_string())
}
