//! git::interface
//!
//! The [`Git`] facade and its error type.
//!
//! # Error Handling
//!
//! Failures of propagated operations are reported as [`GitError`]:
//! - [`GitError::CommandFailed`]: git ran and exited non-zero
//! - [`GitError::Unavailable`]: git could not be run to completion
//!
//! Both carry the argument vector of the failing call, which identifies the
//! step of a multi-step operation (e.g. `push` vs `push --tags`). The
//! `Display` form of `CommandFailed` is git's own stderr, unmodified.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::config::{Config, DEFAULT_REMOTE, FALLBACK_BRANCH};
use crate::exec::{CommandOutput, Executor, Outcome, ProcessExecutor};
use crate::parse::{self, Remote};

/// Errors from propagated git operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GitError {
    /// git ran and exited with a non-zero status.
    #[error("{}", describe_exit(.args, .code, .stderr))]
    CommandFailed {
        /// Arguments of the failing call (without the binary)
        args: Vec<String>,
        /// Exit status
        code: i32,
        /// git's diagnostic output
        stderr: String,
    },

    /// git could not be spawned, awaited, or exited without a status.
    #[error("{}", describe_unavailable(.args, .cause))]
    Unavailable {
        /// Arguments of the failing call (without the binary)
        args: Vec<String>,
        /// What went wrong
        cause: String,
    },
}

fn describe_exit(args: &[String], code: &i32, stderr: &str) -> String {
    if stderr.is_empty() {
        format!("git {} exited with status {}", args.join(" "), code)
    } else {
        stderr.to_string()
    }
}

fn owned_args(args: &[&str]) -> Vec<String> {
    args.iter().map(|a| a.to_string()).collect()
}

fn describe_unavailable(args: &[String], cause: &str) -> String {
    format!("could not run git {}: {}", args.join(" "), cause)
}

impl GitError {
    /// Build the error for a failed call. Returns `None` on success.
    fn from_outcome(args: &[&str], outcome: Outcome) -> Option<Self> {
        let args = owned_args(args);
        match outcome {
            Outcome::Success => None,
            Outcome::ExpectedFailure { code, stderr } => Some(GitError::CommandFailed {
                args,
                code,
                stderr,
            }),
            Outcome::UnexpectedFailure { cause } => Some(GitError::Unavailable { args, cause }),
        }
    }

    /// Arguments of the call that failed.
    pub fn args(&self) -> &[String] {
        match self {
            GitError::CommandFailed { args, .. } | GitError::Unavailable { args, .. } => args,
        }
    }

    /// Exit status, if git exited.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            GitError::CommandFailed { code, .. } => Some(*code),
            GitError::Unavailable { .. } => None,
        }
    }
}

/// Typed access to a repository through the git command line.
///
/// `Git` holds no mutable state. Every method blocks until the git
/// processes it starts have exited.
///
/// # Example
///
/// ```
/// use gitcmd::exec::{CommandOutput, MockExecutor};
/// use gitcmd::git::Git;
///
/// let exec = MockExecutor::new().with(
///     &["branch", "--remote", "--points-at", "origin/HEAD"],
///     CommandOutput::success("  origin/HEAD -> origin/main\n  origin/main\n"),
/// );
/// let git = Git::new(exec);
///
/// assert_eq!(git.default_branch(), "main");
/// ```
#[derive(Debug, Clone)]
pub struct Git<E = ProcessExecutor> {
    exec: E,
    remote: String,
    fallback_branch: String,
}

impl Git {
    /// Run `git` in `path`.
    pub fn open(path: &Path) -> Self {
        Self::new(ProcessExecutor::new().in_dir(path))
    }

    /// Build from loaded configuration.
    ///
    /// Uses the configured binary, remote and fallback branch. Without
    /// `cwd`, git runs in the caller's current directory.
    pub fn from_config(config: &Config, cwd: Option<&Path>) -> Self {
        let mut exec = ProcessExecutor::with_binary(config.binary());
        if let Some(dir) = cwd {
            exec = exec.in_dir(dir);
        }
        Self::new(exec)
            .with_remote(config.remote())
            .with_default_branch(config.default_branch())
    }
}

impl Default for Git {
    fn default() -> Self {
        Self::new(ProcessExecutor::new())
    }
}

impl<E: Executor> Git<E> {
    /// Wrap an executor, using the "origin" remote and "master" fallback.
    pub fn new(exec: E) -> Self {
        Self {
            exec,
            remote: DEFAULT_REMOTE.to_string(),
            fallback_branch: FALLBACK_BRANCH.to_string(),
        }
    }

    /// Remote consulted by [`Git::default_branch`].
    pub fn with_remote(mut self, remote: impl Into<String>) -> Self {
        self.remote = remote.into();
        self
    }

    /// Value returned by [`Git::default_branch`] when the remote HEAD is unknown.
    pub fn with_default_branch(mut self, branch: impl Into<String>) -> Self {
        self.fallback_branch = branch.into();
        self
    }

    /// The underlying executor.
    pub fn executor(&self) -> &E {
        &self.exec
    }

    /// Run git with arbitrary arguments, returning the raw result.
    pub fn exec(&self, args: &[&str]) -> CommandOutput {
        self.exec.run(args)
    }

    /// Run and propagate failure.
    fn run(&self, args: &[&str]) -> Result<String, GitError> {
        let output = self.exec.run(args);
        match GitError::from_outcome(args, output.outcome) {
            None => Ok(output.text),
            Some(err) => {
                debug!(?args, error = %err, "git call failed");
                Err(err)
            }
        }
    }

    /// Run and read failure as empty output.
    fn read(&self, args: &[&str]) -> String {
        let output = self.exec.run(args);
        if !output.outcome.is_success() {
            debug!(?args, outcome = ?output.outcome, "ignoring failed read");
        }
        output.text_or_default()
    }

    // =========================================================================
    // Predicates
    // =========================================================================

    /// True if the current directory is inside a repository.
    pub fn is_repo(&self) -> bool {
        self.exec
            .run(&["rev-parse", "--git-dir"])
            .outcome
            .is_success()
    }

    /// Absolute path of the repository's git directory.
    ///
    /// For a linked worktree this is the worktree's own git directory.
    /// `None` outside a repository or if git cannot run.
    pub fn git_dir(&self) -> Option<PathBuf> {
        let dir = self.read(&["rev-parse", "--absolute-git-dir"]);
        if dir.is_empty() {
            None
        } else {
            Some(PathBuf::from(dir))
        }
    }

    /// True if the working tree has uncommitted or untracked changes.
    ///
    /// A failed status query reads as clean.
    pub fn is_dirty(&self) -> bool {
        !self.read(&["status", "--porcelain"]).is_empty()
    }

    /// Whether `path` is excluded by ignore rules.
    ///
    /// # Errors
    ///
    /// Returns [`GitError::Unavailable`] if git could not be run. A non-zero
    /// exit is git's "not ignored" answer and yields `Ok(false)`.
    pub fn try_is_ignored(&self, path: &str) -> Result<bool, GitError> {
        let args = ["check-ignore", "--verbose", path];
        match self.exec.run(&args).outcome {
            Outcome::Success => Ok(true),
            Outcome::ExpectedFailure { .. } => Ok(false),
            Outcome::UnexpectedFailure { cause } => Err(GitError::Unavailable {
                args: owned_args(&args),
                cause,
            }),
        }
    }

    /// Whether `path` is excluded by ignore rules.
    ///
    /// # Panics
    ///
    /// Panics if git could not be run. Use [`Git::try_is_ignored`] to handle
    /// that case instead.
    pub fn is_ignored(&self, path: &str) -> bool {
        match self.try_is_ignored(path) {
            Ok(ignored) => ignored,
            Err(e) => panic!("cannot determine whether '{}' is ignored: {}", path, e),
        }
    }

    // =========================================================================
    // Tags
    // =========================================================================

    /// All tags, in the order git lists them.
    pub fn tags(&self) -> Vec<String> {
        parse::lines(&self.read(&["tag", "--list"]))
    }

    /// True if `tag` is exactly one of [`Git::tags`].
    pub fn tag_exists(&self, tag: &str) -> bool {
        self.tags().iter().any(|t| t == tag)
    }

    /// Most recent tag reachable from HEAD, or empty.
    pub fn last_tag(&self) -> String {
        self.read(&["describe", "--tags", "--abbrev=0"])
    }

    /// Tag pointing exactly at HEAD, or empty.
    pub fn current_tag(&self) -> String {
        self.read(&["describe", "--tags", "--exact"])
    }

    // =========================================================================
    // Branches
    // =========================================================================

    fn branches_with<F>(&self, flags: &[&str], keep: F) -> Vec<String>
    where
        F: Fn(&str) -> bool,
    {
        let mut args = vec!["branch"];
        args.extend_from_slice(flags);
        parse::branch_names(&self.read(&args), keep)
    }

    /// Local branches.
    pub fn branches(&self) -> Vec<String> {
        self.branches_with(&[], |_| true)
    }

    /// Remote-tracking branches, without `HEAD -> ...` aliases.
    pub fn remote_branches(&self) -> Vec<String> {
        self.branches_with(&["--remote"], |_| true)
    }

    /// Branches merged into the current branch, excluding the current branch.
    pub fn merged_branches(&self) -> Vec<String> {
        let current = self.current_branch();
        self.branches_with(&["--merged"], |branch| branch != current)
    }

    /// Checked-out branch, or empty when HEAD is detached.
    pub fn current_branch(&self) -> String {
        self.read(&["branch", "--show-current"])
    }

    /// True if `branch` is non-empty and checked out.
    pub fn is_current_branch(&self, branch: &str) -> bool {
        !branch.is_empty() && branch == self.current_branch()
    }

    /// Branch the remote's HEAD points at.
    ///
    /// Falls back to the configured default ("master" unless changed) when
    /// no remote branch matches.
    pub fn default_branch(&self) -> String {
        let prefix = format!("{}/", self.remote);
        let head = format!("{}HEAD", prefix);

        let matching =
            self.branches_with(&["--remote", "--points-at", head.as_str()], |b| b.starts_with(&prefix));

        match matching.first() {
            Some(branch) => branch
                .strip_prefix(&prefix)
                .unwrap_or(branch)
                .to_string(),
            None => self.fallback_branch.clone(),
        }
    }

    /// True if `branch` is exactly one of [`Git::branches`].
    pub fn branch_exists(&self, branch: &str) -> bool {
        self.branches().iter().any(|b| b == branch)
    }

    /// Delete a merged local branch.
    pub fn delete_branch(&self, branch: &str) -> Result<(), GitError> {
        self.run(&["branch", "--delete", branch]).map(drop)
    }

    // =========================================================================
    // Commits and tags
    // =========================================================================

    /// Stage modifications and deletions of tracked files.
    pub fn add_all(&self) -> Result<(), GitError> {
        self.run(&["add", "--update"]).map(drop)
    }

    /// Commit the index with `message`.
    pub fn commit(&self, message: &str) -> Result<(), GitError> {
        self.run(&["commit", "--message", message]).map(drop)
    }

    /// Stage tracked changes, then commit.
    ///
    /// If staging fails the commit is not attempted.
    pub fn commit_all(&self, message: &str) -> Result<(), GitError> {
        self.add_all()?;
        self.commit(message)
    }

    /// Commit even if nothing changed.
    pub fn commit_empty(&self, message: &str) -> Result<(), GitError> {
        self.run(&["commit", "--message", message, "--allow-empty"])
            .map(drop)
    }

    /// Create a lightweight tag at HEAD.
    pub fn tag(&self, version: &str) -> Result<(), GitError> {
        self.run(&["tag", version]).map(drop)
    }

    // =========================================================================
    // Remotes
    // =========================================================================

    /// Push commits, then tags.
    ///
    /// Stops at the first failure; the error's [`GitError::args`] tell which
    /// step failed.
    pub fn push(&self) -> Result<(), GitError> {
        self.run(&["push"])?;
        self.run(&["push", "--tags"])?;
        Ok(())
    }

    /// Fetch the default remote, pruning stale refs and fetching tags.
    pub fn fetch(&self) -> Result<(), GitError> {
        self.run(&["fetch", "--prune", "--tags"]).map(drop)
    }

    /// Fetch `remote`, pruning stale refs and fetching tags.
    pub fn fetch_remote(&self, remote: &str) -> Result<(), GitError> {
        self.run(&["fetch", "--prune", "--tags", remote]).map(drop)
    }

    /// Fetch `remote` and force the local `branch` to match its remote
    /// counterpart, even when `branch` is checked out.
    pub fn fetch_remote_into(&self, remote: &str, branch: &str) -> Result<(), GitError> {
        let refspec = format!("{0}:{0}", branch);
        self.run(&[
            "fetch",
            "--prune",
            "--tags",
            "--update-head-ok",
            remote,
            refspec.as_str(),
        ])
        .map(drop)
    }

    /// Configured remotes keyed by name.
    pub fn remotes(&self) -> BTreeMap<String, Remote> {
        parse::remotes(&self.read(&["remote", "--verbose"]))
    }

    /// True if a remote named `name` is configured.
    pub fn remote_exists(&self, name: &str) -> bool {
        self.remotes().values().any(|remote| remote.name == name)
    }

    // =========================================================================
    // Working tree
    // =========================================================================

    /// Reset index and working tree to `reference`, discarding local changes.
    pub fn reset_hard(&self, reference: &str) -> Result<(), GitError> {
        self.run(&["reset", "--hard", reference]).map(drop)
    }
}
