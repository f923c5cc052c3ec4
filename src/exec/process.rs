//! exec::process
//!
//! Executor backed by a real child process.

use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::debug;

use super::{normalize, CommandOutput, Executor, Outcome};

/// Binary invoked when none is configured.
pub const DEFAULT_BINARY: &str = "git";

/// Runs the git binary as a child process.
///
/// Stdout becomes the normalized text. Stderr is kept only for the
/// diagnostics carried by [`Outcome::ExpectedFailure`]. No timeout is
/// applied and no environment variables are touched, so the child inherits
/// the caller's environment.
///
/// # Example
///
/// ```no_run
/// use gitcmd::exec::{Executor, ProcessExecutor};
///
/// let git = ProcessExecutor::new().in_dir("/path/to/repo");
/// let tags = git.run(&["tag", "--list"]).text_or_default();
/// ```
#[derive(Debug, Clone)]
pub struct ProcessExecutor {
    binary: String,
    cwd: Option<PathBuf>,
}

impl ProcessExecutor {
    /// Executor for `git`, running in the caller's current directory.
    pub fn new() -> Self {
        Self::with_binary(DEFAULT_BINARY)
    }

    /// Executor for a different binary (e.g. an absolute path to git).
    pub fn with_binary(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
            cwd: None,
        }
    }

    /// Run every invocation inside `dir`.
    pub fn in_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }

    /// The binary name or path.
    pub fn binary(&self) -> &str {
        &self.binary
    }

    /// The working directory, if one was set.
    pub fn cwd(&self) -> Option<&Path> {
        self.cwd.as_deref()
    }

    fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(&self.binary);
        cmd.args(args);
        if let Some(dir) = &self.cwd {
            cmd.current_dir(dir);
        }
        cmd
    }
}

impl Default for ProcessExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl Executor for ProcessExecutor {
    fn run(&self, args: &[&str]) -> CommandOutput {
        debug!(binary = %self.binary, ?args, cwd = ?self.cwd, "running");

        let output = match self.command(args).output() {
            Ok(output) => output,
            Err(e) => {
                debug!(binary = %self.binary, ?args, error = %e, "spawn failed");
                return CommandOutput::unexpected(format!("failed to run {}: {}", self.binary, e));
            }
        };

        let text = normalize(&String::from_utf8_lossy(&output.stdout)).to_string();

        let outcome = if output.status.success() {
            Outcome::Success
        } else {
            match output.status.code() {
                Some(code) => Outcome::ExpectedFailure {
                    code,
                    stderr: String::from_utf8_lossy(&output.stderr)
                        .trim_end()
                        .to_string(),
                },
                None => Outcome::UnexpectedFailure {
                    cause: format!("{} terminated without an exit code", self.binary),
                },
            }
        };

        debug!(?args, ?outcome, "finished");
        CommandOutput { text, outcome }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_binary_is_unexpected_failure() {
        let exec = ProcessExecutor::with_binary("gitcmd-definitely-not-installed");
        let output = exec.run(&["status"]);

        assert!(matches!(output.outcome, Outcome::UnexpectedFailure { .. }));
        assert_eq!(output.text, "");
    }

    #[cfg(unix)]
    #[test]
    fn signal_death_is_unexpected_failure() {
        let exec = ProcessExecutor::with_binary("sh");
        let output = exec.run(&["-c", "kill -9 $$"]);

        match output.outcome {
            Outcome::UnexpectedFailure { cause } => {
                assert!(cause.contains("without an exit code"), "cause: {}", cause)
            }
            other => panic!("expected UnexpectedFailure, got {:?}", other),
        }
    }

    #[test]
    fn defaults_to_git_in_current_dir() {
        let exec = ProcessExecutor::default();
        assert_eq!(exec.binary(), "git");
        assert!(exec.cwd().is_none());
    }

    #[test]
    fn in_dir_sets_working_directory() {
        let exec = ProcessExecutor::new().in_dir("/tmp");
        assert_eq!(exec.cwd(), Some(Path::new("/tmp")));
    }
}
