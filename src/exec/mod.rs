//! exec
//!
//! Subprocess invocation of the external `git` binary.
//!
//! # Architecture
//!
//! Every call into git flows through the [`Executor`] trait. The trait has a
//! single method that takes an argument vector and returns the normalized
//! stdout together with an [`Outcome`]. Nothing at this layer interprets the
//! outcome; classification into booleans, defaults and errors happens in
//! [`crate::git`].
//!
//! - [`ProcessExecutor`] spawns the real binary and blocks until it exits.
//! - [`MockExecutor`] replays scripted responses and records calls.
//!
//! # Outcomes
//!
//! - [`Outcome::Success`]: the process exited with status zero
//! - [`Outcome::ExpectedFailure`]: the process ran and exited non-zero
//! - [`Outcome::UnexpectedFailure`]: the process could not be spawned or
//!   awaited, or it terminated without an exit code
//!
//! # Example
//!
//! ```no_run
//! use gitcmd::exec::{Executor, ProcessExecutor};
//!
//! let git = ProcessExecutor::new();
//! let output = git.run(&["rev-parse", "--git-dir"]);
//! if output.outcome.is_success() {
//!     println!("git dir: {}", output.text);
//! }
//! ```

mod mock;
mod process;

pub use mock::MockExecutor;
pub use process::{ProcessExecutor, DEFAULT_BINARY};

use std::rc::Rc;
use std::sync::Arc;

/// Characters stripped from both ends of captured stdout.
pub const TRIM_CHARS: [char; 2] = [' ', '\n'];

/// Classification of a single executor call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Exit status zero.
    Success,

    /// The tool ran and reported failure through its exit status.
    ExpectedFailure {
        /// Exit status reported by the process
        code: i32,
        /// Captured stderr, trailing whitespace removed
        stderr: String,
    },

    /// The tool could not be run to a normal exit.
    UnexpectedFailure {
        /// Description of what went wrong
        cause: String,
    },
}

impl Outcome {
    /// True for [`Outcome::Success`].
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success)
    }
}

/// Normalized stdout plus the outcome of one call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    /// Stdout with [`TRIM_CHARS`] stripped from both ends.
    pub text: String,
    /// How the call ended.
    pub outcome: Outcome,
}

impl CommandOutput {
    /// A successful call that printed `text`.
    ///
    /// The text is normalized the same way captured stdout is.
    pub fn success(text: impl AsRef<str>) -> Self {
        Self {
            text: normalize(text.as_ref()).to_string(),
            outcome: Outcome::Success,
        }
    }

    /// A call that exited with a non-zero `code`.
    pub fn exit(code: i32, stderr: impl Into<String>) -> Self {
        Self {
            text: String::new(),
            outcome: Outcome::ExpectedFailure {
                code,
                stderr: stderr.into(),
            },
        }
    }

    /// A call that never reached an exit status.
    pub fn unexpected(cause: impl Into<String>) -> Self {
        Self {
            text: String::new(),
            outcome: Outcome::UnexpectedFailure {
                cause: cause.into(),
            },
        }
    }

    /// The text on success, an empty string on any failure.
    pub fn text_or_default(self) -> String {
        match self.outcome {
            Outcome::Success => self.text,
            _ => String::new(),
        }
    }
}

/// Strip [`TRIM_CHARS`] from both ends of `raw`.
///
/// Carriage returns and tabs are left in place.
pub fn normalize(raw: &str) -> &str {
    raw.trim_matches(&TRIM_CHARS[..])
}

/// Runs the external tool.
///
/// Implementations must run exactly one invocation per call and return only
/// after it has finished.
pub trait Executor {
    /// Run the tool with `args` (the binary name is not included).
    fn run(&self, args: &[&str]) -> CommandOutput;
}

impl<E: Executor + ?Sized> Executor for &E {
    fn run(&self, args: &[&str]) -> CommandOutput {
        (**self).run(args)
    }
}

impl<E: Executor + ?Sized> Executor for Box<E> {
    fn run(&self, args: &[&str]) -> CommandOutput {
        (**self).run(args)
    }
}

impl<E: Executor + ?Sized> Executor for Rc<E> {
    fn run(&self, args: &[&str]) -> CommandOutput {
        (**self).run(args)
    }
}

impl<E: Executor + ?Sized> Executor for Arc<E> {
    fn run(&self, args: &[&str]) -> CommandOutput {
        (**self).run(args)
    }
}
