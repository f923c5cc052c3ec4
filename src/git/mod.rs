//! git
//!
//! Typed operations over the git command line.
//!
//! # Architecture
//!
//! [`Git`] is the facade callers use. Each method maps one conceptual action
//! (list tags, commit, push, resolve remotes) to one or more calls on an
//! [`Executor`](crate::exec::Executor), followed by parsing from
//! [`crate::parse`]. The executor is injected, so tests substitute a
//! [`MockExecutor`](crate::exec::MockExecutor) for the real process.
//!
//! # Error tiers
//!
//! - **Swallowed**: read queries (`is_dirty`, `tags`, branch listings,
//!   `remotes`, ...) treat any failure as empty output.
//! - **Propagated**: mutations (`commit`, `tag`, `push`, `fetch`,
//!   `reset_hard`, ...) return [`GitError`] built from the failing call.
//! - **Fatal**: [`Git::is_ignored`] panics when git could not be run at all.
//!
//! # Invariants
//!
//! - Calls are issued one at a time, in order, on the caller's thread
//! - Multi-step operations stop at the first failing step
//! - No retries, no timeouts
//!
//! # Example
//!
//! ```no_run
//! use gitcmd::git::Git;
//! use std::path::Path;
//!
//! let git = Git::open(Path::new("."));
//!
//! if git.is_repo() && !git.is_dirty() {
//!     println!("default branch: {}", git.default_branch());
//!     for tag in git.tags() {
//!         println!("{}", tag);
//!     }
//! }
//! ```

mod interface;

pub use interface::{Git, GitError};
