//! gitcmd - typed operations over the git command line
//!
//! gitcmd runs the `git` executable as a subprocess and turns its textual
//! output into structured values: branch and tag listings, the remote table,
//! dirty and ignore checks, plus commit, tag, push, fetch and reset.
//!
//! # Architecture
//!
//! - [`exec`] - Subprocess invocation behind the [`exec::Executor`] trait
//! - [`parse`] - Pure parsers for git's line-oriented output
//! - [`git`] - The [`git::Git`] facade: queries and mutations
//! - [`config`] - TOML configuration (binary, remote, fallback branch)
//! - [`cli`] - The `gitcmd` inspection binary
//!
//! # Behavior
//!
//! 1. Every operation blocks until its git processes exit
//! 2. Multi-step operations run in order and stop at the first failure
//! 3. Read queries treat failure as empty output; mutations return it
//! 4. Nothing is retried and no timeout is applied

pub mod cli;
pub mod config;
pub mod exec;
pub mod git;
pub mod parse;
