//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--cwd <path>`: Run git in that directory
//! - `--debug`: Log every git invocation to stderr
//! - `--json`: Machine-readable output

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// gitcmd - inspect a repository through typed git queries
#[derive(Parser, Debug)]
#[command(name = "gitcmd")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Run git in this directory instead of the current one
    #[arg(long, global = true)]
    pub cwd: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Print JSON instead of plain text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Summarize repository state
    #[command(
        name = "status",
        long_about = "Summarize repository state.\n\n\
            Reports whether the directory is a repository, whether the working tree \
            is dirty, the current branch, the remote's default branch and the most \
            recent tag.",
        after_help = "\
EXAMPLES:
    gitcmd status
    gitcmd --json status
    gitcmd --cwd ../other-repo status"
    )]
    Status,

    /// List branches
    #[command(name = "branches")]
    Branches {
        /// List remote-tracking branches
        #[arg(long, conflicts_with = "merged")]
        remote: bool,

        /// List branches merged into the current branch
        #[arg(long)]
        merged: bool,
    },

    /// List tags in the order git reports them
    #[command(name = "tags")]
    Tags,

    /// List remotes with their fetch and push URLs
    #[command(name = "remotes")]
    Remotes,

    /// Check whether a path is ignored
    #[command(
        name = "ignored",
        after_help = "\
Exits 0 and prints 'ignored' or 'not ignored'. Exits non-zero only when git \
itself could not be run."
    )]
    Ignored {
        /// Path to check
        path: String,
    },

    /// Generate shell completion scripts
    #[command(
        name = "completion",
        after_help = "\
INSTALLATION:
    # Bash
    gitcmd completion bash > ~/.local/share/bash-completion/completions/gitcmd

    # Zsh
    gitcmd completion zsh > ~/.zfunc/_gitcmd

    # Fish
    gitcmd completion fish > ~/.config/fish/completions/gitcmd.fish"
    )]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completion
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}
