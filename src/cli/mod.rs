//! cli
//!
//! Command-line interface for the `gitcmd` binary.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Set up logging
//! - Load configuration and build a [`Git`]
//! - Delegate to command handlers
//!
//! # Architecture
//!
//! The CLI layer is thin. It only reads repository state through
//! [`crate::git`]; no command here mutates the repository.

pub mod args;
pub mod commands;

pub use args::{Cli, Shell};

use std::path::PathBuf;

use anyhow::{Context as _, Result};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::git::Git;

/// Flags shared by every command.
#[derive(Debug, Clone, Default)]
pub struct Context {
    /// Directory git runs in (defaults to the current directory)
    pub cwd: Option<PathBuf>,
    /// Print JSON instead of plain text
    pub json: bool,
}

impl Context {
    /// Build a [`Git`] for the target directory.
    pub fn git(&self) -> Result<Git> {
        self.open().map(|(git, _)| git)
    }

    /// Load configuration and build a [`Git`] from it.
    ///
    /// The global file decides which binary runs. That binary locates the
    /// git directory, which holds the repo file. Outside a repository only
    /// the global file applies.
    pub fn open(&self) -> Result<(Git, Config)> {
        let global = Config::load(None).context("Failed to load configuration")?;
        let git_dir = Git::from_config(&global, self.cwd.as_deref()).git_dir();

        let config = match git_dir {
            Some(dir) => Config::load(Some(dir.as_path())).context("Failed to load configuration")?,
            None => global,
        };
        debug!(
            global = ?config.global_config_loaded_from(),
            repo = ?config.repo_config_loaded_from(),
            "using config"
        );

        Ok((Git::from_config(&config, self.cwd.as_deref()), config))
    }
}

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();

    init_logging(cli.debug);

    let ctx = Context {
        cwd: cli.cwd.clone(),
        json: cli.json,
    };

    commands::dispatch(cli.command, &ctx)
}

/// Install the stderr log subscriber.
///
/// `--debug` forces `gitcmd=debug`; otherwise `RUST_LOG` applies, defaulting
/// to warnings only.
fn init_logging(debug: bool) {
    let filter = if debug {
        EnvFilter::new("gitcmd=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    // A subscriber may already be installed when embedded in tests.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
