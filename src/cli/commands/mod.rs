//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Builds a [`crate::git::Git`] from the [`Context`]
//! 2. Runs read-only queries
//! 3. Formats and displays output (plain text or `--json`)

mod branches;
mod completion;
mod ignored;
mod remotes;
mod status;
mod tags;

// Re-export command functions for testing and direct invocation
pub use branches::{branches, BranchScope};
pub use completion::completion;
pub use ignored::ignored;
pub use remotes::remotes;
pub use status::status;
pub use tags::tags;

use crate::cli::args::Command;
use crate::cli::Context;
use anyhow::Result;

/// Dispatch a command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<()> {
    match command {
        Command::Status => status::status(ctx),
        Command::Branches { remote, merged } => {
            branches::branches(ctx, BranchScope::from_flags(remote, merged))
        }
        Command::Tags => tags::tags(ctx),
        Command::Remotes => remotes::remotes(ctx),
        Command::Ignored { path } => ignored::ignored(ctx, &path),
        Command::Completion { shell } => completion::completion(shell),
    }
}

/// Print one name per line, or a JSON array.
fn print_names(ctx: &Context, names: &[String]) -> Result<()> {
    if ctx.json {
        println!("{}", serde_json::to_string_pretty(names)?);
    } else {
        for name in names {
            println!("{}", name);
        }
    }
    Ok(())
}
