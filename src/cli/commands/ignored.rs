//! ignored command - Check whether a path is ignored

use crate::cli::Context;
use anyhow::{Context as _, Result};

/// Report whether `path` is excluded by ignore rules.
pub fn ignored(ctx: &Context, path: &str) -> Result<()> {
    let git = ctx.git()?;
    let ignored = git
        .try_is_ignored(path)
        .with_context(|| format!("Failed to check ignore status of '{}'", path))?;

    if ctx.json {
        println!(
            "{}",
            serde_json::json!({ "path": path, "ignored": ignored })
        );
    } else if ignored {
        println!("ignored");
    } else {
        println!("not ignored");
    }

    Ok(())
}
