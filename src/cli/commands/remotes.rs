//! remotes command - List remotes and their URLs

use crate::cli::Context;
use anyhow::Result;

/// List configured remotes.
///
/// Plain output is `name<TAB>fetch-url<TAB>push-url`, with `-` for a
/// missing URL.
pub fn remotes(ctx: &Context) -> Result<()> {
    let git = ctx.git()?;
    let remotes = git.remotes();

    if ctx.json {
        println!("{}", serde_json::to_string_pretty(&remotes)?);
        return Ok(());
    }

    for remote in remotes.values() {
        println!(
            "{}\t{}\t{}",
            remote.name,
            remote.fetch_url.as_deref().unwrap_or("-"),
            remote.push_url.as_deref().unwrap_or("-")
        );
    }

    Ok(())
}
