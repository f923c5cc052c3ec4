//! tags command - List tags

use super::print_names;
use crate::cli::Context;
use anyhow::Result;

/// List tags in the order git reports them.
pub fn tags(ctx: &Context) -> Result<()> {
    let git = ctx.git()?;
    print_names(ctx, &git.tags())
}
