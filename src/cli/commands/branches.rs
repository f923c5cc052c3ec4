//! branches command - List local, remote or merged branches

use super::print_names;
use crate::cli::Context;
use anyhow::Result;

/// Which branch listing to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BranchScope {
    /// Local branches
    Local,
    /// Remote-tracking branches
    Remote,
    /// Branches merged into the current branch
    Merged,
}

impl BranchScope {
    /// Create scope from flags. `--remote` wins if both are set.
    pub fn from_flags(remote: bool, merged: bool) -> Self {
        if remote {
            BranchScope::Remote
        } else if merged {
            BranchScope::Merged
        } else {
            BranchScope::Local
        }
    }
}

/// List branches for the given scope.
pub fn branches(ctx: &Context, scope: BranchScope) -> Result<()> {
    let git = ctx.git()?;

    let names = match scope {
        BranchScope::Local => git.branches(),
        BranchScope::Remote => git.remote_branches(),
        BranchScope::Merged => git.merged_branches(),
    };

    print_names(ctx, &names)
}
