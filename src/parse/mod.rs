//! parse
//!
//! Line-oriented parsing of git's textual output.
//!
//! All functions here are pure: they take already-normalized stdout and
//! return structured values. Keeping them apart from [`crate::git`] lets
//! them be tested without any executor.
//!
//! - [`lines`] - one entry per non-empty line (tag listings)
//! - [`branch_names`] - branch listings with marker and alias handling
//! - [`remotes`] - the `remote --verbose` table

mod remote;

pub use remote::{remotes, Remote};

/// Characters trimmed from both ends of each branch listing line.
///
/// `*` marks the checked-out branch.
pub const BRANCH_TRIM_CHARS: [char; 2] = [' ', '*'];

/// Token git uses to show a symbolic branch alias (`origin/HEAD -> origin/main`).
pub const ALIAS_SEPARATOR: &str = " -> ";

/// Split `output` on newlines, dropping empty lines.
///
/// Order is preserved. Empty input yields an empty vector.
pub fn lines(output: &str) -> Vec<String> {
    output
        .split('\n')
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse a `git branch` listing.
///
/// Each line is trimmed of spaces and the current-branch marker. Lines that
/// end up empty or contain [`ALIAS_SEPARATOR`] are dropped, and what remains
/// must satisfy `keep`.
///
/// # Example
///
/// ```
/// use gitcmd::parse::branch_names;
///
/// let out = "  develop\n* main\n  origin/HEAD -> origin/main";
/// assert_eq!(branch_names(out, |_| true), vec!["develop", "main"]);
/// assert_eq!(branch_names(out, |b| b != "main"), vec!["develop"]);
/// ```
pub fn branch_names<F>(output: &str, keep: F) -> Vec<String>
where
    F: Fn(&str) -> bool,
{
    output
        .split('\n')
        .map(|line| line.trim_matches(&BRANCH_TRIM_CHARS[..]))
        .filter(|branch| !branch.is_empty() && !branch.contains(ALIAS_SEPARATOR) && keep(branch))
        .map(str::to_string)
        .collect()
}
