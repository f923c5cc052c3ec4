//! parse::remote
//!
//! Parsing of `git remote --verbose`.
//!
//! Git prints two lines per remote:
//!
//! ```text
//! origin  https://example.com/repo.git (fetch)
//! origin  https://example.com/repo.git (push)
//! ```
//!
//! Each line is classified on its own. Lines that do not look like
//! `name url (type)` are skipped.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// `name url (type)`, where name and url are any non-whitespace token.
const REMOTE_LINE_PATTERN: &str = r"^(\S+)\s+(\S+)\s+\((.+)\)$";

fn remote_line() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(REMOTE_LINE_PATTERN).expect("remote line pattern is valid"))
}

/// A configured remote and its URLs.
///
/// Either URL may be missing if git only printed one of the two lines.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Remote {
    /// Remote name (e.g. "origin")
    pub name: String,
    /// URL used for fetching
    pub fetch_url: Option<String>,
    /// URL used for pushing
    pub push_url: Option<String>,
}

impl Remote {
    /// A remote with no URLs yet.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fetch_url: None,
            push_url: None,
        }
    }
}

/// Parse the remote table into a map keyed by remote name.
///
/// # Example
///
/// ```
/// use gitcmd::parse::remotes;
///
/// let out = "origin https://x/repo.git (fetch)\norigin https://x/repo.git (push)";
/// let map = remotes(out);
/// let origin = &map["origin"];
/// assert_eq!(origin.fetch_url.as_deref(), Some("https://x/repo.git"));
/// assert_eq!(origin.fetch_url, origin.push_url);
/// ```
pub fn remotes(output: &str) -> BTreeMap<String, Remote> {
    let mut map: BTreeMap<String, Remote> = BTreeMap::new();

    for line in output.split('\n') {
        let Some(caps) = remote_line().captures(line) else {
            continue;
        };

        let name = &caps[1];
        let url = caps[2].to_string();

        let remote = map
            .entry(name.to_string())
            .or_insert_with(|| Remote::new(name));

        match &caps[3] {
            "fetch" => remote.fetch_url = Some(url),
            "push" => remote.push_url = Some(url),
            _ => {}
        }
    }

    map
}
