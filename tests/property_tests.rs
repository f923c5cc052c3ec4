//! Property-based tests for output parsing and derived queries.
//!
//! These tests use proptest to verify invariants hold across
//! randomly generated git output.

use proptest::prelude::*;

use gitcmd::exec::{CommandOutput, MockExecutor};
use gitcmd::git::Git;
use gitcmd::parse::{branch_names, lines, remotes, ALIAS_SEPARATOR};

/// Strategy for generating plausible ref name characters.
fn ref_char() -> impl Strategy<Value = char> {
    prop_oneof![
        prop::char::range('a', 'z'),
        prop::char::range('A', 'Z'),
        prop::char::range('0', '9'),
        Just('-'),
        Just('_'),
        Just('.'),
        Just('/'),
    ]
}

/// Strategy for generating valid-looking branch or tag names.
fn ref_name() -> impl Strategy<Value = String> {
    prop::collection::vec(ref_char(), 1..30).prop_map(|chars| chars.into_iter().collect())
}

/// Strategy for arbitrary listing lines, including markers, aliases and blanks.
fn listing_line() -> impl Strategy<Value = String> {
    prop_oneof![
        ref_name().prop_map(|name| format!("  {}", name)),
        ref_name().prop_map(|name| format!("* {}", name)),
        (ref_name(), ref_name()).prop_map(|(a, b)| format!("  {}{}{}", a, ALIAS_SEPARATOR, b)),
        Just(String::new()),
        Just("*".to_string()),
        "[ *a-z>-]{0,12}",
    ]
}

proptest! {
    /// Every returned branch is non-empty, alias-free and passes the filter.
    #[test]
    fn branch_filter_output_invariants(
        listing in prop::collection::vec(listing_line(), 0..20),
        excluded in ref_name(),
    ) {
        let output = listing.join("\n");
        let result = branch_names(&output, |b| b != excluded);

        for branch in &result {
            prop_assert!(!branch.is_empty());
            prop_assert!(!branch.contains(ALIAS_SEPARATOR));
            prop_assert_ne!(branch, &excluded);
            prop_assert!(!branch.starts_with(&['*', ' '][..]));
            prop_assert!(!branch.ends_with(&['*', ' '][..]));
        }
    }

    /// Plain names survive the listing format unchanged and in order.
    #[test]
    fn branch_names_roundtrip_listing(
        names in prop::collection::vec(ref_name(), 0..20),
        current in any::<prop::sample::Index>(),
    ) {
        let current = if names.is_empty() { None } else { Some(current.index(names.len())) };
        let listing: Vec<String> = names
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let marker = if Some(i) == current { '*' } else { ' ' };
                format!("{} {}", marker, name)
            })
            .collect();

        prop_assert_eq!(branch_names(&listing.join("\n"), |_| true), names);
    }

    /// Tag listing keeps every non-empty line.
    #[test]
    fn lines_drop_only_empty_entries(names in prop::collection::vec(ref_name(), 0..20)) {
        prop_assert_eq!(lines(&names.join("\n")), names);
    }

    /// `tag_exists` agrees with membership in `tags()`.
    #[test]
    fn tag_exists_matches_membership(
        tags in prop::collection::vec(ref_name(), 0..10),
        probe in ref_name(),
    ) {
        let exec = MockExecutor::new()
            .with(&["tag", "--list"], CommandOutput::success(tags.join("\n")));
        let git = Git::new(exec);

        prop_assert_eq!(git.tag_exists(&probe), git.tags().contains(&probe));
        prop_assert!(!git.tag_exists(""));
    }

    /// Any non-empty status output means dirty.
    #[test]
    fn any_status_output_is_dirty(out in "[ -~]{1,40}") {
        prop_assume!(!out.trim_matches(|c: char| c == ' ' || c == '\n').is_empty());
        let exec = MockExecutor::new()
            .with(&["status", "--porcelain"], CommandOutput::success(&out));
        prop_assert!(Git::new(exec).is_dirty());
    }

    /// Each remote with fetch and push lines parses back to its URLs.
    #[test]
    fn remote_table_roundtrip(
        entries in prop::collection::btree_map(ref_name(), ("[a-z]{1,8}", "[a-z]{1,8}"), 0..6),
    ) {
        let mut listing = Vec::new();
        for (name, (fetch, push)) in &entries {
            listing.push(format!("{}\thttps://{}.example/repo.git (fetch)", name, fetch));
            listing.push(format!("{}\thttps://{}.example/repo.git (push)", name, push));
        }

        let parsed = remotes(&listing.join("\n"));
        prop_assert_eq!(parsed.len(), entries.len());

        for (name, (fetch, push)) in &entries {
            let remote = &parsed[name];
            prop_assert_eq!(&remote.name, name);
            let expected_fetch = format!("https://{}.example/repo.git", fetch);
            let expected_push = format!("https://{}.example/repo.git", push);
            prop_assert_eq!(remote.fetch_url.as_deref(), Some(expected_fetch.as_str()));
            prop_assert_eq!(remote.push_url.as_deref(), Some(expected_push.as_str()));
        }
    }
}
