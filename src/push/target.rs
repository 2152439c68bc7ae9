//! Push target construction and reviewer normalization.
//!
//! Gerrit accepts changes pushed to the magic `refs/for/<branch>`
//! namespace. Reviewers are requested by appending `%r=<id>` options to
//! the destination, comma separated.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Reviewer option marker accepted (and stripped) in user input.
const REVIEWER_MARKER: &str = "r=";

static GIT_SUFFIX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\.git/?$").unwrap());
static LAST_SEGMENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[/:]+([^/:]+)$").unwrap());

/// Destination refspec for a review push.
///
/// Built once per push from a branch and reviewer list; immutable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PushTarget {
    branch: String,
    reviewers: Vec<String>,
    refspec: String,
}

impl PushTarget {
    /// The target branch (the `<branch>` in `refs/for/<branch>`).
    pub fn branch(&self) -> &str {
        &self.branch
    }

    /// Reviewers encoded in the refspec, in the order supplied.
    pub fn reviewers(&self) -> &[String] {
        &self.reviewers
    }

    /// The full refspec passed to `git push`.
    pub fn as_str(&self) -> &str {
        &self.refspec
    }
}

impl fmt::Display for PushTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.refspec)
    }
}

/// Build `HEAD:refs/for/<branch>` with optional `%r=` reviewer options.
pub fn build_push_target(branch: &str, reviewers: &[String]) -> PushTarget {
    let mut refspec = format!("HEAD:refs/for/{}", branch);
    if !reviewers.is_empty() {
        let options: Vec<String> = reviewers
            .iter()
            .map(|r| format!("{}{}", REVIEWER_MARKER, r))
            .collect();
        refspec.push('%');
        refspec.push_str(&options.join(","));
    }

    PushTarget {
        branch: branch.to_string(),
        reviewers: reviewers.to_vec(),
        refspec,
    }
}

/// Split free-form reviewer input into distinct reviewer ids.
///
/// Tokens are separated by any run of commas and whitespace. A leading
/// `r=` (any case) is removed from each token. Empty tokens are dropped and
/// duplicates keep their first position.
pub fn normalize_reviewers(input: &str) -> Vec<String> {
    let mut reviewers: Vec<String> = Vec::new();
    for token in input.split(|c: char| c == ',' || c.is_whitespace()) {
        let id = strip_reviewer_marker(token.trim());
        if !id.is_empty() && !reviewers.iter().any(|r| r == id) {
            reviewers.push(id.to_string());
        }
    }
    reviewers
}

fn strip_reviewer_marker(mut token: &str) -> &str {
    while let Some(head) = token.get(..REVIEWER_MARKER.len()) {
        if !head.eq_ignore_ascii_case(REVIEWER_MARKER) {
            break;
        }
        token = &token[REVIEWER_MARKER.len()..];
    }
    token
}

/// Join reviewers for display.
pub fn format_reviewers(reviewers: &[String]) -> String {
    reviewers.join(", ")
}

/// Short repository name from a remote URL.
///
/// `https://host/team/project.git` and `ssh://host:team/project` both give
/// `project`. Input without a `/` or `:` separator is returned as is.
pub fn extract_repo_name(url: &str) -> String {
    let stripped = GIT_SUFFIX.replace(url, "");
    match LAST_SEGMENT.captures(&stripped) {
        Some(caps) => caps[1].to_string(),
        None => stripped.into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn target_without_reviewers() {
        let target = build_push_target("main", &[]);
        assert_eq!(target.as_str(), "HEAD:refs/for/main");
        assert_eq!(target.branch(), "main");
        assert!(target.reviewers().is_empty());
    }

    #[test]
    fn target_with_reviewers_keeps_order() {
        let target = build_push_target("main", &ids(&["alice", "bob"]));
        assert_eq!(target.to_string(), "HEAD:refs/for/main%r=alice,r=bob");
    }

    #[test]
    fn target_with_nested_branch() {
        let target = build_push_target("release/2.0", &ids(&["qa@example.com"]));
        assert_eq!(
            target.as_str(),
            "HEAD:refs/for/release/2.0%r=qa@example.com"
        );
    }

    #[test]
    fn normalize_splits_on_commas_and_whitespace() {
        assert_eq!(
            normalize_reviewers(" alice,bob  carol,,\tdave \n"),
            ids(&["alice", "bob", "carol", "dave"])
        );
    }

    #[test]
    fn normalize_strips_marker_case_insensitively() {
        assert_eq!(
            normalize_reviewers("r=alice, R=bob, r=R=carol"),
            ids(&["alice", "bob", "carol"])
        );
    }

    #[test]
    fn normalize_drops_bare_markers_and_duplicates() {
        assert_eq!(
            normalize_reviewers("r=, alice r=alice bob alice"),
            ids(&["alice", "bob"])
        );
        assert!(normalize_reviewers("  , ,  ").is_empty());
    }

    #[test]
    fn normalize_is_idempotent() {
        let inputs = [
            "r=alice, bob,, R=carol alice",
            "",
            "r=r=x y",
            "a@example.com,b@example.com b@example.com",
        ];
        for input in inputs {
            let once = normalize_reviewers(input);
            let twice = normalize_reviewers(&once.join(","));
            assert_eq!(once, twice, "input {:?}", input);
        }
    }

    #[test]
    fn normalize_keeps_non_marker_prefixes() {
        assert_eq!(normalize_reviewers("rob robert"), ids(&["rob", "robert"]));
        assert_eq!(normalize_reviewers("é r=ünal"), ids(&["é", "ünal"]));
    }

    #[test]
    fn format_reviewers_joins_with_comma_space() {
        assert_eq!(format_reviewers(&ids(&["alice", "bob"])), "alice, bob");
        assert_eq!(format_reviewers(&[]), "");
    }

    #[test]
    fn repo_name_from_https_url() {
        assert_eq!(extract_repo_name("https://host/team/project.git"), "project");
        assert_eq!(extract_repo_name("https://host/team/project.git/"), "project");
    }

    #[test]
    fn repo_name_from_ssh_url() {
        assert_eq!(extract_repo_name("ssh://host:team/project"), "project");
        assert_eq!(extract_repo_name("git@host:project.git"), "project");
    }

    #[test]
    fn repo_name_without_separator_is_unchanged() {
        assert_eq!(extract_repo_name("project"), "project");
        assert_eq!(extract_repo_name("project.git"), "project");
    }
}
