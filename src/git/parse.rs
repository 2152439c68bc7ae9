//! Parsing of `git` plumbing output.

/// Marker that starts symbolic pointer entries in `git branch -r`.
const HEAD_POINTER: &str = "HEAD";

/// Parse `git remote` output into remote names, preserving order.
pub fn parse_remotes(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

/// Parse `git branch -r` output into branch names of `remote`.
///
/// Only entries under `<remote>/` are kept, with that prefix removed.
/// Symbolic pointers such as `origin/HEAD -> origin/main` are skipped.
pub fn parse_remote_branches(stdout: &str, remote: &str) -> Vec<String> {
    let prefix = format!("{}/", remote);
    stdout
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| line.strip_prefix(&prefix))
        .filter(|branch| !branch.starts_with(HEAD_POINTER))
        .map(String::from)
        .collect()
}

/// Interpret `git rev-parse --abbrev-ref HEAD` output.
///
/// Returns `None` for empty output and for a detached `HEAD`.
pub fn parse_current_branch(stdout: &str) -> Option<String> {
    match stdout.trim() {
        "" | HEAD_POINTER => None,
        branch => Some(branch.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remote_branches_strip_prefix_and_skip_head() {
        let stdout = "  origin/main\n  origin/HEAD -> origin/main\n  origin/feature-x\n";
        assert_eq!(
            parse_remote_branches(stdout, "origin"),
            vec!["main", "feature-x"]
        );
    }

    #[test]
    fn remote_branches_ignore_other_remotes() {
        let stdout = "origin/main\nupstream/main\nupstream/release/1.x\n";
        assert_eq!(
            parse_remote_branches(stdout, "upstream"),
            vec!["main", "release/1.x"]
        );
    }

    #[test]
    fn remote_branches_require_full_remote_name() {
        let stdout = "origin2/main\norigin/dev\n";
        assert_eq!(parse_remote_branches(stdout, "origin"), vec!["dev"]);
    }

    #[test]
    fn remote_branches_handle_crlf() {
        let stdout = "origin/main\r\norigin/dev\r\n";
        assert_eq!(parse_remote_branches(stdout, "origin"), vec!["main", "dev"]);
    }

    #[test]
    fn remotes_drop_blank_lines() {
        assert_eq!(
            parse_remotes("origin\n\n  gerrit  \n"),
            vec!["origin", "gerrit"]
        );
        assert!(parse_remotes("").is_empty());
    }

    #[test]
    fn current_branch_rejects_detached_head() {
        assert_eq!(parse_current_branch("main\n"), Some("main".to_string()));
        assert_eq!(parse_current_branch("HEAD\n"), None);
        assert_eq!(parse_current_branch("  \n"), None);
    }
}
