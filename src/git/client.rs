//! Repository and remote discovery through the `git` client.

use std::path::{Path, PathBuf};

use crate::error::{GerritPushError, Result};
use crate::shell::{CommandResult, CommandRunner};
use crate::ui::OutputLog;

use super::parse::{parse_current_branch, parse_remote_branches, parse_remotes};

/// Read-only queries against a git repository.
///
/// Discovery failures are written to the push log and degrade to empty
/// results; only [`GitClient::current_branch`] reports an error.
pub struct GitClient<'a> {
    program: String,
    runner: &'a dyn CommandRunner,
    log: &'a dyn OutputLog,
}

impl<'a> GitClient<'a> {
    /// Create a client that runs `program` through `runner`.
    pub fn new(
        program: impl Into<String>,
        runner: &'a dyn CommandRunner,
        log: &'a dyn OutputLog,
    ) -> Self {
        Self {
            program: program.into(),
            runner,
            log,
        }
    }

    /// The git executable this client invokes.
    pub fn program(&self) -> &str {
        &self.program
    }

    fn git(&self, args: &[&str], cwd: &Path) -> Result<CommandResult> {
        self.runner.run(&self.program, args, cwd, None)
    }

    /// Find the repository root containing `path`.
    ///
    /// Returns `None` when `path` is outside any repository.
    pub fn resolve_root(&self, path: &Path) -> Option<PathBuf> {
        match self.git(&["rev-parse", "--show-toplevel"], path) {
            Ok(result) => {
                let root = result.stdout.trim();
                if root.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(root))
                }
            }
            Err(e) => {
                tracing::warn!("git root lookup failed in {}: {}", path.display(), e);
                self.log.append_line(&format!(
                    "Failed to resolve git root in {}: {}",
                    path.display(),
                    e
                ));
                None
            }
        }
    }

    /// Name of the checked-out branch.
    ///
    /// # Errors
    ///
    /// Returns `BranchUndetermined` for a detached `HEAD` or when git fails.
    pub fn current_branch(&self, root: &Path) -> Result<String> {
        let result = self
            .git(&["rev-parse", "--abbrev-ref", "HEAD"], root)
            .map_err(|e| GerritPushError::BranchUndetermined {
                message: e.to_string(),
            })?;

        parse_current_branch(&result.stdout).ok_or_else(|| GerritPushError::BranchUndetermined {
            message: "HEAD is not on a branch".to_string(),
        })
    }

    /// Configured remotes in git's order.
    pub fn list_remotes(&self, root: &Path) -> Vec<String> {
        match self.git(&["remote"], root) {
            Ok(result) => parse_remotes(&result.stdout),
            Err(e) => {
                tracing::warn!("git remote failed: {}", e);
                self.log
                    .append_line(&format!("Failed to list remotes: {}", e));
                Vec::new()
            }
        }
    }

    /// Fetch URL of `remote`, if git knows one.
    pub fn remote_url(&self, remote: &str, root: &Path) -> Option<String> {
        match self.git(&["remote", "get-url", remote], root) {
            Ok(result) => {
                let url = result.stdout.trim();
                (!url.is_empty()).then(|| url.to_string())
            }
            Err(e) => {
                tracing::warn!("git remote get-url {} failed: {}", remote, e);
                self.log.append_line(&format!(
                    "Failed to get remote url for {}: {}",
                    remote, e
                ));
                None
            }
        }
    }

    /// Remote-tracking branches of `remote`, without the `<remote>/` prefix.
    pub fn list_remote_branches(&self, remote: &str, root: &Path) -> Vec<String> {
        match self.git(&["branch", "-r"], root) {
            Ok(result) => parse_remote_branches(&result.stdout, remote),
            Err(e) => {
                tracing::warn!("git branch -r failed: {}", e);
                self.log.append_line(&format!(
                    "Failed to list remote branches for {}: {}",
                    remote, e
                ));
                Vec::new()
            }
        }
    }
}
