//! gerrit-push - Push the current commit to Gerrit for review.
//!
//! gerrit-push builds a `HEAD:refs/for/<branch>` destination with optional
//! `%r=` reviewer options, walks the user through choosing the remote,
//! branch and reviewers, confirms, and runs `git push`.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Layered YAML settings
//! - [`error`] - Error types and result aliases
//! - [`git`] - Repository, remote and branch discovery
//! - [`push`] - Push target construction, selection flow and execution
//! - [`shell`] - External command execution
//! - [`ui`] - Prompts, terminal output, text tables and log sinks
//!
//! # Example
//!
//! ```
//! use gerrit_push::push::{build_push_target, normalize_reviewers};
//!
//! let reviewers = normalize_reviewers("r=alice, bob alice");
//! let target = build_push_target("main", &reviewers);
//! assert_eq!(target.as_str(), "HEAD:refs/for/main%r=alice,r=bob");
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod git;
pub mod push;
pub mod shell;
pub mod ui;

pub use error::{GerritPushError, Result};
