//! Git repository discovery.
//!
//! - [`client`] - [`GitClient`], read-only queries routed through a
//!   [`CommandRunner`](crate::shell::CommandRunner)
//! - [`parse`] - pure parsing of `git` output

pub mod client;
pub mod parse;

pub use client::GitClient;
pub use parse::{parse_current_branch, parse_remote_branches, parse_remotes};
