//! Command-line interface for gerrit-push.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{Cli, Commands, CompletionsArgs, ConfigArgs, PushArgs};
pub use commands::{Command, CommandDispatcher, CommandResult};
