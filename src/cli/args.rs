//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// gerrit-push - Push the current commit to Gerrit for review.
#[derive(Debug, Parser)]
#[command(name = "gerrit-push")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (replaces the discovered .gerrit-push layers)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory to start from (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output; hides the push log
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Push arguments used when no subcommand is given
    #[command(flatten)]
    pub push: PushArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Arguments for the push to run, whether or not `push` was named.
    pub fn push_args(&self) -> Option<&PushArgs> {
        match &self.command {
            Some(Commands::Push(args)) => Some(args),
            Some(_) => None,
            None => Some(&self.push),
        }
    }
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Push HEAD to refs/for/<branch> (default if no command specified)
    Push(PushArgs),

    /// Show resolved configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `push` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct PushArgs {
    /// Repository to push from (defaults to the project directory)
    #[arg(long, value_name = "PATH")]
    pub repo: Option<PathBuf>,

    /// Target branch; skips the branch prompt
    #[arg(short, long, env = "GERRIT_PUSH_BRANCH")]
    pub branch: Option<String>,

    /// Remote to push to instead of the configured one
    #[arg(short, long, env = "GERRIT_PUSH_REMOTE")]
    pub remote: Option<String>,

    /// Reviewers (comma or space separated); skips the reviewer prompts
    #[arg(long, env = "GERRIT_PUSH_REVIEWERS")]
    pub reviewers: Option<String>,

    /// Push without asking for confirmation
    #[arg(short, long)]
    pub yes: bool,

    /// Print the git command instead of running it
    #[arg(long)]
    pub dry_run: bool,

    /// Use defaults, no prompts
    #[arg(long)]
    pub non_interactive: bool,
}

/// Arguments for the `config` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ConfigArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
