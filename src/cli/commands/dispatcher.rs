//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands, PushArgs};
use crate::error::Result;
use crate::git::GitClient;
use crate::shell::{git_program, CommandRunner};
use crate::ui::{ConsoleLog, UserInterface};

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher<'a> {
    project_root: PathBuf,
    config_override: Option<PathBuf>,
    runner: &'a dyn CommandRunner,
}

impl<'a> CommandDispatcher<'a> {
    /// Create a new dispatcher starting from `project_root`.
    pub fn new(
        project_root: PathBuf,
        config_override: Option<PathBuf>,
        runner: &'a dyn CommandRunner,
    ) -> Self {
        Self {
            project_root,
            config_override,
            runner,
        }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Directory whose configuration layers apply: the enclosing repository
    /// root, or the project directory itself outside a repository.
    fn settings_root(&self, ui: &dyn UserInterface) -> PathBuf {
        let log = ConsoleLog::new(ui.output_mode());
        GitClient::new(git_program(), self.runner, &log)
            .resolve_root(&self.project_root)
            .unwrap_or_else(|| self.project_root.clone())
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it. No subcommand means `push` with the top-level arguments.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::Push(args)) => self.push(args.clone(), ui),
            Some(Commands::Config(args)) => {
                let root = self.settings_root(ui);
                let cmd = super::config::ConfigCommand::new(
                    &root,
                    self.config_override.clone(),
                    args.clone(),
                );
                cmd.execute(ui)
            }
            Some(Commands::Completions(args)) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
            None => self.push(cli.push.clone(), ui),
        }
    }

    fn push(&self, args: PushArgs, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let cmd = super::push::PushCommand::new(
            &self.project_root,
            self.config_override.clone(),
            args,
            self.runner,
        );
        cmd.execute(ui)
    }
}
