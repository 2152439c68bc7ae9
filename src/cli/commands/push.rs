//! Push command implementation.
//!
//! The `gerrit-push push` command resolves the repository, runs the
//! selection flow and pushes `HEAD` to `refs/for/<branch>`.

use std::path::{Path, PathBuf};

use crate::cli::args::PushArgs;
use crate::config::{load_settings, Language, Settings};
use crate::error::{GerritPushError, Result};
use crate::git::GitClient;
use crate::push::{resolve_repository, PushExecutor, PushFlow, PushRequest};
use crate::shell::{git_program, CommandRunner};
use crate::ui::{ConsoleLog, FileLog, Locale, OutputLog, TeeLog, Texts, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The push command implementation.
pub struct PushCommand<'a> {
    project_root: PathBuf,
    config_override: Option<PathBuf>,
    args: PushArgs,
    runner: &'a dyn CommandRunner,
    log: Option<&'a dyn OutputLog>,
}

impl<'a> PushCommand<'a> {
    /// Create a new push command.
    pub fn new(
        project_root: &Path,
        config_override: Option<PathBuf>,
        args: PushArgs,
        runner: &'a dyn CommandRunner,
    ) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_override,
            args,
            runner,
            log: None,
        }
    }

    /// Send the push log to `log` instead of the console.
    pub fn with_log(mut self, log: &'a dyn OutputLog) -> Self {
        self.log = Some(log);
        self
    }

    /// Get the command arguments.
    pub fn args(&self) -> &PushArgs {
        &self.args
    }

    fn request(&self) -> PushRequest {
        PushRequest {
            remote: self.args.remote.clone(),
            branch: self.args.branch.clone(),
            reviewers: self.args.reviewers.clone(),
            assume_yes: self.args.yes,
        }
    }

    fn open_log<'l>(
        &self,
        ui: &mut dyn UserInterface,
        console: &'l dyn OutputLog,
        settings: &Settings,
        root: &Path,
    ) -> TeeLog<'l> {
        let mut log = TeeLog::new().with(Box::new(console));
        if let Some(path) = &settings.log_file {
            let path = root.join(path);
            match FileLog::open(&path) {
                Ok(file) => log = log.with(Box::new(file)),
                Err(e) => ui.warning(&format!("Cannot open log file {}: {}", path.display(), e)),
            }
        }
        log
    }

    fn push(
        &self,
        ui: &mut dyn UserInterface,
        settings: &Settings,
        texts: &'static Texts,
        log: &dyn OutputLog,
        root: &Path,
    ) -> Result<()> {
        let program = git_program();
        let git = GitClient::new(program.clone(), self.runner, log);
        let flow = PushFlow::new(&git, settings, texts, log);
        let plan = flow.plan(ui, &self.request(), root)?;

        let executor = PushExecutor::new(program, self.runner, log);
        if self.args.dry_run {
            ui.message(texts.dry_run);
            ui.message(&executor.command_line(&plan.remote, &plan.target));
            return Ok(());
        }

        ui.message(&texts.pushing(plan.target.as_str(), &plan.remote));
        let outcome = executor.execute(&plan.remote, &plan.target, &plan.root)?;
        ui.success(&texts.push_success(&outcome.remote, &outcome.branch));
        Ok(())
    }
}

/// Turn a push error into the user-facing outcome.
///
/// Cancellation is silent and successful.
fn report(
    ui: &mut dyn UserInterface,
    texts: &Texts,
    log: &dyn OutputLog,
    error: GerritPushError,
) -> CommandResult {
    match error {
        GerritPushError::UserCancelled => {
            tracing::debug!("Push cancelled");
            CommandResult::success()
        }
        GerritPushError::NoRepositoryFound { path } => {
            tracing::debug!("No repository at {}", path.display());
            ui.error(texts.no_git_repo);
            CommandResult::failure(1)
        }
        GerritPushError::NoRemoteConfigured => {
            ui.error(texts.no_git_remote);
            CommandResult::failure(1)
        }
        other => {
            log.append_line(&format!("Error: {}", other));
            ui.error(&format!("{}: {}", texts.push_failed, other));
            CommandResult::failure(1)
        }
    }
}

impl Command for PushCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let console_log = ConsoleLog::new(ui.output_mode());
        let console: &dyn OutputLog = match self.log {
            Some(log) => log,
            None => &console_log,
        };
        let fallback_texts = Texts::for_locale(Locale::resolve(Language::Auto));

        let root = {
            let git = GitClient::new(git_program(), self.runner, console);
            match resolve_repository(&git, self.args.repo.as_deref(), &self.project_root) {
                Ok(root) => root,
                Err(e) => return Ok(report(ui, fallback_texts, console, e)),
            }
        };
        tracing::debug!("Repository root {}", root.display());

        let settings = match load_settings(&root, self.config_override.as_deref()) {
            Ok(settings) => settings,
            Err(e) => return Ok(report(ui, fallback_texts, console, e)),
        };
        let texts = Texts::for_locale(Locale::resolve(settings.language));

        let log = self.open_log(ui, console, &settings, &root);
        match self.push(ui, &settings, texts, &log, &root) {
            Ok(()) => Ok(CommandResult::success()),
            Err(e) => Ok(report(ui, texts, &log, e)),
        }
    }
}
