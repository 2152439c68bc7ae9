//! Config command implementation.
//!
//! The `gerrit-push config` command shows resolved configuration.

use std::path::{Path, PathBuf};

use crate::cli::args::ConfigArgs;
use crate::config::{load_settings, ConfigPaths};
use crate::error::{GerritPushError, Result};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The config command implementation.
pub struct ConfigCommand {
    project_root: PathBuf,
    config_override: Option<PathBuf>,
    args: ConfigArgs,
}

impl ConfigCommand {
    /// Create a new config command.
    pub fn new(project_root: &Path, config_override: Option<PathBuf>, args: ConfigArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_override,
            args,
        }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    fn sources(&self) -> Vec<PathBuf> {
        match &self.config_override {
            Some(path) => vec![path.clone()],
            None => ConfigPaths::discover(&self.project_root)
                .all_existing()
                .into_iter()
                .cloned()
                .collect(),
        }
    }
}

impl Command for ConfigCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let settings = load_settings(&self.project_root, self.config_override.as_deref())?;

        if self.args.json {
            let json = serde_json::to_string_pretty(&settings)
                .map_err(|e| GerritPushError::Other(e.into()))?;
            ui.message(&json);
            return Ok(CommandResult::success());
        }

        let sources = self.sources();
        if !sources.is_empty() {
            for path in &sources {
                ui.message(&format!("# {}", path.display()));
            }
            ui.message("");
        }

        let yaml =
            serde_yaml::to_string(&settings).map_err(|e| GerritPushError::Other(e.into()))?;
        ui.message(yaml.trim_end());

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    fn setup_project(config: &str) -> TempDir {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join(".gerrit-push");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("config.yml"), config).unwrap();
        temp
    }

    #[test]
    fn config_shows_config_path() {
        let temp = setup_project("default_branch: main\n");
        let cmd = ConfigCommand::new(temp.path(), None, ConfigArgs::default());
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();

        assert!(ui.messages().iter().any(|m| m.contains("config.yml")));
        assert!(ui.has_message("default_branch: main"));
    }

    #[test]
    fn config_json_output() {
        let temp = setup_project("remote: gerrit\nreviewer_presets: [alice]\n");
        let cmd = ConfigCommand::new(temp.path(), None, ConfigArgs { json: true });
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        let json: serde_json::Value = serde_json::from_str(&ui.messages()[0]).unwrap();
        assert_eq!(json["remote"], "gerrit");
        assert_eq!(json["reviewer_presets"][0], "alice");
        assert_eq!(json["confirm_before_push"], true);
    }

    #[test]
    fn config_override_replaces_layers() {
        let temp = setup_project("remote: gerrit\n");
        let other = temp.path().join("other.yml");
        fs::write(&other, "default_branch: dev\n").unwrap();
        let cmd = ConfigCommand::new(temp.path(), Some(other.clone()), ConfigArgs { json: true });
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();

        let json: serde_json::Value = serde_json::from_str(&ui.messages()[0]).unwrap();
        assert_eq!(json["remote"], "origin");
        assert_eq!(json["default_branch"], "dev");
    }

    #[test]
    fn config_rejects_unknown_keys() {
        let temp = setup_project("remotes: gerrit\n");
        let cmd = ConfigCommand::new(temp.path(), None, ConfigArgs::default());
        let mut ui = MockUI::new();

        let err = cmd.execute(&mut ui).unwrap_err();
        assert!(matches!(err, GerritPushError::ConfigParseError { .. }));
    }
}
