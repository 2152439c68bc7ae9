//! Configuration schema.
//!
//! ```yaml
//! default_branch: main
//! remote: gerrit
//! confirm_before_push: true
//! confirmation_style: quickpick
//! compact_remote_url: false
//! enable_reviewers: true
//! reviewer_presets:
//!   - alice@example.com
//!   - bob@example.com
//! language: auto
//! log_file: .gerrit-push/push.log
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Remote used when none is configured.
pub const DEFAULT_REMOTE: &str = "origin";

/// Push settings resolved for one repository.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Branch suggested first when choosing the review target
    #[serde(default)]
    pub default_branch: String,

    /// Remote to push to when it exists
    #[serde(default = "default_remote")]
    pub remote: String,

    /// Ask for confirmation before pushing
    #[serde(default = "default_true")]
    pub confirm_before_push: bool,

    /// How the confirmation is presented
    #[serde(default)]
    pub confirmation_style: ConfirmationStyle,

    /// Show only the repository name instead of the full remote URL
    #[serde(default)]
    pub compact_remote_url: bool,

    /// Reviewers offered in the reviewer prompt
    #[serde(default)]
    pub reviewer_presets: Vec<String>,

    /// Prompt for reviewers before pushing
    #[serde(default)]
    pub enable_reviewers: bool,

    /// Language of prompts and messages
    #[serde(default)]
    pub language: Language,

    /// Also append the push log to this file (relative to the repository root)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_branch: String::new(),
            remote: default_remote(),
            confirm_before_push: true,
            confirmation_style: ConfirmationStyle::default(),
            compact_remote_url: false,
            reviewer_presets: Vec::new(),
            enable_reviewers: false,
            language: Language::default(),
            log_file: None,
        }
    }
}

impl Settings {
    /// Apply the value clean-up every consumer relies on.
    ///
    /// Trims `default_branch` and `remote` (a blank remote becomes
    /// `origin`) and drops blank reviewer presets.
    pub fn normalized(mut self) -> Self {
        self.default_branch = self.default_branch.trim().to_string();
        self.remote = match self.remote.trim() {
            "" => default_remote(),
            remote => remote.to_string(),
        };
        self.reviewer_presets = self
            .reviewer_presets
            .iter()
            .map(|p| p.trim())
            .filter(|p| !p.is_empty())
            .map(String::from)
            .collect();
        self
    }
}

/// Confirmation presentation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfirmationStyle {
    /// A Push / Cancel selection with the details inline.
    #[default]
    Quickpick,
    /// A multi-line yes/no question.
    Message,
}

/// Prompt and message language.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Follow `LC_ALL` / `LC_MESSAGES` / `LANG`.
    #[default]
    Auto,
    /// English.
    En,
    /// Simplified Chinese.
    Zh,
}

fn default_remote() -> String {
    DEFAULT_REMOTE.to_string()
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_gives_defaults() {
        let settings: Settings = serde_yaml::from_str("{}").unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.remote, "origin");
        assert!(settings.confirm_before_push);
        assert_eq!(settings.confirmation_style, ConfirmationStyle::Quickpick);
        assert!(!settings.enable_reviewers);
    }

    #[test]
    fn parses_every_key() {
        let yaml = r#"
default_branch: develop
remote: gerrit
confirm_before_push: false
confirmation_style: message
compact_remote_url: true
reviewer_presets: [alice, bob]
enable_reviewers: true
language: zh
log_file: logs/push.log
"#;
        let settings: Settings = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(settings.default_branch, "develop");
        assert_eq!(settings.remote, "gerrit");
        assert!(!settings.confirm_before_push);
        assert_eq!(settings.confirmation_style, ConfirmationStyle::Message);
        assert!(settings.compact_remote_url);
        assert_eq!(settings.reviewer_presets, vec!["alice", "bob"]);
        assert!(settings.enable_reviewers);
        assert_eq!(settings.language, Language::Zh);
        assert_eq!(settings.log_file, Some(PathBuf::from("logs/push.log")));
    }

    #[test]
    fn rejects_unknown_keys() {
        let result: Result<Settings, _> = serde_yaml::from_str("remtoe: origin");
        assert!(result.is_err());
    }

    #[test]
    fn normalized_trims_and_defaults_remote() {
        let settings = Settings {
            default_branch: "  main ".to_string(),
            remote: "   ".to_string(),
            reviewer_presets: vec![" alice ".to_string(), "".to_string(), "  ".to_string()],
            ..Default::default()
        }
        .normalized();

        assert_eq!(settings.default_branch, "main");
        assert_eq!(settings.remote, "origin");
        assert_eq!(settings.reviewer_presets, vec!["alice"]);
    }
}
