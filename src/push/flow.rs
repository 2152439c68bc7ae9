//! Interactive selection of remote, branch and reviewers.
//!
//! The flow runs `ChooseRemote -> ChooseBranch -> ChooseReviewers ->
//! Confirm` and produces a [`PushPlan`]. Dismissing any prompt ends it with
//! [`GerritPushError::UserCancelled`] before `git push` is ever invoked.

use std::path::{Path, PathBuf};

use crate::config::{ConfirmationStyle, Settings};
use crate::error::{GerritPushError, Result};
use crate::git::GitClient;
use crate::ui::{OutputLog, Prompt, PromptOption, PromptType, Texts, UserInterface};

use super::target::{
    build_push_target, extract_repo_name, format_reviewers, normalize_reviewers, PushTarget,
};

/// Select value that opens the freeform branch prompt.
const ENTER_BRANCH: &str = "__enter_branch__";
/// Multi-select value meaning "push without reviewers".
const NO_REVIEWERS: &str = "__no_reviewers__";
const CONFIRM_PUSH: &str = "push";
const CONFIRM_CANCEL: &str = "cancel";

const RULE: &str = "────────────────────────────────────────";

/// Choices supplied up front, usually from the command line.
///
/// Every `Some` skips the matching prompt.
#[derive(Debug, Clone, Default)]
pub struct PushRequest {
    /// Remote to use instead of the configured one.
    pub remote: Option<String>,
    /// Target branch.
    pub branch: Option<String>,
    /// Raw reviewer input, normalized like interactive input.
    pub reviewers: Option<String>,
    /// Skip the confirmation step.
    pub assume_yes: bool,
}

/// A fully resolved push, ready for the executor.
#[derive(Debug, Clone)]
pub struct PushPlan {
    /// Repository root the push runs in.
    pub root: PathBuf,
    /// Remote to push to.
    pub remote: String,
    /// URL of the remote, when git reports one.
    pub remote_url: Option<String>,
    /// Branch checked out locally; `None` when it could not be read.
    pub current_branch: Option<String>,
    /// Refspec handed to `git push`.
    pub target: PushTarget,
}

impl PushPlan {
    /// Target branch of the push.
    pub fn branch(&self) -> &str {
        self.target.branch()
    }
}

/// Find the repository root for `repo` (when given) or `start_dir`.
///
/// # Errors
///
/// Returns `NoRepositoryFound` when neither lies inside a git repository.
pub fn resolve_repository(
    git: &GitClient<'_>,
    repo: Option<&Path>,
    start_dir: &Path,
) -> Result<PathBuf> {
    let candidate = repo.unwrap_or(start_dir);
    git.resolve_root(candidate)
        .ok_or_else(|| GerritPushError::NoRepositoryFound {
            path: candidate.to_path_buf(),
        })
}

/// Sequences the push prompts for one repository.
pub struct PushFlow<'a> {
    git: &'a GitClient<'a>,
    settings: &'a Settings,
    texts: &'static Texts,
    log: &'a dyn OutputLog,
}

impl<'a> PushFlow<'a> {
    pub fn new(
        git: &'a GitClient<'a>,
        settings: &'a Settings,
        texts: &'static Texts,
        log: &'a dyn OutputLog,
    ) -> Self {
        Self {
            git,
            settings,
            texts,
            log,
        }
    }

    /// Run every selection step and return the confirmed plan.
    pub fn plan(
        &self,
        ui: &mut dyn UserInterface,
        request: &PushRequest,
        root: &Path,
    ) -> Result<PushPlan> {
        let remote = self.choose_remote(ui, request, root)?;
        tracing::debug!("Using remote {}", remote);

        let current_branch = match self.git.current_branch(root) {
            Ok(branch) => Some(branch),
            Err(e) if request.branch.is_some() || !self.settings.default_branch.is_empty() => {
                self.log.append_line(&format!("Current branch unavailable: {}", e));
                None
            }
            Err(e) => return Err(e),
        };

        let branch = match request.branch.as_deref().map(str::trim) {
            Some(branch) if !branch.is_empty() => branch.to_string(),
            _ => self.choose_branch(ui, &remote, current_branch.as_deref(), root)?,
        };
        tracing::debug!("Target branch {}", branch);

        let reviewers = self.choose_reviewers(ui, request)?;
        let target = build_push_target(&branch, &reviewers);
        let remote_url = self.git.remote_url(&remote, root);

        let plan = PushPlan {
            root: root.to_path_buf(),
            remote,
            remote_url,
            current_branch,
            target,
        };

        self.write_details(&plan);

        if self.settings.confirm_before_push && !request.assume_yes {
            self.confirm(ui, &plan)?;
        }

        Ok(plan)
    }

    /// Pick the remote: the requested or configured one when it exists,
    /// the only one when there is exactly one, otherwise ask.
    pub fn choose_remote(
        &self,
        ui: &mut dyn UserInterface,
        request: &PushRequest,
        root: &Path,
    ) -> Result<String> {
        let remotes = self.git.list_remotes(root);
        if remotes.is_empty() {
            return Err(GerritPushError::NoRemoteConfigured);
        }

        let preferred = request
            .remote
            .as_deref()
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .unwrap_or(&self.settings.remote);

        if remotes.iter().any(|r| r == preferred) {
            return Ok(preferred.to_string());
        }
        if remotes.len() == 1 {
            return Ok(remotes[0].clone());
        }

        let options = remotes
            .iter()
            .map(|r| {
                let label = if *r == self.settings.remote {
                    format!("{}  ({})", r, self.texts.configured_remote)
                } else {
                    r.clone()
                };
                PromptOption::new(label, r.clone())
            })
            .collect();

        let answer = ui.prompt(&Prompt {
            key: "remote".to_string(),
            question: self.texts.select_remote.to_string(),
            prompt_type: PromptType::Select { options },
            default: Some(remotes[0].clone()),
        })?;

        let remote = answer.as_string();
        if remote.is_empty() {
            return Err(GerritPushError::UserCancelled);
        }
        Ok(remote)
    }

    /// Offer branch suggestions, accepting freeform text as the last entry.
    pub fn choose_branch(
        &self,
        ui: &mut dyn UserInterface,
        remote: &str,
        current: Option<&str>,
        root: &Path,
    ) -> Result<String> {
        let suggestions = self.branch_suggestions(remote, current, root);
        if suggestions.is_empty() {
            return self.enter_branch(ui);
        }

        let preselected = Some(self.settings.default_branch.as_str())
            .filter(|b| !b.is_empty())
            .or(current)
            .unwrap_or(suggestions[0].0.as_str())
            .to_string();

        let mut options: Vec<PromptOption> = suggestions
            .iter()
            .map(|(branch, detail)| {
                PromptOption::new(format!("{}  ({})", branch, detail), branch.clone())
            })
            .collect();
        options.push(PromptOption::new(self.texts.enter_branch, ENTER_BRANCH));

        let answer = ui
            .prompt(&Prompt {
                key: "branch".to_string(),
                question: self.texts.select_branch.to_string(),
                prompt_type: PromptType::Select { options },
                default: Some(preselected),
            })?
            .as_string();

        match answer.as_str() {
            ENTER_BRANCH => self.enter_branch(ui),
            "" => Err(GerritPushError::UserCancelled),
            _ => Ok(answer),
        }
    }

    fn branch_suggestions(
        &self,
        remote: &str,
        current: Option<&str>,
        root: &Path,
    ) -> Vec<(String, String)> {
        let mut suggestions: Vec<(String, String)> = Vec::new();
        if let Some(current) = current {
            suggestions.push((current.to_string(), self.texts.current_branch.to_string()));
        }
        let default = self.settings.default_branch.as_str();
        if !default.is_empty() && Some(default) != current {
            suggestions.push((default.to_string(), self.texts.default_branch.to_string()));
        }
        for branch in self.git.list_remote_branches(remote, root) {
            if suggestions.iter().all(|(b, _)| *b != branch) {
                let detail = self.texts.remote_branch(remote, &branch);
                suggestions.push((branch, detail));
            }
        }
        suggestions
    }

    fn enter_branch(&self, ui: &mut dyn UserInterface) -> Result<String> {
        let branch = ui
            .prompt(&Prompt {
                key: "branch_input".to_string(),
                question: self.texts.enter_branch_prompt.to_string(),
                prompt_type: PromptType::Input { allow_empty: true },
                default: None,
            })?
            .as_string();

        let branch = branch.trim();
        if branch.is_empty() {
            return Err(GerritPushError::UserCancelled);
        }
        Ok(branch.to_string())
    }

    /// Collect reviewers from presets and freeform input.
    ///
    /// Returns an empty list without prompting when reviewers are disabled.
    pub fn choose_reviewers(
        &self,
        ui: &mut dyn UserInterface,
        request: &PushRequest,
    ) -> Result<Vec<String>> {
        if let Some(raw) = &request.reviewers {
            return Ok(normalize_reviewers(raw));
        }
        if !self.settings.enable_reviewers {
            return Ok(Vec::new());
        }

        if self.settings.reviewer_presets.is_empty() {
            let raw = self.reviewer_input(ui, "reviewers_input", self.texts.reviewer_input)?;
            return Ok(normalize_reviewers(&raw));
        }

        let mut options = vec![PromptOption::new(
            format!("{}  ({})", self.texts.reviewer_none, self.texts.reviewer_none_desc),
            NO_REVIEWERS,
        )];
        options.extend(self.settings.reviewer_presets.iter().map(|preset| {
            PromptOption::new(
                format!("{}  ({})", preset, self.texts.reviewer_preset_desc),
                preset.clone(),
            )
        }));

        let selected = ui
            .prompt(&Prompt {
                key: "reviewers".to_string(),
                question: self.texts.reviewer_select.to_string(),
                prompt_type: PromptType::MultiSelect { options },
                default: Some(String::new()),
            })?
            .into_strings();

        if selected.iter().any(|s| s == NO_REVIEWERS) {
            return Ok(Vec::new());
        }

        let extra = self.reviewer_input(ui, "reviewers_extra", self.texts.reviewer_extra)?;
        let mut raw = selected.join(",");
        raw.push(',');
        raw.push_str(&extra);
        Ok(normalize_reviewers(&raw))
    }

    fn reviewer_input(
        &self,
        ui: &mut dyn UserInterface,
        key: &str,
        question: &str,
    ) -> Result<String> {
        let answer = ui.prompt(&Prompt {
            key: key.to_string(),
            question: question.to_string(),
            prompt_type: PromptType::Input { allow_empty: true },
            default: Some(String::new()),
        })?;
        Ok(answer.as_string())
    }

    fn display_url(&self, plan: &PushPlan) -> Option<String> {
        plan.remote_url.as_deref().map(|url| {
            if self.settings.compact_remote_url {
                extract_repo_name(url)
            } else {
                url.to_string()
            }
        })
    }

    fn reviewers_display(&self, plan: &PushPlan) -> String {
        if plan.target.reviewers().is_empty() {
            self.texts.reviewer_none.to_string()
        } else {
            format_reviewers(plan.target.reviewers())
        }
    }

    fn write_details(&self, plan: &PushPlan) {
        let t = self.texts;
        self.log.append_line(RULE);
        self.log.append_line(t.push_details_title);
        self.log.append_line(&format!(
            "{}: {}",
            t.current_branch_label,
            plan.current_branch.as_deref().unwrap_or("-")
        ));
        self.log
            .append_line(&format!("{}: {}", t.target_branch_label, plan.branch()));
        self.log
            .append_line(&format!("{}: {}", t.remote_name_label, plan.remote));
        if let Some(url) = &plan.remote_url {
            self.log.append_line(&format!("{}: {}", t.remote_url_label, url));
        }
        self.log
            .append_line(&format!("{}: {}", t.push_ref_label, plan.target));
        self.log.append_line(&format!(
            "{}: {}",
            t.reviewers_label,
            self.reviewers_display(plan)
        ));
        self.log.append_line(RULE);
    }

    /// Ask for confirmation in the configured style; declining cancels.
    pub fn confirm(&self, ui: &mut dyn UserInterface, plan: &PushPlan) -> Result<()> {
        let t = self.texts;
        let url = self.display_url(plan);

        let confirmed = match self.settings.confirmation_style {
            ConfirmationStyle::Quickpick => {
                let mut details = vec![
                    format!("{}: {}", t.target_branch_label, plan.branch()),
                    format!("{}: {}", t.remote_name_label, plan.remote),
                ];
                if let Some(url) = &url {
                    details.push(format!("{}: {}", t.remote_url_label, url));
                }
                details.push(format!("{}: {}", t.reviewers_label, self.reviewers_display(plan)));

                let options = vec![
                    PromptOption::new(
                        format!("{}  {} • {}", t.push_button, t.push_button_desc, details.join(" • ")),
                        CONFIRM_PUSH,
                    ),
                    PromptOption::new(
                        format!("{}  {}", t.cancel_button, t.cancel_button_desc),
                        CONFIRM_CANCEL,
                    ),
                ];
                ui.prompt(&Prompt {
                    key: "confirm".to_string(),
                    question: t.confirm_title.to_string(),
                    prompt_type: PromptType::Select { options },
                    default: None,
                })?
                .as_string()
                    == CONFIRM_PUSH
            }
            ConfirmationStyle::Message => {
                let reviewers = (!plan.target.reviewers().is_empty())
                    .then(|| format_reviewers(plan.target.reviewers()));
                let question = t.push_confirm_message(
                    plan.branch(),
                    &plan.remote,
                    url.as_deref(),
                    reviewers.as_deref(),
                );
                ui.prompt(&Prompt {
                    key: "confirm".to_string(),
                    question,
                    prompt_type: PromptType::Confirm,
                    default: None,
                })?
                .as_bool()
                .unwrap_or(false)
            }
        };

        if confirmed {
            Ok(())
        } else {
            Err(GerritPushError::UserCancelled)
        }
    }
}
