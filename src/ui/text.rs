//! User-facing text tables.
//!
//! One table per [`Locale`]; the table is chosen once at startup and passed
//! by reference to everything that prints or prompts.

use crate::config::Language;

/// Supported message locales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    En,
    Zh,
}

impl Locale {
    /// Resolve the locale from the configured language.
    ///
    /// `auto` consults `LC_ALL`, `LC_MESSAGES` and `LANG` in that order.
    pub fn resolve(language: Language) -> Self {
        match language {
            Language::En => Self::En,
            Language::Zh => Self::Zh,
            Language::Auto => {
                let env = ["LC_ALL", "LC_MESSAGES", "LANG"]
                    .iter()
                    .filter_map(|key| std::env::var(key).ok())
                    .find(|value| !value.is_empty());
                Self::from_tag(env.as_deref().unwrap_or(""))
            }
        }
    }

    /// Map a locale tag such as `zh_CN.UTF-8` or `en-US`.
    pub fn from_tag(tag: &str) -> Self {
        if tag.to_lowercase().starts_with("zh") {
            Self::Zh
        } else {
            Self::En
        }
    }
}

/// Message table for one locale.
#[derive(Debug)]
pub struct Texts {
    pub locale: Locale,
    pub no_git_repo: &'static str,
    pub no_git_remote: &'static str,
    pub select_remote: &'static str,
    pub configured_remote: &'static str,
    pub select_branch: &'static str,
    pub current_branch: &'static str,
    pub default_branch: &'static str,
    pub enter_branch: &'static str,
    pub enter_branch_prompt: &'static str,
    pub confirm_title: &'static str,
    pub push_button: &'static str,
    pub push_button_desc: &'static str,
    pub cancel_button: &'static str,
    pub cancel_button_desc: &'static str,
    pub push_details_title: &'static str,
    pub current_branch_label: &'static str,
    pub target_branch_label: &'static str,
    pub remote_name_label: &'static str,
    pub remote_url_label: &'static str,
    pub push_ref_label: &'static str,
    pub reviewers_label: &'static str,
    pub reviewer_input: &'static str,
    pub reviewer_select: &'static str,
    pub reviewer_extra: &'static str,
    pub reviewer_preset_desc: &'static str,
    pub reviewer_none: &'static str,
    pub reviewer_none_desc: &'static str,
    pub push_failed: &'static str,
    pub dry_run: &'static str,
}

static EN: Texts = Texts {
    locale: Locale::En,
    no_git_repo: "No git repository found. Please switch to a directory with .git and try again.",
    no_git_remote: "No git remotes found for Gerrit push.",
    select_remote: "Select remote to push to Gerrit",
    configured_remote: "configured remote",
    select_branch: "Select target branch (refs/for/<branch>)",
    current_branch: "current branch",
    default_branch: "configured default branch",
    enter_branch: "Enter a branch or ref...",
    enter_branch_prompt: "Target branch",
    confirm_title: "Confirm Gerrit Push",
    push_button: "Push",
    push_button_desc: "Confirm and push",
    cancel_button: "Cancel",
    cancel_button_desc: "Discard changes",
    push_details_title: "Push Details",
    current_branch_label: "Current Branch",
    target_branch_label: "Target Branch",
    remote_name_label: "Remote Name",
    remote_url_label: "Remote URL",
    push_ref_label: "Push Ref",
    reviewers_label: "Reviewers",
    reviewer_input: "Enter reviewers (comma or space separated, optional)",
    reviewer_select: "Select reviewers",
    reviewer_extra: "Additional reviewers (comma or space separated, optional)",
    reviewer_preset_desc: "preset reviewer",
    reviewer_none: "No reviewers",
    reviewer_none_desc: "push without reviewers",
    push_failed: "Gerrit push failed",
    dry_run: "Dry run, not pushing",
};

static ZH: Texts = Texts {
    locale: Locale::Zh,
    no_git_repo: "未找到可用的 Git 仓库，请切换到包含 .git 的目录后重试。",
    no_git_remote: "未找到 Git Remote，无法执行 Gerrit push。",
    select_remote: "选择要推送到的 Remote",
    configured_remote: "已配置的 Remote",
    select_branch: "选择目标分支 (refs/for/<branch>)",
    current_branch: "当前分支",
    default_branch: "配置的默认分支",
    enter_branch: "输入分支或引用...",
    enter_branch_prompt: "目标分支",
    confirm_title: "确认 Gerrit Push",
    push_button: "Push",
    push_button_desc: "确认并推送",
    cancel_button: "取消",
    cancel_button_desc: "取消此次推送",
    push_details_title: "Push 详情",
    current_branch_label: "当前分支",
    target_branch_label: "目标分支",
    remote_name_label: "Remote 名称",
    remote_url_label: "Remote URL",
    push_ref_label: "Push Ref",
    reviewers_label: "Reviewer",
    reviewer_input: "输入 reviewer（逗号或空格分隔，可留空）",
    reviewer_select: "选择 Reviewer",
    reviewer_extra: "其他 reviewer（逗号或空格分隔，可留空）",
    reviewer_preset_desc: "预设 reviewer",
    reviewer_none: "不添加 reviewer",
    reviewer_none_desc: "不指定 reviewer 推送",
    push_failed: "Gerrit push 失败",
    dry_run: "试运行，不执行推送",
};

impl Texts {
    /// The table for `locale`.
    pub fn for_locale(locale: Locale) -> &'static Texts {
        match locale {
            Locale::En => &EN,
            Locale::Zh => &ZH,
        }
    }

    /// Description of a remote-tracking branch suggestion.
    pub fn remote_branch(&self, remote: &str, branch: &str) -> String {
        match self.locale {
            Locale::En => format!("remote branch {}/{}", remote, branch),
            Locale::Zh => format!("Remote 分支 {}/{}", remote, branch),
        }
    }

    /// Multi-line confirmation question.
    pub fn push_confirm_message(
        &self,
        branch: &str,
        remote: &str,
        repo: Option<&str>,
        reviewers: Option<&str>,
    ) -> String {
        let (heading, branch_label, reviewer_label) = match self.locale {
            Locale::En => ("Push to:", "Branch", "Reviewers"),
            Locale::Zh => ("推送到:", "分支", "Reviewer"),
        };
        let mut lines = vec![
            heading.to_string(),
            format!("  {}: {}", branch_label, branch),
            format!("  Remote: {}", remote),
        ];
        if let Some(repo) = repo {
            lines.push(format!("  Repo: {}", repo));
        }
        if let Some(reviewers) = reviewers {
            lines.push(format!("  {}: {}", reviewer_label, reviewers));
        }
        lines.join("\n")
    }

    /// Status line shown while pushing.
    pub fn pushing(&self, push_ref: &str, remote: &str) -> String {
        match self.locale {
            Locale::En => format!("Pushing {} to {}", push_ref, remote),
            Locale::Zh => format!("推送 {} 到 {}", push_ref, remote),
        }
    }

    /// Summary after a successful push.
    pub fn push_success(&self, remote: &str, branch: &str) -> String {
        match self.locale {
            Locale::En => format!("Pushed HEAD to {} refs/for/{}", remote, branch),
            Locale::Zh => format!("已推送 HEAD 到 {} refs/for/{}", remote, branch),
        }
    }
}
