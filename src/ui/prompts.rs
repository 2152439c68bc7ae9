//! Interactive prompts.

use console::{style, Term};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, MultiSelect, Select};

use crate::error::{GerritPushError, Result};

use super::{Prompt, PromptOption, PromptResult, PromptType};

/// Convert dialoguer errors; Ctrl-C during a prompt counts as cancellation.
fn map_dialoguer_err(e: dialoguer::Error) -> GerritPushError {
    let io: std::io::Error = e.into();
    if io.kind() == std::io::ErrorKind::Interrupted {
        GerritPushError::UserCancelled
    } else {
        GerritPushError::Io(io)
    }
}

/// Dialoguer theme without the default yellow `?` prefix.
fn prompt_theme() -> ColorfulTheme {
    ColorfulTheme {
        prompt_prefix: style("".to_string()),
        ..ColorfulTheme::default()
    }
}

/// Prompt the user for input.
///
/// Esc or `q` on a selection returns `UserCancelled`.
pub fn prompt_user(prompt: &Prompt, term: &Term) -> Result<PromptResult> {
    match &prompt.prompt_type {
        PromptType::Confirm => prompt_confirm(prompt, term),
        PromptType::Input { allow_empty } => prompt_input(prompt, *allow_empty, term),
        PromptType::Select { options } => prompt_select(prompt, options, term),
        PromptType::MultiSelect { options } => prompt_multiselect(prompt, options, term),
    }
}

/// Default answer for a confirm prompt, if one was supplied.
fn confirm_default(prompt: &Prompt) -> Option<bool> {
    prompt
        .default
        .as_deref()
        .map(|s| matches!(s.to_lowercase().as_str(), "true" | "y" | "yes"))
}

fn prompt_confirm(prompt: &Prompt, term: &Term) -> Result<PromptResult> {
    let theme = prompt_theme();
    let mut confirm = Confirm::with_theme(&theme).with_prompt(&prompt.question);
    // Without a default, Enter alone is not an answer.
    if let Some(default) = confirm_default(prompt) {
        confirm = confirm.default(default);
    }

    let result = confirm
        .interact_on_opt(term)
        .map_err(map_dialoguer_err)?
        .ok_or(GerritPushError::UserCancelled)?;

    Ok(PromptResult::Bool(result))
}

fn prompt_input(prompt: &Prompt, allow_empty: bool, term: &Term) -> Result<PromptResult> {
    let theme = prompt_theme();
    let input = Input::<String>::with_theme(&theme)
        .with_prompt(&prompt.question)
        .allow_empty(allow_empty);

    let result: String = match &prompt.default {
        Some(default) if !default.is_empty() => input
            .default(default.clone())
            .interact_on(term)
            .map_err(map_dialoguer_err)?,
        _ => input.interact_on(term).map_err(map_dialoguer_err)?,
    };

    Ok(PromptResult::String(result.trim().to_string()))
}

fn prompt_select(prompt: &Prompt, options: &[PromptOption], term: &Term) -> Result<PromptResult> {
    let labels: Vec<_> = options.iter().map(|o| o.label.as_str()).collect();

    let default_idx = prompt
        .default
        .as_ref()
        .and_then(|d| options.iter().position(|o| o.value == *d))
        .unwrap_or(0);

    let selection = Select::with_theme(&prompt_theme())
        .with_prompt(&prompt.question)
        .items(&labels)
        .default(default_idx)
        .interact_on_opt(term)
        .map_err(map_dialoguer_err)?
        .ok_or(GerritPushError::UserCancelled)?;

    Ok(PromptResult::String(options[selection].value.clone()))
}

fn prompt_multiselect(
    prompt: &Prompt,
    options: &[PromptOption],
    term: &Term,
) -> Result<PromptResult> {
    let labels: Vec<_> = options.iter().map(|o| o.label.as_str()).collect();

    let default_values: Vec<&str> = prompt
        .default
        .as_deref()
        .map(|d| d.split(',').collect())
        .unwrap_or_default();
    let defaults: Vec<bool> = options
        .iter()
        .map(|o| default_values.contains(&o.value.as_str()))
        .collect();

    let selections = MultiSelect::with_theme(&prompt_theme())
        .with_prompt(&prompt.question)
        .items(&labels)
        .defaults(&defaults)
        .interact_on_opt(term)
        .map_err(map_dialoguer_err)?
        .ok_or(GerritPushError::UserCancelled)?;

    let values: Vec<String> = selections
        .iter()
        .map(|&i| options[i].value.clone())
        .collect();

    Ok(PromptResult::Strings(values))
}
