//! Non-interactive UI for CI/headless environments.

use std::collections::HashMap;

use crate::error::{GerritPushError, Result};

use super::{OutputMode, Prompt, PromptResult, PromptType, UserInterface};

/// Prefix of environment variables that answer prompts by key.
pub const PROMPT_ENV_PREFIX: &str = "GERRIT_PUSH_PROMPT_";

/// UI implementation for non-interactive mode.
///
/// Prompts are answered from `GERRIT_PUSH_PROMPT_<KEY>` variables, then from
/// the prompt default. A prompt with neither is an error.
pub struct NonInteractiveUI {
    mode: OutputMode,
    env_overrides: HashMap<String, String>,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        let env_overrides: HashMap<String, String> = std::env::vars()
            .filter(|(k, _)| k.starts_with(PROMPT_ENV_PREFIX))
            .collect();

        Self {
            mode,
            env_overrides,
        }
    }

    /// Create with explicit overrides (for testing).
    pub fn with_overrides(mode: OutputMode, overrides: HashMap<String, String>) -> Self {
        Self {
            mode,
            env_overrides: overrides,
        }
    }
}

fn answer(prompt_type: &PromptType, value: &str) -> PromptResult {
    match prompt_type {
        PromptType::Confirm => {
            let value = value.trim().to_lowercase();
            PromptResult::Bool(matches!(value.as_str(), "true" | "y" | "yes" | "1"))
        }
        PromptType::MultiSelect { .. } => PromptResult::Strings(
            value
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
        ),
        _ => PromptResult::String(value.trim().to_string()),
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("✓ {}", msg);
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            eprintln!("⚠ {}", msg);
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult> {
        let env_key = format!("{}{}", PROMPT_ENV_PREFIX, prompt.key.to_uppercase());
        if let Some(value) = self.env_overrides.get(&env_key) {
            return Ok(answer(&prompt.prompt_type, value));
        }

        if let Some(default) = &prompt.default {
            return Ok(answer(&prompt.prompt_type, default));
        }

        Err(GerritPushError::InvalidInput {
            message: format!(
                "Cannot prompt for '{}' in non-interactive mode (no default value)",
                prompt.key
            ),
        })
    }

    fn is_interactive(&self) -> bool {
        false
    }
}
