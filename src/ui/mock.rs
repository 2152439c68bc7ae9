//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion. It can be configured with
//! pre-determined prompt responses, or told to cancel a prompt.
//!
//! # Example
//!
//! ```
//! use gerrit_push::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.set_prompt_response("remote", "gerrit");
//!
//! // Use ui in code under test...
//! ui.message("> git push gerrit HEAD:refs/for/main");
//! ui.success("Pushed HEAD to gerrit refs/for/main");
//!
//! // Assert on captured interactions
//! assert!(ui.has_message("refs/for/main"));
//! assert!(ui.has_success("Pushed HEAD"));
//! ```

use std::collections::{HashMap, HashSet, VecDeque};

use crate::error::{GerritPushError, Result};

use super::{OutputMode, Prompt, PromptResult, PromptType, UserInterface};

/// Mock UI implementation for testing.
///
/// Supports single responses (via `set_prompt_response`), queued responses
/// (via `queue_prompt_responses`) for keys asked more than once, and
/// dismissal (via `cancel_prompt`).
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    interactive: bool,
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    prompt_responses: HashMap<String, String>,
    prompt_queues: HashMap<String, VecDeque<String>>,
    cancelled: HashSet<String>,
    prompts: Vec<Prompt>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new MockUI with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Set a response for a prompt key.
    pub fn set_prompt_response(&mut self, key: &str, response: &str) {
        self.prompt_responses
            .insert(key.to_string(), response.to_string());
    }

    /// Queue multiple responses for the same prompt key.
    ///
    /// Responses are returned in order. After the queue is exhausted,
    /// falls back to `set_prompt_response` or defaults.
    pub fn queue_prompt_responses(&mut self, key: &str, responses: Vec<&str>) {
        let queue = responses.into_iter().map(|s| s.to_string()).collect();
        self.prompt_queues.insert(key.to_string(), queue);
    }

    /// Make the prompt with this key behave as if the user dismissed it.
    pub fn cancel_prompt(&mut self, key: &str) {
        self.cancelled.insert(key.to_string());
    }

    /// Set whether this mock behaves as interactive.
    pub fn set_interactive(&mut self, interactive: bool) {
        self.interactive = interactive;
    }

    /// Get all captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get all captured warning messages.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Get all captured error messages.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Get the keys of all prompts that were shown, in order.
    pub fn prompts_shown(&self) -> Vec<&str> {
        self.prompts.iter().map(|p| p.key.as_str()).collect()
    }

    /// Get the last prompt shown with this key.
    pub fn last_prompt(&self, key: &str) -> Option<&Prompt> {
        self.prompts.iter().rev().find(|p| p.key == key)
    }

    /// Check if a specific message was shown.
    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific success was shown.
    pub fn has_success(&self, msg: &str) -> bool {
        self.successes.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific error was shown.
    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific warning was shown.
    pub fn has_warning(&self, msg: &str) -> bool {
        self.warnings.iter().any(|m| m.contains(msg))
    }
}

fn to_result(prompt_type: &PromptType, response: &str) -> PromptResult {
    match prompt_type {
        PromptType::Confirm => {
            PromptResult::Bool(matches!(response, "true" | "yes" | "y" | "1"))
        }
        PromptType::MultiSelect { .. } => PromptResult::Strings(
            response
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
        ),
        _ => PromptResult::String(response.to_string()),
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult> {
        self.prompts.push(prompt.clone());

        if self.cancelled.contains(&prompt.key) {
            return Err(GerritPushError::UserCancelled);
        }

        if let Some(queue) = self.prompt_queues.get_mut(&prompt.key) {
            if let Some(response) = queue.pop_front() {
                return Ok(to_result(&prompt.prompt_type, &response));
            }
        }

        if let Some(response) = self.prompt_responses.get(&prompt.key) {
            return Ok(to_result(&prompt.prompt_type, response));
        }

        if let Some(default) = &prompt.default {
            return Ok(to_result(&prompt.prompt_type, default));
        }

        // Type-appropriate empty answer as a last resort
        Ok(to_result(&prompt.prompt_type, ""))
    }

    fn is_interactive(&self) -> bool {
        self.interactive
    }
}
