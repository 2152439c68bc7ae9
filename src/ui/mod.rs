//! Interactive user interface components.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for interactive terminal usage
//! - [`NonInteractiveUI`] for CI/headless environments
//! - [`MockUI`] for tests
//! - [`OutputLog`] sinks for the push log
//! - [`Texts`] message tables keyed by [`Locale`]
//!
//! # Example
//!
//! ```
//! use gerrit_push::ui::{create_ui, OutputMode};
//!
//! // Use non-interactive mode for testability
//! let mut ui = create_ui(false, OutputMode::Quiet);
//! ui.success("Pushed HEAD to origin refs/for/main");
//! ```

pub mod log;
pub mod mock;
pub mod non_interactive;
pub mod output;
pub mod prompts;
pub mod terminal;
pub mod text;
pub mod theme;

pub use log::{ConsoleLog, FileLog, MemoryLog, OutputLog, TeeLog};
pub use mock::MockUI;
pub use non_interactive::NonInteractiveUI;
pub use output::OutputMode;
pub use prompts::prompt_user;
pub use terminal::{create_ui, TerminalUI};
pub use text::{Locale, Texts};
pub use theme::{should_use_colors, PushTheme};

use crate::error::Result;

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a message to the user.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Show a prompt and get user input.
    ///
    /// Dismissing the prompt returns
    /// [`GerritPushError::UserCancelled`](crate::error::GerritPushError::UserCancelled).
    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult>;

    /// Check if running in interactive mode.
    fn is_interactive(&self) -> bool;
}

/// A prompt to show to the user.
#[derive(Debug, Clone)]
pub struct Prompt {
    /// Unique key for the prompt (used for overrides and lookup).
    pub key: String,
    /// The question to display.
    pub question: String,
    /// The type of prompt.
    pub prompt_type: PromptType,
    /// Default value if user just presses enter.
    pub default: Option<String>,
}

/// The type of prompt.
#[derive(Debug, Clone)]
pub enum PromptType {
    /// Yes/no confirmation.
    Confirm,
    /// Free-form text input.
    Input {
        /// Whether an empty answer is accepted.
        allow_empty: bool,
    },
    /// Select one from a list of options.
    Select { options: Vec<PromptOption> },
    /// Select multiple from a list of options.
    MultiSelect { options: Vec<PromptOption> },
}

/// An option in a select prompt.
#[derive(Debug, Clone)]
pub struct PromptOption {
    /// Display label.
    pub label: String,
    /// Value returned when selected.
    pub value: String,
}

impl PromptOption {
    /// Create an option.
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Result of a prompt.
#[derive(Debug, Clone, PartialEq)]
pub enum PromptResult {
    /// Boolean result from confirm.
    Bool(bool),
    /// String result from input or select.
    String(String),
    /// Multiple string results from multi-select.
    Strings(Vec<String>),
}

impl PromptResult {
    /// Get as string.
    pub fn as_string(&self) -> String {
        match self {
            Self::Bool(b) => b.to_string(),
            Self::String(s) => s.clone(),
            Self::Strings(v) => v.join(","),
        }
    }

    /// Get as bool if this is a Bool result.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get the selected values; a single string becomes a one-element list.
    pub fn into_strings(self) -> Vec<String> {
        match self {
            Self::Strings(v) => v,
            Self::String(s) if s.is_empty() => Vec::new(),
            Self::String(s) => vec![s],
            Self::Bool(b) => vec![b.to_string()],
        }
    }
}
