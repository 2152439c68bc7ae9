//! Interactive terminal UI.

use console::Term;
use std::io::Write;

use crate::error::Result;

use super::{
    prompt_user, should_use_colors, NonInteractiveUI, OutputMode, Prompt, PromptResult, PushTheme,
    UserInterface,
};

/// Interactive terminal UI implementation.
pub struct TerminalUI {
    term: Term,
    err_term: Term,
    theme: PushTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            PushTheme::new()
        } else {
            PushTheme::plain()
        };

        Self {
            term: Term::stdout(),
            err_term: Term::stderr(),
            theme,
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", msg).ok();
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", self.theme.format_success(msg)).ok();
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.err_term, "{}", self.theme.format_warning(msg)).ok();
        }
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err_term, "{}", self.theme.format_error(msg)).ok();
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult> {
        prompt_user(prompt, &self.term)
    }

    fn is_interactive(&self) -> bool {
        self.term.is_term()
    }
}

/// Create the appropriate UI based on context.
pub fn create_ui(interactive: bool, mode: OutputMode) -> Box<dyn UserInterface> {
    if interactive && Term::stdout().is_term() {
        Box::new(TerminalUI::new(mode))
    } else {
        Box::new(NonInteractiveUI::new(mode))
    }
}
