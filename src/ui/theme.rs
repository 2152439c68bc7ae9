//! Visual theme and styling.

use console::Style;

/// Terminal styles used by gerrit-push.
#[derive(Debug, Clone)]
pub struct PushTheme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages (orange).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
}

impl Default for PushTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl PushTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
        }
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format a warning message (icon + text in orange).
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_formats_success() {
        let msg = PushTheme::plain().format_success("Pushed");
        assert_eq!(msg, "✓ Pushed");
    }

    #[test]
    fn theme_formats_warning() {
        let msg = PushTheme::plain().format_warning("Caution");
        assert!(msg.contains("⚠"));
        assert!(msg.contains("Caution"));
    }

    #[test]
    fn theme_formats_error() {
        let msg = PushTheme::plain().format_error("Gerrit push failed");
        assert_eq!(msg, "✗ Gerrit push failed");
    }

    #[test]
    fn default_impl_matches_new() {
        let default = PushTheme::default();
        let new = PushTheme::new();
        assert_eq!(default.format_success("test"), new.format_success("test"));
    }
}
