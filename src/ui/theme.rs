//! Visual theme and styling.

use console::Style;

/// Styles applied to console output.
#[derive(Debug, Clone)]
pub struct ConsoleTheme {
    /// Style for success glyphs (green).
    pub success: Style,
    /// Style for warning glyphs (orange).
    pub warning: Style,
    /// Style for failure glyphs (red bold).
    pub error: Style,
    /// Style for headers (bold).
    pub header: Style,
}

impl Default for ConsoleTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleTheme {
    /// Create the colored theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            header: Style::new().bold(),
        }
    }

    /// Create a theme without colors (for non-TTY or `NO_COLOR`).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            header: Style::new(),
        }
    }

    /// Pick the colored or plain theme for the current stdout.
    pub fn detect() -> Self {
        if should_use_colors() {
            Self::new()
        } else {
            Self::plain()
        }
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // https://no-color.org/
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    console::Term::stdout().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_theme_leaves_text_untouched() {
        let theme = ConsoleTheme::plain();
        assert_eq!(theme.header.apply_to("Title").to_string(), "Title");
        assert_eq!(theme.error.apply_to("✗").to_string(), "✗");
    }

    #[test]
    fn default_impl_matches_new() {
        let default = ConsoleTheme::default();
        let new = ConsoleTheme::new();
        assert_eq!(
            default.success.apply_to("ok").to_string(),
            new.success.apply_to("ok").to_string()
        );
    }
}
