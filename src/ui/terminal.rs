//! Terminal output.

use console::Term;
use std::io::Write;

use super::{ConsoleTheme, StatusKind, UserInterface};

/// Writes every line to stdout, styling glyphs when colors are enabled.
pub struct TerminalUI {
    term: Term,
    theme: ConsoleTheme,
}

impl TerminalUI {
    /// Create a terminal UI with the detected theme.
    pub fn new() -> Self {
        Self::with_theme(ConsoleTheme::detect())
    }

    /// Create a terminal UI with an explicit theme.
    pub fn with_theme(theme: ConsoleTheme) -> Self {
        Self {
            term: Term::stdout(),
            theme,
        }
    }

    fn line(&mut self, text: &str) {
        writeln!(self.term, "{}", text).ok();
    }
}

impl Default for TerminalUI {
    fn default() -> Self {
        Self::new()
    }
}

impl UserInterface for TerminalUI {
    fn message(&mut self, msg: &str) {
        self.line(msg);
    }

    fn success(&mut self, msg: &str) {
        let text = StatusKind::Success.format(&self.theme, msg);
        self.line(&text);
    }

    fn warning(&mut self, msg: &str) {
        let text = StatusKind::Warning.format(&self.theme, msg);
        self.line(&text);
    }

    fn error(&mut self, msg: &str) {
        let text = StatusKind::Failed.format(&self.theme, msg);
        self.line(&text);
    }

    fn show_header(&mut self, title: &str) {
        let text = self.theme.header.apply_to(title).to_string();
        self.line(&text);
    }
}
