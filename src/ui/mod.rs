//! Console output for the diagnostic commands.
//!
//! This module provides:
//! - [`UserInterface`] trait so commands can write to a terminal or a recorder
//! - [`TerminalUI`] for real terminal output
//! - [`MockUI`] for capturing output in tests
//! - [`StatusKind`] glyphs and the [`ConsoleTheme`] that colors them
//!
//! # Example
//!
//! ```
//! use envprobe::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.message("Checking required packages:");
//! ui.success("pymongo is installed");
//! assert!(ui.has_success("pymongo"));
//! ```

pub mod icons;
pub mod mock;
pub mod terminal;
pub mod theme;

pub use icons::StatusKind;
pub use mock::MockUI;
pub use terminal::TerminalUI;
pub use theme::{should_use_colors, ConsoleTheme};

/// Trait for user-facing output.
///
/// This trait allows capturing output in tests.
pub trait UserInterface {
    /// Display a plain line. An empty string prints a blank line.
    fn message(&mut self, msg: &str);

    /// Display a line prefixed with the success glyph.
    fn success(&mut self, msg: &str);

    /// Display a line prefixed with the warning glyph.
    fn warning(&mut self, msg: &str);

    /// Display a line prefixed with the failure glyph.
    fn error(&mut self, msg: &str);

    /// Display an emphasized header line.
    fn show_header(&mut self, title: &str);
}
