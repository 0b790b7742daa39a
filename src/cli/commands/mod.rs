//! Command implementations.
//!
//! Each binary builds one command and runs it through the [`Command`]
//! trait, turning the [`CommandResult`] into the process exit code.

pub mod env_check;
pub mod probe;

pub use env_check::EnvCheckCommand;
pub use probe::ProbeCommand;

use crate::ui::UserInterface;

/// Trait for command implementations.
pub trait Command {
    /// Execute the command, writing its report to `ui`.
    fn execute(&self, ui: &mut dyn UserInterface) -> CommandResult;
}

/// Result of command execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandResult {
    /// Whether the check itself passed.
    pub success: bool,

    /// Exit code to use.
    pub exit_code: u8,
}

impl CommandResult {
    /// A passing check that exits 0.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// A failed check that still exits 0.
    pub fn reported_failure() -> Self {
        Self {
            success: false,
            exit_code: 0,
        }
    }

    /// A failure that ends the process with `exit_code`.
    pub fn failure(exit_code: u8) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}
