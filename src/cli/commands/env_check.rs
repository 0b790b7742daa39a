//! The `env-check` command.

use crate::config::CheckSettings;
use crate::packages::{check_packages, PythonResolver};
use crate::ui::UserInterface;

use super::{Command, CommandResult};

/// Checks the required Python packages.
pub struct EnvCheckCommand {
    settings: CheckSettings,
}

impl EnvCheckCommand {
    /// Create the command from resolved settings.
    pub fn new(settings: CheckSettings) -> Self {
        Self { settings }
    }
}

impl Command for EnvCheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> CommandResult {
        tracing::debug!("Resolving packages with {}", self.settings.python);
        let resolver = PythonResolver::new(self.settings.python.clone());
        let report = check_packages(&resolver, ui);

        // Missing packages are reported, never signaled through the exit code.
        if report.all_resolved() {
            CommandResult::success()
        } else {
            CommandResult::reported_failure()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::packages::INSTALL_HINT;
    use crate::ui::MockUI;

    #[test]
    fn unusable_interpreter_reports_everything_missing_and_exits_zero() {
        let command = EnvCheckCommand::new(CheckSettings {
            python: "/nonexistent/bin/python".to_string(),
        });
        let mut ui = MockUI::new();

        let result = command.execute(&mut ui);

        assert_eq!(result, CommandResult::reported_failure());
        assert_eq!(result.exit_code, 0);
        assert_eq!(ui.errors().len(), 3);
        assert!(ui.has_message(INSTALL_HINT));
    }
}
