//! The `mongo-probe` command.

use std::path::{Path, PathBuf};

use crate::config::{ProbeSettings, UriSource};
use crate::mongo::MongoSource;
use crate::probe;
use crate::secrets::redact_uri;
use crate::ui::UserInterface;

use super::{Command, CommandResult};

/// Loads the connection string and runs the connectivity probe.
pub struct ProbeCommand {
    dir: PathBuf,
}

impl ProbeCommand {
    /// Create a command that looks for `.env` in `dir` and its parents.
    pub fn new(dir: &Path) -> Self {
        Self {
            dir: dir.to_path_buf(),
        }
    }
}

impl Command for ProbeCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> CommandResult {
        let settings = match ProbeSettings::load(&self.dir) {
            Ok(settings) => settings,
            Err(e) => {
                ui.error(&format!("Error: {}", e));
                if e.is_fatal() {
                    ui.message("Please create a .env file with your MongoDB connection string.");
                }
                return CommandResult::failure(1);
            }
        };

        match &settings.source {
            UriSource::Process => tracing::debug!("Using {}", redact_uri(&settings.uri)),
            UriSource::EnvFile(path) => tracing::debug!(
                "Using {} from {}",
                redact_uri(&settings.uri),
                path.display()
            ),
        }

        // Probe failures are reported but do not change the exit code.
        if probe::run(ui, || MongoSource::connect(&settings.uri)) {
            CommandResult::success()
        } else {
            CommandResult::reported_failure()
        }
    }
}
