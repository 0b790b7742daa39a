//! Module resolution through a Python interpreter.

use std::process::{Command, Stdio};

/// Resolves package names without importing them.
pub trait ModuleResolver {
    /// Human-readable version of the runtime doing the resolving.
    fn runtime_version(&self) -> Option<String>;

    /// Whether `name` can be located by the runtime's import machinery.
    fn resolve(&self, name: &str) -> bool;
}

// `find_spec` locates a module without running its body. Dotted names import
// their parent package first, which raises when the parent is missing; the
// non-zero exit that follows counts as unresolved.
const FIND_SPEC: &str =
    "import importlib.util, sys; sys.exit(0 if importlib.util.find_spec(sys.argv[1]) else 1)";

const VERSION: &str = "import sys; print(sys.version)";

/// [`ModuleResolver`] that asks a Python interpreter child process.
#[derive(Debug, Clone)]
pub struct PythonResolver {
    python: String,
}

impl PythonResolver {
    /// Use the given interpreter program name or path.
    pub fn new(python: impl Into<String>) -> Self {
        Self {
            python: python.into(),
        }
    }

    /// The interpreter this resolver runs.
    pub fn python(&self) -> &str {
        &self.python
    }
}

impl ModuleResolver for PythonResolver {
    fn runtime_version(&self) -> Option<String> {
        let output = Command::new(&self.python)
            .args(["-c", VERSION])
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output();

        match output {
            Ok(out) if out.status.success() => {
                let version = String::from_utf8_lossy(&out.stdout).trim().to_string();
                (!version.is_empty()).then_some(version)
            }
            Ok(out) => {
                tracing::debug!("{} exited with {}", self.python, out.status);
                None
            }
            Err(e) => {
                tracing::debug!("Failed to run {}: {}", self.python, e);
                None
            }
        }
    }

    fn resolve(&self, name: &str) -> bool {
        // The name travels as argv, never spliced into the code string.
        let status = Command::new(&self.python)
            .args(["-c", FIND_SPEC, name])
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();

        match status {
            Ok(status) => {
                tracing::debug!("find_spec({}) exited with {}", name, status);
                status.success()
            }
            Err(e) => {
                tracing::debug!("Failed to run {} for {}: {}", self.python, name, e);
                false
            }
        }
    }
}
