//! Environment checker.
//!
//! Confirms that the Python packages the service imports can be found by the
//! interpreter, printing one status line per package and a summary. A
//! missing package never stops the loop.
//!
//! # Example
//!
//! ```
//! use envprobe::packages::{check_packages, ModuleResolver};
//! use envprobe::ui::MockUI;
//!
//! struct Everything;
//!
//! impl ModuleResolver for Everything {
//!     fn runtime_version(&self) -> Option<String> {
//!         Some("3.12.1".to_string())
//!     }
//!     fn resolve(&self, _name: &str) -> bool {
//!         true
//!     }
//! }
//!
//! let mut ui = MockUI::new();
//! let report = check_packages(&Everything, &mut ui);
//! assert!(report.all_resolved());
//! assert!(ui.has_message("All required packages are installed!"));
//! ```

pub mod resolver;

use serde::Serialize;

use crate::ui::UserInterface;

pub use resolver::{ModuleResolver, PythonResolver};

/// Packages the service cannot start without, by import name.
pub const REQUIRED_PACKAGES: [&str; 3] = ["google.generativeai", "pymongo", "dotenv"];

/// Command that installs every entry of [`REQUIRED_PACKAGES`].
pub const INSTALL_HINT: &str = "pip install google-generativeai pymongo python-dotenv";

/// Outcome for one package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageCheck {
    /// Import name.
    pub name: String,
    /// Whether the interpreter located it.
    pub resolved: bool,
}

/// Outcome for every required package, in check order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EnvReport {
    /// Individual results.
    pub checks: Vec<PackageCheck>,
}

impl EnvReport {
    /// True iff every package resolved.
    pub fn all_resolved(&self) -> bool {
        self.checks.iter().all(|c| c.resolved)
    }

    /// Names of packages that did not resolve.
    pub fn missing(&self) -> Vec<&str> {
        self.checks
            .iter()
            .filter(|c| !c.resolved)
            .map(|c| c.name.as_str())
            .collect()
    }
}

/// Check [`REQUIRED_PACKAGES`] with `resolver`, reporting to `ui`.
pub fn check_packages(resolver: &dyn ModuleResolver, ui: &mut dyn UserInterface) -> EnvReport {
    check_names(resolver, &REQUIRED_PACKAGES, ui)
}

/// Check an arbitrary list of import names.
pub fn check_names(
    resolver: &dyn ModuleResolver,
    names: &[&str],
    ui: &mut dyn UserInterface,
) -> EnvReport {
    match resolver.runtime_version() {
        Some(version) => ui.message(&format!("Python version: {}", version)),
        None => ui.warning("Python version: unknown (interpreter could not be run)"),
    }
    ui.message("");
    ui.show_header("Checking required packages:");

    let mut report = EnvReport::default();
    for name in names {
        let resolved = resolver.resolve(name);
        if resolved {
            ui.success(&format!("{} is installed", name));
        } else {
            ui.error(&format!("{} is NOT installed", name));
        }
        report.checks.push(PackageCheck {
            name: name.to_string(),
            resolved,
        });
    }

    ui.message("");
    if report.all_resolved() {
        ui.message("All required packages are installed!");
    } else {
        tracing::info!("Missing packages: {}", report.missing().join(", "));
        ui.message("Some packages are missing. Please install them with:");
        ui.message(INSTALL_HINT);
    }

    tracing::debug!(
        "Package report: {}",
        serde_json::to_string(&report).unwrap_or_default()
    );
    report
}
