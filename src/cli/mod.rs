//! Command-line interface shared by the two binaries.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{CheckCli, ProbeCli};
pub use commands::{Command, CommandResult, EnvCheckCommand, ProbeCommand};

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Default filter when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "envprobe=warn";

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by `RUST_LOG`, defaulting to warnings from this
/// crate. Logs go to stderr so they never interleave with the report.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}
