//! `mongo-probe` entry point.

use std::process::ExitCode;

use clap::Parser;
use envprobe::cli::{init_tracing, Command, ProbeCli, ProbeCommand};
use envprobe::ui::TerminalUI;

fn main() -> ExitCode {
    let cli = ProbeCli::parse();
    init_tracing();

    tracing::debug!("mongo-probe starting with args: {:?}", cli);

    let dir = std::env::current_dir().unwrap_or_default();
    let mut ui = TerminalUI::new();

    let result = ProbeCommand::new(&dir).execute(&mut ui);
    ExitCode::from(result.exit_code)
}
