//! `env-check` entry point.

use std::process::ExitCode;

use clap::Parser;
use envprobe::cli::{init_tracing, CheckCli, Command, EnvCheckCommand};
use envprobe::config::CheckSettings;
use envprobe::ui::TerminalUI;

fn main() -> ExitCode {
    let cli = CheckCli::parse();
    init_tracing();

    tracing::debug!("env-check starting with args: {:?}", cli);

    let mut ui = TerminalUI::new();

    let result = EnvCheckCommand::new(CheckSettings::load()).execute(&mut ui);
    ExitCode::from(result.exit_code)
}
