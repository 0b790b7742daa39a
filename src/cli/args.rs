//! CLI argument definitions.
//!
//! Both tools take no arguments of their own; clap still provides `--help`
//! and `--version`.

use clap::Parser;

/// Verify the MongoDB connection from MONGO_URI and summarize its collections.
#[derive(Debug, Parser)]
#[command(name = "mongo-probe")]
#[command(author, version, long_about = None)]
pub struct ProbeCli {}

/// Check that the Python packages the service needs are installed.
#[derive(Debug, Parser)]
#[command(name = "env-check")]
#[command(author, version, long_about = None)]
pub struct CheckCli {}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn probe_cli_is_well_formed() {
        ProbeCli::command().debug_assert();
    }

    #[test]
    fn check_cli_is_well_formed() {
        CheckCli::command().debug_assert();
    }

    #[test]
    fn probe_cli_accepts_no_arguments() {
        assert!(ProbeCli::try_parse_from(["mongo-probe"]).is_ok());
        assert!(ProbeCli::try_parse_from(["mongo-probe", "--uri", "x"]).is_err());
    }

    #[test]
    fn each_binary_describes_itself() {
        let probe_about = ProbeCli::command().get_about().map(|a| a.to_string());
        let check_about = CheckCli::command().get_about().map(|a| a.to_string());

        assert!(probe_about.unwrap_or_default().contains("MONGO_URI"));
        assert!(check_about.unwrap_or_default().contains("Python packages"));
    }

    #[test]
    fn check_cli_rejects_positionals() {
        assert!(CheckCli::try_parse_from(["env-check"]).is_ok());
        assert!(CheckCli::try_parse_from(["env-check", "pymongo"]).is_err());
    }
}
