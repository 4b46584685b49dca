//! Command-line interface for the Airwave candidate scoring engine.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};
use log::debug;
use tracing_subscriber::EnvFilter;

mod error;
mod fs;
mod rank;

pub use error::CliError;

use rank::{RankArgs, run_rank};

const ARG_RANK_CANDIDATES: &str = "candidates";
const ARG_RANK_SCORING_CONFIG: &str = "scoring-config";
const ARG_RANK_PCL: &str = "pcl";
const ARG_RANK_CURRENT_FREQUENCY: &str = "current-frequency";
const ARG_RANK_DBS_CAPABLE: &str = "dbs-capable";
const ARG_RANK_DBS_2X2_CAPABLE: &str = "dbs-2x2-capable";
const ENV_RANK_CANDIDATES: &str = "AIRWAVE_CMDS_RANK_CANDIDATES";

/// Environment variable holding the log filter directives.
pub const LOG_ENV: &str = "AIRWAVE_LOG";

/// Run the Airwave CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when argument parsing, configuration layering, input
/// loading or output fails.
pub fn run() -> Result<(), CliError> {
    init_logging();
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Rank(args) => run_rank(args),
    }
}

/// Install a stderr logger filtered by [`LOG_ENV`], defaulting to `warn`.
///
/// Records from the `log` facade are forwarded to the subscriber. A second
/// call leaves the first logger in place.
pub fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
    if installed.is_err() {
        debug!("logger already installed");
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "airwave",
    about = "Score and rank wireless access-point candidates",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rank candidates from a JSON scan result.
    Rank(RankArgs),
}

#[cfg(test)]
mod tests;
