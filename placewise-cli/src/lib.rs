//! Command-line interface for the Placewise recommendation engine.
//!
//! `placewise recommend` ranks candidate places from a user's history and
//! `placewise notify` evaluates proximity alerts. Both read a JSON request
//! file and print a JSON response on standard output.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod fs;
mod io;
mod notify;
mod recommend;

pub use error::CliError;

use notify::{NotifyArgs, run_notify};
use recommend::{RecommendArgs, run_recommend};

const ARG_RECOMMEND_REQUEST: &str = "request-path";
const ARG_NOTIFY_REQUEST: &str = "request-path";
const ARG_LIMIT: &str = "limit";
const ARG_DAILY_RADIUS_KM: &str = "radius-km";
const ENV_RECOMMEND_REQUEST: &str = "PLACEWISE_CMDS_RECOMMEND_REQUEST_PATH";
const ENV_NOTIFY_REQUEST: &str = "PLACEWISE_CMDS_NOTIFY_REQUEST_PATH";

/// Run the Placewise CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when arguments, configuration, the request file or
/// its contents are invalid, or when the response cannot be written.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Recommend(args) => run_recommend(args),
        Command::Notify(args) => run_notify(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "placewise",
    about = "Personalised place recommendations and proximity alerts",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rank candidate places for a user.
    Recommend(RecommendArgs),
    /// Decide which places deserve a proximity alert.
    Notify(NotifyArgs),
}

#[cfg(test)]
mod tests;
