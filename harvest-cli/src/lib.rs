//! Command-line interface for planning Harvest delivery routes.
//!
//! `harvest plan <request.json>` reads the farmer's location and the selected
//! orders, plans a nearest-neighbour route and prints the visiting order with
//! its directions link as JSON.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod fs;
mod plan;

pub use error::CliError;
use plan::PlanArgs;

pub(crate) const ARG_PLAN_REQUEST: &str = "request";
pub(crate) const ARG_PLAN_METRIC: &str = "metric";
pub(crate) const ARG_PLAN_MAX_STOPS: &str = "max-stops";
pub(crate) const ARG_PLAN_MAPS_BASE_URL: &str = "maps-base-url";
pub(crate) const ENV_PLAN_REQUEST: &str = "HARVEST_CMDS_PLAN_REQUEST_PATH";

/// Run the Harvest CLI with the current process arguments and environment.
///
/// # Errors
/// Returns a [`CliError`] when arguments or configuration are invalid, the
/// request cannot be read, planning fails or the output cannot be written.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Plan(args) => plan::run_plan(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "harvest",
    about = "Plan delivery routes for Harvest farmers",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Order selected deliveries and build a directions link.
    Plan(PlanArgs),
}

#[cfg(test)]
mod tests;
