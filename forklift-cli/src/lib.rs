//! Command-line driver for the forklift route-planning engine.
#![forbid(unsafe_code)]

use std::ffi::OsString;
use std::io::Write;

use clap::{Parser, Subcommand};
use log::LevelFilter;
use serde::Serialize;

mod error;
mod fs;
mod generate;
mod plan;
mod scenario;

pub use error::CliError;

use generate::{GenerateArgs, run_generate};
use plan::{PlanArgs, run_plan};

pub(crate) const ARG_PLAN_SCENARIO: &str = "scenario";
pub(crate) const ENV_PLAN_SCENARIO: &str = "FORKLIFT_CMDS_PLAN_SCENARIO";

/// Run the forklift CLI with the current process arguments and environment.
///
/// # Errors
///
/// Returns [`CliError`] when arguments, configuration, the scenario or the
/// planner are invalid, or when output cannot be written.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    init_logging(cli.log_level);
    match cli.command {
        Command::Plan(args) => run_plan(args),
        Command::Generate(args) => run_generate(args),
    }
}

/// Parse `argv` and dispatch, writing command output to `writer`.
///
/// Logging is left untouched so callers control their own logger.
///
/// # Errors
///
/// As for [`run`].
pub fn run_with<I, T>(argv: I, writer: &mut dyn Write) -> Result<(), CliError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = Cli::try_parse_from(argv).map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Plan(args) => plan::run_plan_with(args, writer),
        Command::Generate(args) => generate::run_generate_with(args, writer),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "forklift",
    about = "Plan capacity-aware forklift collection runs on a warehouse grid",
    version
)]
struct Cli {
    /// Log verbosity (error, warn, info, debug, trace); overrides `RUST_LOG`.
    #[arg(long, global = true, value_name = "level")]
    log_level: Option<LevelFilter>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Plan a collection run from a scenario file.
    Plan(PlanArgs),
    /// Write a random scenario file.
    Generate(GenerateArgs),
}

/// Install `env_logger`, defaulting to `info`.
fn init_logging(level: Option<LevelFilter>) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if let Some(filter) = level {
        builder.filter_level(filter);
    }
    if builder.try_init().is_err() {
        log::debug!("logger already installed");
    }
}

fn write_json<T: Serialize>(writer: &mut dyn Write, value: &T) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(value).map_err(CliError::SerialiseOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
mod tests;
