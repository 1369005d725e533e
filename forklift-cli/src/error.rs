//! Error types emitted by the forklift CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use forklift_core::{GridError, PlanError};
use thiserror::Error;

/// Errors emitted by the forklift CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Option name.
        field: &'static str,
        /// Environment variable that can supply it.
        env: &'static str,
    },
    /// The scenario path exists but is not a regular file.
    #[error("scenario path {path:?} is not a file")]
    ScenarioNotFile {
        /// Scenario path.
        path: Utf8PathBuf,
    },
    /// Opening the scenario file failed.
    #[error("failed to open scenario at {path:?}: {source}")]
    OpenScenario {
        /// Scenario path.
        path: Utf8PathBuf,
        /// Underlying failure.
        #[source]
        source: std::io::Error,
    },
    /// Scenario JSON could not be decoded.
    #[error("failed to parse scenario JSON at {path:?}: {source}")]
    ParseScenario {
        /// Scenario path.
        path: Utf8PathBuf,
        /// Decoder failure.
        #[source]
        source: serde_json::Error,
    },
    /// The scenario describes an impossible warehouse floor.
    #[error("scenario in {path:?} describes an invalid grid: {source}")]
    InvalidScenario {
        /// Scenario path.
        path: Utf8PathBuf,
        /// Grid failure.
        #[source]
        source: GridError,
    },
    /// The planner rejected the request or failed mid-run.
    #[error("planning failed: {0}")]
    Plan(#[from] PlanError),
    /// The generator was asked for more items than free cells.
    #[error("cannot place {requested} items on a {rows}x{cols} grid with {available} free cells")]
    TooManyItems {
        /// Items requested.
        requested: usize,
        /// Grid rows.
        rows: u32,
        /// Grid columns.
        cols: u32,
        /// Cells eligible for an item.
        available: usize,
    },
    /// The generator was asked for a forklift that can carry nothing.
    #[error("generated scenarios need a positive forklift capacity")]
    ZeroCapacity,
    /// A generated grid was rejected.
    #[error("cannot generate a {rows}x{cols} grid: {source}")]
    GenerateGrid {
        /// Grid rows.
        rows: u32,
        /// Grid columns.
        cols: u32,
        /// Grid failure.
        #[source]
        source: GridError,
    },
    /// Serialising JSON output failed.
    #[error("failed to serialise output: {0}")]
    SerialiseOutput(#[source] serde_json::Error),
    /// Writing output to a file failed.
    #[error("failed to write output to {path:?}: {source}")]
    WriteOutputFile {
        /// Destination path.
        path: Utf8PathBuf,
        /// Underlying failure.
        #[source]
        source: std::io::Error,
    },
    /// Writing output to the terminal failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
