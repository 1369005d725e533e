//! Generate command: seeded random scenarios for the plan command.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use forklift_core::{Cell, GridTopology, ItemSpec, Priority};
use forklift_planner::PlannerConfig;
use log::info;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::scenario::Scenario;
use crate::{CliError, fs, write_json};

const ARG_GENERATE_ROWS: &str = "rows";
const ARG_GENERATE_COLS: &str = "cols";
const ARG_GENERATE_ITEMS: &str = "items";
const ARG_GENERATE_SEED: &str = "seed";
const ARG_GENERATE_CAPACITY: &str = "capacity";
const ARG_GENERATE_OUTPUT: &str = "output";

const DEFAULT_SIDE: u32 = 10;
const DEFAULT_ITEMS: usize = 8;
const PERISHABLE_MAX_WEIGHT: u32 = 2;
const STANDARD_MAX_WEIGHT: u32 = 3;

/// CLI arguments for the `generate` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "generate",
    long_about = "Generate a random open-floor scenario. Items land on \
                 distinct cells away from the depot; half are perishable. \
                 The same seed always yields the same scenario.",
    about = "Generate a random warehouse scenario"
)]
#[ortho_config(prefix = "FORKLIFT")]
pub(crate) struct GenerateArgs {
    /// Grid rows (default 10).
    #[arg(long = ARG_GENERATE_ROWS, value_name = "count")]
    #[serde(default)]
    pub(crate) rows: Option<u32>,
    /// Grid columns (default 10).
    #[arg(long = ARG_GENERATE_COLS, value_name = "count")]
    #[serde(default)]
    pub(crate) cols: Option<u32>,
    /// Number of items to place (default 8).
    #[arg(long = ARG_GENERATE_ITEMS, value_name = "count")]
    #[serde(default)]
    pub(crate) items: Option<usize>,
    /// Random seed (default 0).
    #[arg(long = ARG_GENERATE_SEED, value_name = "u64")]
    #[serde(default)]
    pub(crate) seed: Option<u64>,
    /// Forklift capacity written into the scenario (default 3).
    #[arg(long = ARG_GENERATE_CAPACITY, value_name = "units")]
    #[serde(default)]
    pub(crate) capacity: Option<u32>,
    /// Write the scenario here instead of stdout.
    #[arg(long = ARG_GENERATE_OUTPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
}

impl GenerateArgs {
    pub(crate) fn into_config(self) -> Result<GenerateConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        Ok(GenerateConfig::from(merged))
    }
}

/// Resolved `generate` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct GenerateConfig {
    pub(crate) rows: u32,
    pub(crate) cols: u32,
    pub(crate) items: usize,
    pub(crate) seed: u64,
    pub(crate) capacity: u32,
    pub(crate) output: Option<Utf8PathBuf>,
}

impl From<GenerateArgs> for GenerateConfig {
    fn from(args: GenerateArgs) -> Self {
        Self {
            rows: args.rows.unwrap_or(DEFAULT_SIDE),
            cols: args.cols.unwrap_or(DEFAULT_SIDE),
            items: args.items.unwrap_or(DEFAULT_ITEMS),
            seed: args.seed.unwrap_or_default(),
            capacity: args.capacity.unwrap_or(PlannerConfig::default().capacity),
            output: args.output,
        }
    }
}

pub(super) fn run_generate(args: GenerateArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_generate_with(args, &mut stdout)
}

pub(super) fn run_generate_with(
    args: GenerateArgs,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    let scenario = generate_scenario(&config)?;
    match &config.output {
        Some(path) => {
            let mut payload =
                serde_json::to_vec_pretty(&scenario).map_err(CliError::SerialiseOutput)?;
            payload.push(b'\n');
            fs::write_utf8_file(path, &payload).map_err(|source| CliError::WriteOutputFile {
                path: path.clone(),
                source,
            })?;
            info!("wrote {} items to {path}", scenario.items.len());
            Ok(())
        }
        None => write_json(writer, &scenario),
    }
}

/// Place items on distinct passable cells other than the depot.
///
/// Perishable and standard items are equally likely. Perishables weigh one
/// or two units and standard items one to three, capped at the capacity so
/// every item fits on an empty forklift.
pub(crate) fn generate_scenario(config: &GenerateConfig) -> Result<Scenario, CliError> {
    if config.capacity == 0 {
        return Err(CliError::ZeroCapacity);
    }
    let grid = GridTopology::open(config.rows, config.cols).map_err(|source| {
        CliError::GenerateGrid {
            rows: config.rows,
            cols: config.cols,
            source,
        }
    })?;
    let depot = PlannerConfig::default().depot;
    let mut free: Vec<Cell> = grid.passable_cells().filter(|&cell| cell != depot).collect();
    if config.items > free.len() {
        return Err(CliError::TooManyItems {
            requested: config.items,
            rows: config.rows,
            cols: config.cols,
            available: free.len(),
        });
    }

    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    free.shuffle(&mut rng);
    let capacity = config.capacity;
    let items = free
        .into_iter()
        .take(config.items)
        .map(|position| {
            let (priority, max_weight) = if rng.gen_bool(0.5) {
                (Priority::Perishable, PERISHABLE_MAX_WEIGHT)
            } else {
                (Priority::Standard, STANDARD_MAX_WEIGHT)
            };
            let weight = rng.gen_range(1..=max_weight).min(capacity);
            ItemSpec::new(position, weight, priority)
        })
        .collect();

    Ok(Scenario {
        rows: config.rows,
        cols: config.cols,
        blocked: Vec::new(),
        start: depot,
        depot: Some(depot),
        capacity: Some(capacity),
        items,
    })
}
