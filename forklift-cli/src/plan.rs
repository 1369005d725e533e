//! Plan command implementation for the forklift CLI.
//!
//! Acts as the reference driver: it pulls legs one at a time, logs each one
//! with the load gauge and remaining inventory, and prints the whole run as
//! a single JSON report.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use forklift_core::{
    HeuristicKind, Inventory, LegKind, LegPlanner, LegReport, RunStats, RunStatus,
};
use forklift_planner::{PlannerConfig, PriorityRule, RoutePlanner};
use log::info;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::scenario::{Scenario, load_scenario};
use crate::{ARG_PLAN_SCENARIO, CliError, ENV_PLAN_SCENARIO, fs, write_json};

const ARG_PLAN_CAPACITY: &str = "capacity";
const ARG_PLAN_HEURISTIC: &str = "heuristic";
const ARG_PLAN_NO_PRIORITY: &str = "no-priority";
const ARG_PLAN_MAX_LEGS: &str = "max-legs";

/// CLI arguments for the `plan` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "plan",
    long_about = "Plan a collection run for the warehouse described by a JSON \
                 scenario file. Legs are printed as one JSON report; progress \
                 is logged to stderr.",
    about = "Plan a forklift collection run"
)]
#[ortho_config(prefix = "FORKLIFT")]
pub(crate) struct PlanArgs {
    /// Path to a JSON scenario file.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) scenario: Option<Utf8PathBuf>,
    /// Override the scenario's forklift capacity.
    #[arg(long = ARG_PLAN_CAPACITY, value_name = "units")]
    #[serde(default)]
    pub(crate) capacity: Option<u32>,
    /// Search heuristic: "manhattan" or "zero".
    #[arg(long = ARG_PLAN_HEURISTIC, value_name = "name")]
    #[serde(default)]
    pub(crate) heuristic: Option<HeuristicKind>,
    /// Treat perishable and standard items alike.
    #[arg(long = ARG_PLAN_NO_PRIORITY)]
    #[serde(default)]
    pub(crate) no_priority: bool,
    /// Cancel the run once this many legs have been planned.
    #[arg(long = ARG_PLAN_MAX_LEGS, value_name = "count")]
    #[serde(default)]
    pub(crate) max_legs: Option<usize>,
}

impl PlanArgs {
    pub(crate) fn into_config(self) -> Result<PlanConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        PlanConfig::try_from(merged)
    }
}

/// Resolved `plan` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PlanConfig {
    /// Path to the JSON scenario file.
    pub(crate) scenario: Utf8PathBuf,
    /// Capacity override; the scenario or planner default applies otherwise.
    pub(crate) capacity: Option<u32>,
    /// Heuristic for every leg.
    pub(crate) heuristic: HeuristicKind,
    /// Candidate preference.
    pub(crate) priority: PriorityRule,
    /// Leg count after which the run is cancelled.
    pub(crate) max_legs: Option<usize>,
}

impl PlanConfig {
    /// Fail early unless the scenario path names a readable regular file.
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        let path = &self.scenario;
        match fs::file_is_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::ScenarioNotFile { path: path.clone() }),
            Err(source) => Err(CliError::OpenScenario {
                path: path.clone(),
                source,
            }),
        }
    }

    /// Combine the command-line overrides with the scenario's own settings.
    pub(crate) fn planner_config(&self, scenario: &Scenario) -> PlannerConfig {
        let defaults = PlannerConfig::default();
        PlannerConfig {
            capacity: self
                .capacity
                .or(scenario.capacity)
                .unwrap_or(defaults.capacity),
            depot: scenario.depot.unwrap_or(defaults.depot),
            heuristic: self.heuristic,
            priority: self.priority,
        }
    }
}

impl TryFrom<PlanArgs> for PlanConfig {
    type Error = CliError;

    fn try_from(args: PlanArgs) -> Result<Self, Self::Error> {
        let scenario = args.scenario.ok_or(CliError::MissingArgument {
            field: ARG_PLAN_SCENARIO,
            env: ENV_PLAN_SCENARIO,
        })?;
        let priority = if args.no_priority {
            PriorityRule::None
        } else {
            PriorityRule::PerishableFirst
        };
        Ok(Self {
            scenario,
            capacity: args.capacity,
            heuristic: args.heuristic.unwrap_or_default(),
            priority,
            max_legs: args.max_legs,
        })
    }
}

/// Everything a run produced, in the order it was planned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct PlanReport {
    /// Settings the planner ran with.
    pub(crate) config: PlannerConfig,
    /// How the run ended.
    pub(crate) status: RunStatus,
    /// Run counters.
    pub(crate) stats: RunStats,
    /// Items neither collected nor dropped.
    pub(crate) remaining: Inventory,
    /// Every planned leg with the state after it.
    pub(crate) legs: Vec<LegReport>,
}

pub(super) fn run_plan(args: PlanArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_plan_with(args, &mut stdout)
}

pub(super) fn run_plan_with(args: PlanArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = resolve_plan_config(args)?;
    let scenario = load_scenario(&config.scenario)?;
    let report = execute_plan(&config, &scenario)?;
    write_json(writer, &report)
}

fn resolve_plan_config(args: PlanArgs) -> Result<PlanConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

/// Drive a planner for `scenario` to completion or cancellation.
pub(crate) fn execute_plan(
    config: &PlanConfig,
    scenario: &Scenario,
) -> Result<PlanReport, CliError> {
    let topology = scenario
        .topology()
        .map_err(|source| CliError::InvalidScenario {
            path: config.scenario.clone(),
            source,
        })?;
    let planner_config = config.planner_config(scenario);
    let mut planner = RoutePlanner::new(
        topology,
        scenario.start,
        scenario.items.iter().copied(),
        planner_config,
    )?;

    let cancel = planner.cancel_token();
    let limit_reached = |planned: usize| config.max_legs.is_some_and(|max| planned >= max);
    if limit_reached(0) {
        cancel.cancel();
    }
    let mut legs = Vec::new();
    for outcome in planner.legs() {
        let report = outcome?;
        log_leg(legs.len().saturating_add(1), &report);
        legs.push(report);
        if limit_reached(legs.len()) {
            cancel.cancel();
        }
    }

    Ok(PlanReport {
        config: planner_config,
        status: planner.status(),
        stats: planner.stats(),
        remaining: planner.state().inventory(),
        legs,
    })
}

fn log_leg(number: usize, report: &LegReport) {
    let inventory = report.state.inventory();
    let action = match &report.leg.kind {
        LegKind::Pickup(item) => format!("pick up {} item {}", item.priority(), item.id()),
        LegKind::DepotReturn => "unload at depot".to_owned(),
    };
    info!(
        "leg {number}: {} steps to {}, {action}; {}; {} perishable and {} standard items left",
        report.leg.path.steps(),
        report.state.position(),
        report.state.load_gauge(),
        inventory.perishable,
        inventory.standard
    );
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<PlanConfig, CliError> {
    let merged = PlanArgs::merge_from_layers(layers).map_err(CliError::from)?;
    PlanConfig::try_from(merged)
}
