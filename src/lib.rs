//! Facade crate for the forklift route-planning engine.
//!
//! This crate re-exports the grid, pathfinding and planning vocabulary from
//! `forklift-core` and, behind the `planner` feature, the greedy
//! [`RoutePlanner`] from `forklift-planner`.

#![forbid(unsafe_code)]

pub use forklift_core::{
    CancelToken, Cell, CellRole, GridError, GridTopology, Heuristic, HeuristicKind, Inventory,
    Item, ItemError, ItemId, ItemSpec, Leg, LegKind, LegPlanner, LegReport, Legs, LoadGauge,
    Manhattan, Path, PlanError, PlanStep, PlannerState, Priority, RunStats, RunStatus, Zero,
    find_path,
};

#[cfg(feature = "planner")]
pub use forklift_planner::{PlannerConfig, PriorityRule, RoutePlanner};
