//! Core domain types for the forklift route-planning engine.
//!
//! A forklift collects weighted items on a warehouse grid, returning to a
//! depot whenever the next pickup would exceed its capacity. This crate
//! holds the grid model, the A* pathfinder and the planner-facing data
//! types; route planners themselves live in separate crates and implement
//! [`LegPlanner`].
//!
//! Constructors return `Result` to surface invalid input early.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod cancel;
mod cell;
mod error;
mod grid;
mod heuristic;
mod item;
mod leg;
mod path;
mod pathfind;
mod planner;
mod state;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use cancel::CancelToken;
pub use cell::Cell;
pub use error::{CellRole, GridError, ItemError, PlanError};
pub use grid::GridTopology;
pub use heuristic::{Heuristic, HeuristicKind, Manhattan, ParseHeuristicError, Zero};
pub use item::{Inventory, Item, ItemId, ItemSpec, ParsePriorityError, Priority};
pub use leg::{Leg, LegKind, LegReport, PlanStep, RunStats, RunStatus};
pub use path::Path;
pub use pathfind::find_path;
pub use planner::{LegPlanner, Legs};
pub use state::{LoadGauge, PlannerState};
