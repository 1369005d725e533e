//! Greedy multi-stop route planner for the forklift engine.
//!
//! This crate provides [`RoutePlanner`], the default implementation of the
//! [`LegPlanner`](forklift_core::LegPlanner) trait. Each step picks the next
//! item to collect (perishables first, then nearest by Manhattan distance),
//! inserts a depot return whenever the pickup would overflow the forklift,
//! and routes the leg with [`find_path`](forklift_core::find_path).
//!
//! The planner is greedy and deterministic: equally distant
//! candidates are resolved by the order in which items were supplied, and
//! items that cannot be reached are dropped rather than failing the run.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod config;
mod planner;
#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use config::{PlannerConfig, PriorityRule};
pub use planner::RoutePlanner;
