//! Tunables for [`RoutePlanner`](crate::RoutePlanner).

use forklift_core::{Cell, HeuristicKind, Item};

/// Which items a planner considers first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum PriorityRule {
    /// Restrict candidates to perishables while any remain.
    #[default]
    PerishableFirst,
    /// Treat every item alike.
    None,
}

impl PriorityRule {
    /// Whether `item` belongs to the preferred class under this rule.
    #[must_use]
    pub const fn prefers(self, item: &Item) -> bool {
        match self {
            Self::PerishableFirst => item.is_perishable(),
            Self::None => false,
        }
    }
}

/// Configuration for [`RoutePlanner`](crate::RoutePlanner).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct PlannerConfig {
    /// Maximum weight carried between depot visits.
    pub capacity: u32,
    /// Cell where the load is emptied.
    pub depot: Cell,
    /// Estimate steering each leg's search.
    pub heuristic: HeuristicKind,
    /// Candidate preference applied before distance.
    pub priority: PriorityRule,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            capacity: 3,
            depot: Cell::new(0, 0),
            heuristic: HeuristicKind::Manhattan,
            priority: PriorityRule::PerishableFirst,
        }
    }
}

impl PlannerConfig {
    /// Replace the capacity.
    #[must_use]
    pub const fn with_capacity(mut self, capacity: u32) -> Self {
        self.capacity = capacity;
        self
    }

    /// Replace the depot cell.
    #[must_use]
    pub const fn with_depot(mut self, depot: Cell) -> Self {
        self.depot = depot;
        self
    }

    /// Replace the heuristic.
    #[must_use]
    pub const fn with_heuristic(mut self, heuristic: HeuristicKind) -> Self {
        self.heuristic = heuristic;
        self
    }

    /// Replace the priority rule.
    #[must_use]
    pub const fn with_priority(mut self, priority: PriorityRule) -> Self {
        self.priority = priority;
        self
    }
}
