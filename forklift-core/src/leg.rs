//! Planner output: legs, per-step results and run statistics.

use crate::{Item, Path, PlannerState};

/// What happens at the end of a leg.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "kind", content = "item", rename_all = "snake_case")
)]
pub enum LegKind {
    /// The forklift loads this item.
    Pickup(Item),
    /// The forklift empties its load at the depot.
    DepotReturn,
}

/// One planned movement segment.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Leg {
    /// Cells to traverse, starting at the forklift's position.
    pub path: Path,
    /// Action taken on arrival.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub kind: LegKind,
}

impl Leg {
    /// A leg ending with a pickup.
    #[must_use]
    pub const fn pickup(path: Path, item: Item) -> Self {
        Self {
            path,
            kind: LegKind::Pickup(item),
        }
    }

    /// A leg ending at the depot.
    #[must_use]
    pub const fn depot_return(path: Path) -> Self {
        Self {
            path,
            kind: LegKind::DepotReturn,
        }
    }

    /// The collected item, for pickup legs.
    #[must_use]
    pub const fn collected(&self) -> Option<&Item> {
        match &self.kind {
            LegKind::Pickup(item) => Some(item),
            LegKind::DepotReturn => None,
        }
    }

    /// Whether this leg ends by unloading at the depot.
    #[must_use]
    pub const fn is_depot_return(&self) -> bool {
        matches!(self.kind, LegKind::DepotReturn)
    }
}

/// A leg together with the state the forklift is in once it completes.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LegReport {
    /// The movement to perform.
    pub leg: Leg,
    /// Position, load and remaining items after the leg.
    pub state: PlannerState,
}

/// Result of asking a planner for its next leg.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanStep {
    /// Perform this leg, then ask again.
    Leg(LegReport),
    /// Every item is resolved and the load is back to zero.
    Done,
    /// The run was aborted between legs.
    Cancelled,
}

/// Lifecycle of a planning run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum RunStatus {
    /// No leg requested yet.
    #[default]
    Idle,
    /// At least one step has been planned.
    Active,
    /// Terminal: all items resolved.
    Done,
    /// Terminal: aborted between legs.
    Cancelled,
}

impl RunStatus {
    /// Whether no further legs will be produced.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Done | Self::Cancelled)
    }
}

/// Counters accumulated over a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunStats {
    /// Legs emitted.
    pub legs: usize,
    /// Items loaded onto the forklift.
    pub items_collected: usize,
    /// Depot-return legs emitted.
    pub depot_returns: usize,
    /// Unit moves across all legs.
    pub cells_travelled: usize,
}

impl RunStats {
    /// Account for an emitted leg.
    pub const fn record(&mut self, leg: &Leg) {
        self.legs = self.legs.saturating_add(1);
        self.cells_travelled = self.cells_travelled.saturating_add(leg.path.steps());
        match leg.kind {
            LegKind::Pickup(_) => self.items_collected = self.items_collected.saturating_add(1),
            LegKind::DepotReturn => self.depot_returns = self.depot_returns.saturating_add(1),
        }
    }
}
