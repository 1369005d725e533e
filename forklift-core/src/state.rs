//! Mutable planning state for a single collection run.

use std::fmt;

use crate::{Cell, Inventory, Item, ItemId};

/// Snapshot of a forklift mid-run: where it is, what it carries and what is
/// left to collect.
///
/// Pending items keep their ingestion order, which planners use to break
/// ties between equally distant candidates. The load never exceeds the
/// capacity: [`PlannerState::collect`] refuses items that would overflow it.
///
/// # Examples
/// ```
/// use forklift_core::{Cell, ItemId, ItemSpec, PlannerState, Priority};
///
/// let item = ItemSpec::new(Cell::new(0, 2), 2, Priority::Standard).ingest(ItemId(0))?;
/// let mut state = PlannerState::new(Cell::new(0, 0), Cell::new(0, 0), 3, vec![item]);
/// assert!(state.fits(&item));
/// state.collect(ItemId(0));
/// assert_eq!(state.load(), 2);
/// assert_eq!(state.position(), Cell::new(0, 2));
/// state.unload_at_depot();
/// assert_eq!(state.load_gauge().to_string(), "Load: 0 / 3");
/// # Ok::<(), forklift_core::ItemError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlannerState {
    position: Cell,
    load: u32,
    capacity: u32,
    depot: Cell,
    pending: Vec<Item>,
}

impl PlannerState {
    /// Start a run with an empty forklift at `position`.
    #[must_use]
    pub const fn new(position: Cell, depot: Cell, capacity: u32, pending: Vec<Item>) -> Self {
        Self {
            position,
            load: 0,
            capacity,
            depot,
            pending,
        }
    }

    /// Current forklift cell.
    #[must_use]
    pub const fn position(&self) -> Cell {
        self.position
    }

    /// Weight currently carried.
    #[must_use]
    pub const fn load(&self) -> u32 {
        self.load
    }

    /// Maximum weight the forklift may carry.
    #[must_use]
    pub const fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Cell where loads are emptied.
    #[must_use]
    pub const fn depot(&self) -> Cell {
        self.depot
    }

    /// Items not yet collected or dropped, in ingestion order.
    #[must_use]
    pub fn pending(&self) -> &[Item] {
        &self.pending
    }

    /// Whether every item has been resolved.
    #[must_use]
    pub const fn is_cleared(&self) -> bool {
        self.pending.is_empty()
    }

    /// Per-class counts of pending items.
    #[must_use]
    pub fn inventory(&self) -> Inventory {
        Inventory::count(&self.pending)
    }

    /// Load and capacity, for display.
    #[must_use]
    pub const fn load_gauge(&self) -> LoadGauge {
        LoadGauge {
            load: self.load,
            capacity: self.capacity,
        }
    }

    /// Whether `item` can be picked up without exceeding the capacity.
    #[must_use]
    pub fn fits(&self, item: &Item) -> bool {
        self.load
            .checked_add(item.weight())
            .is_some_and(|total| total <= self.capacity)
    }

    /// Drive to a pending item and load it.
    ///
    /// Returns `None`, leaving the state untouched, when the item is not
    /// pending or would overflow the capacity.
    pub fn collect(&mut self, id: ItemId) -> Option<Item> {
        let index = self.pending.iter().position(|item| item.id() == id)?;
        let item = *self.pending.get(index)?;
        if !self.fits(&item) {
            return None;
        }
        self.pending.remove(index);
        self.position = item.position();
        self.load = self.load.saturating_add(item.weight());
        Some(item)
    }

    /// Remove a pending item without collecting it.
    pub fn discard(&mut self, id: ItemId) -> Option<Item> {
        let index = self.pending.iter().position(|item| item.id() == id)?;
        Some(self.pending.remove(index))
    }

    /// Move to the depot and empty the forklift.
    pub const fn unload_at_depot(&mut self) {
        self.position = self.depot;
        self.load = 0;
    }
}

/// Load over capacity, displayed as `Load: 2 / 3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadGauge {
    /// Weight carried.
    pub load: u32,
    /// Maximum weight.
    pub capacity: u32,
}

impl fmt::Display for LoadGauge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Load: {} / {}", self.load, self.capacity)
    }
}
