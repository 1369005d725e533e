//! `RoutePlanner`: greedy, capacity-aware collection over a warehouse grid.

use forklift_core::{
    CancelToken, Cell, CellRole, GridTopology, Item, ItemError, ItemId, ItemSpec, Leg,
    LegPlanner, LegReport, PlanError, PlanStep, PlannerState, RunStats, RunStatus, find_path,
};
use log::{debug, info, warn};

use crate::PlannerConfig;

/// Native planner that collects every reachable item with a single forklift.
///
/// Each call to [`plan_next_leg`](LegPlanner::plan_next_leg) performs one
/// selection round:
///
/// 1. With nothing left to collect, return any load to the depot and finish.
/// 2. Restrict candidates to the preferred class when the
///    [`PriorityRule`](crate::PriorityRule) selects one.
/// 3. Take the candidate nearest by Manhattan distance; ties go to the item
///    supplied first.
/// 4. If it would overflow the forklift, emit a depot return instead and
///    leave the candidate pending.
/// 5. Route to it; unreachable candidates are dropped and selection repeats.
///
/// Every leg starts where the previous one ended, so a driver can animate
/// legs back to back. The run is finite: each leg either resolves an item or
/// empties the load, and every item fits on an empty forklift.
///
/// # Examples
///
/// ```
/// use forklift_core::{Cell, GridTopology, ItemSpec, LegPlanner, Priority};
/// use forklift_planner::{PlannerConfig, RoutePlanner};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let grid = GridTopology::open(3, 3)?;
/// let items = vec![
///     ItemSpec::new(Cell::new(1, 1), 2, Priority::Perishable),
///     ItemSpec::new(Cell::new(0, 2), 1, Priority::Standard),
/// ];
/// let mut planner = RoutePlanner::new(grid, Cell::new(0, 0), items, PlannerConfig::default())?;
/// let stops: Vec<Cell> = planner
///     .legs()
///     .filter_map(|report| report.ok()?.leg.path.goal())
///     .collect();
/// assert_eq!(stops, vec![Cell::new(1, 1), Cell::new(0, 2), Cell::new(0, 0)]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct RoutePlanner {
    topology: GridTopology,
    config: PlannerConfig,
    initial: PlannerState,
    state: PlannerState,
    status: RunStatus,
    stats: RunStats,
    cancel: CancelToken,
}

impl RoutePlanner {
    /// Validate a collection request and prepare a run.
    ///
    /// Items receive [`ItemId`]s in the order supplied; that order also
    /// breaks ties between equally distant candidates.
    ///
    /// # Errors
    ///
    /// - [`PlanError::InvalidCapacity`] when the capacity is zero.
    /// - [`PlanError::InvalidCoordinate`] when the start or depot is outside
    ///   the grid or impassable, or an item lies outside the grid.
    /// - [`PlanError::InvalidItem`] for weightless items and items heavier
    ///   than the capacity.
    /// - [`PlanError::DepotUnreachable`] when no route joins start and depot.
    pub fn new<I>(
        topology: GridTopology,
        start: Cell,
        items: I,
        config: PlannerConfig,
    ) -> Result<Self, PlanError>
    where
        I: IntoIterator<Item = ItemSpec>,
    {
        if config.capacity == 0 {
            return Err(PlanError::InvalidCapacity);
        }
        ensure_standable(&topology, start, CellRole::Start)?;
        ensure_standable(&topology, config.depot, CellRole::Depot)?;

        let pending = items
            .into_iter()
            .enumerate()
            .map(|(index, spec)| ingest(&topology, spec, ItemId(index), config.capacity))
            .collect::<Result<Vec<_>, _>>()?;

        if find_path(&topology, start, config.depot, &config.heuristic)?.is_empty() {
            return Err(PlanError::DepotUnreachable {
                start,
                depot: config.depot,
            });
        }

        debug!(
            "planner ready: {} items, capacity {}, depot {}, {} heuristic",
            pending.len(),
            config.capacity,
            config.depot,
            config.heuristic
        );
        let initial = PlannerState::new(start, config.depot, config.capacity, pending);
        Ok(Self {
            topology,
            config,
            state: initial.clone(),
            initial,
            status: RunStatus::Idle,
            stats: RunStats::default(),
            cancel: CancelToken::new(),
        })
    }

    /// Settings this run was built with.
    #[must_use]
    pub const fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Grid the run plans over.
    #[must_use]
    pub const fn topology(&self) -> &GridTopology {
        &self.topology
    }

    /// Current forklift state.
    #[must_use]
    pub const fn state(&self) -> &PlannerState {
        &self.state
    }

    /// Where the run is in its lifecycle.
    #[must_use]
    pub const fn status(&self) -> RunStatus {
        self.status
    }

    /// Counters accumulated since the run started.
    #[must_use]
    pub const fn stats(&self) -> RunStats {
        self.stats
    }

    /// Handle that aborts the run at the next leg boundary.
    #[must_use]
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// Restart the run from its initial state.
    ///
    /// Clears any pending cancellation on the shared token.
    pub fn reset(&mut self) {
        self.state = self.initial.clone();
        self.status = RunStatus::Idle;
        self.stats = RunStats::default();
        self.cancel.reset();
        debug!("planner reset to {}", self.state.position());
    }

    fn select_candidate(&self) -> Option<Item> {
        let position = self.state.position();
        let pending = self.state.pending();
        let rule = self.config.priority;
        let preferred_only = pending.iter().any(|item| rule.prefers(item));
        pending
            .iter()
            .filter(|item| !preferred_only || rule.prefers(item))
            .min_by_key(|item| position.manhattan(item.position()))
            .copied()
    }

    fn return_to_depot(&mut self) -> Result<PlanStep, PlanError> {
        let position = self.state.position();
        let depot = self.state.depot();
        let path = find_path(&self.topology, position, depot, &self.config.heuristic)?;
        if path.is_empty() {
            return Err(PlanError::DepotUnreachable {
                start: position,
                depot,
            });
        }
        debug!(
            "returning to depot from {position} carrying {}",
            self.state.load_gauge()
        );
        self.state.unload_at_depot();
        Ok(self.emit(Leg::depot_return(path)))
    }

    fn finish(&mut self) -> Result<PlanStep, PlanError> {
        if self.state.load() > 0 {
            if self.state.position() != self.state.depot() {
                return self.return_to_depot();
            }
            self.state.unload_at_depot();
        }
        self.status = RunStatus::Done;
        info!(
            "collection run complete: {} legs, {} items collected, {} depot returns, {} cells travelled",
            self.stats.legs,
            self.stats.items_collected,
            self.stats.depot_returns,
            self.stats.cells_travelled
        );
        Ok(PlanStep::Done)
    }

    fn emit(&mut self, leg: Leg) -> PlanStep {
        self.stats.record(&leg);
        PlanStep::Leg(LegReport {
            leg,
            state: self.state.clone(),
        })
    }
}

impl LegPlanner for RoutePlanner {
    fn plan_next_leg(&mut self) -> Result<PlanStep, PlanError> {
        match self.status {
            RunStatus::Done => return Ok(PlanStep::Done),
            RunStatus::Cancelled => return Ok(PlanStep::Cancelled),
            RunStatus::Idle | RunStatus::Active => {}
        }
        if self.cancel.is_cancelled() {
            self.status = RunStatus::Cancelled;
            info!(
                "collection run cancelled after {} legs with {} items pending",
                self.stats.legs,
                self.state.pending().len()
            );
            return Ok(PlanStep::Cancelled);
        }
        self.status = RunStatus::Active;

        while let Some(candidate) = self.select_candidate() {
            if !self.state.fits(&candidate) {
                return self.return_to_depot();
            }
            let position = self.state.position();
            let path = find_path(
                &self.topology,
                position,
                candidate.position(),
                &self.config.heuristic,
            )?;
            if path.is_empty() {
                warn!(
                    "item {} at {} is unreachable from {position}; dropping it",
                    candidate.id(),
                    candidate.position()
                );
                self.state.discard(candidate.id());
                continue;
            }
            let collected = self.state.collect(candidate.id());
            debug_assert_eq!(collected, Some(candidate), "selected item must fit");
            debug!(
                "collecting {} item {} at {} in {} steps",
                candidate.priority(),
                candidate.id(),
                candidate.position(),
                path.steps()
            );
            return Ok(self.emit(Leg::pickup(path, candidate)));
        }
        self.finish()
    }
}

fn ensure_standable(topology: &GridTopology, cell: Cell, role: CellRole) -> Result<(), PlanError> {
    if matches!(topology.is_passable(cell), Ok(true)) {
        Ok(())
    } else {
        Err(PlanError::InvalidCoordinate { role, cell })
    }
}

fn ingest(
    topology: &GridTopology,
    spec: ItemSpec,
    id: ItemId,
    capacity: u32,
) -> Result<Item, PlanError> {
    let item = spec.ingest(id)?;
    if item.weight() > capacity {
        return Err(ItemError::ExceedsCapacity {
            id,
            weight: item.weight(),
            capacity,
        }
        .into());
    }
    if !topology.in_bounds(item.position()) {
        return Err(PlanError::InvalidCoordinate {
            role: CellRole::Item(id),
            cell: item.position(),
        });
    }
    Ok(item)
}
