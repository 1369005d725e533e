//! Helpers for driving `RoutePlanner` runs in unit, behaviour and property
//! tests.

use forklift_core::{Cell, GridTopology, ItemSpec, LegPlanner, LegReport, PlanError};

use crate::{PlannerConfig, RoutePlanner};

/// A planner on an open `rows` x `cols` grid starting at the default depot.
///
/// # Examples
/// ```rust
/// use forklift_core::test_support::standard;
/// use forklift_planner::test_support::{drain, open_floor_planner};
///
/// let mut planner = open_floor_planner(3, 3, vec![standard(0, 2, 1)], 3)?;
/// assert_eq!(drain(&mut planner)?.len(), 2);
/// # Ok::<(), forklift_core::PlanError>(())
/// ```
///
/// # Errors
///
/// Propagates validation failures from [`RoutePlanner::new`].
pub fn open_floor_planner(
    rows: u32,
    cols: u32,
    items: Vec<ItemSpec>,
    capacity: u32,
) -> Result<RoutePlanner, PlanError> {
    let grid = GridTopology::open(rows, cols)?;
    let config = PlannerConfig::default().with_capacity(capacity);
    RoutePlanner::new(grid, config.depot, items, config)
}

/// Pull every remaining leg from `planner`.
///
/// # Errors
///
/// Returns the first planning error encountered.
pub fn drain<P: LegPlanner>(planner: &mut P) -> Result<Vec<LegReport>, PlanError> {
    planner.legs().collect()
}

/// The cell each leg ends on.
#[must_use]
pub fn stops(reports: &[LegReport]) -> Vec<Cell> {
    reports
        .iter()
        .filter_map(|report| report.leg.path.goal())
        .collect()
}
