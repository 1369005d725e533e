//! Property-based tests for the route planner.
//!
//! These tests use `proptest` to assert invariants that must hold for every
//! valid collection request, complementing the unit and behavioural tests.
//!
//! # Invariants tested
//!
//! - **Capacity:** the load never exceeds the capacity.
//! - **Priority:** while a reachable perishable is pending, the next pickup
//!   is perishable.
//! - **Termination:** the run ends within `2 * items + 1` legs.
//! - **Continuity:** each leg is contiguous and starts where the last ended.
//! - **Completion:** a finished run leaves an empty forklift at the depot.


use forklift_core::{Cell, GridTopology, Item, LegPlanner, Manhattan, PlanStep, RunStatus, find_path};
use forklift_planner::{PlannerConfig, RoutePlanner};
use proptest::prelude::*;

use proptest_support::{FLOOR, request_strategy, walls_strategy};

fn floor_with(walls: &[Cell]) -> GridTopology {
    let mut grid = GridTopology::open(FLOOR, FLOOR).expect("non-empty grid");
    for &wall in walls {
        grid.block(wall).expect("cell within bounds");
    }
    grid
}

fn reachable(grid: &GridTopology, from: Cell, item: &Item) -> bool {
    find_path(grid, from, item.position(), &Manhattan)
        .is_ok_and(|path| !path.is_empty())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// Property: step-by-step invariants hold for the whole run.
    #[test]
    fn runs_respect_capacity_priority_and_continuity(
        walls in walls_strategy(),
        (capacity, items) in request_strategy(8),
    ) {
        let grid = floor_with(&walls);
        let depot = Cell::new(0, 0);
        let config = PlannerConfig::default().with_capacity(capacity);
        let item_count = items.len();
        let mut planner = RoutePlanner::new(grid.clone(), depot, items, config)
            .expect("generated requests are valid");

        let bound = 2 * item_count + 1;
        let mut legs = 0_usize;
        let mut position = depot;
        loop {
            let before = planner.state().clone();
            let report = match planner.plan_next_leg().expect("planning never fails") {
                PlanStep::Leg(report) => report,
                PlanStep::Done => break,
                PlanStep::Cancelled => {
                    return Err(TestCaseError::fail("nothing cancelled this run"));
                }
            };
            legs += 1;
            prop_assert!(legs <= bound, "run exceeded {} legs", bound);

            let path = &report.leg.path;
            prop_assert_eq!(path.start(), Some(position));
            prop_assert!(path.is_contiguous());
            prop_assert!(report.state.load() <= capacity);
            position = path.goal().expect("legs are never empty");

            if let Some(item) = report.leg.collected() {
                let perishable_waiting = before
                    .pending()
                    .iter()
                    .any(|pending| {
                        pending.is_perishable() && reachable(&grid, before.position(), pending)
                    });
                if perishable_waiting {
                    prop_assert!(item.is_perishable());
                }
            }
        }

        prop_assert_eq!(planner.status(), RunStatus::Done);
        prop_assert_eq!(planner.state().load(), 0);
        prop_assert!(planner.state().is_cleared());
        prop_assert_eq!(position, depot);
    }

    /// Property: resetting replays an identical run.
    #[test]
    fn reset_is_deterministic((capacity, items) in request_strategy(6)) {
        let grid = GridTopology::open(FLOOR, FLOOR).expect("non-empty grid");
        let config = PlannerConfig::default().with_capacity(capacity);
        let mut planner = RoutePlanner::new(grid, Cell::new(0, 0), items, config)
            .expect("generated requests are valid");
        let first: Vec<_> = planner.legs().collect();
        planner.reset();
        let second: Vec<_> = planner.legs().collect();
        prop_assert_eq!(first, second);
    }
}
