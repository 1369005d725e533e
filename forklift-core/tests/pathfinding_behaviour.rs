//! Behavioural tests for `find_path` using rstest-bdd.

use std::cell::RefCell;

use forklift_core::test_support::{SEALED_POCKET, open_grid, sealed_pocket_grid};
use forklift_core::{Cell, GridTopology, Manhattan, Path, find_path};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

#[derive(Debug, Default)]
struct PathWorld {
    grid: RefCell<Option<GridTopology>>,
    path: RefCell<Option<Path>>,
}

impl PathWorld {
    #[expect(
        clippy::expect_used,
        reason = "behaviour tests use expect for readable failures"
    )]
    fn search(&self, start: Cell, goal: Cell) {
        let grid = self.grid.borrow();
        let topology = grid.as_ref().expect("grid should be configured first");
        let path = find_path(topology, start, goal, &Manhattan).expect("endpoints in bounds");
        self.path.replace(Some(path));
    }

    #[expect(
        clippy::expect_used,
        reason = "behaviour tests use expect for readable failures"
    )]
    fn expect_path(&self) -> Path {
        self.path
            .borrow()
            .clone()
            .expect("a search should run before assertions")
    }
}

#[fixture]
fn world() -> PathWorld {
    PathWorld::default()
}

#[given("an open 3x3 grid")]
#[expect(
    clippy::expect_used,
    reason = "behaviour tests use expect for readable failures"
)]
fn given_open_grid(world: &PathWorld) {
    world
        .grid
        .replace(Some(open_grid(3, 3).expect("non-empty grid")));
}

#[given("a grid with a wall between the endpoints")]
#[expect(
    clippy::expect_used,
    reason = "behaviour tests use expect for readable failures"
)]
fn given_walled_grid(world: &PathWorld) {
    let grid = GridTopology::from_rows(&["....", ".##.", "...."]).expect("valid map");
    world.grid.replace(Some(grid));
}

#[given("a grid with a sealed pocket")]
#[expect(
    clippy::expect_used,
    reason = "behaviour tests use expect for readable failures"
)]
fn given_sealed_grid(world: &PathWorld) {
    world
        .grid
        .replace(Some(sealed_pocket_grid().expect("valid map")));
}

#[when("I search from the top-left corner to the bottom-right corner")]
fn when_search_corners(world: &PathWorld) {
    world.search(Cell::new(0, 0), Cell::new(2, 2));
}

#[when("I search from the centre to the centre")]
fn when_search_same_cell(world: &PathWorld) {
    world.search(Cell::new(1, 1), Cell::new(1, 1));
}

#[when("I search across the wall")]
fn when_search_across_wall(world: &PathWorld) {
    world.search(Cell::new(1, 0), Cell::new(1, 3));
}

#[when("I search into the sealed pocket")]
fn when_search_pocket(world: &PathWorld) {
    world.search(Cell::new(0, 0), SEALED_POCKET);
}

#[then("the path has 5 cells")]
fn then_five_cells(world: &PathWorld) {
    assert_eq!(world.expect_path().len(), 5);
}

#[then("the path has 6 cells")]
fn then_six_cells(world: &PathWorld) {
    assert_eq!(world.expect_path().len(), 6);
}

#[then("the path has 1 cells")]
fn then_one_cell(world: &PathWorld) {
    assert_eq!(world.expect_path().cells(), &[Cell::new(1, 1)]);
}

#[then("every step moves to an adjacent cell")]
fn then_contiguous(world: &PathWorld) {
    assert!(world.expect_path().is_contiguous());
}

#[then("the path avoids blocked cells")]
#[expect(
    clippy::expect_used,
    reason = "behaviour tests use expect for readable failures"
)]
fn then_avoids_blocked(world: &PathWorld) {
    let grid = world.grid.borrow();
    let topology = grid.as_ref().expect("grid configured");
    let path = world.expect_path();
    assert!(
        path.cells()
            .iter()
            .all(|&cell| topology.is_passable(cell) == Ok(true))
    );
}

#[then("no path is found")]
fn then_unreachable(world: &PathWorld) {
    assert!(world.expect_path().is_empty());
}

#[scenario(path = "tests/features/pathfinding.feature", index = 0)]
fn crossing_open_grid(world: PathWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/pathfinding.feature", index = 1)]
fn same_cell(world: PathWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/pathfinding.feature", index = 2)]
fn detour_around_wall(world: PathWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/pathfinding.feature", index = 3)]
fn sealed_goal(world: PathWorld) {
    let _ = world;
}
