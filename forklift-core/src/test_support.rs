//! Deterministic fixtures shared by unit, behaviour and property tests.
//!
//! Available to downstream crates through the `test-support` feature.

use crate::{Cell, GridError, GridTopology, ItemSpec, Path, Priority};

/// A fully passable grid.
///
/// # Errors
///
/// Propagates [`GridError::EmptyGrid`] for zero dimensions.
pub fn open_grid(rows: u32, cols: u32) -> Result<GridTopology, GridError> {
    GridTopology::open(rows, cols)
}

/// A 5x5 grid whose bottom-right cell is sealed off by a ring of walls.
///
/// ```text
/// .....
/// .....
/// .....
/// ...##
/// ...#.
/// ```
///
/// # Errors
///
/// Propagates any [`GridError`] from [`GridTopology::from_rows`].
pub fn sealed_pocket_grid() -> Result<GridTopology, GridError> {
    GridTopology::from_rows(&[".....", ".....", ".....", "...##", "...#."])
}

/// The cell enclosed by [`sealed_pocket_grid`].
pub const SEALED_POCKET: Cell = Cell::new(4, 4);

/// A perishable item description.
#[must_use]
pub const fn perishable(row: u32, col: u32, weight: u32) -> ItemSpec {
    ItemSpec::new(Cell::new(row, col), weight, Priority::Perishable)
}

/// A standard item description.
#[must_use]
pub const fn standard(row: u32, col: u32, weight: u32) -> ItemSpec {
    ItemSpec::new(Cell::new(row, col), weight, Priority::Standard)
}

/// Whether `path` is a well-formed route from `start` to `goal`.
#[must_use]
pub fn connects(path: &Path, start: Cell, goal: Cell) -> bool {
    path.start() == Some(start) && path.goal() == Some(goal) && path.is_contiguous()
}
