//! Cell-by-cell routes.

use crate::Cell;

/// An ordered sequence of adjacent cells from a start to a goal.
///
/// An empty path means no route exists. A route from a cell to itself is
/// the single-cell path `[start]`.
///
/// # Examples
/// ```
/// use forklift_core::{Cell, Path};
///
/// let path = Path::new(vec![Cell::new(0, 0), Cell::new(0, 1), Cell::new(1, 1)]);
/// assert_eq!(path.steps(), 2);
/// assert_eq!(path.goal(), Some(Cell::new(1, 1)));
/// assert!(path.is_contiguous());
/// assert!(Path::unreachable().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Path {
    cells: Vec<Cell>,
}

impl Path {
    /// Wrap an ordered list of cells.
    #[must_use]
    pub const fn new(cells: Vec<Cell>) -> Self {
        Self { cells }
    }

    /// The "no route" marker.
    #[must_use]
    pub const fn unreachable() -> Self {
        Self { cells: Vec::new() }
    }

    /// A route that never leaves `cell`.
    #[must_use]
    pub fn single(cell: Cell) -> Self {
        Self { cells: vec![cell] }
    }

    /// Cells in travel order.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of cells, including both endpoints.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether this is the "no route" marker.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of unit moves along the path.
    #[must_use]
    pub const fn steps(&self) -> usize {
        self.cells.len().saturating_sub(1)
    }

    /// First cell, if any.
    #[must_use]
    pub fn start(&self) -> Option<Cell> {
        self.cells.first().copied()
    }

    /// Last cell, if any.
    #[must_use]
    pub fn goal(&self) -> Option<Cell> {
        self.cells.last().copied()
    }

    /// Whether every consecutive pair of cells is adjacent.
    #[must_use]
    pub fn is_contiguous(&self) -> bool {
        self.cells.windows(2).all(|pair| match pair {
            [a, b] => a.is_adjacent(*b),
            _ => false,
        })
    }

    /// Consume the path, yielding its cells.
    #[must_use]
    pub fn into_cells(self) -> Vec<Cell> {
        self.cells
    }
}

impl From<Vec<Cell>> for Path {
    fn from(cells: Vec<Cell>) -> Self {
        Self::new(cells)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn single_cell_path_has_no_steps() {
        let path = Path::single(Cell::new(2, 2));
        assert_eq!(path.len(), 1);
        assert_eq!(path.steps(), 0);
        assert_eq!(path.start(), path.goal());
        assert!(path.is_contiguous());
    }

    #[rstest]
    fn jumps_break_contiguity() {
        let path = Path::new(vec![Cell::new(0, 0), Cell::new(1, 1)]);
        assert!(!path.is_contiguous());
    }

    #[rstest]
    fn unreachable_marker_is_empty() {
        let path = Path::unreachable();
        assert!(path.is_empty());
        assert_eq!(path.steps(), 0);
        assert_eq!(path.start(), None);
    }
}
