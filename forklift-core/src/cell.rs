//! Grid coordinates.

use std::fmt;

/// A zero-indexed `(row, col)` position on a warehouse grid.
///
/// Ordering is lexicographic (row, then column). The pathfinder relies on
/// this ordering to break ties between frontier entries deterministically.
///
/// # Examples
/// ```
/// use forklift_core::Cell;
///
/// let a = Cell::new(0, 0);
/// let b = Cell::new(2, 3);
/// assert_eq!(a.manhattan(b), 5);
/// assert!(Cell::new(1, 1).is_adjacent(Cell::new(1, 2)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "(u32, u32)", into = "(u32, u32)")
)]
pub struct Cell {
    /// Row index, counted from the top.
    pub row: u32,
    /// Column index, counted from the left.
    pub col: u32,
}

impl Cell {
    /// Construct a cell from its row and column.
    #[must_use]
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// Number of unit moves separating two cells on a 4-connected grid.
    #[must_use]
    pub const fn manhattan(self, other: Self) -> u32 {
        self.row
            .abs_diff(other.row)
            .saturating_add(self.col.abs_diff(other.col))
    }

    /// Whether `other` is exactly one orthogonal step away.
    #[must_use]
    pub const fn is_adjacent(self, other: Self) -> bool {
        self.manhattan(other) == 1
    }

    /// Offset the cell by a signed step, returning `None` below zero.
    pub(crate) const fn offset(self, d_row: i32, d_col: i32) -> Option<Self> {
        let Some(row) = self.row.checked_add_signed(d_row) else {
            return None;
        };
        let Some(col) = self.col.checked_add_signed(d_col) else {
            return None;
        };
        Some(Self { row, col })
    }
}

impl From<(u32, u32)> for Cell {
    fn from((row, col): (u32, u32)) -> Self {
        Self { row, col }
    }
}

impl From<Cell> for (u32, u32) {
    fn from(cell: Cell) -> Self {
        (cell.row, cell.col)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Cell::new(0, 0), Cell::new(0, 0), 0)]
    #[case(Cell::new(0, 0), Cell::new(2, 2), 4)]
    #[case(Cell::new(5, 1), Cell::new(2, 7), 9)]
    fn manhattan_is_symmetric(#[case] a: Cell, #[case] b: Cell, #[case] expected: u32) {
        assert_eq!(a.manhattan(b), expected);
        assert_eq!(b.manhattan(a), expected);
    }

    #[rstest]
    fn diagonal_cells_are_not_adjacent() {
        assert!(!Cell::new(1, 1).is_adjacent(Cell::new(2, 2)));
        assert!(Cell::new(1, 1).is_adjacent(Cell::new(0, 1)));
        assert!(!Cell::new(1, 1).is_adjacent(Cell::new(1, 1)));
    }

    #[rstest]
    fn offset_refuses_negative_coordinates() {
        assert_eq!(Cell::new(0, 3).offset(-1, 0), None);
        assert_eq!(Cell::new(0, 3).offset(0, -1), Some(Cell::new(0, 2)));
    }

    #[rstest]
    fn ordering_compares_rows_first() {
        assert!(Cell::new(0, 9) < Cell::new(1, 0));
        assert!(Cell::new(1, 0) < Cell::new(1, 1));
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn serialises_as_pair() {
        let json = serde_json::to_string(&Cell::new(3, 4)).expect("serialise cell");
        assert_eq!(json, "[3,4]");
        let cell: Cell = serde_json::from_str("[1,2]").expect("deserialise cell");
        assert_eq!(cell, Cell::new(1, 2));
    }
}
