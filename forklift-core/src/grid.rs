//! Grid bounds and per-cell passability.

use crate::{Cell, GridError};

/// Neighbour offsets as `(d_row, d_col)`: right, down, up, left.
///
/// The enumeration order is fixed so that searches are reproducible.
const NEIGHBOUR_OFFSETS: [(i32, i32); 4] = [(0, 1), (1, 0), (-1, 0), (0, -1)];

const PASSABLE_SYMBOL: char = '.';
const BLOCKED_SYMBOL: char = '#';

/// A rectangular warehouse floor where every cell is passable or blocked.
///
/// Movement is 4-connected with unit cost. The topology is immutable for the
/// duration of a planning run; build it up front with [`GridTopology::open`]
/// and [`GridTopology::block`], or parse it with [`GridTopology::from_rows`].
///
/// # Examples
/// ```
/// use forklift_core::{Cell, GridTopology};
///
/// # fn main() -> Result<(), forklift_core::GridError> {
/// let grid = GridTopology::from_rows(&["..#", "...", "#.."])?;
/// assert_eq!((grid.rows(), grid.cols()), (3, 3));
/// assert!(!grid.is_passable(Cell::new(0, 2))?);
/// let around: Vec<Cell> = grid.neighbors(Cell::new(1, 1))?.collect();
/// assert_eq!(around.len(), 4);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridTopology {
    rows: u32,
    cols: u32,
    passable: Vec<bool>,
}

impl GridTopology {
    /// Construct a fully passable grid.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::EmptyGrid`] when either dimension is zero and
    /// [`GridError::TooLarge`] when the cell count overflows `usize`.
    pub fn open(rows: u32, cols: u32) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::EmptyGrid { rows, cols });
        }
        let len = usize::try_from(rows)
            .ok()
            .zip(usize::try_from(cols).ok())
            .and_then(|(r, c)| r.checked_mul(c))
            .ok_or(GridError::TooLarge { rows, cols })?;
        Ok(Self {
            rows,
            cols,
            passable: vec![true; len],
        })
    }

    /// Parse an ASCII map where `.` is passable and `#` is blocked.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::EmptyGrid`] for an empty map,
    /// [`GridError::RaggedMap`] when rows differ in width and
    /// [`GridError::UnknownSymbol`] for any other character.
    pub fn from_rows<S: AsRef<str>>(map: &[S]) -> Result<Self, GridError> {
        let expected = map.first().map_or(0, |row| row.as_ref().chars().count());
        let rows = u32::try_from(map.len()).map_err(|_| GridError::TooLarge {
            rows: u32::MAX,
            cols: 0,
        })?;
        let cols = u32::try_from(expected).map_err(|_| GridError::TooLarge {
            rows,
            cols: u32::MAX,
        })?;
        let mut grid = Self::open(rows, cols)?;
        for (row_index, (line, row)) in map.iter().zip(0_u32..).enumerate() {
            let found = line.as_ref().chars().count();
            if found != expected {
                return Err(GridError::RaggedMap {
                    row: row_index,
                    expected,
                    found,
                });
            }
            for (symbol, col) in line.as_ref().chars().zip(0_u32..) {
                let cell = Cell::new(row, col);
                match symbol {
                    PASSABLE_SYMBOL => {}
                    BLOCKED_SYMBOL => grid.block(cell)?,
                    other => return Err(GridError::UnknownSymbol { symbol: other, cell }),
                }
            }
        }
        Ok(grid)
    }

    /// Number of rows.
    #[must_use]
    pub const fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub const fn cols(&self) -> u32 {
        self.cols
    }

    /// Whether `cell` lies within the grid bounds.
    #[must_use]
    pub const fn in_bounds(&self, cell: Cell) -> bool {
        cell.row < self.rows && cell.col < self.cols
    }

    /// Fail with [`GridError::InvalidCoordinate`] unless `cell` is in bounds.
    ///
    /// # Errors
    ///
    /// See above.
    pub const fn ensure_in_bounds(&self, cell: Cell) -> Result<(), GridError> {
        if self.in_bounds(cell) {
            Ok(())
        } else {
            Err(GridError::InvalidCoordinate {
                cell,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    /// Whether the forklift may occupy `cell`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidCoordinate`] for out-of-bounds cells.
    pub fn is_passable(&self, cell: Cell) -> Result<bool, GridError> {
        self.ensure_in_bounds(cell)?;
        Ok(self.passable_at(cell))
    }

    /// Mark a cell passable or blocked.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidCoordinate`] for out-of-bounds cells.
    pub fn set_passable(&mut self, cell: Cell, passable: bool) -> Result<(), GridError> {
        self.ensure_in_bounds(cell)?;
        if let Some(slot) = self.index(cell).and_then(|idx| self.passable.get_mut(idx)) {
            *slot = passable;
        }
        Ok(())
    }

    /// Mark a cell as blocked.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidCoordinate`] for out-of-bounds cells.
    pub fn block(&mut self, cell: Cell) -> Result<(), GridError> {
        self.set_passable(cell, false)
    }

    /// Passable cells orthogonally adjacent to `cell`, in the order right,
    /// down, up, left.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidCoordinate`] when `cell` itself is out of
    /// bounds. The queried cell does not need to be passable.
    pub fn neighbors(&self, cell: Cell) -> Result<impl Iterator<Item = Cell> + '_, GridError> {
        self.ensure_in_bounds(cell)?;
        Ok(NEIGHBOUR_OFFSETS
            .into_iter()
            .filter_map(move |(d_row, d_col)| cell.offset(d_row, d_col))
            .filter(move |&next| self.passable_at(next)))
    }

    /// Every passable cell, in row-major order.
    pub fn passable_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.rows)
            .flat_map(move |row| (0..self.cols).map(move |col| Cell::new(row, col)))
            .filter(move |&cell| self.passable_at(cell))
    }

    /// Out-of-bounds cells report as impassable.
    fn passable_at(&self, cell: Cell) -> bool {
        self.index(cell)
            .and_then(|idx| self.passable.get(idx))
            .copied()
            .unwrap_or(false)
    }

    fn index(&self, cell: Cell) -> Option<usize> {
        if !self.in_bounds(cell) {
            return None;
        }
        let row = usize::try_from(cell.row).ok()?;
        let col = usize::try_from(cell.col).ok()?;
        let width = usize::try_from(self.cols).ok()?;
        row.checked_mul(width)?.checked_add(col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn walled() -> GridTopology {
        GridTopology::from_rows(&["...", "##.", "..."]).expect("valid map")
    }

    #[rstest]
    #[case(0, 3)]
    #[case(3, 0)]
    fn open_rejects_empty_dimensions(#[case] rows: u32, #[case] cols: u32) {
        let err = GridTopology::open(rows, cols).expect_err("empty grid");
        assert_eq!(err, GridError::EmptyGrid { rows, cols });
    }

    #[rstest]
    fn neighbors_follow_fixed_order() {
        let grid = GridTopology::open(3, 3).expect("grid");
        let found: Vec<Cell> = grid
            .neighbors(Cell::new(1, 1))
            .expect("in bounds")
            .collect();
        assert_eq!(
            found,
            vec![
                Cell::new(1, 2),
                Cell::new(2, 1),
                Cell::new(0, 1),
                Cell::new(1, 0),
            ]
        );
    }

    #[rstest]
    fn neighbors_clip_at_corners() {
        let grid = GridTopology::open(3, 3).expect("grid");
        let found: Vec<Cell> = grid
            .neighbors(Cell::new(0, 0))
            .expect("in bounds")
            .collect();
        assert_eq!(found, vec![Cell::new(0, 1), Cell::new(1, 0)]);
    }

    #[rstest]
    fn neighbors_skip_blocked_cells(walled: GridTopology) {
        let found: Vec<Cell> = walled
            .neighbors(Cell::new(0, 0))
            .expect("in bounds")
            .collect();
        assert_eq!(found, vec![Cell::new(0, 1)]);
    }

    #[rstest]
    fn queries_outside_bounds_fail(walled: GridTopology) {
        let outside = Cell::new(3, 0);
        assert!(matches!(
            walled.is_passable(outside),
            Err(GridError::InvalidCoordinate { .. })
        ));
        assert!(walled.neighbors(outside).is_err());
        assert!(!walled.in_bounds(outside));
    }

    #[rstest]
    fn from_rows_marks_blocked_cells(walled: GridTopology) {
        assert_eq!(walled.is_passable(Cell::new(1, 0)), Ok(false));
        assert_eq!(walled.is_passable(Cell::new(1, 2)), Ok(true));
        assert_eq!(walled.passable_cells().count(), 7);
    }

    #[rstest]
    fn from_rows_rejects_ragged_maps() {
        let err = GridTopology::from_rows(&["...", ".."]).expect_err("ragged");
        assert_eq!(
            err,
            GridError::RaggedMap {
                row: 1,
                expected: 3,
                found: 2
            }
        );
    }

    #[rstest]
    fn from_rows_rejects_unknown_symbols() {
        let err = GridTopology::from_rows(&[".x."]).expect_err("unknown symbol");
        assert!(matches!(err, GridError::UnknownSymbol { symbol: 'x', .. }));
    }

    #[rstest]
    fn set_passable_reopens_cells(mut walled: GridTopology) {
        walled
            .set_passable(Cell::new(1, 0), true)
            .expect("in bounds");
        assert_eq!(walled.is_passable(Cell::new(1, 0)), Ok(true));
    }
}
