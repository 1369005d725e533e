//! Error types shared by the grid, the pathfinder and route planners.

use std::fmt;

use thiserror::Error;

use crate::{Cell, ItemId};

/// Errors from [`GridTopology`](crate::GridTopology) construction and queries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// One of the requested dimensions was zero.
    #[error("grid dimensions must be positive, got {rows}x{cols}")]
    EmptyGrid {
        /// Requested row count.
        rows: u32,
        /// Requested column count.
        cols: u32,
    },
    /// The grid holds more cells than can be addressed on this platform.
    #[error("grid of {rows}x{cols} cells is too large to index")]
    TooLarge {
        /// Requested row count.
        rows: u32,
        /// Requested column count.
        cols: u32,
    },
    /// A cell outside the grid bounds was queried.
    #[error("cell {cell} lies outside the {rows}x{cols} grid")]
    InvalidCoordinate {
        /// The offending cell.
        cell: Cell,
        /// Grid row count.
        rows: u32,
        /// Grid column count.
        cols: u32,
    },
    /// A textual map row did not match the width of the first row.
    #[error("map row {row} has {found} columns, expected {expected}")]
    RaggedMap {
        /// Zero-based row number within the map.
        row: usize,
        /// Width of the first row.
        expected: usize,
        /// Width of this row.
        found: usize,
    },
    /// A textual map contained a symbol other than `.` or `#`.
    #[error("map symbol {symbol:?} at {cell} is neither '.' nor '#'")]
    UnknownSymbol {
        /// The unexpected character.
        symbol: char,
        /// Where it appeared.
        cell: Cell,
    },
}

/// Why an item was refused at ingestion time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ItemError {
    /// Items must weigh at least one unit.
    #[error("item {id} has zero weight")]
    ZeroWeight {
        /// Identifier assigned at ingestion.
        id: ItemId,
    },
    /// The item can never fit on the forklift, even when empty.
    #[error("item {id} weighs {weight}, more than the capacity of {capacity}")]
    ExceedsCapacity {
        /// Identifier assigned at ingestion.
        id: ItemId,
        /// Declared weight.
        weight: u32,
        /// Forklift capacity.
        capacity: u32,
    },
}

/// The part a cell plays in a planning request, used in error reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellRole {
    /// The forklift's starting position.
    Start,
    /// The unloading depot.
    Depot,
    /// The position of a pending item.
    Item(ItemId),
}

impl fmt::Display for CellRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => f.write_str("start"),
            Self::Depot => f.write_str("depot"),
            Self::Item(id) => write!(f, "item {id}"),
        }
    }
}

/// Errors returned by route planners.
///
/// All of these are fatal. Request validation happens before the first leg
/// is produced.
/// An item that simply cannot be reached is not an error: planners drop it
/// and carry on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    /// A start, depot or item cell is outside the grid, or the start or
    /// depot sits on an impassable cell.
    #[error("{role} cell {cell} is outside the grid or impassable")]
    InvalidCoordinate {
        /// Which input the cell came from.
        role: CellRole,
        /// The offending cell.
        cell: Cell,
    },
    /// An item failed validation.
    #[error(transparent)]
    InvalidItem(#[from] ItemError),
    /// The forklift capacity was zero.
    #[error("forklift capacity must be positive")]
    InvalidCapacity,
    /// No route connects the start to the depot, so loads could never be
    /// returned.
    #[error("depot {depot} cannot be reached from start {start}")]
    DepotUnreachable {
        /// Run start cell.
        start: Cell,
        /// Depot cell.
        depot: Cell,
    },
    /// The grid rejected a query.
    #[error(transparent)]
    Grid(#[from] GridError),
}
