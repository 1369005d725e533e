//! Distance estimates that steer the pathfinder.
//!
//! A heuristic must never overestimate the remaining cost (admissible) and
//! must not drop by more than one per move (consistent) for
//! [`find_path`](crate::find_path) to return shortest paths. Both estimates
//! provided here satisfy that on a 4-connected unit-cost grid.
//!
//! # Example
//!
//! ```
//! use forklift_core::{Cell, Heuristic, HeuristicKind, Manhattan, Zero};
//!
//! let from = Cell::new(0, 0);
//! let to = Cell::new(3, 4);
//! assert_eq!(Manhattan.estimate(from, to), 7);
//! assert_eq!(Zero.estimate(from, to), 0);
//! assert_eq!("zero".parse::<HeuristicKind>()?, HeuristicKind::Zero);
//! # Ok::<(), forklift_core::ParseHeuristicError>(())
//! ```

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::Cell;

/// Estimate of the number of moves between two cells.
pub trait Heuristic {
    /// Lower bound on the moves needed to travel from `from` to `to`.
    fn estimate(&self, from: Cell, to: Cell) -> u32;
}

impl<H: Heuristic + ?Sized> Heuristic for &H {
    fn estimate(&self, from: Cell, to: Cell) -> u32 {
        (**self).estimate(from, to)
    }
}

/// L1 distance; exact on an open grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Manhattan;

impl Heuristic for Manhattan {
    fn estimate(&self, from: Cell, to: Cell) -> u32 {
        from.manhattan(to)
    }
}

/// Constant zero; turns A* into uniform-cost search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Zero;

impl Heuristic for Zero {
    fn estimate(&self, _from: Cell, _to: Cell) -> u32 {
        0
    }
}

/// Runtime choice between the built-in heuristics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum HeuristicKind {
    /// See [`Manhattan`].
    #[default]
    Manhattan,
    /// See [`Zero`].
    Zero,
}

impl Heuristic for HeuristicKind {
    fn estimate(&self, from: Cell, to: Cell) -> u32 {
        match self {
            Self::Manhattan => Manhattan.estimate(from, to),
            Self::Zero => Zero.estimate(from, to),
        }
    }
}

impl fmt::Display for HeuristicKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Manhattan => f.write_str("manhattan"),
            Self::Zero => f.write_str("zero"),
        }
    }
}

/// Error returned when parsing a [`HeuristicKind`] from text fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown heuristic {0:?}; expected \"manhattan\" or \"zero\"")]
pub struct ParseHeuristicError(String);

impl FromStr for HeuristicKind {
    type Err = ParseHeuristicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "manhattan" => Ok(Self::Manhattan),
            "zero" | "none" | "dijkstra" => Ok(Self::Zero),
            _ => Err(ParseHeuristicError(s.to_owned())),
        }
    }
}
