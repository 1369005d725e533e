//! A* search over a [`GridTopology`].

use core::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use log::debug;

use crate::{Cell, GridError, GridTopology, Heuristic, Path};

/// Frontier entry. Entries are never updated in place: an improvement pushes
/// a fresh entry and the superseded one is skipped when popped.
#[derive(Debug)]
struct OpenNode {
    f: u32,
    g: u32,
    cell: Cell,
}

impl OpenNode {
    const fn key(&self) -> (u32, Cell, u32) {
        (self.f, self.cell, self.g)
    }
}

impl PartialEq for OpenNode {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for OpenNode {}

impl PartialOrd for OpenNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OpenNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering to make BinaryHeap behave like a min-heap; equal
        // `f` values fall back to the lexicographic cell order.
        other.key().cmp(&self.key())
    }
}

/// Find a minimum-cost route from `start` to `goal`.
///
/// Edges have unit cost and movement is 4-connected. With an admissible,
/// consistent `heuristic` the returned path is shortest; [`Manhattan`] and
/// [`Zero`] both qualify and yield paths of equal length, though the cells
/// chosen may differ when several shortest paths exist.
///
/// Returns an empty [`Path`] when either endpoint is impassable or the goal
/// is walled off, and `[start]` when `start == goal` on a passable cell.
///
/// [`Manhattan`]: crate::Manhattan
/// [`Zero`]: crate::Zero
///
/// # Errors
///
/// Returns [`GridError::InvalidCoordinate`] when either endpoint is outside
/// the grid.
///
/// # Examples
/// ```
/// use forklift_core::{Cell, GridTopology, Manhattan, find_path};
///
/// # fn main() -> Result<(), forklift_core::GridError> {
/// let grid = GridTopology::open(3, 3)?;
/// let path = find_path(&grid, Cell::new(0, 0), Cell::new(2, 2), &Manhattan)?;
/// assert_eq!(path.len(), 5);
/// assert!(path.is_contiguous());
/// # Ok(())
/// # }
/// ```
pub fn find_path<H>(
    topology: &GridTopology,
    start: Cell,
    goal: Cell,
    heuristic: &H,
) -> Result<Path, GridError>
where
    H: Heuristic + ?Sized,
{
    topology.ensure_in_bounds(start)?;
    topology.ensure_in_bounds(goal)?;
    if !topology.is_passable(start)? || !topology.is_passable(goal)? {
        debug!("route {start} -> {goal} touches an impassable cell");
        return Ok(Path::unreachable());
    }
    if start == goal {
        return Ok(Path::single(start));
    }

    let mut open = BinaryHeap::new();
    let mut g_score: HashMap<Cell, u32> = HashMap::from([(start, 0)]);
    let mut came_from: HashMap<Cell, Cell> = HashMap::new();
    let mut expanded = 0_usize;

    open.push(OpenNode {
        f: heuristic.estimate(start, goal),
        g: 0,
        cell: start,
    });

    while let Some(node) = open.pop() {
        if g_score.get(&node.cell).is_some_and(|&best| best != node.g) {
            // Stale heap entry.
            continue;
        }
        if node.cell == goal {
            let path = reconstruct_path(&came_from, start, goal);
            debug!(
                "route {start} -> {goal}: {} steps after expanding {expanded} cells",
                path.steps()
            );
            return Ok(path);
        }
        expanded = expanded.saturating_add(1);

        for next in topology.neighbors(node.cell)? {
            let tentative = node.g.saturating_add(1);
            if g_score.get(&next).is_some_and(|&known| tentative >= known) {
                continue;
            }
            came_from.insert(next, node.cell);
            g_score.insert(next, tentative);
            open.push(OpenNode {
                f: tentative.saturating_add(heuristic.estimate(next, goal)),
                g: tentative,
                cell: next,
            });
        }
    }

    debug!("no route {start} -> {goal} after expanding {expanded} cells");
    Ok(Path::unreachable())
}

fn reconstruct_path(came_from: &HashMap<Cell, Cell>, start: Cell, goal: Cell) -> Path {
    let mut cells = vec![goal];
    let mut current = goal;
    while current != start {
        let Some(&prev) = came_from.get(&current) else {
            break;
        };
        cells.push(prev);
        current = prev;
    }
    cells.reverse();
    Path::new(cells)
}
