//! JSON scenario files describing a warehouse floor and its items.

use std::io::BufReader;

use camino::Utf8Path;
use forklift_core::{Cell, GridError, GridTopology, ItemSpec};
use serde::{Deserialize, Serialize};

use crate::CliError;
use crate::fs::open_utf8_file;

/// A collection request as stored on disk.
///
/// ```json
/// {
///   "rows": 3, "cols": 3, "blocked": [[1, 1]], "start": [0, 0],
///   "items": [{ "position": [2, 2], "weight": 1, "priority": "perishable" }]
/// }
/// ```
///
/// `depot` and `capacity` fall back to the planner defaults when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct Scenario {
    pub(crate) rows: u32,
    pub(crate) cols: u32,
    #[serde(default)]
    pub(crate) blocked: Vec<Cell>,
    pub(crate) start: Cell,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) depot: Option<Cell>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) capacity: Option<u32>,
    #[serde(default)]
    pub(crate) items: Vec<ItemSpec>,
}

impl Scenario {
    /// Build the grid, marking blocked cells impassable.
    pub(crate) fn topology(&self) -> Result<GridTopology, GridError> {
        let mut grid = GridTopology::open(self.rows, self.cols)?;
        for &cell in &self.blocked {
            grid.block(cell)?;
        }
        Ok(grid)
    }
}

/// Loads a JSON-encoded [`Scenario`] from disk.
pub(crate) fn load_scenario(path: &Utf8Path) -> Result<Scenario, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenScenario {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| CliError::ParseScenario {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use forklift_core::Priority;
    use rstest::rstest;

    #[rstest]
    fn optional_fields_default() {
        let scenario: Scenario = serde_json::from_str(
            r#"{"rows": 2, "cols": 3, "start": [0, 0],
                "items": [{"position": [1, 2], "weight": 2}]}"#,
        )
        .expect("decode");
        assert!(scenario.blocked.is_empty());
        assert_eq!(scenario.depot, None);
        assert_eq!(scenario.capacity, None);
        let item = scenario.items.first().expect("one item");
        assert_eq!(item.priority, Priority::Standard);
        assert_eq!(item.position, Cell::new(1, 2));
    }

    #[rstest]
    fn blocked_cells_become_walls() {
        let scenario = Scenario {
            rows: 2,
            cols: 2,
            blocked: vec![Cell::new(1, 1)],
            start: Cell::new(0, 0),
            depot: None,
            capacity: None,
            items: Vec::new(),
        };
        let grid = scenario.topology().expect("valid grid");
        assert_eq!(grid.is_passable(Cell::new(1, 1)), Ok(false));
        assert_eq!(grid.passable_cells().count(), 3);
    }

    #[rstest]
    fn blocked_cells_outside_the_grid_are_rejected() {
        let scenario = Scenario {
            rows: 2,
            cols: 2,
            blocked: vec![Cell::new(2, 0)],
            start: Cell::new(0, 0),
            depot: None,
            capacity: None,
            items: Vec::new(),
        };
        assert!(matches!(
            scenario.topology(),
            Err(GridError::InvalidCoordinate { .. })
        ));
    }
}
