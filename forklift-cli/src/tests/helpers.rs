//! Test helpers for writing scenario files into scratch directories.

use camino::{Utf8Path, Utf8PathBuf};
use forklift_core::test_support::{perishable, standard};
use forklift_core::Cell;
use tempfile::TempDir;

use crate::scenario::Scenario;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path.as_std_path(), contents).expect("write test file");
}

/// A temporary directory addressed through UTF-8 paths.
#[derive(Debug)]
pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }

    pub(super) fn write_scenario(&self, name: &str, scenario: &Scenario) -> Utf8PathBuf {
        let path = self.path(name);
        let payload = serde_json::to_vec_pretty(scenario).expect("serialise scenario");
        write_utf8(&path, &payload);
        path
    }
}

/// The open 3x3 floor with one perishable and one standard item.
pub(super) fn perishable_floor() -> Scenario {
    Scenario {
        rows: 3,
        cols: 3,
        blocked: Vec::new(),
        start: Cell::new(0, 0),
        depot: None,
        capacity: None,
        items: vec![perishable(1, 1, 2), standard(0, 2, 1)],
    }
}
