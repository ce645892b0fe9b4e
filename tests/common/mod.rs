//! Shared test utilities for tracker integration tests

use tempfile::TempDir;

use questline::store::TrackerStore;
use questline::tracker::Tracker;

/// Creates a tracker backed by a database in a temporary directory
pub fn create_test_tracker() -> (Tracker, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = TrackerStore::with_path(&temp_dir.path().join("questline.db"))
        .expect("Failed to open test database");
    (Tracker::new(store), temp_dir)
}
