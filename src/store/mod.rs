//! Persistence layer for Questline
//!
//! Tasks, user stats, unlocked achievements and a little app state all
//! live in one SQLite database (`~/.questline/questline.db`).
//!
//! # Usage
//!
//! ```ignore
//! let store = TrackerStore::new()?;
//!
//! // Record a new task
//! store.recorder().insert_task(&task)?;
//!
//! // Load stats for display
//! let stats = store.query().load_stats()?;
//! ```

mod db;
mod models;
mod queries;
mod recorder;
mod time_bucket;

pub use db::TrackerDb;
pub use queries::TrackerQuery;
pub use recorder::TrackerRecorder;
pub use time_bucket::{day_bucket, parse_day_bucket};

use anyhow::Result;

/// Central handle for tracker persistence
///
/// Thread-safe through an internal mutex on the database connection.
#[derive(Clone)]
pub struct TrackerStore {
    db: TrackerDb,
}

impl TrackerStore {
    /// Create a store backed by the default database location
    pub fn new() -> Result<Self> {
        let db = TrackerDb::open_default()?;
        Ok(Self { db })
    }

    /// Create a store backed by a custom database path
    pub fn with_path(path: &std::path::Path) -> Result<Self> {
        let db = TrackerDb::open(path)?;
        Ok(Self { db })
    }

    /// Get a recorder for writing
    pub fn recorder(&self) -> TrackerRecorder {
        TrackerRecorder::new(self.db.clone())
    }

    /// Get a query interface for reading
    pub fn query(&self) -> TrackerQuery {
        TrackerQuery::new(self.db.clone())
    }

    /// Reset all data (tasks, stats, achievements)
    pub fn reset_all(&self) -> Result<()> {
        self.db.reset_all()
    }
}
