//! SQLite database connection and schema management
//!
//! Manages the `~/.questline/questline.db` database.

use std::path::Path;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use rusqlite::Connection;

use crate::config::Config;

/// Database wrapper shared by recorder and query handles
#[derive(Clone)]
pub struct TrackerDb {
    conn: Arc<Mutex<Connection>>,
}

impl TrackerDb {
    /// Open or create the database at the default location (~/.questline/questline.db)
    pub fn open_default() -> Result<Self> {
        let db_path = Config::global_config_dir().join("questline.db");
        Self::open(&db_path)
    }

    /// Open or create the database at a specific path
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create data dir: {}", parent.display()))?;
        }

        let conn = Connection::open(path)
            .with_context(|| format!("Failed to open tracker db: {}", path.display()))?;

        conn.pragma_update(None, "journal_mode", "WAL")?;
        conn.pragma_update(None, "synchronous", "NORMAL")?;
        conn.pragma_update(None, "foreign_keys", "ON")?;

        let db = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        db.init_schema()?;
        Ok(db)
    }

    /// Get a reference to the connection
    pub fn conn(&self) -> std::sync::MutexGuard<'_, Connection> {
        self.conn.lock().expect("Tracker DB lock poisoned")
    }

    /// Initialize the database schema
    fn init_schema(&self) -> Result<()> {
        let conn = self.conn();
        conn.execute_batch(SCHEMA_SQL)?;
        Ok(())
    }

    /// Delete all tracker data (tasks, stats, achievements, app state)
    pub fn reset_all(&self) -> Result<()> {
        let conn = self.conn();
        conn.execute_batch(
            r#"
            DELETE FROM tasks;
            DELETE FROM achievements;
            DELETE FROM app_state;
            UPDATE user_stats SET total_xp = 0, streak = 0, last_completion_day = NULL,
                tasks_completed = 0, voice_tasks_created = 0 WHERE id = 1;
            "#,
        )?;
        Ok(())
    }
}

/// SQL schema for the tracker database
const SCHEMA_SQL: &str = r#"
-- Tasks (one row per task, completed ones included)
CREATE TABLE IF NOT EXISTS tasks (
    id TEXT PRIMARY KEY,
    title TEXT NOT NULL,
    description TEXT NOT NULL DEFAULT '',
    category TEXT NOT NULL,
    priority TEXT NOT NULL,
    completed INTEGER NOT NULL DEFAULT 0,
    created_at INTEGER NOT NULL,
    due_date TEXT,
    xp_reward INTEGER NOT NULL,
    via_voice INTEGER NOT NULL DEFAULT 0,
    day_bucket TEXT NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_tasks_day ON tasks(day_bucket);
CREATE INDEX IF NOT EXISTS idx_tasks_completed ON tasks(completed);
CREATE INDEX IF NOT EXISTS idx_tasks_category ON tasks(category);

-- User stats (XP, streak, counters) - singleton row
CREATE TABLE IF NOT EXISTS user_stats (
    id INTEGER PRIMARY KEY CHECK (id = 1),
    total_xp INTEGER DEFAULT 0,
    streak INTEGER DEFAULT 0,
    last_completion_day TEXT,
    tasks_completed INTEGER DEFAULT 0,
    voice_tasks_created INTEGER DEFAULT 0
);
INSERT OR IGNORE INTO user_stats (id) VALUES (1);

-- Unlocked achievements
CREATE TABLE IF NOT EXISTS achievements (
    id TEXT PRIMARY KEY,
    unlocked_at INTEGER NOT NULL
);

-- Small key/value state (last bonus generation day)
CREATE TABLE IF NOT EXISTS app_state (
    key TEXT PRIMARY KEY,
    value TEXT
);

-- Schema version
CREATE TABLE IF NOT EXISTS schema_version (version INTEGER PRIMARY KEY);
INSERT OR IGNORE INTO schema_version VALUES (1);
"#;
