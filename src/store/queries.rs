//! Read side of the tracker store

use anyhow::Result;
use chrono::NaiveDate;
use rusqlite::{params, OptionalExtension};

use crate::domain::{Category, Task, UserStats};

use super::db::TrackerDb;
use super::models::{task_from_row, STATE_LAST_BONUS_DAY};
use super::time_bucket::parse_day_bucket;

const TASK_COLUMNS: &str = "id, title, description, category, priority, completed, \
     created_at, due_date, xp_reward, via_voice";

/// Query interface for reading tracker data
#[derive(Clone)]
pub struct TrackerQuery {
    db: TrackerDb,
}

impl TrackerQuery {
    pub fn new(db: TrackerDb) -> Self {
        Self { db }
    }

    /// Fetch a single task by ID
    pub fn get_task(&self, id: &str) -> Result<Option<Task>> {
        let conn = self.db.conn();
        let task = conn
            .query_row(
                &format!("SELECT {TASK_COLUMNS} FROM tasks WHERE id = ?1"),
                params![id],
                task_from_row,
            )
            .optional()?;
        Ok(task)
    }

    /// All tasks, newest first
    pub fn all_tasks(&self) -> Result<Vec<Task>> {
        let conn = self.db.conn();
        let mut stmt = conn.prepare(&format!(
            "SELECT {TASK_COLUMNS} FROM tasks ORDER BY created_at DESC"
        ))?;
        let tasks = stmt
            .query_map([], task_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(tasks)
    }

    /// Tasks filtered for listing
    pub fn list_tasks(&self, category: Option<Category>, include_completed: bool) -> Result<Vec<Task>> {
        let tasks = self.all_tasks()?;
        Ok(tasks
            .into_iter()
            .filter(|t| category.is_none_or(|c| t.category == c))
            .filter(|t| include_completed || !t.completed)
            .collect())
    }

    /// The bonus task generated on a given day, if any
    pub fn bonus_task_for_day(&self, day: &str) -> Result<Option<Task>> {
        let conn = self.db.conn();
        let task = conn
            .query_row(
                &format!(
                    "SELECT {TASK_COLUMNS} FROM tasks \
                     WHERE category = 'bonus' AND day_bucket = ?1 \
                     ORDER BY created_at DESC LIMIT 1"
                ),
                params![day],
                task_from_row,
            )
            .optional()?;
        Ok(task)
    }

    /// Completed tasks that were created on the given day
    pub fn completed_on_day(&self, day: &str) -> Result<u64> {
        let conn = self.db.conn();
        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM tasks WHERE completed = 1 AND day_bucket = ?1",
            params![day],
            |row| row.get(0),
        )?;
        Ok(count.max(0) as u64)
    }

    /// Load the singleton stats row together with unlocked achievements
    pub fn load_stats(&self) -> Result<UserStats> {
        let conn = self.db.conn();

        let (xp, streak, last_day, tasks_completed, voice_tasks_created) = conn.query_row(
            r#"SELECT total_xp, streak, last_completion_day, tasks_completed, voice_tasks_created
               FROM user_stats WHERE id = 1"#,
            [],
            |row| {
                Ok((
                    row.get::<_, i64>(0)?,
                    row.get::<_, u32>(1)?,
                    row.get::<_, Option<String>>(2)?,
                    row.get::<_, i64>(3)?,
                    row.get::<_, i64>(4)?,
                ))
            },
        )?;

        let mut stmt = conn.prepare("SELECT id FROM achievements ORDER BY unlocked_at, id")?;
        let achievements = stmt
            .query_map([], |row| row.get(0))?
            .collect::<rusqlite::Result<Vec<String>>>()?;

        Ok(UserStats {
            xp: xp.max(0) as u64,
            streak,
            last_completion_day: last_day.and_then(|d| parse_day_bucket(&d)),
            achievements,
            tasks_completed: tasks_completed.max(0) as u64,
            voice_tasks_created: voice_tasks_created.max(0) as u64,
        })
    }

    /// The day a bonus task was last generated
    pub fn last_bonus_day(&self) -> Result<Option<NaiveDate>> {
        let conn = self.db.conn();
        let value: Option<String> = conn
            .query_row(
                "SELECT value FROM app_state WHERE key = ?1",
                params![STATE_LAST_BONUS_DAY],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value.and_then(|d| parse_day_bucket(&d)))
    }
}
