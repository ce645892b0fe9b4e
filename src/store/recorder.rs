//! Write side of the tracker store

use anyhow::Result;
use chrono::Utc;
use rusqlite::params;

use crate::domain::{Task, UserStats};
use crate::engine::achievements::AchievementId;

use super::db::TrackerDb;
use super::models::STATE_LAST_BONUS_DAY;
use super::time_bucket::day_bucket;

/// Records tracker changes to the database
#[derive(Clone)]
pub struct TrackerRecorder {
    db: TrackerDb,
}

impl TrackerRecorder {
    pub fn new(db: TrackerDb) -> Self {
        Self { db }
    }

    /// Insert a newly created task
    pub fn insert_task(&self, task: &Task) -> Result<()> {
        let created_ms = task.created_at.timestamp_millis();
        let day = day_bucket(created_ms);

        let conn = self.db.conn();
        conn.execute(
            r#"INSERT INTO tasks
               (id, title, description, category, priority, completed,
                created_at, due_date, xp_reward, via_voice, day_bucket)
               VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)"#,
            params![
                task.id,
                task.title,
                task.description,
                task.category.as_str(),
                task.priority.as_str(),
                task.completed,
                created_ms,
                task.due_date.map(|d| d.to_string()),
                task.xp_reward,
                task.via_voice,
                day,
            ],
        )?;
        Ok(())
    }

    /// Bump the lifetime voice task counter
    pub fn record_voice_creation(&self) -> Result<()> {
        let conn = self.db.conn();
        conn.execute(
            "UPDATE user_stats SET voice_tasks_created = voice_tasks_created + 1 WHERE id = 1",
            [],
        )?;
        Ok(())
    }

    /// Delete a task. Returns false if no task had that ID.
    pub fn delete_task(&self, id: &str) -> Result<bool> {
        let conn = self.db.conn();
        let affected = conn.execute("DELETE FROM tasks WHERE id = ?1", params![id])?;
        Ok(affected > 0)
    }

    /// Persist a completion atomically.
    ///
    /// The completion flag, the updated stats row and any newly
    /// unlocked achievements land in one transaction, so a crash can
    /// never award XP without marking the task done.
    pub fn commit_completion(
        &self,
        task_id: &str,
        stats: &UserStats,
        newly_unlocked: &[AchievementId],
    ) -> Result<()> {
        let now = Utc::now().timestamp_millis();

        let mut conn = self.db.conn();
        let tx = conn.transaction()?;

        tx.execute(
            "UPDATE tasks SET completed = 1 WHERE id = ?1",
            params![task_id],
        )?;
        tx.execute(
            r#"UPDATE user_stats
               SET total_xp = ?1, streak = ?2, last_completion_day = ?3,
                   tasks_completed = ?4, voice_tasks_created = ?5
               WHERE id = 1"#,
            params![
                stats.xp as i64,
                stats.streak,
                stats.last_completion_day.map(|d| d.to_string()),
                stats.tasks_completed as i64,
                stats.voice_tasks_created as i64,
            ],
        )?;
        for id in newly_unlocked {
            tx.execute(
                "INSERT OR IGNORE INTO achievements (id, unlocked_at) VALUES (?1, ?2)",
                params![id.as_str(), now],
            )?;
        }

        tx.commit()?;
        Ok(())
    }

    /// Remember the day a bonus task was last generated
    pub fn set_last_bonus_day(&self, day: &str) -> Result<()> {
        let conn = self.db.conn();
        conn.execute(
            "INSERT OR REPLACE INTO app_state (key, value) VALUES (?1, ?2)",
            params![STATE_LAST_BONUS_DAY, day],
        )?;
        Ok(())
    }
}
