//! Row mapping between SQLite and domain types

use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::Row;

use crate::domain::{Category, Priority, Task};

/// app_state key for the last day a bonus task was generated
pub const STATE_LAST_BONUS_DAY: &str = "last_bonus_day";

/// Map a `tasks` row to a [`Task`].
///
/// Unknown category or priority strings fall back to defaults instead
/// of failing the whole query, so a downgrade never bricks the list.
pub fn task_from_row(row: &Row) -> rusqlite::Result<Task> {
    let category: String = row.get("category")?;
    let priority: String = row.get("priority")?;
    let created_ms: i64 = row.get("created_at")?;
    let due_date: Option<String> = row.get("due_date")?;

    Ok(Task {
        id: row.get("id")?,
        title: row.get("title")?,
        description: row.get("description")?,
        category: Category::from_str(&category).unwrap_or(Category::Personal),
        priority: Priority::from_str(&priority).unwrap_or(Priority::Normal),
        completed: row.get("completed")?,
        created_at: DateTime::from_timestamp_millis(created_ms).unwrap_or_else(Utc::now),
        due_date: due_date.and_then(|d| NaiveDate::parse_from_str(&d, "%Y-%m-%d").ok()),
        xp_reward: row.get("xp_reward")?,
        via_voice: row.get("via_voice")?,
    })
}
