//! Add command implementation

use anyhow::{bail, Result};
use chrono::NaiveDate;

use questline::config::Config;
use questline::domain::{Category, Priority, Task};
use questline::tracker::Tracker;

/// Add a manually entered task
pub fn add_command(
    tracker: &Tracker,
    config: &Config,
    title: &str,
    description: &str,
    category: Option<String>,
    priority: &str,
    due: Option<String>,
) -> Result<()> {
    let category_str = category.unwrap_or_else(|| config.settings.default_category.clone());
    let Some(category) = Category::from_str(&category_str) else {
        bail!("unknown category: {category_str} (expected work, personal or health)");
    };
    if category == Category::Bonus {
        bail!("bonus tasks are generated daily, not added manually");
    }

    let Some(priority) = Priority::from_str(priority) else {
        bail!("unknown priority: {priority} (expected normal, important or urgent)");
    };

    let due_date = match due {
        Some(d) => match NaiveDate::parse_from_str(&d, "%Y-%m-%d") {
            Ok(date) => Some(date),
            Err(_) => bail!("invalid due date: {d} (expected YYYY-MM-DD)"),
        },
        None => None,
    };

    let task = Task::new(title, description, category, priority, due_date);
    tracker.add_task(&task)?;

    println!(
        "Added \"{}\" ({}, {} XP on completion)",
        task.title, task.category, task.xp_reward
    );
    println!("  id: {}", task.id);

    Ok(())
}
