//! List command implementation

use anyhow::Result;

use questline::domain::Category;
use questline::tracker::Tracker;

/// List tasks, optionally filtered by category
pub fn list_command(
    tracker: &Tracker,
    category: Option<String>,
    all: bool,
    json: bool,
) -> Result<()> {
    let category = match category {
        Some(c) => match Category::from_str(&c) {
            Some(parsed) => Some(parsed),
            None => {
                eprintln!("Unknown category: {c}");
                return Ok(());
            }
        },
        None => None,
    };

    let tasks = tracker.store().query().list_tasks(category, all)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&tasks)?);
        return Ok(());
    }

    if tasks.is_empty() {
        println!("No tasks found.");
        return Ok(());
    }

    println!("Tasks ({}):\n", tasks.len());

    for task in &tasks {
        let marker = if task.completed { "x" } else { " " };
        println!(
            "  [{}] {} ({}, {}, {} XP)",
            marker, task.title, task.category, task.priority, task.xp_reward
        );

        if !task.description.is_empty() {
            println!("      {}", task.description);
        }
        if let Some(due) = task.due_date {
            println!("      due {due}");
        }
        println!("      id: {}", task.id);
        println!();
    }

    Ok(())
}
