//! Delete command implementation

use anyhow::Result;

use questline::tracker::Tracker;

/// Delete a task by ID
pub fn delete_command(tracker: &Tracker, id: &str) -> Result<()> {
    tracker.delete_task(id)?;
    println!("Deleted {id}");
    Ok(())
}
