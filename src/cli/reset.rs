//! Reset command implementation

use anyhow::Result;

use questline::tracker::Tracker;

/// Wipe all tasks, stats and achievements
pub fn reset_command(tracker: &Tracker, force: bool) -> Result<()> {
    if !force {
        println!("This deletes every task, all XP and all achievements.");
        println!("Run again with --force to proceed.");
        return Ok(());
    }

    tracker.store().reset_all()?;
    println!("All data deleted.");

    Ok(())
}
