//! Achievements command implementation

use anyhow::Result;

use questline::engine::achievements::{Achievement, ACHIEVEMENTS};
use questline::tracker::Tracker;

/// Show every achievement with its unlock state
pub fn achievements_command(tracker: &Tracker) -> Result<()> {
    let stats = tracker.store().query().load_stats()?;

    println!(
        "Achievements ({}/{} unlocked):\n",
        stats.achievements.len(),
        Achievement::total_count()
    );

    for def in ACHIEVEMENTS {
        let icon = if stats.has_achievement(def.id.as_str()) {
            def.icon
        } else {
            "\u{1F512}"
        };
        println!("  {} {} - {}", icon, def.name, def.description);
    }

    Ok(())
}
