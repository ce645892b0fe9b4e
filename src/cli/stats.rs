//! Stats command implementation

use anyhow::Result;

use questline::engine::achievements::Achievement;
use questline::engine::levels::LevelProgress;
use questline::engine::streaks::{is_active, today};
use questline::tracker::Tracker;

const BAR_WIDTH: usize = 20;

/// Show XP, level, streak and counters
pub fn stats_command(tracker: &Tracker, json: bool) -> Result<()> {
    let dashboard = tracker.dashboard(today())?;

    if json {
        println!("{}", serde_json::to_string_pretty(&dashboard)?);
        return Ok(());
    }

    let stats = &dashboard.stats;
    let progress = LevelProgress::new(stats.xp);
    let filled = ((progress.fraction() * BAR_WIDTH as f32) as usize).min(BAR_WIDTH);
    let bar = format!("{}{}", "#".repeat(filled), ".".repeat(BAR_WIDTH - filled));

    println!(
        "Level {}  [{}]  {}/{} XP",
        progress.level, bar, progress.xp, progress.next_level_at
    );

    let streak_note = if stats.streak > 0 && !is_active(stats.last_completion_day, today()) {
        " (lapsed, next completion restarts at 1)"
    } else {
        ""
    };
    println!("\u{1F525} Streak: {} days{}", stats.streak, streak_note);

    println!("Completed today: {}", dashboard.completed_today);
    println!("Tasks completed: {}", stats.tasks_completed);
    println!("Voice tasks created: {}", stats.voice_tasks_created);
    println!(
        "Achievements: {}/{}",
        stats.achievements.len(),
        Achievement::total_count()
    );

    Ok(())
}
