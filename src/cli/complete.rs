//! Complete command implementation

use anyhow::Result;

use questline::config::Config;
use questline::engine::levels::LevelProgress;
use questline::engine::random::OsRandom;
use questline::engine::streaks::today;
use questline::tracker::{CompletionEvent, Tracker};

/// Complete a task and print everything it earned
pub fn complete_command(tracker: &Tracker, config: &Config, id: &str) -> Result<()> {
    let mut rng = OsRandom;
    let outcome = tracker.complete_task(id, &mut rng, today())?;

    if outcome.events.is_empty() {
        println!("Task is already completed.");
        return Ok(());
    }

    for event in &outcome.events {
        match event {
            CompletionEvent::XpAwarded { amount } => {
                println!("+{amount} XP");
            }
            CompletionEvent::StreakExtended { count } => {
                let unit = if *count == 1 { "day" } else { "days" };
                println!("\u{1F525} Streak: {count} {unit}");
            }
            CompletionEvent::LevelUp(up) => {
                println!(
                    "\u{2B50} Level up! {} \u{2192} {}",
                    up.old_level, up.new_level
                );
            }
            CompletionEvent::AchievementUnlocked(a) => {
                println!("{} Achievement unlocked: {} - {}", a.icon, a.name, a.description);
            }
        }
    }

    if config.settings.encouragement {
        if let Some(message) = outcome.encouragement {
            println!("\n{message}");
        }
    }

    let progress = LevelProgress::new(outcome.stats.xp);
    println!(
        "\nLevel {} | {} XP ({} to next level)",
        progress.level,
        progress.xp,
        progress.xp_to_next()
    );

    Ok(())
}
