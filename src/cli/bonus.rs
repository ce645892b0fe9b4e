//! Bonus command implementation

use anyhow::Result;

use questline::config::Config;
use questline::engine::random::OsRandom;
use questline::engine::streaks::today;
use questline::tracker::Tracker;

/// Show or generate today's bonus task
pub fn bonus_command(tracker: &Tracker, config: &Config) -> Result<()> {
    if !config.settings.daily_bonus {
        println!("Daily bonus tasks are disabled. Enable with: questline config --daily-bonus true");
        return Ok(());
    }

    let mut rng = OsRandom;
    match tracker.daily_bonus(&mut rng, today())? {
        Some(bonus) => {
            if bonus.fresh {
                println!("Today's bonus task:\n");
            } else {
                println!("Today's bonus task (already rolled):\n");
            }
            println!("  {} ({} XP)", bonus.task.title, bonus.task.xp_reward);
            if !bonus.task.description.is_empty() {
                println!("  {}", bonus.task.description);
            }
            if bonus.task.completed {
                println!("  Completed!");
            }
            println!("  id: {}", bonus.task.id);
        }
        None => {
            println!("Today's bonus task was deleted. A new one arrives tomorrow.");
        }
    }

    Ok(())
}
