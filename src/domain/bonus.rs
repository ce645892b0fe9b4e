//! Daily bonus task generation
//!
//! One system-generated bonus task per calendar day, drawn from a
//! fixed pool of templates. The tracker persists the last generation
//! day so a restart does not re-roll.

use chrono::Utc;
use uuid::Uuid;

use crate::engine::random::RandomSource;

use super::task::{Category, Priority, Task};

/// Template for a system-generated bonus task
#[derive(Debug, Clone)]
pub struct BonusTemplate {
    pub title: &'static str,
    pub description: &'static str,
    pub xp: u32,
}

/// The fixed pool of daily bonus tasks
pub static BONUS_TASKS: &[BonusTemplate] = &[
    BonusTemplate {
        title: "Take a 10-minute walk",
        description: "Get some fresh air and movement",
        xp: 25,
    },
    BonusTemplate {
        title: "Drink 8 glasses of water",
        description: "Stay hydrated throughout the day",
        xp: 20,
    },
    BonusTemplate {
        title: "Meditate for 5 minutes",
        description: "Practice mindfulness",
        xp: 30,
    },
    BonusTemplate {
        title: "Call a friend or family member",
        description: "Connect with someone you care about",
        xp: 35,
    },
    BonusTemplate {
        title: "Organize your workspace",
        description: "Clean and tidy your work area",
        xp: 25,
    },
];

/// Generate today's bonus task from a uniformly chosen template
pub fn daily_bonus_task(rng: &mut dyn RandomSource) -> Task {
    let template = &BONUS_TASKS[rng.next_below(BONUS_TASKS.len())];
    Task {
        id: format!("bonus-{}", Uuid::new_v4()),
        title: format!("\u{1F3AF} {}", template.title),
        description: template.description.to_string(),
        category: Category::Bonus,
        priority: Priority::Normal,
        completed: false,
        created_at: Utc::now(),
        due_date: None,
        xp_reward: template.xp,
        via_voice: false,
    }
}
