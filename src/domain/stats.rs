use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::engine::levels::level_for_xp;

/// Accumulated user statistics
///
/// The level is deliberately NOT a field: it is always derived from XP
/// via [`level_for_xp`], so the two can never drift apart.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserStats {
    /// Total accumulated XP (never decreases)
    pub xp: u64,

    /// Current daily streak length in days
    pub streak: u32,

    /// Calendar day of the most recent completion
    pub last_completion_day: Option<NaiveDate>,

    /// Unlocked achievement IDs (grow-only)
    pub achievements: Vec<String>,

    /// Total tasks completed
    pub tasks_completed: u64,

    /// Total tasks created via voice dictation
    pub voice_tasks_created: u64,
}

impl UserStats {
    /// Current level, derived from XP
    pub fn level(&self) -> u32 {
        level_for_xp(self.xp)
    }

    /// Whether the given achievement has already been unlocked
    pub fn has_achievement(&self, id: &str) -> bool {
        self.achievements.iter().any(|a| a == id)
    }
}
