//! Achievement definitions and metadata
//!
//! All achievements are defined here with their unlock conditions.

/// Unique identifier for each achievement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AchievementId {
    // Milestone achievements
    FirstTask,
    CenturyClub,

    // Volume achievements
    TaskSlayer,
    VoiceMaster,

    // Streak achievements
    StreakWarrior,

    // Level achievements
    Level5,
    Level10,
}

impl AchievementId {
    /// Get the string ID for database storage
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FirstTask => "first_task",
            Self::CenturyClub => "century_club",
            Self::TaskSlayer => "task_slayer",
            Self::VoiceMaster => "voice_master",
            Self::StreakWarrior => "streak_warrior",
            Self::Level5 => "level_5",
            Self::Level10 => "level_10",
        }
    }

    /// Parse from database string
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "first_task" => Some(Self::FirstTask),
            "century_club" => Some(Self::CenturyClub),
            "task_slayer" => Some(Self::TaskSlayer),
            "voice_master" => Some(Self::VoiceMaster),
            "streak_warrior" => Some(Self::StreakWarrior),
            "level_5" => Some(Self::Level5),
            "level_10" => Some(Self::Level10),
            _ => None,
        }
    }

    /// Get all achievement IDs
    pub fn all() -> &'static [AchievementId] {
        &[
            Self::FirstTask,
            Self::TaskSlayer,
            Self::VoiceMaster,
            Self::StreakWarrior,
            Self::Level5,
            Self::Level10,
            Self::CenturyClub,
        ]
    }
}

/// Full achievement metadata for display
#[derive(Debug, Clone)]
pub struct Achievement {
    pub id: AchievementId,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    /// Numeric goal shown in progress displays
    pub target: u32,
}

/// All achievement definitions, in display order
pub static ACHIEVEMENTS: &[Achievement] = &[
    Achievement {
        id: AchievementId::FirstTask,
        name: "Getting Started",
        description: "Complete your first task",
        icon: "\u{2B50}",
        target: 1,
    },
    Achievement {
        id: AchievementId::TaskSlayer,
        name: "Task Slayer",
        description: "Complete 10 tasks in one day",
        icon: "\u{26A1}",
        target: 10,
    },
    Achievement {
        id: AchievementId::VoiceMaster,
        name: "Voice Master",
        description: "Create 10 tasks with voice input",
        icon: "\u{1F3A4}",
        target: 10,
    },
    Achievement {
        id: AchievementId::StreakWarrior,
        name: "Streak Warrior",
        description: "Keep a 7-day completion streak",
        icon: "\u{1F525}",
        target: 7,
    },
    Achievement {
        id: AchievementId::Level5,
        name: "Rising Star",
        description: "Reach level 5",
        icon: "\u{1F3C6}",
        target: 5,
    },
    Achievement {
        id: AchievementId::Level10,
        name: "Productivity Master",
        description: "Reach level 10",
        icon: "\u{1F451}",
        target: 10,
    },
    Achievement {
        id: AchievementId::CenturyClub,
        name: "Century Club",
        description: "Complete 100 tasks total",
        icon: "\u{1F4AF}",
        target: 100,
    },
];

impl Achievement {
    /// Look up the definition for an ID
    pub fn get(id: AchievementId) -> &'static Achievement {
        ACHIEVEMENTS
            .iter()
            .find(|a| a.id == id)
            .expect("every id has a definition")
    }

    /// Total number of defined achievements
    pub fn total_count() -> usize {
        ACHIEVEMENTS.len()
    }
}
