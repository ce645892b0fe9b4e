use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a task
pub type TaskId = String;

/// XP granted for tasks created from a dictated transcript
pub const VOICE_TASK_XP: u32 = 20;

/// Category a task belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Work,
    Personal,
    Health,
    /// System-generated daily bonus tasks
    Bonus,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Work => "work",
            Category::Personal => "personal",
            Category::Health => "health",
            Category::Bonus => "bonus",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "work" => Some(Self::Work),
            "personal" => Some(Self::Personal),
            "health" => Some(Self::Health),
            "bonus" => Some(Self::Bonus),
            _ => None,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Priority of a task
///
/// Drives the XP reward for manually entered tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Normal,
    Important,
    Urgent,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Normal => "normal",
            Priority::Important => "important",
            Priority::Urgent => "urgent",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "normal" => Some(Self::Normal),
            "important" => Some(Self::Important),
            "urgent" => Some(Self::Urgent),
            _ => None,
        }
    }

    /// XP granted when a task of this priority is completed
    pub fn xp_reward(&self) -> u32 {
        match self {
            Priority::Normal => 15,
            Priority::Important => 20,
            Priority::Urgent => 30,
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single tracked task
///
/// Immutable once created except for the completion flag, which
/// transitions false -> true exactly once.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier (prefix encodes the origin: task-/voice-/bonus-)
    pub id: TaskId,

    /// Short title shown in lists
    pub title: String,

    /// Longer free-form description
    pub description: String,

    /// Category the task belongs to
    pub category: Category,

    /// Priority (determines the XP reward for manual entry)
    pub priority: Priority,

    /// Whether the task has been completed
    pub completed: bool,

    /// When the task was created
    pub created_at: DateTime<Utc>,

    /// Optional due date (day granularity)
    pub due_date: Option<NaiveDate>,

    /// XP granted on completion
    pub xp_reward: u32,

    /// Whether the task was created from a dictated transcript
    pub via_voice: bool,
}

impl Task {
    /// Create a manually entered task. The XP reward follows the priority.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        category: Category,
        priority: Priority,
        due_date: Option<NaiveDate>,
    ) -> Self {
        Self {
            id: format!("task-{}", Uuid::new_v4()),
            title: title.into(),
            description: description.into(),
            category,
            priority,
            completed: false,
            created_at: Utc::now(),
            due_date,
            xp_reward: priority.xp_reward(),
            via_voice: false,
        }
    }

    /// Create a task from a dictated transcript.
    ///
    /// The trimmed transcript becomes the title; dictated tasks are
    /// always personal/normal and carry a fixed XP reward.
    pub fn from_transcript(transcript: &str) -> Self {
        Self {
            id: format!("voice-{}", Uuid::new_v4()),
            title: transcript.trim().to_string(),
            description: "Created with voice input".to_string(),
            category: Category::Personal,
            priority: Priority::Normal,
            completed: false,
            created_at: Utc::now(),
            due_date: None,
            xp_reward: VOICE_TASK_XP,
            via_voice: true,
        }
    }
}
