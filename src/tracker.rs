//! Tracker workflows - core gamification logic
//!
//! Ties the pure engine functions to the store: creating tasks,
//! completing them, and generating the daily bonus task.

use anyhow::Result;
use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::domain::{daily_bonus_task, Task, UserStats};
use crate::engine::achievements::{evaluate, Achievement};
use crate::engine::encouragement::pick_encouragement;
use crate::engine::random::RandomSource;
use crate::engine::streaks::next_streak;
use crate::store::TrackerStore;

/// Errors from tracker workflows
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("no task with id {0}")]
    UnknownTask(String),
}

/// A level up that happened during a completion
#[derive(Debug, Clone)]
pub struct LevelUp {
    pub old_level: u32,
    pub new_level: u32,
}

/// Events produced by completing a task
#[derive(Debug, Clone)]
pub enum CompletionEvent {
    XpAwarded { amount: u32 },
    StreakExtended { count: u32 },
    LevelUp(LevelUp),
    AchievementUnlocked(&'static Achievement),
}

/// Everything that happened for one completion
#[derive(Debug, Clone)]
pub struct CompletionOutcome {
    pub events: Vec<CompletionEvent>,
    pub encouragement: Option<&'static str>,
    /// Stats after the completion was applied
    pub stats: UserStats,
}

/// Today's bonus task
#[derive(Debug, Clone)]
pub struct BonusTask {
    pub task: Task,
    /// False when the task had already been generated earlier today
    pub fresh: bool,
}

/// Snapshot rendered by the stats view
#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub stats: UserStats,
    pub completed_today: u64,
}

/// Main entry point for task operations
pub struct Tracker {
    store: TrackerStore,
}

impl Tracker {
    pub fn new(store: TrackerStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &TrackerStore {
        &self.store
    }

    /// Record a new task. Voice-created tasks also bump the lifetime
    /// dictation counter.
    pub fn add_task(&self, task: &Task) -> Result<()> {
        let recorder = self.store.recorder();
        recorder.insert_task(task)?;
        if task.via_voice {
            recorder.record_voice_creation()?;
        }
        info!(id = %task.id, category = %task.category, "task created");
        Ok(())
    }

    /// Create and record a task from a dictated transcript
    pub fn add_voice_task(&self, transcript: &str) -> Result<Task> {
        let task = Task::from_transcript(transcript);
        self.add_task(&task)?;
        Ok(task)
    }

    /// Delete a task by ID
    pub fn delete_task(&self, id: &str) -> Result<()> {
        if !self.store.recorder().delete_task(id)? {
            return Err(TrackerError::UnknownTask(id.to_string()).into());
        }
        info!(id, "task deleted");
        Ok(())
    }

    /// Complete a task and apply every gamification effect.
    ///
    /// Awards XP, updates the streak, unlocks achievements and commits
    /// it all in one transaction. Completing an already-completed task
    /// is a no-op that returns no events.
    pub fn complete_task(
        &self,
        id: &str,
        rng: &mut dyn RandomSource,
        today: NaiveDate,
    ) -> Result<CompletionOutcome> {
        let query = self.store.query();
        let task = query
            .get_task(id)?
            .ok_or_else(|| TrackerError::UnknownTask(id.to_string()))?;

        let mut stats = query.load_stats()?;
        if task.completed {
            debug!(id, "task already completed, ignoring");
            return Ok(CompletionOutcome {
                events: Vec::new(),
                encouragement: None,
                stats,
            });
        }

        let old_level = stats.level();
        let first_completion_today = stats.last_completion_day != Some(today);

        stats.xp += u64::from(task.xp_reward);
        stats.streak = next_streak(stats.streak, stats.last_completion_day, today);
        stats.last_completion_day = Some(today);
        stats.tasks_completed += 1;

        // Evaluate against the task list as it will look after the
        // commit, so daily-volume checks see this completion.
        let mut tasks = query.all_tasks()?;
        if let Some(t) = tasks.iter_mut().find(|t| t.id == task.id) {
            t.completed = true;
        }
        let newly_unlocked = evaluate(&stats, &tasks, today);

        self.store
            .recorder()
            .commit_completion(&task.id, &stats, &newly_unlocked)?;

        let mut events = vec![CompletionEvent::XpAwarded {
            amount: task.xp_reward,
        }];
        if first_completion_today {
            events.push(CompletionEvent::StreakExtended {
                count: stats.streak,
            });
        }
        let new_level = stats.level();
        if new_level > old_level {
            events.push(CompletionEvent::LevelUp(LevelUp {
                old_level,
                new_level,
            }));
        }
        for unlocked in &newly_unlocked {
            stats.achievements.push(unlocked.as_str().to_string());
            events.push(CompletionEvent::AchievementUnlocked(Achievement::get(
                *unlocked,
            )));
        }

        info!(
            id,
            xp = task.xp_reward,
            streak = stats.streak,
            unlocked = newly_unlocked.len(),
            "task completed"
        );

        Ok(CompletionOutcome {
            events,
            encouragement: Some(pick_encouragement(rng)),
            stats,
        })
    }

    /// Stats snapshot plus today's completion count for the stats view
    pub fn dashboard(&self, today: NaiveDate) -> Result<Dashboard> {
        let query = self.store.query();
        Ok(Dashboard {
            stats: query.load_stats()?,
            completed_today: query.completed_on_day(&today.to_string())?,
        })
    }

    /// Get today's bonus task, generating it on first call of the day.
    ///
    /// Returns None only if today's bonus was generated and then
    /// deleted.
    pub fn daily_bonus(
        &self,
        rng: &mut dyn RandomSource,
        today: NaiveDate,
    ) -> Result<Option<BonusTask>> {
        let query = self.store.query();

        if query.last_bonus_day()? == Some(today) {
            let existing = query.bonus_task_for_day(&today.to_string())?;
            return Ok(existing.map(|task| BonusTask { task, fresh: false }));
        }

        let task = daily_bonus_task(rng);
        let recorder = self.store.recorder();
        recorder.insert_task(&task)?;
        recorder.set_last_bonus_day(&today.to_string())?;
        info!(id = %task.id, "daily bonus generated");

        Ok(Some(BonusTask { task, fresh: true }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Category, Priority};
    use crate::engine::random::SequenceRandom;
    use crate::engine::streaks::today;
    use tempfile::tempdir;

    fn tracker(dir: &tempfile::TempDir) -> Tracker {
        let store = TrackerStore::with_path(&dir.path().join("t.db")).unwrap();
        Tracker::new(store)
    }

    #[test]
    fn test_completion_awards_xp_and_first_task() {
        let dir = tempdir().unwrap();
        let tracker = tracker(&dir);
        let mut rng = SequenceRandom::new(&[0]);

        let task = Task::new("a", "", Category::Work, Priority::Important, None);
        tracker.add_task(&task).unwrap();

        let outcome = tracker.complete_task(&task.id, &mut rng, today()).unwrap();

        assert_eq!(outcome.stats.xp, 20);
        assert_eq!(outcome.stats.streak, 1);
        assert_eq!(outcome.stats.tasks_completed, 1);
        assert!(outcome.encouragement.is_some());
        assert!(matches!(
            outcome.events[0],
            CompletionEvent::XpAwarded { amount: 20 }
        ));
        assert!(outcome.events.iter().any(|e| matches!(
            e,
            CompletionEvent::AchievementUnlocked(a) if a.id.as_str() == "first_task"
        )));

        let stored = tracker.store().query().get_task(&task.id).unwrap().unwrap();
        assert!(stored.completed);
    }

    #[test]
    fn test_double_completion_is_noop() {
        let dir = tempdir().unwrap();
        let tracker = tracker(&dir);
        let mut rng = SequenceRandom::new(&[0]);

        let task = Task::new("a", "", Category::Work, Priority::Normal, None);
        tracker.add_task(&task).unwrap();

        tracker.complete_task(&task.id, &mut rng, today()).unwrap();
        let second = tracker.complete_task(&task.id, &mut rng, today()).unwrap();

        assert!(second.events.is_empty());
        assert!(second.encouragement.is_none());
        assert_eq!(second.stats.xp, 15);
        assert_eq!(second.stats.tasks_completed, 1);
    }

    #[test]
    fn test_unknown_task_errors() {
        let dir = tempdir().unwrap();
        let tracker = tracker(&dir);
        let mut rng = SequenceRandom::new(&[0]);

        let err = tracker
            .complete_task("task-missing", &mut rng, today())
            .unwrap_err();
        assert!(err.to_string().contains("task-missing"));

        assert!(tracker.delete_task("task-missing").is_err());
    }

    #[test]
    fn test_level_up_event() {
        let dir = tempdir().unwrap();
        let tracker = tracker(&dir);
        let mut rng = SequenceRandom::new(&[0]);

        // Four urgent completions reach 120 XP, crossing the 100 XP
        // boundary into level 2 on the fourth.
        let mut last = None;
        for _ in 0..4 {
            let task = Task::new("a", "", Category::Work, Priority::Urgent, None);
            tracker.add_task(&task).unwrap();
            last = Some(tracker.complete_task(&task.id, &mut rng, today()).unwrap());
        }

        let outcome = last.unwrap();
        assert_eq!(outcome.stats.xp, 120);
        assert_eq!(outcome.stats.level(), 2);
        assert!(outcome.events.iter().any(|e| matches!(
            e,
            CompletionEvent::LevelUp(LevelUp { old_level: 1, new_level: 2 })
        )));
    }

    #[test]
    fn test_same_day_streak_event_only_once() {
        let dir = tempdir().unwrap();
        let tracker = tracker(&dir);
        let mut rng = SequenceRandom::new(&[0]);

        let first = Task::new("a", "", Category::Work, Priority::Normal, None);
        let second = Task::new("b", "", Category::Work, Priority::Normal, None);
        tracker.add_task(&first).unwrap();
        tracker.add_task(&second).unwrap();

        let one = tracker.complete_task(&first.id, &mut rng, today()).unwrap();
        assert!(one
            .events
            .iter()
            .any(|e| matches!(e, CompletionEvent::StreakExtended { count: 1 })));

        let two = tracker.complete_task(&second.id, &mut rng, today()).unwrap();
        assert!(!two
            .events
            .iter()
            .any(|e| matches!(e, CompletionEvent::StreakExtended { .. })));
        assert_eq!(two.stats.streak, 1);
    }

    #[test]
    fn test_voice_master_unlocks() {
        let dir = tempdir().unwrap();
        let tracker = tracker(&dir);
        let mut rng = SequenceRandom::new(&[0]);

        for _ in 0..10 {
            tracker.add_voice_task("dictated note").unwrap();
        }

        let stats = tracker.store().query().load_stats().unwrap();
        assert_eq!(stats.voice_tasks_created, 10);

        let task = Task::new("a", "", Category::Work, Priority::Normal, None);
        tracker.add_task(&task).unwrap();
        let outcome = tracker.complete_task(&task.id, &mut rng, today()).unwrap();

        assert!(outcome.events.iter().any(|e| matches!(
            e,
            CompletionEvent::AchievementUnlocked(a) if a.id.as_str() == "voice_master"
        )));
    }

    #[test]
    fn test_dashboard_counts_todays_completions() {
        let dir = tempdir().unwrap();
        let tracker = tracker(&dir);
        let mut rng = SequenceRandom::new(&[0]);

        let done = Task::new("a", "", Category::Work, Priority::Normal, None);
        let open = Task::new("b", "", Category::Work, Priority::Normal, None);
        tracker.add_task(&done).unwrap();
        tracker.add_task(&open).unwrap();
        tracker.complete_task(&done.id, &mut rng, today()).unwrap();

        let dashboard = tracker.dashboard(today()).unwrap();
        assert_eq!(dashboard.completed_today, 1);
        assert_eq!(dashboard.stats.tasks_completed, 1);
    }

    #[test]
    fn test_daily_bonus_generated_once() {
        let dir = tempdir().unwrap();
        let tracker = tracker(&dir);

        let mut rng = SequenceRandom::new(&[2]);
        let first = tracker.daily_bonus(&mut rng, today()).unwrap().unwrap();
        assert!(first.fresh);
        assert_eq!(first.task.category, Category::Bonus);
        assert_eq!(first.task.xp_reward, 30);

        let mut rng = SequenceRandom::new(&[4]);
        let second = tracker.daily_bonus(&mut rng, today()).unwrap().unwrap();
        assert!(!second.fresh);
        assert_eq!(second.task.id, first.task.id);
    }
}
