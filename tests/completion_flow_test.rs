//! Integration tests for the add -> complete -> stats flow

use chrono::NaiveDate;

use questline::domain::{Category, Priority, Task};
use questline::engine::random::SequenceRandom;
use questline::engine::streaks::today;
use questline::tracker::CompletionEvent;

mod common;
use common::create_test_tracker;

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

#[test]
fn test_mixed_priorities_accumulate_xp() {
    let (tracker, _dir) = create_test_tracker();
    let mut rng = SequenceRandom::new(&[0]);

    let normal = Task::new("write notes", "", Category::Work, Priority::Normal, None);
    let important = Task::new("review draft", "", Category::Work, Priority::Important, None);
    let urgent = Task::new("fix outage", "", Category::Work, Priority::Urgent, None);
    for task in [&normal, &important, &urgent] {
        tracker.add_task(task).expect("Failed to add task");
    }

    for task in [&normal, &important, &urgent] {
        tracker
            .complete_task(&task.id, &mut rng, today())
            .expect("Failed to complete task");
    }

    let stats = tracker
        .store()
        .query()
        .load_stats()
        .expect("Failed to load stats");
    assert_eq!(stats.xp, 65);
    assert_eq!(stats.tasks_completed, 3);
    assert_eq!(stats.streak, 1);
    assert!(stats.has_achievement("first_task"));
}

#[test]
fn test_streak_grows_on_consecutive_days() {
    let (tracker, _dir) = create_test_tracker();
    let mut rng = SequenceRandom::new(&[0]);

    let mut last_streak = 0;
    for offset in 0..7 {
        let task = Task::new("daily", "", Category::Health, Priority::Normal, None);
        tracker.add_task(&task).expect("Failed to add task");
        let outcome = tracker
            .complete_task(&task.id, &mut rng, day(2024, 3, 1 + offset))
            .expect("Failed to complete task");
        last_streak = outcome.stats.streak;

        if offset == 6 {
            assert!(outcome.events.iter().any(|e| matches!(
                e,
                CompletionEvent::AchievementUnlocked(a) if a.id.as_str() == "streak_warrior"
            )));
        }
    }

    assert_eq!(last_streak, 7);
}

#[test]
fn test_streak_resets_after_gap() {
    let (tracker, _dir) = create_test_tracker();
    let mut rng = SequenceRandom::new(&[0]);

    for date in [day(2024, 3, 1), day(2024, 3, 2)] {
        let task = Task::new("daily", "", Category::Personal, Priority::Normal, None);
        tracker.add_task(&task).expect("Failed to add task");
        tracker
            .complete_task(&task.id, &mut rng, date)
            .expect("Failed to complete task");
    }

    let task = Task::new("late", "", Category::Personal, Priority::Normal, None);
    tracker.add_task(&task).expect("Failed to add task");
    let outcome = tracker
        .complete_task(&task.id, &mut rng, day(2024, 3, 5))
        .expect("Failed to complete task");

    assert_eq!(outcome.stats.streak, 1);
    assert!(outcome.events.iter().any(|e| matches!(
        e,
        CompletionEvent::StreakExtended { count: 1 }
    )));
}

#[test]
fn test_century_club_and_level_achievements() {
    let (tracker, _dir) = create_test_tracker();
    let mut rng = SequenceRandom::new(&[0]);

    for _ in 0..100 {
        let task = Task::new("grind", "", Category::Work, Priority::Urgent, None);
        tracker.add_task(&task).expect("Failed to add task");
        tracker
            .complete_task(&task.id, &mut rng, today())
            .expect("Failed to complete task");
    }

    let stats = tracker
        .store()
        .query()
        .load_stats()
        .expect("Failed to load stats");
    assert_eq!(stats.tasks_completed, 100);
    assert_eq!(stats.xp, 3000);
    assert_eq!(stats.level(), 6);
    assert!(stats.has_achievement("first_task"));
    assert!(stats.has_achievement("task_slayer"));
    assert!(stats.has_achievement("level_5"));
    assert!(stats.has_achievement("century_club"));
    assert!(!stats.has_achievement("level_10"));
    assert!(!stats.has_achievement("streak_warrior"));
}

#[test]
fn test_delete_removes_task() {
    let (tracker, _dir) = create_test_tracker();

    let task = Task::new("scrap this", "", Category::Work, Priority::Normal, None);
    tracker.add_task(&task).expect("Failed to add task");

    tracker.delete_task(&task.id).expect("Failed to delete task");
    let found = tracker
        .store()
        .query()
        .get_task(&task.id)
        .expect("Failed to query task");
    assert!(found.is_none());

    assert!(tracker.delete_task(&task.id).is_err());
}
