//! Achievement checking logic
//!
//! Pure functions that decide which achievements unlock given the
//! current stats. Callers pass the already-unlocked IDs so an
//! achievement can never fire twice.

use chrono::{Local, NaiveDate};

use crate::domain::{Task, UserStats};

use super::definitions::AchievementId;

/// Check milestone achievements based on lifetime completion count
pub fn check_milestone_achievements(
    tasks_completed: u64,
    unlocked: &[String],
) -> Vec<AchievementId> {
    let mut newly_unlocked = Vec::new();

    let milestones = [
        (1, AchievementId::FirstTask),
        (100, AchievementId::CenturyClub),
    ];

    for (threshold, id) in milestones {
        if tasks_completed >= threshold && !unlocked.contains(&id.as_str().to_string()) {
            newly_unlocked.push(id);
        }
    }

    newly_unlocked
}

/// Check the daily volume achievement.
///
/// Counts completed tasks that were created on `today`, so the
/// achievement keys off the day's workload rather than the completion
/// timestamp.
pub fn check_daily_volume_achievements(
    tasks: &[Task],
    today: NaiveDate,
    unlocked: &[String],
) -> Vec<AchievementId> {
    let mut newly_unlocked = Vec::new();

    let completed_today = tasks
        .iter()
        .filter(|t| t.completed && t.created_at.with_timezone(&Local).date_naive() == today)
        .count();

    if completed_today >= 10
        && !unlocked.contains(&AchievementId::TaskSlayer.as_str().to_string())
    {
        newly_unlocked.push(AchievementId::TaskSlayer);
    }

    newly_unlocked
}

/// Check voice dictation achievements
pub fn check_voice_achievements(
    voice_tasks_created: u64,
    unlocked: &[String],
) -> Vec<AchievementId> {
    let mut newly_unlocked = Vec::new();

    if voice_tasks_created >= 10
        && !unlocked.contains(&AchievementId::VoiceMaster.as_str().to_string())
    {
        newly_unlocked.push(AchievementId::VoiceMaster);
    }

    newly_unlocked
}

/// Check streak-based achievements
pub fn check_streak_achievements(streak: u32, unlocked: &[String]) -> Vec<AchievementId> {
    let mut newly_unlocked = Vec::new();

    if streak >= 7 && !unlocked.contains(&AchievementId::StreakWarrior.as_str().to_string()) {
        newly_unlocked.push(AchievementId::StreakWarrior);
    }

    newly_unlocked
}

/// Check level-based achievements
pub fn check_level_achievements(level: u32, unlocked: &[String]) -> Vec<AchievementId> {
    let mut newly_unlocked = Vec::new();

    let milestones = [
        (5, AchievementId::Level5),
        (10, AchievementId::Level10),
    ];

    for (threshold, id) in milestones {
        if level >= threshold && !unlocked.contains(&id.as_str().to_string()) {
            newly_unlocked.push(id);
        }
    }

    newly_unlocked
}

/// Run every check against the given stats and task list.
///
/// `stats` must already reflect the event being evaluated (XP awarded,
/// streak updated, counters bumped) and `tasks` must include the
/// just-completed task as completed.
pub fn evaluate(stats: &UserStats, tasks: &[Task], today: NaiveDate) -> Vec<AchievementId> {
    let unlocked = &stats.achievements;
    let mut newly_unlocked = Vec::new();

    newly_unlocked.extend(check_milestone_achievements(stats.tasks_completed, unlocked));
    newly_unlocked.extend(check_daily_volume_achievements(tasks, today, unlocked));
    newly_unlocked.extend(check_voice_achievements(stats.voice_tasks_created, unlocked));
    newly_unlocked.extend(check_streak_achievements(stats.streak, unlocked));
    newly_unlocked.extend(check_level_achievements(stats.level(), unlocked));

    newly_unlocked
}
