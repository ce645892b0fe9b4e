//! Daily streak tracking
//!
//! A streak counts consecutive calendar days with at least one task
//! completion. Completing several tasks on the same day counts once.

use chrono::{Local, NaiveDate};

/// Compute the streak value after a completion on `today`.
///
/// A completion yesterday extends the streak, a completion earlier
/// today leaves it unchanged, anything older resets it to 1.
pub fn next_streak(previous: u32, last_completion: Option<NaiveDate>, today: NaiveDate) -> u32 {
    let Some(last) = last_completion else {
        return 1;
    };

    match (today - last).num_days() {
        0 => previous,
        1 => previous + 1,
        _ => 1,
    }
}

/// Whether a streak is still alive (last completion today or yesterday)
pub fn is_active(last_completion: Option<NaiveDate>, today: NaiveDate) -> bool {
    let Some(last) = last_completion else {
        return false;
    };
    (0..=1).contains(&(today - last).num_days())
}

/// Today's date in the local timezone
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_first_completion_starts_streak() {
        assert_eq!(next_streak(0, None, day("2025-06-10")), 1);
    }

    #[test]
    fn test_consecutive_day_extends() {
        assert_eq!(next_streak(4, Some(day("2025-06-09")), day("2025-06-10")), 5);
    }

    #[test]
    fn test_same_day_keeps_streak() {
        assert_eq!(next_streak(4, Some(day("2025-06-10")), day("2025-06-10")), 4);
    }

    #[test]
    fn test_gap_resets_to_one() {
        assert_eq!(next_streak(9, Some(day("2025-06-07")), day("2025-06-10")), 1);
    }

    #[test]
    fn test_month_boundary_extends() {
        assert_eq!(next_streak(2, Some(day("2025-06-30")), day("2025-07-01")), 3);
    }

    #[test]
    fn test_is_active() {
        let today = day("2025-06-10");
        assert!(!is_active(None, today));
        assert!(is_active(Some(day("2025-06-10")), today));
        assert!(is_active(Some(day("2025-06-09")), today));
        assert!(!is_active(Some(day("2025-06-08")), today));
    }
}
