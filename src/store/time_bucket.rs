//! Time bucketing utilities
//!
//! Day buckets are "YYYY-MM-DD" strings in the local timezone, so a
//! task created at 23:30 local time counts toward that local day.

use chrono::{DateTime, Local, NaiveDate, Utc};

/// Compute the local day bucket string from a Unix timestamp in milliseconds.
pub fn day_bucket(timestamp_ms: i64) -> String {
    let dt = DateTime::from_timestamp_millis(timestamp_ms).unwrap_or_else(Utc::now);
    dt.with_timezone(&Local).format("%Y-%m-%d").to_string()
}

/// Parse a day bucket string back to a date.
pub fn parse_day_bucket(bucket: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(bucket, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_roundtrip() {
        let now_ms = Utc::now().timestamp_millis();
        let bucket = day_bucket(now_ms);
        assert_eq!(parse_day_bucket(&bucket), Some(Local::now().date_naive()));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(parse_day_bucket("not-a-date"), None);
        assert_eq!(parse_day_bucket("2025-13-40"), None);
    }

    #[test]
    fn test_parse_day_bucket() {
        let date = parse_day_bucket("2025-06-10").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2025, 6, 10).unwrap());
    }
}
