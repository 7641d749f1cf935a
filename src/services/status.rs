//! Service status calculation
//!
//! Pure mapping from a next-due date and "now" to a status label and a whole
//! day count. Nothing here reads the clock.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::models::ServiceStatus;

/// A service due within this many days (inclusive) is `DUE`
pub const DUE_SOON_DAYS: i64 = 7;

/// Status of a service relative to a point in time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DueStatus {
    pub status: ServiceStatus,
    /// Whole days until the due date, negative once overdue
    pub days_until_due: i64,
}

/// Whole days from `now` until `due`, rounded toward negative infinity
///
/// Due 3 hours ago is -1, due in 3 hours is 0.
pub fn days_until(due: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    let delta = due - now;
    let days = delta.num_days();
    // num_days truncates toward zero
    if delta < Duration::days(days) {
        days - 1
    } else {
        days
    }
}

/// Classify a due date against `now`
pub fn calculate_status(due: DateTime<Utc>, now: DateTime<Utc>) -> DueStatus {
    let days_until_due = days_until(due, now);

    let status = if days_until_due < 0 {
        ServiceStatus::Overdue
    } else if days_until_due <= DUE_SOON_DAYS {
        ServiceStatus::Due
    } else {
        ServiceStatus::Upcoming
    };

    DueStatus {
        status,
        days_until_due,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 15, 10, 30, 0).unwrap()
    }

    #[test]
    fn test_due_exactly_now() {
        let status = calculate_status(now(), now());
        assert_eq!(status.status, ServiceStatus::Due);
        assert_eq!(status.days_until_due, 0);
    }

    #[test]
    fn test_three_days_ahead_is_due() {
        let status = calculate_status(now() + Duration::days(3), now());
        assert_eq!(status.status, ServiceStatus::Due);
        assert_eq!(status.days_until_due, 3);
    }

    #[test]
    fn test_one_day_behind_is_overdue() {
        let status = calculate_status(now() - Duration::days(1), now());
        assert_eq!(status.status, ServiceStatus::Overdue);
        assert_eq!(status.days_until_due, -1);
    }

    #[test]
    fn test_window_edges() {
        let seven = calculate_status(now() + Duration::days(7), now());
        assert_eq!(seven.status, ServiceStatus::Due);

        // 7 days and 23 hours still counts as 7 whole days
        let almost_eight = calculate_status(now() + Duration::hours(7 * 24 + 23), now());
        assert_eq!(almost_eight.days_until_due, 7);
        assert_eq!(almost_eight.status, ServiceStatus::Due);

        let eight = calculate_status(now() + Duration::days(8), now());
        assert_eq!(eight.status, ServiceStatus::Upcoming);
        assert_eq!(eight.days_until_due, 8);
    }

    #[test]
    fn test_far_future_is_upcoming() {
        for days in [8, 30, 365, 3650] {
            let status = calculate_status(now() + Duration::days(days), now());
            assert_eq!(status.status, ServiceStatus::Upcoming);
            assert_eq!(status.days_until_due, days);
        }
    }

    #[test]
    fn test_any_past_instant_is_overdue() {
        for delta in [
            Duration::microseconds(1),
            Duration::seconds(1),
            Duration::hours(3),
            Duration::hours(23),
            Duration::days(1),
            Duration::days(400),
        ] {
            let status = calculate_status(now() - delta, now());
            assert_eq!(status.status, ServiceStatus::Overdue);
            assert!(status.days_until_due < 0);
        }
    }

    #[test]
    fn test_partial_days_floor() {
        assert_eq!(days_until(now() + Duration::hours(3), now()), 0);
        assert_eq!(days_until(now() - Duration::hours(3), now()), -1);
        assert_eq!(days_until(now() - Duration::hours(25), now()), -2);
        assert_eq!(days_until(now() - Duration::days(2), now()), -2);
        assert_eq!(days_until(now() + Duration::hours(47), now()), 1);
    }

    #[test]
    fn test_serializes_with_uppercase_label() {
        let status = calculate_status(now() + Duration::days(10), now());
        let json = serde_json::to_value(status).unwrap();
        assert_eq!(json["status"], "UPCOMING");
        assert_eq!(json["days_until_due"], 10);
    }
}
