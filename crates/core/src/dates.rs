//! Date formatting helpers.
//!
//! All functions here are pure and total: missing input yields an empty
//! string, never a panic. The relative form takes an injected `now` so
//! callers (and tests) control the clock; [`format_date`] uses
//! `Utc::now()` for the `Relative` style.

use chrono::Utc;

use crate::types::Timestamp;

/// Output style for [`format_date`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateStyle {
    /// `Mar 5, 2026`
    Short,
    /// `Thursday, March 5, 2026 14:30`
    Long,
    /// `2 hours ago` / `in 3 days`
    Relative,
}

/// Format an optional timestamp in the requested style.
///
/// `None` yields an empty string.
pub fn format_date(date: Option<Timestamp>, style: DateStyle) -> String {
    let Some(date) = date else {
        return String::new();
    };
    match style {
        DateStyle::Short => date.format("%b %-d, %Y").to_string(),
        DateStyle::Long => date.format("%A, %B %-d, %Y %H:%M").to_string(),
        DateStyle::Relative => format_relative(date, Utc::now()),
    }
}

/// Format `date` relative to `now`, bucketed into minute / hour / day /
/// week granularity with sign-aware phrasing.
///
/// Sub-minute differences in either direction collapse to `just now`.
/// A 90-minute-old date formats as `1 hour ago`, not `90 minutes ago`.
pub fn format_relative(date: Timestamp, now: Timestamp) -> String {
    let delta = now.signed_duration_since(date);
    let past = delta.num_seconds() >= 0;
    let seconds = delta.num_seconds().abs();

    if seconds < 60 {
        return "just now".to_string();
    }

    let minutes = seconds / 60;
    let (count, unit) = if minutes < 60 {
        (minutes, "minute")
    } else if minutes < 60 * 24 {
        (minutes / 60, "hour")
    } else if minutes < 60 * 24 * 7 {
        (minutes / (60 * 24), "day")
    } else {
        (minutes / (60 * 24 * 7), "week")
    };

    let plural = if count == 1 { "" } else { "s" };
    if past {
        format!("{count} {unit}{plural} ago")
    } else {
        format!("in {count} {unit}{plural}")
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};

    use super::*;

    fn now() -> Timestamp {
        Utc.with_ymd_and_hms(2026, 3, 5, 12, 0, 0).unwrap()
    }

    // -----------------------------------------------------------------------
    // Relative bucketing, past
    // -----------------------------------------------------------------------

    #[test]
    fn under_a_minute_is_just_now() {
        assert_eq!(format_relative(now() - Duration::seconds(30), now()), "just now");
    }

    #[test]
    fn five_minutes_ago() {
        assert_eq!(
            format_relative(now() - Duration::minutes(5), now()),
            "5 minutes ago"
        );
    }

    #[test]
    fn ninety_minutes_buckets_to_one_hour() {
        assert_eq!(
            format_relative(now() - Duration::minutes(90), now()),
            "1 hour ago"
        );
    }

    #[test]
    fn three_days_ago() {
        assert_eq!(format_relative(now() - Duration::days(3), now()), "3 days ago");
    }

    #[test]
    fn two_weeks_ago() {
        assert_eq!(format_relative(now() - Duration::days(15), now()), "2 weeks ago");
    }

    // -----------------------------------------------------------------------
    // Relative bucketing, future (sign-aware phrasing)
    // -----------------------------------------------------------------------

    #[test]
    fn future_dates_use_in_phrasing() {
        assert_eq!(
            format_relative(now() + Duration::hours(2), now()),
            "in 2 hours"
        );
    }

    #[test]
    fn one_day_ahead_is_singular() {
        assert_eq!(
            format_relative(now() + Duration::hours(30), now()),
            "in 1 day"
        );
    }

    // -----------------------------------------------------------------------
    // Absolute styles and missing input
    // -----------------------------------------------------------------------

    #[test]
    fn short_style() {
        assert_eq!(format_date(Some(now()), DateStyle::Short), "Mar 5, 2026");
    }

    #[test]
    fn long_style() {
        assert_eq!(
            format_date(Some(now()), DateStyle::Long),
            "Thursday, March 5, 2026 12:00"
        );
    }

    #[test]
    fn missing_date_yields_empty_string() {
        assert_eq!(format_date(None, DateStyle::Short), "");
        assert_eq!(format_date(None, DateStyle::Relative), "");
    }
}
