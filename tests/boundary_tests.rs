//! Closing-boundary and period arithmetic, including the year rollover.

use chrono::{DateTime, Utc};
use kintai::core::boundary::{
    closing_period_of, current_closing_period, is_closing_warning_day, next_closing_boundary,
};

fn ts(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s)
        .expect("test timestamp")
        .with_timezone(&Utc)
}

#[test]
fn test_boundary_same_month_when_day_at_most_20() {
    assert_eq!(
        next_closing_boundary(ts("2026-03-05T10:00:00+09:00")),
        ts("2026-03-21T00:00:00+09:00")
    );
    assert_eq!(
        next_closing_boundary(ts("2026-03-20T23:59:59+09:00")),
        ts("2026-03-21T00:00:00+09:00")
    );
}

#[test]
fn test_boundary_next_month_when_day_past_20() {
    assert_eq!(
        next_closing_boundary(ts("2026-03-21T00:00:00+09:00")),
        ts("2026-04-21T00:00:00+09:00")
    );
}

#[test]
fn test_boundary_rolls_over_the_year() {
    assert_eq!(
        next_closing_boundary(ts("2025-12-22T09:00:00+09:00")),
        ts("2026-01-21T00:00:00+09:00")
    );
}

#[test]
fn test_boundary_is_computed_in_jst_not_utc() {
    // 2026-03-20 20:00 UTC is already the 21st 05:00 in JST
    assert_eq!(
        next_closing_boundary(ts("2026-03-20T20:00:00Z")),
        ts("2026-04-21T00:00:00+09:00")
    );
}

#[test]
fn test_current_period_before_and_after_the_21st() {
    let early = current_closing_period(ts("2026-01-10T12:00:00+09:00"));
    assert_eq!(early.start_at, ts("2025-12-21T00:00:00+09:00"));
    assert_eq!(early.end_at, ts("2026-01-20T23:59:59+09:00"));
    assert_eq!(early.label, "2026-01");

    let late = current_closing_period(ts("2026-01-25T12:00:00+09:00"));
    assert_eq!(late.start_at, ts("2026-01-21T00:00:00+09:00"));
    assert_eq!(late.end_at, ts("2026-02-20T23:59:59+09:00"));
    assert_eq!(late.label, "2026-02");
}

#[test]
fn test_closing_period_of_december() {
    let p = closing_period_of(2025, 12);
    assert_eq!(p.start_at, ts("2025-12-21T00:00:00+09:00"));
    assert_eq!(p.end_at, ts("2026-01-20T23:59:59+09:00"));
    assert_eq!(p.label, "2026-01");
}

#[test]
fn test_warning_day_uses_jst_calendar() {
    assert!(is_closing_warning_day(ts("2026-01-20T08:00:00+09:00")));
    // Still the 19th in UTC, already the 20th in JST
    assert!(is_closing_warning_day(ts("2026-01-19T23:00:00Z")));
    assert!(!is_closing_warning_day(ts("2026-01-21T00:00:00+09:00")));
}
