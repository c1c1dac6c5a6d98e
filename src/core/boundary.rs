//! Payroll closing-boundary arithmetic, anchored to JST (UTC+9).
//! Periods run from the 21st 00:00 JST of one month to the 20th 23:59:59 JST
//! of the next, regardless of the host timezone.

use crate::models::AttendancePeriod;
use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, TimeZone, Utc};

const JST_SECS: i32 = 9 * 3600;

/// JST has no daylight saving, so a fixed offset is enough.
pub fn jst() -> FixedOffset {
    FixedOffset::east_opt(JST_SECS).unwrap()
}

fn jst_midnight_on_21st(year: i32, month: u32) -> DateTime<Utc> {
    let day21 = NaiveDate::from_ymd_opt(year, month, 21)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    jst().from_local_datetime(&day21).unwrap().with_timezone(&Utc)
}

fn next_month(year: i32, month: u32) -> (i32, u32) {
    if month == 12 { (year + 1, 1) } else { (year, month + 1) }
}

fn prev_month(year: i32, month: u32) -> (i32, u32) {
    if month == 1 { (year - 1, 12) } else { (year, month - 1) }
}

/// The first closing-boundary instant (21st 00:00 JST) strictly after the
/// closing period containing `start`: day ≤ 20 in JST means the 21st of the
/// same month, otherwise the 21st of the next month.
pub fn next_closing_boundary(start: DateTime<Utc>) -> DateTime<Utc> {
    let local = start.with_timezone(&jst());
    if local.day() <= 20 {
        jst_midnight_on_21st(local.year(), local.month())
    } else {
        let (y, m) = next_month(local.year(), local.month());
        jst_midnight_on_21st(y, m)
    }
}

/// The closing period containing `now`.
pub fn current_closing_period(now: DateTime<Utc>) -> AttendancePeriod {
    let local = now.with_timezone(&jst());
    let (start_y, start_m) = if local.day() >= 21 {
        (local.year(), local.month())
    } else {
        prev_month(local.year(), local.month())
    };
    closing_period_of(start_y, start_m)
}

/// The closing period starting on the 21st of `(year, month)` JST.
pub fn closing_period_of(year: i32, month: u32) -> AttendancePeriod {
    let (end_y, end_m) = next_month(year, month);
    let start_at = jst_midnight_on_21st(year, month);
    // 20th 23:59:59 JST == 21st 00:00 JST minus one second
    let end_at = jst_midnight_on_21st(end_y, end_m) - chrono::Duration::seconds(1);
    AttendancePeriod {
        start_at,
        end_at,
        label: format!("{:04}-{:02}", end_y, end_m),
    }
}

/// True on the 20th JST: staff should be warned that midnight will
/// force-split any session still open.
pub fn is_closing_warning_day(now: DateTime<Utc>) -> bool {
    now.with_timezone(&jst()).day() == 20
}
