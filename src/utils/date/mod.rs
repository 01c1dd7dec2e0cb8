// Date utility functions
// Naive local-time helpers shared by the grid builders, indexer and navigation
//
// Arithmetic saturates at the ends of chrono's date range so grid building and
// navigation stay total for any reference date.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};

/// Midnight at the start of `date`.
pub fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// Exclusive end of `date`: midnight of the following day.
///
/// Saturates to `NaiveDateTime::MAX` on the last representable day.
pub fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    add_saturating(start_of_day(date), Duration::days(1))
}

/// Start of the hour slot `hour` on `date`. Hours past 23 roll into the next day.
pub fn start_of_hour(date: NaiveDate, hour: u32) -> NaiveDateTime {
    add_saturating(start_of_day(date), Duration::hours(hour as i64))
}

/// `instant + delta`, clamped to chrono's representable range.
pub fn add_saturating(instant: NaiveDateTime, delta: Duration) -> NaiveDateTime {
    instant.checked_add_signed(delta).unwrap_or(if delta < Duration::zero() {
        NaiveDateTime::MIN
    } else {
        NaiveDateTime::MAX
    })
}

/// `date` moved by `days`, clamped to chrono's representable range.
pub fn add_days_saturating(date: NaiveDate, days: i64) -> NaiveDate {
    date.checked_add_signed(Duration::days(days))
        .unwrap_or(if days < 0 { NaiveDate::MIN } else { NaiveDate::MAX })
}

/// Start of a run of `len` consecutive days beginning at `start`, pulled back
/// so the whole run fits before `NaiveDate::MAX`.
pub fn fit_day_run(start: NaiveDate, len: usize) -> NaiveDate {
    let span = len.saturating_sub(1) as i64;
    match start.checked_add_signed(Duration::days(span)) {
        Some(_) => start,
        None => add_days_saturating(NaiveDate::MAX, -span),
    }
}

/// Half-open interval overlap test: `[a_start, a_end)` intersects `[b_start, b_end)`.
pub fn ranges_overlap(
    a_start: NaiveDateTime,
    a_end: NaiveDateTime,
    b_start: NaiveDateTime,
    b_end: NaiveDateTime,
) -> bool {
    a_start < b_end && a_end > b_start
}

/// Calculate the start of the week containing the given date.
///
/// # Arguments
/// * `date` - The date to find the week start for
/// * `first_day_of_week` - 0 = Sunday, 1 = Monday, etc.
///
/// Weeks cut off by `NaiveDate::MIN` start on `NaiveDate::MIN`.
pub fn get_week_start(date: NaiveDate, first_day_of_week: u8) -> NaiveDate {
    let weekday = date.weekday().num_days_from_sunday() as i64;
    let offset = (weekday - (first_day_of_week % 7) as i64 + 7) % 7;
    add_days_saturating(date, -offset)
}

pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Move `current` by `delta_months`, clamping the day to the target month's length.
pub fn shift_month_preserving_day(current: NaiveDate, delta_months: i32) -> NaiveDate {
    shift_month_to_day(current, delta_months, current.day())
}

/// Move `current` by `delta_months` and land on `desired_day`, clamped to the
/// target month's length. Returns `current` when the target month is out of range.
pub fn shift_month_to_day(current: NaiveDate, delta_months: i32, desired_day: u32) -> NaiveDate {
    let total_months = (current.year() as i64 * 12) + (current.month() as i64 - 1) + delta_months as i64;
    let Ok(new_year) = i32::try_from(total_months.div_euclid(12)) else {
        return current;
    };
    let new_month = total_months.rem_euclid(12) as u32 + 1;
    clamp_day(new_year, new_month, desired_day).unwrap_or(current)
}

fn clamp_day(year: i32, month: u32, desired_day: u32) -> Option<NaiveDate> {
    let max_day = last_day_of_month(year, month)?;
    NaiveDate::from_ymd_opt(year, month, desired_day.clamp(1, max_day))
}

pub fn last_day_of_month(year: i32, month: u32) -> Option<u32> {
    if month == 12 {
        return NaiveDate::from_ymd_opt(year, 12, 31).map(|_| 31);
    }
    let first_of_next = NaiveDate::from_ymd_opt(year, month + 1, 1)?;
    Some(first_of_next.pred_opt()?.day())
}

/// Parse an `"HH:MM"` string into a time of day.
pub fn parse_hour_minute(value: &str) -> Option<NaiveTime> {
    let (h, m) = value.trim().split_once(':')?;
    let hour = h.parse::<u32>().ok()?;
    let minute = m.parse::<u32>().ok()?;
    NaiveTime::from_hms_opt(hour, minute, 0)
}

/// Accepted text formats for date/time form fields, most specific first.
const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Parse a form date/time value such as `2025-10-29T09:00`.
pub fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
}

/// Format an instant the way form fields hold it.
pub fn format_datetime(value: NaiveDateTime) -> String {
    value.format("%Y-%m-%dT%H:%M").to_string()
}
