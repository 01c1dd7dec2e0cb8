//! Assign events to the grid cells they touch.
//!
//! Occupancy uses half-open intervals: an event occupies day D when
//! `start < end_of_day(D)` and `end > start_of_day(D)`, so an event ending
//! exactly at midnight stays off the next day. Events whose end is not after
//! their start are stretched to the minimum duration first.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate};

use super::types::DayPreview;
use crate::models::event::CalendarEvent;
use crate::utils::date::{add_saturating, end_of_day, start_of_day};

/// Canonical ordering inside a cell: start time, then id.
pub fn compare_events(a: &CalendarEvent, b: &CalendarEvent) -> Ordering {
    a.start.cmp(&b.start).then_with(|| a.id.cmp(&b.id))
}

fn warn_if_malformed(event: &CalendarEvent) {
    if event.end <= event.start {
        log::warn!(
            "Event {} ends at or before its start ({} -> {}); using minimum duration",
            event.id,
            event.start,
            event.end
        );
    }
}

/// Map each of `days` to the events intersecting it, sorted by start then id.
///
/// Every requested day gets an entry, empty or not. Each event is placed by
/// walking only the days it spans, so cost grows with events, not events × days.
pub fn index_by_day<'a>(
    events: &'a [CalendarEvent],
    days: &[NaiveDate],
    min_duration: Duration,
) -> BTreeMap<NaiveDate, Vec<&'a CalendarEvent>> {
    let mut index: BTreeMap<NaiveDate, Vec<&'a CalendarEvent>> =
        days.iter().map(|day| (*day, Vec::new())).collect();

    for event in events {
        warn_if_malformed(event);
        let first_day = event.start.date();
        let last_day = add_saturating(event.effective_end(min_duration), -Duration::nanoseconds(1))
            .date()
            .max(first_day);

        for (_, bucket) in index.range_mut(first_day..=last_day) {
            bucket.push(event);
        }
    }

    for bucket in index.values_mut() {
        bucket.sort_by(|a, b| compare_events(a, b));
    }

    index
}

/// Map each hour 0-23 of `day` to the events overlapping that hour.
pub fn index_by_hour_slot<'a>(
    events: &'a [CalendarEvent],
    day: NaiveDate,
    min_duration: Duration,
) -> BTreeMap<u32, Vec<&'a CalendarEvent>> {
    let refs: Vec<&'a CalendarEvent> = events.iter().collect();
    index_refs_by_hour_slot(&refs, day, min_duration)
}

/// Same as [`index_by_hour_slot`] for events already gathered for a day.
pub fn index_refs_by_hour_slot<'a>(
    events: &[&'a CalendarEvent],
    day: NaiveDate,
    min_duration: Duration,
) -> BTreeMap<u32, Vec<&'a CalendarEvent>> {
    let day_start = start_of_day(day);
    let day_end = end_of_day(day);
    let mut index: BTreeMap<u32, Vec<&'a CalendarEvent>> = (0..24).map(|h| (h, Vec::new())).collect();

    let mut sorted: Vec<&'a CalendarEvent> = events
        .iter()
        .copied()
        .filter(|event| event.occupies(day_start, day_end, min_duration))
        .collect();
    sorted.sort_by(|a, b| compare_events(a, b));

    for event in sorted {
        let from = event.start.max(day_start) - day_start;
        let until = event.effective_end(min_duration).min(day_end) - day_start;
        let first_hour = from.num_hours() as u32;
        let last_hour = (until - Duration::nanoseconds(1)).num_hours() as u32;

        for hour in first_hour..=last_hour.min(23) {
            if let Some(bucket) = index.get_mut(&hour) {
                bucket.push(event);
            }
        }
    }

    index
}

/// Cap a day's events at `limit` and count the rest.
pub fn preview_day<'a>(date: NaiveDate, mut events: Vec<&'a CalendarEvent>, limit: usize) -> DayPreview<'a> {
    let overflow = events.len().saturating_sub(limit);
    events.truncate(limit);
    DayPreview {
        date,
        visible: events,
        overflow,
    }
}
