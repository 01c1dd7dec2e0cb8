//! Side-by-side lane layout for overlapping events in a week-view day column.
//!
//! Events are sorted once by (start, end, id). Each event then takes the
//! lowest lane whose previous occupant has already ended. Active lanes sit in
//! a min-heap keyed by end time and released lanes in a min-heap of indices,
//! so a day of `n` events costs O(n log n). The greedy order guarantees the
//! number of lanes equals the largest number of events running at once.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use chrono::{Duration, NaiveDate, NaiveDateTime};

use super::types::PositionedEvent;
use crate::models::event::CalendarEvent;
use crate::utils::date::{end_of_day, start_of_day};

struct Segment<'a> {
    event: &'a CalendarEvent,
    start: NaiveDateTime,
    end: NaiveDateTime,
}

/// Assign lanes to the events touching `day`.
///
/// Events that do not occupy the day are skipped. Zero-length or inverted
/// events are stretched to `min_duration` before overlap checks, and every
/// returned event carries the day-wide `lane_count`.
pub fn layout_day<'a>(
    events: &[&'a CalendarEvent],
    day: NaiveDate,
    min_duration: Duration,
) -> Vec<PositionedEvent<'a>> {
    let day_start = start_of_day(day);
    let day_end = end_of_day(day);

    let mut segments: Vec<Segment<'a>> = events
        .iter()
        .copied()
        .filter(|event| event.occupies(day_start, day_end, min_duration))
        .map(|event| Segment {
            event,
            start: event.start.max(day_start),
            end: event.effective_end(min_duration).min(day_end),
        })
        .collect();

    segments.sort_by(|a, b| {
        a.start
            .cmp(&b.start)
            .then_with(|| a.end.cmp(&b.end))
            .then_with(|| a.event.id.cmp(&b.event.id))
    });

    let mut active: BinaryHeap<Reverse<(NaiveDateTime, usize)>> = BinaryHeap::new();
    let mut free: BinaryHeap<Reverse<usize>> = BinaryHeap::new();
    let mut lanes_used = 0usize;
    let mut assigned = Vec::with_capacity(segments.len());

    for segment in &segments {
        while let Some(Reverse((end, lane))) = active.peek().copied() {
            if end > segment.start {
                break;
            }
            active.pop();
            free.push(Reverse(lane));
        }

        let lane = match free.pop() {
            Some(Reverse(lane)) => lane,
            None => {
                lanes_used += 1;
                lanes_used - 1
            }
        };

        active.push(Reverse((segment.end, lane)));
        assigned.push(lane);
    }

    log::debug!("Laid out {} events on {} in {} lanes", segments.len(), day, lanes_used);

    segments
        .into_iter()
        .zip(assigned)
        .map(|(segment, lane_index)| PositionedEvent {
            event: segment.event,
            lane_index,
            lane_count: lanes_used,
            start: segment.start,
            end: segment.end,
        })
        .collect()
}
