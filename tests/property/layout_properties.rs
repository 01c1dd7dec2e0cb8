// Property-based tests for grids, day indexing, lane layout and form validation
// Random calendars and event sets must always satisfy the layout guarantees

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};
use proptest::prelude::*;
use rust_calendar_engine::event_dialog::EventDraft;
use rust_calendar_engine::utils::date::{end_of_day, start_of_day};
use rust_calendar_engine::views::{build_month_grid, index_by_day, layout_day, GridOptions};
use rust_calendar_engine::{CalendarEvent, NavigationState, ViewType};

#[path = "../fixtures/mod.rs"]
mod fixtures;

use fixtures::events::event;

fn any_date() -> impl Strategy<Value = NaiveDate> {
    let earliest = NaiveDate::MIN.num_days_from_ce();
    let latest = NaiveDate::MAX.num_days_from_ce();
    prop_oneof![
        1 => Just(NaiveDate::MIN),
        1 => Just(NaiveDate::MAX),
        8 => (earliest..=latest).prop_map(|days| NaiveDate::from_num_days_from_ce_opt(days).unwrap()),
    ]
}

/// Events within a three-day window around Oct 29, 2025, some zero-length.
fn window_events(max: usize) -> impl Strategy<Value = Vec<CalendarEvent>> {
    let base = fixtures::dates::oct_29_2025().pred_opt().unwrap();
    prop::collection::vec((0..(3 * 24 * 4) as i64, 0..(10 * 4) as i64), 0..max).prop_map(
        move |spans| {
            spans
                .into_iter()
                .enumerate()
                .map(|(i, (start_q, len_q))| {
                    let start = start_of_day(base) + Duration::minutes(start_q * 15);
                    event(&format!("e{:03}", i), start, start + Duration::minutes(len_q * 15))
                })
                .collect()
        },
    )
}

fn overlaps(a: (NaiveDateTime, NaiveDateTime), b: (NaiveDateTime, NaiveDateTime)) -> bool {
    a.0 < b.1 && b.0 < a.1
}

proptest! {
    /// Property: every month grid over the whole date range has 42 consecutive
    /// cells, starts on the chosen weekday away from the range ends, contains
    /// the 1st of the month and flags exactly that month's days
    #[test]
    fn prop_month_grid_shape(reference in any_date(), first_day in 0..7u8) {
        let options = GridOptions::new(first_day, reference);
        let cells = build_month_grid(reference, &options);

        prop_assert_eq!(cells.len(), 42);
        // Grids squeezed against either end of the date range give up weekday alignment.
        if cells[0].date > NaiveDate::MIN && cells[41].date < NaiveDate::MAX {
            prop_assert_eq!(cells[0].date.weekday().num_days_from_sunday(), first_day as u32);
        }
        let first_of_month = reference.with_day(1).unwrap();
        prop_assert!(cells.iter().any(|c| c.date == first_of_month));
        for pair in cells.windows(2) {
            prop_assert_eq!(pair[0].date.succ_opt(), Some(pair[1].date));
        }
        for cell in &cells {
            let in_month = cell.date.month() == reference.month() && cell.date.year() == reference.year();
            prop_assert_eq!(cell.is_current_period, in_month);
        }
    }

    /// Property: an event is bucketed under a day exactly when it intersects
    /// that day's half-open range
    #[test]
    fn prop_day_index_matches_overlap(events in window_events(30)) {
        let min = Duration::minutes(1);
        let base = fixtures::dates::oct_29_2025();
        let days: Vec<NaiveDate> = (-2..=2).map(|d| base + Duration::days(d)).collect();
        let index = index_by_day(&events, &days, min);

        prop_assert_eq!(index.len(), days.len());
        for day in &days {
            let expected: Vec<&str> = {
                let mut hits: Vec<&CalendarEvent> = events
                    .iter()
                    .filter(|e| e.start < end_of_day(*day) && e.effective_end(min) > start_of_day(*day))
                    .collect();
                hits.sort_by(|a, b| a.start.cmp(&b.start).then_with(|| a.id.cmp(&b.id)));
                hits.into_iter().map(|e| e.id.as_str()).collect()
            };
            let actual: Vec<&str> = index[day].iter().map(|e| e.id.as_str()).collect();
            prop_assert_eq!(actual, expected);
        }
    }

    /// Property: overlapping events never share a lane and the lane count
    /// equals the largest number of events running at once
    #[test]
    fn prop_lanes_are_disjoint_and_minimal(events in window_events(40)) {
        let min = Duration::minutes(1);
        let day = fixtures::dates::oct_29_2025();
        let refs: Vec<&CalendarEvent> = events.iter().collect();
        let positioned = layout_day(&refs, day, min);

        for (i, a) in positioned.iter().enumerate() {
            prop_assert!(a.lane_index < a.lane_count);
            for b in positioned.iter().skip(i + 1) {
                if overlaps((a.start, a.end), (b.start, b.end)) {
                    prop_assert_ne!(a.lane_index, b.lane_index);
                }
            }
        }

        // Peak concurrency is reached at some event's start.
        let peak = positioned
            .iter()
            .map(|a| positioned.iter().filter(|b| b.start <= a.start && a.start < b.end).count())
            .max()
            .unwrap_or(0);
        let lane_count = positioned.first().map_or(0, |p| p.lane_count);
        prop_assert_eq!(lane_count, peak);
        prop_assert!(positioned.iter().all(|p| p.lane_count == lane_count));
    }

    /// Property: a blank title never validates, whatever else the draft holds
    #[test]
    fn prop_blank_title_always_rejected(
        padding in "[ \t]{0,6}",
        start_hour in 0..23u32,
        length in 1..60i64,
    ) {
        let start = fixtures::dates::oct_29_at(start_hour, 0);
        let mut draft = EventDraft::spanning(start, start + Duration::minutes(length));
        draft.title = padding;
        prop_assert!(draft.validate().is_err());
    }

    /// Property: navigation steps never fail and the reference date always
    /// stays inside the visible range, up to both ends of the date range
    #[test]
    fn prop_navigation_is_total(
        reference in any_date(),
        weekly in any::<bool>(),
        steps in prop::collection::vec(any::<bool>(), 1..8),
    ) {
        let view = if weekly { ViewType::Week } else { ViewType::Month };
        let mut nav = NavigationState::new(reference, view);
        for forward in steps {
            if forward {
                nav.navigate_next();
            } else {
                nav.navigate_previous();
            }
            let (first, last) = nav.visible_range(1);
            prop_assert!(first <= nav.reference_date() && nav.reference_date() <= last);
            prop_assert!(!nav.title(1).is_empty());
        }
    }
}
