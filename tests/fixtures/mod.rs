// Test fixtures - reusable test data
// Provides consistent dates and events across the integration and property tests

#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use rust_calendar_engine::{CalendarEvent, EventColor};

/// Route engine logs to the test harness; safe to call from every test.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Wednesday, Oct 29, 2025
    pub fn oct_29_2025() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 10, 29).unwrap()
    }

    /// Oct 29, 2025 at `hour:minute`
    pub fn oct_29_at(hour: u32, minute: u32) -> NaiveDateTime {
        oct_29_2025().and_hms_opt(hour, minute, 0).unwrap()
    }

    /// Returns Feb 29, 2024 (leap year)
    pub fn leap_day_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
    }
}

/// Sample events for testing
pub mod events {
    use super::*;

    pub fn event(id: &str, start: NaiveDateTime, end: NaiveDateTime) -> CalendarEvent {
        CalendarEvent {
            id: id.to_string(),
            title: format!("Event {}", id),
            description: None,
            start,
            end,
            color: EventColor::Blue,
            category: None,
        }
    }

    /// A typical Wednesday: standup, a review overlapping lunch, and an all-afternoon workshop.
    pub fn busy_wednesday() -> Vec<CalendarEvent> {
        use super::dates::oct_29_at;
        vec![
            event("standup", oct_29_at(9, 0), oct_29_at(9, 15)),
            event("review", oct_29_at(11, 0), oct_29_at(12, 30)),
            event("lunch", oct_29_at(12, 0), oct_29_at(13, 0)),
            event("workshop", oct_29_at(12, 45), oct_29_at(17, 0)),
        ]
    }
}
