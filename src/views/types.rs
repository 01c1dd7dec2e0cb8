//! Shared types for calendar views.
//!
//! This module contains the data structures the grid builders, the event
//! indexer and the lane layout hand to the presentation layer.

use std::collections::BTreeMap;

use chrono::{Duration, Local, NaiveDate, NaiveDateTime, Timelike};

use crate::models::event::CalendarEvent;
use crate::models::settings::Settings;
use crate::utils::date::{end_of_day, start_of_day, start_of_hour};

/// One addressable unit of the calendar surface: a day in month view or
/// an hour slot in week view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridCell {
    pub date: NaiveDate,
    /// `Some(hour)` for week-view slots, `None` for whole days
    pub hour: Option<u32>,
    /// Whether the cell belongs to the focused month (always true in week view)
    pub is_current_period: bool,
    pub is_today: bool,
}

impl GridCell {
    pub fn day(date: NaiveDate, is_current_period: bool, is_today: bool) -> Self {
        Self {
            date,
            hour: None,
            is_current_period,
            is_today,
        }
    }

    pub fn slot(date: NaiveDate, hour: u32, is_today: bool) -> Self {
        Self {
            date,
            hour: Some(hour),
            is_current_period: true,
            is_today,
        }
    }

    /// Inclusive start of the cell's half-open interval.
    pub fn start(&self) -> NaiveDateTime {
        match self.hour {
            Some(hour) => start_of_hour(self.date, hour),
            None => start_of_day(self.date),
        }
    }

    /// Exclusive end of the cell's half-open interval.
    pub fn end(&self) -> NaiveDateTime {
        match self.hour {
            Some(hour) => start_of_hour(self.date, hour + 1),
            None => end_of_day(self.date),
        }
    }

    /// Day number for day cells, clock label for hour slots.
    pub fn label(&self, use_24h: bool) -> String {
        match self.hour {
            None => self.date.format("%-d").to_string(),
            Some(hour) if use_24h => format!("{:02}:00", hour),
            Some(hour) => {
                let display = match hour % 12 {
                    0 => 12,
                    h => h,
                };
                let suffix = if hour < 12 { "AM" } else { "PM" };
                format!("{} {}", display, suffix)
            }
        }
    }
}

/// Inputs every grid build needs besides the reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridOptions {
    /// 0 = Sunday, 1 = Monday, etc.
    pub first_day_of_week: u8,
    pub today: NaiveDate,
}

impl GridOptions {
    pub fn new(first_day_of_week: u8, today: NaiveDate) -> Self {
        Self {
            first_day_of_week,
            today,
        }
    }

    pub fn from_settings(settings: &Settings, today: NaiveDate) -> Self {
        Self::new(settings.first_day_of_week, today)
    }
}

impl Default for GridOptions {
    fn default() -> Self {
        Self::new(1, Local::now().date_naive())
    }
}

/// Bounded list of events for a month cell plus the hidden remainder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayPreview<'a> {
    pub date: NaiveDate,
    pub visible: Vec<&'a CalendarEvent>,
    /// Events not shown because of the preview cap
    pub overflow: usize,
}

impl DayPreview<'_> {
    pub fn total(&self) -> usize {
        self.visible.len() + self.overflow
    }

    /// `"+N more"` when events were cut off.
    pub fn more_label(&self) -> Option<String> {
        (self.overflow > 0).then(|| format!("+{} more", self.overflow))
    }
}

/// An event placed in a lane of one day column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionedEvent<'a> {
    pub event: &'a CalendarEvent,
    pub lane_index: usize,
    /// Lanes used across the whole day, shared by every event of that day
    pub lane_count: usize,
    /// Segment of the event that falls on the day, after normalization
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl PositionedEvent<'_> {
    pub fn width_fraction(&self) -> f32 {
        1.0 / self.lane_count.max(1) as f32
    }

    pub fn left_fraction(&self) -> f32 {
        self.lane_index as f32 * self.width_fraction()
    }

    /// Offset of the segment from midnight as a fraction of the day.
    pub fn top_fraction(&self) -> f32 {
        self.start.time().num_seconds_from_midnight() as f32 / 86_400.0
    }

    pub fn height_fraction(&self) -> f32 {
        (self.end - self.start).num_seconds() as f32 / 86_400.0
    }

    pub fn duration(&self) -> Duration {
        self.end - self.start
    }
}

/// Month grid cell decorated with its event preview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthCell<'a> {
    pub cell: GridCell,
    pub preview: DayPreview<'a>,
}

/// One day of the week time grid with its slots and positioned events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekDayColumn<'a> {
    pub date: NaiveDate,
    pub is_today: bool,
    pub slots: Vec<GridCell>,
    pub events_by_hour: BTreeMap<u32, Vec<&'a CalendarEvent>>,
    pub positioned: Vec<PositionedEvent<'a>>,
}

impl WeekDayColumn<'_> {
    pub fn lane_count(&self) -> usize {
        self.positioned.first().map_or(0, |p| p.lane_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 10, 29).unwrap()
    }

    #[test]
    fn test_day_cell_interval() {
        let cell = GridCell::day(date(), true, false);
        assert_eq!(cell.start(), date().and_hms_opt(0, 0, 0).unwrap());
        assert_eq!(cell.end(), date().succ_opt().unwrap().and_hms_opt(0, 0, 0).unwrap());
        assert_eq!(cell.label(true), "29");
    }

    #[test]
    fn test_last_slot_ends_at_midnight() {
        let cell = GridCell::slot(date(), 23, false);
        assert_eq!(cell.start(), date().and_hms_opt(23, 0, 0).unwrap());
        assert_eq!(cell.end(), date().succ_opt().unwrap().and_hms_opt(0, 0, 0).unwrap());
    }

    #[test]
    fn test_slot_labels() {
        assert_eq!(GridCell::slot(date(), 0, false).label(true), "00:00");
        assert_eq!(GridCell::slot(date(), 9, false).label(true), "09:00");
        assert_eq!(GridCell::slot(date(), 0, false).label(false), "12 AM");
        assert_eq!(GridCell::slot(date(), 12, false).label(false), "12 PM");
        assert_eq!(GridCell::slot(date(), 15, false).label(false), "3 PM");
    }

    #[test]
    fn test_more_label_only_with_overflow() {
        let preview = DayPreview { date: date(), visible: vec![], overflow: 0 };
        assert_eq!(preview.more_label(), None);

        let preview = DayPreview { date: date(), visible: vec![], overflow: 2 };
        assert_eq!(preview.more_label().as_deref(), Some("+2 more"));
        assert_eq!(preview.total(), 2);
    }
}
