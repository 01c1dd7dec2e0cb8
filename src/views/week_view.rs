//! Week time grid: seven day columns of 24 hourly slots.

use chrono::NaiveDate;

use super::event_index::{index_by_day, index_refs_by_hour_slot};
use super::lanes::layout_day;
use super::types::{GridCell, GridOptions, WeekDayColumn};
use crate::models::event::CalendarEvent;
use crate::models::settings::{Settings, DAYS_PER_WEEK, HOURS_PER_DAY};
use crate::utils::date::{add_days_saturating, fit_day_run, get_week_start};

/// The seven dates of the week containing `reference_date`.
pub fn week_dates(reference_date: NaiveDate, first_day_of_week: u8) -> Vec<NaiveDate> {
    week_start(reference_date, first_day_of_week)
        .iter_days()
        .take(DAYS_PER_WEEK)
        .collect()
}

/// Build the 168 hour slots of the week, day by day, 00:00 to 23:00.
///
/// Times are naive local time; DST transitions do not change the slot count.
pub fn build_week_grid(reference_date: NaiveDate, options: &GridOptions) -> Vec<GridCell> {
    week_dates(reference_date, options.first_day_of_week)
        .into_iter()
        .flat_map(|date| {
            let is_today = date == options.today;
            (0..HOURS_PER_DAY as u32).map(move |hour| GridCell::slot(date, hour, is_today))
        })
        .collect()
}

/// First and last day of the week containing `reference_date`.
pub fn week_range(reference_date: NaiveDate, first_day_of_week: u8) -> (NaiveDate, NaiveDate) {
    let first = week_start(reference_date, first_day_of_week);
    (first, add_days_saturating(first, DAYS_PER_WEEK as i64 - 1))
}

fn week_start(reference_date: NaiveDate, first_day_of_week: u8) -> NaiveDate {
    fit_day_run(get_week_start(reference_date, first_day_of_week), DAYS_PER_WEEK)
}

/// Group week slots into day columns and place each day's events in lanes.
pub fn layout_week<'a>(
    cells: &[GridCell],
    events: &'a [CalendarEvent],
    settings: &Settings,
) -> Vec<WeekDayColumn<'a>> {
    let min_duration = settings.min_event_duration();
    let mut days: Vec<NaiveDate> = cells.iter().map(|cell| cell.date).collect();
    days.dedup();
    let mut index = index_by_day(events, &days, min_duration);

    days.into_iter()
        .map(|date| {
            let day_events = index.remove(&date).unwrap_or_default();
            let slots: Vec<GridCell> = cells.iter().filter(|c| c.date == date).copied().collect();
            WeekDayColumn {
                date,
                is_today: slots.first().is_some_and(|slot| slot.is_today),
                events_by_hour: index_refs_by_hour_slot(&day_events, date, min_duration),
                positioned: layout_day(&day_events, date, min_duration),
                slots,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, NaiveDateTime, Weekday};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn at(d: NaiveDate, h: u32, m: u32) -> NaiveDateTime {
        d.and_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_week_grid_shape() {
        let options = GridOptions::new(1, date(2025, 10, 29));
        let cells = build_week_grid(date(2025, 10, 29), &options);

        assert_eq!(cells.len(), 7 * 24);
        assert_eq!(cells[0].date, date(2025, 10, 27));
        assert_eq!(cells[0].date.weekday(), Weekday::Mon);
        assert_eq!(cells[0].hour, Some(0));
        assert_eq!(cells[23].hour, Some(23));
        assert_eq!(cells[24].date, date(2025, 10, 28));
        assert_eq!(cells[167].date, date(2025, 11, 2));
        assert!(cells.iter().all(|c| c.is_current_period));
        assert_eq!(cells.iter().filter(|c| c.is_today).count(), 24);
    }

    #[test]
    fn test_week_dates_sunday_start() {
        let dates = week_dates(date(2025, 10, 29), 0);
        assert_eq!(dates.first(), Some(&date(2025, 10, 26)));
        assert_eq!(dates.last(), Some(&date(2025, 11, 1)));
    }

    #[test]
    fn test_dst_week_keeps_24_slots_per_day() {
        // Europe and US both shift clocks in this span; naive time ignores it.
        let options = GridOptions::new(1, date(2025, 1, 1));
        let cells = build_week_grid(date(2025, 3, 30), &options);
        assert_eq!(cells.len(), 168);
    }

    #[test]
    fn test_layout_week_positions_events() {
        let wednesday = date(2025, 10, 29);
        let events = vec![
            CalendarEvent::new("a", "A", at(wednesday, 9, 0), at(wednesday, 10, 0)).unwrap(),
            CalendarEvent::new("b", "B", at(wednesday, 9, 30), at(wednesday, 11, 0)).unwrap(),
        ];
        let options = GridOptions::new(1, wednesday);
        let cells = build_week_grid(wednesday, &options);

        let columns = layout_week(&cells, &events, &Settings::default());

        assert_eq!(columns.len(), 7);
        let column = &columns[2];
        assert_eq!(column.date, wednesday);
        assert!(column.is_today);
        assert_eq!(column.slots.len(), 24);
        assert_eq!(column.lane_count(), 2);
        assert_eq!(column.events_by_hour[&9].len(), 2);
        assert_eq!(column.events_by_hour[&10].len(), 1);
        assert!(columns[0].positioned.is_empty());
        assert_eq!(columns[0].lane_count(), 0);
    }

    #[test]
    fn test_week_grid_is_total_at_range_ends() {
        for reference in [NaiveDate::MIN, NaiveDate::MAX] {
            let options = GridOptions::new(1, reference);
            let cells = build_week_grid(reference, &options);
            assert_eq!(cells.len(), 168);
            assert!(cells.iter().any(|c| c.date == reference && c.hour == Some(23)));
            let (first, last) = week_range(reference, 1);
            assert_eq!(first.iter_days().take(7).last(), Some(last));
        }
    }
}
