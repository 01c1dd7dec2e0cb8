//! Month grid: six weeks of days around the focused month.

use chrono::{Datelike, NaiveDate};

use super::event_index::{index_by_day, preview_day};
use super::types::{GridCell, GridOptions, MonthCell};
use crate::models::event::CalendarEvent;
use crate::models::settings::{Settings, MONTH_GRID_CELLS};
use crate::utils::date::{add_days_saturating, first_of_month, fit_day_run, get_week_start};

/// First and last day shown by the month grid for `reference_date`.
pub fn month_grid_range(reference_date: NaiveDate, first_day_of_week: u8) -> (NaiveDate, NaiveDate) {
    let first = fit_day_run(
        get_week_start(first_of_month(reference_date), first_day_of_week),
        MONTH_GRID_CELLS,
    );
    let last = add_days_saturating(first, MONTH_GRID_CELLS as i64 - 1);
    (first, last)
}

/// Build the 42 day cells for the month containing `reference_date`.
///
/// The grid starts on the configured first weekday on or before the 1st and
/// always spans six weeks, so short months carry trailing days from the next
/// month. Cells outside the focused month have `is_current_period == false`.
/// In the last representable month the grid is pulled back to end on
/// `NaiveDate::MAX`.
pub fn build_month_grid(reference_date: NaiveDate, options: &GridOptions) -> Vec<GridCell> {
    let (first, _) = month_grid_range(reference_date, options.first_day_of_week);
    let focus = (reference_date.year(), reference_date.month());

    first
        .iter_days()
        .take(MONTH_GRID_CELLS)
        .map(|date| {
            GridCell::day(
                date,
                (date.year(), date.month()) == focus,
                date == options.today,
            )
        })
        .collect()
}

/// Decorate month cells with their capped event previews.
pub fn layout_month<'a>(
    cells: &[GridCell],
    events: &'a [CalendarEvent],
    settings: &Settings,
) -> Vec<MonthCell<'a>> {
    let days: Vec<NaiveDate> = cells.iter().map(|cell| cell.date).collect();
    let mut index = index_by_day(events, &days, settings.min_event_duration());

    cells
        .iter()
        .map(|cell| MonthCell {
            cell: *cell,
            preview: preview_day(
                cell.date,
                index.remove(&cell.date).unwrap_or_default(),
                settings.month_preview_limit,
            ),
        })
        .collect()
}
