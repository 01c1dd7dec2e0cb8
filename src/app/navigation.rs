use chrono::{Datelike, Duration, Local, NaiveDate};

use crate::models::ui::ViewType;
use crate::utils::date::shift_month_to_day;
use crate::views::{month_grid_range, week_range};

/// Focused date and view mode of a calendar session.
///
/// Every transition is total: any reference date resolves to a non-empty grid,
/// and a step past the ends of the date range leaves the date unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationState {
    reference_date: NaiveDate,
    view: ViewType,
    /// Day of month last chosen explicitly; month steps aim for it so that
    /// Jan 31 -> Feb 28 -> Mar 31 and `previous` undoes `next`.
    anchor_day: u32,
}

impl NavigationState {
    pub fn new(reference_date: NaiveDate, view: ViewType) -> Self {
        Self {
            reference_date,
            view,
            anchor_day: reference_date.day(),
        }
    }

    pub fn reference_date(&self) -> NaiveDate {
        self.reference_date
    }

    pub fn view(&self) -> ViewType {
        self.view
    }

    pub fn navigate_next(&mut self) {
        self.shift(1);
    }

    pub fn navigate_previous(&mut self) {
        self.shift(-1);
    }

    /// Reset the reference date to the current local date, keeping the view.
    pub fn jump_to_today(&mut self) {
        self.jump_to(Local::now().date_naive());
    }

    pub fn jump_to(&mut self, date: NaiveDate) {
        self.move_to(date);
        self.anchor_day = date.day();
    }

    pub fn set_view(&mut self, view: ViewType) {
        if self.view != view {
            log::debug!("Navigation: view {:?} -> {:?}", self.view, view);
        }
        self.view = view;
    }

    /// First and last day visible in the current view.
    pub fn visible_range(&self, first_day_of_week: u8) -> (NaiveDate, NaiveDate) {
        match self.view {
            ViewType::Month => month_grid_range(self.reference_date, first_day_of_week),
            ViewType::Week => week_range(self.reference_date, first_day_of_week),
        }
    }

    /// Header text: `"October 2025"` or `"Oct 27 – Nov 2, 2025"`.
    pub fn title(&self, first_day_of_week: u8) -> String {
        match self.view {
            ViewType::Month => self.reference_date.format("%B %Y").to_string(),
            ViewType::Week => {
                let (first, last) = week_range(self.reference_date, first_day_of_week);
                if first.year() != last.year() {
                    format!("{} – {}", first.format("%b %-d, %Y"), last.format("%b %-d, %Y"))
                } else if first.month() != last.month() {
                    format!("{} – {}", first.format("%b %-d"), last.format("%b %-d, %Y"))
                } else {
                    format!("{} – {}", first.format("%b %-d"), last.format("%-d, %Y"))
                }
            }
        }
    }

    fn shift(&mut self, steps: i32) {
        match self.view {
            ViewType::Week => {
                let next = self
                    .reference_date
                    .checked_add_signed(Duration::weeks(steps as i64))
                    .unwrap_or(self.reference_date);
                self.jump_to(next);
            }
            ViewType::Month => {
                let next = shift_month_to_day(self.reference_date, steps, self.anchor_day);
                self.move_to(next);
            }
        }
    }

    fn move_to(&mut self, date: NaiveDate) {
        log::debug!("Navigation: {} -> {}", self.reference_date, date);
        self.reference_date = date;
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new(Local::now().date_naive(), ViewType::default())
    }
}
