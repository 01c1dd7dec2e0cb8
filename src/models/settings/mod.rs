// Settings module
// Engine configuration: week convention, form defaults and layout policy

use chrono::{Duration, NaiveTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::ui::ViewType;
use crate::utils::date::parse_hour_minute;

/// Weeks shown by the month grid.
pub const MONTH_GRID_WEEKS: usize = 6;
pub const DAYS_PER_WEEK: usize = 7;
/// Cells in every month grid, whatever the month's length or leading weekday.
pub const MONTH_GRID_CELLS: usize = MONTH_GRID_WEEKS * DAYS_PER_WEEK;
pub const HOURS_PER_DAY: usize = 24;
/// Events listed per month cell before the "+N more" overflow.
pub const DEFAULT_MONTH_PREVIEW_LIMIT: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    #[error("first_day_of_week must be 0-6, got {0}")]
    InvalidFirstDay(u8),
    #[error("time_format must be \"12h\" or \"24h\", got \"{0}\"")]
    InvalidTimeFormat(String),
    #[error("default_event_start_time must be HH:MM, got \"{0}\"")]
    InvalidStartTime(String),
    #[error("{0} must be greater than zero")]
    Zero(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// 0 = Sunday, 1 = Monday, ... 6 = Saturday
    pub first_day_of_week: u8,
    pub default_view: ViewType,
    pub time_format: String,
    pub default_event_start_time: String,
    /// Minutes
    pub default_event_duration: u32,
    pub month_preview_limit: usize,
    pub min_event_duration_minutes: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            first_day_of_week: 1, // Monday
            default_view: ViewType::Month,
            time_format: "24h".to_string(),
            default_event_start_time: "09:00".to_string(),
            default_event_duration: 60,
            month_preview_limit: DEFAULT_MONTH_PREVIEW_LIMIT,
            min_event_duration_minutes: 1,
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.first_day_of_week > 6 {
            return Err(SettingsError::InvalidFirstDay(self.first_day_of_week));
        }
        if self.time_format != "12h" && self.time_format != "24h" {
            return Err(SettingsError::InvalidTimeFormat(self.time_format.clone()));
        }
        if parse_hour_minute(&self.default_event_start_time).is_none() {
            return Err(SettingsError::InvalidStartTime(
                self.default_event_start_time.clone(),
            ));
        }
        if self.default_event_duration == 0 {
            return Err(SettingsError::Zero("default_event_duration"));
        }
        if self.month_preview_limit == 0 {
            return Err(SettingsError::Zero("month_preview_limit"));
        }
        if self.min_event_duration_minutes == 0 {
            return Err(SettingsError::Zero("min_event_duration_minutes"));
        }
        Ok(())
    }

    pub fn uses_24h_clock(&self) -> bool {
        self.time_format != "12h"
    }

    /// Start time for forms opened from a whole-day cell; falls back to 09:00.
    pub fn default_start_time(&self) -> NaiveTime {
        parse_hour_minute(&self.default_event_start_time)
            .unwrap_or(NaiveTime::from_hms_opt(9, 0, 0).unwrap_or(NaiveTime::MIN))
    }

    pub fn default_duration(&self) -> Duration {
        Duration::minutes(self.default_event_duration.max(1) as i64)
    }

    pub fn min_event_duration(&self) -> Duration {
        Duration::minutes(self.min_event_duration_minutes.max(1) as i64)
    }
}
