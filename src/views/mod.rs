//! Calendar view computation.
//!
//! Grid builders turn a reference date into cells, the event index assigns
//! events to those cells, and the lane layout positions overlapping events
//! for the week view. Nothing here renders; the host draws the results.

pub mod event_index;
pub mod lanes;
pub mod month_view;
pub mod types;
pub mod week_view;

pub use event_index::{index_by_day, index_by_hour_slot, preview_day};
pub use lanes::layout_day;
pub use month_view::{build_month_grid, layout_month, month_grid_range};
pub use types::{DayPreview, GridCell, GridOptions, MonthCell, PositionedEvent, WeekDayColumn};
pub use week_view::{build_week_grid, layout_week, week_dates, week_range};
