//! Calendar session: the long-lived state a host embeds.
//!
//! A session owns navigation, the event form and the CRUD manager, plus a
//! transient copy of the host's event list used only for layout. Every call
//! runs synchronously to completion; intents go out through the host's
//! [`EventSink`] and the host answers with [`CalendarSession::set_events`].

use chrono::{Local, NaiveDate, NaiveDateTime};

use crate::event_dialog::{EventFormState, FormField};
use crate::models::event::CalendarEvent;
use crate::models::settings::{Settings, SettingsError};
use crate::models::ui::ViewType;
use crate::services::event::{EventManager, EventSink, SubmitOutcome};
use crate::views::{
    build_month_grid, build_week_grid, layout_month, layout_week, GridCell, GridOptions, MonthCell,
    WeekDayColumn,
};

mod navigation;

pub use navigation::NavigationState;

pub struct CalendarSession<S: EventSink> {
    settings: Settings,
    navigation: NavigationState,
    form: EventFormState,
    manager: EventManager,
    events: Vec<CalendarEvent>,
    sink: S,
    /// Pinned "today"; the local clock is used when unset
    today: Option<NaiveDate>,
}

impl<S: EventSink> CalendarSession<S> {
    /// Session on today's date in the default view.
    pub fn new(events: Vec<CalendarEvent>, sink: S) -> Self {
        let settings = Settings::default();
        let navigation = NavigationState::new(Local::now().date_naive(), settings.default_view);
        Self {
            settings,
            navigation,
            form: EventFormState::new(),
            manager: EventManager::new(),
            events,
            sink,
            today: None,
        }
    }

    /// Replace the settings and switch to their default view.
    ///
    /// Invalid settings are rejected and the session is dropped with them.
    pub fn with_settings(mut self, settings: Settings) -> Result<Self, SettingsError> {
        if let Err(err) = settings.validate() {
            log::warn!("Rejecting session settings: {}", err);
            return Err(err);
        }
        self.navigation.set_view(settings.default_view);
        self.settings = settings;
        Ok(self)
    }

    pub fn with_initial_view(mut self, view: ViewType) -> Self {
        self.navigation.set_view(view);
        self
    }

    pub fn with_initial_date(mut self, date: NaiveDate) -> Self {
        self.navigation.jump_to(date);
        self
    }

    pub fn with_manager(mut self, manager: EventManager) -> Self {
        self.manager = manager;
        self
    }

    /// Pin the date treated as today, for `is_today` flags and `navigate_today`.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn events(&self) -> &[CalendarEvent] {
        &self.events
    }

    /// Take a fresh event list from the host after it applied an intent.
    pub fn set_events(&mut self, events: Vec<CalendarEvent>) {
        log::debug!("Session: received {} events", events.len());
        self.events = events;
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }

    fn grid_options(&self) -> GridOptions {
        GridOptions::from_settings(&self.settings, self.today())
    }

    /// Header label for a grid cell in the configured clock format.
    pub fn cell_label(&self, cell: &GridCell) -> String {
        cell.label(self.settings.uses_24h_clock())
    }

    // Navigation

    pub fn navigation(&self) -> &NavigationState {
        &self.navigation
    }

    pub fn navigate_next(&mut self) {
        self.navigation.navigate_next();
    }

    pub fn navigate_previous(&mut self) {
        self.navigation.navigate_previous();
    }

    pub fn navigate_today(&mut self) {
        let today = self.today();
        self.navigation.jump_to(today);
    }

    pub fn set_view(&mut self, view: ViewType) {
        self.navigation.set_view(view);
    }

    pub fn visible_range(&self) -> (NaiveDate, NaiveDate) {
        self.navigation.visible_range(self.settings.first_day_of_week)
    }

    pub fn title(&self) -> String {
        self.navigation.title(self.settings.first_day_of_week)
    }

    // Grids

    /// Cells of the current view: 42 days or 168 hour slots.
    pub fn grid(&self) -> Vec<GridCell> {
        let reference = self.navigation.reference_date();
        match self.navigation.view() {
            ViewType::Month => build_month_grid(reference, &self.grid_options()),
            ViewType::Week => build_week_grid(reference, &self.grid_options()),
        }
    }

    /// Month grid around the reference date, decorated with event previews.
    pub fn month_view(&self) -> Vec<MonthCell<'_>> {
        let cells = build_month_grid(self.navigation.reference_date(), &self.grid_options());
        layout_month(&cells, &self.events, &self.settings)
    }

    /// Week columns around the reference date, with slots and lanes.
    pub fn week_view(&self) -> Vec<WeekDayColumn<'_>> {
        let cells = build_week_grid(self.navigation.reference_date(), &self.grid_options());
        layout_week(&cells, &self.events, &self.settings)
    }

    // Event form

    pub fn form(&self) -> &EventFormState {
        &self.form
    }

    pub fn open_for_create(&mut self, start: NaiveDateTime) {
        self.form.open_for_create(start, &self.settings);
    }

    pub fn open_for_create_on_day(&mut self, date: NaiveDate) {
        self.form.open_for_create_on_day(date, &self.settings);
    }

    /// Open the edit form for the event with `id`. Returns `false` if the
    /// session does not know that event.
    pub fn open_for_edit(&mut self, id: &str) -> bool {
        match self.events.iter().find(|event| event.id == id) {
            Some(event) => {
                self.form.open_for_edit(event);
                true
            }
            None => {
                log::warn!("Cannot edit unknown event {}", id);
                false
            }
        }
    }

    pub fn update_field(&mut self, field: FormField, value: impl Into<String>) {
        self.form.update_field(field, value);
    }

    pub fn update_datetime(&mut self, field: FormField, value: NaiveDateTime) {
        self.form.update_datetime(field, value);
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        self.manager.submit(&mut self.form, &self.events, &mut self.sink)
    }

    pub fn delete_current(&mut self) -> bool {
        self.manager.delete_current(&mut self.form, &mut self.sink)
    }

    pub fn cancel(&mut self) {
        self.manager.cancel(&mut self.form);
    }
}
