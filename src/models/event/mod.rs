// Event module
// Calendar event model as handed across the host boundary

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::utils::date::add_saturating;

mod color;

pub use color::{EventColor, UnknownColor};

/// Reasons an event cannot be constructed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EventError {
    #[error("Event title cannot be empty")]
    EmptyTitle,
    #[error("Event end time must be after start time")]
    InvalidRange,
    #[error("Event {0} is required")]
    MissingField(&'static str),
}

/// Calendar event owned by the host application.
///
/// The engine only borrows these for layout; field names serialize in
/// camelCase (`startDate`, `endDate`) to match JSON hosts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "startDate")]
    pub start: NaiveDateTime,
    #[serde(rename = "endDate")]
    pub end: NaiveDateTime,
    #[serde(default)]
    pub color: EventColor,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl CalendarEvent {
    /// Create a new event with required fields
    ///
    /// # Examples
    /// ```
    /// use rust_calendar_engine::models::event::CalendarEvent;
    /// use chrono::NaiveDate;
    ///
    /// let start = NaiveDate::from_ymd_opt(2025, 10, 29).unwrap().and_hms_opt(9, 0, 0).unwrap();
    /// let end = start + chrono::Duration::hours(1);
    /// let event = CalendarEvent::new("evt-1", "Team Meeting", start, end).unwrap();
    /// assert_eq!(event.duration(), chrono::Duration::hours(1));
    /// ```
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Self, EventError> {
        let event = Self {
            id: id.into(),
            title: title.into(),
            description: None,
            start,
            end,
            color: EventColor::default(),
            category: None,
        };
        event.validate()?;
        Ok(event)
    }

    pub fn builder() -> EventBuilder {
        EventBuilder::new()
    }

    pub fn validate(&self) -> Result<(), EventError> {
        if self.title.trim().is_empty() {
            return Err(EventError::EmptyTitle);
        }
        if self.end <= self.start {
            return Err(EventError::InvalidRange);
        }
        Ok(())
    }

    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// End used for layout. Zero or negative spans are stretched to `min_duration`
    /// so the event stays visible and takes part in overlap checks.
    pub fn effective_end(&self, min_duration: Duration) -> NaiveDateTime {
        if self.end - self.start < min_duration {
            add_saturating(self.start, min_duration)
        } else {
            self.end
        }
    }

    /// Whether the event intersects the half-open window `[from, until)`.
    pub fn occupies(&self, from: NaiveDateTime, until: NaiveDateTime, min_duration: Duration) -> bool {
        self.start < until && self.effective_end(min_duration) > from
    }

    /// Return a copy with `update` applied, as a host would after an update intent.
    pub fn with_update(&self, update: &EventUpdate) -> CalendarEvent {
        let mut event = self.clone();
        update.apply_to(&mut event);
        event
    }
}

/// Partial event carried by an update intent. Only changed fields are `Some`.
///
/// The optional text fields nest a second `Option` so a cleared value
/// (`Some(None)`) differs from an untouched one (`None`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
    #[serde(rename = "startDate", skip_serializing_if = "Option::is_none")]
    pub start: Option<NaiveDateTime>,
    #[serde(rename = "endDate", skip_serializing_if = "Option::is_none")]
    pub end: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<EventColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Option<String>>,
}

impl EventUpdate {
    /// Diff `edited` against `original`, keeping only fields that changed.
    pub fn between(original: &CalendarEvent, edited: &CalendarEvent) -> Self {
        fn changed<T: PartialEq + Clone>(before: &T, after: &T) -> Option<T> {
            (before != after).then(|| after.clone())
        }

        Self {
            title: changed(&original.title, &edited.title),
            description: changed(&original.description, &edited.description),
            start: changed(&original.start, &edited.start),
            end: changed(&original.end, &edited.end),
            color: changed(&original.color, &edited.color),
            category: changed(&original.category, &edited.category),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.start.is_none()
            && self.end.is_none()
            && self.color.is_none()
            && self.category.is_none()
    }

    pub fn apply_to(&self, event: &mut CalendarEvent) {
        if let Some(title) = &self.title {
            event.title = title.clone();
        }
        if let Some(description) = &self.description {
            event.description = description.clone();
        }
        if let Some(start) = self.start {
            event.start = start;
        }
        if let Some(end) = self.end {
            event.end = end;
        }
        if let Some(color) = self.color {
            event.color = color;
        }
        if let Some(category) = &self.category {
            event.category = category.clone();
        }
    }
}

/// Builder for creating events with optional fields
#[derive(Default)]
pub struct EventBuilder {
    id: Option<String>,
    title: Option<String>,
    description: Option<String>,
    start: Option<NaiveDateTime>,
    end: Option<NaiveDateTime>,
    color: EventColor,
    category: Option<String>,
}

impl EventBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn start(mut self, start: NaiveDateTime) -> Self {
        self.start = Some(start);
        self
    }

    pub fn end(mut self, end: NaiveDateTime) -> Self {
        self.end = Some(end);
        self
    }

    pub fn color(mut self, color: EventColor) -> Self {
        self.color = color;
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn build(self) -> Result<CalendarEvent, EventError> {
        let event = CalendarEvent {
            id: self.id.ok_or(EventError::MissingField("id"))?,
            title: self.title.ok_or(EventError::MissingField("title"))?,
            description: self.description,
            start: self.start.ok_or(EventError::MissingField("start time"))?,
            end: self.end.ok_or(EventError::MissingField("end time"))?,
            color: self.color,
            category: self.category,
        };

        event.validate()?;
        Ok(event)
    }
}
