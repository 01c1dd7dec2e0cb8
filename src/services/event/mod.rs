//! Event CRUD orchestration.
//!
//! The engine never stores authoritative events. Confirmed form actions are
//! turned into [`EventIntent`]s and handed to the host through an
//! [`EventSink`]; the host applies them and feeds back a fresh event list.

use crate::models::event::{CalendarEvent, EventUpdate};

mod manager;

pub use manager::{EventManager, SubmitOutcome};

/// A confirmed change the host should apply to its event list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventIntent {
    Add(CalendarEvent),
    Update { id: String, changes: EventUpdate },
    Delete { id: String },
}

/// Host callbacks. Each is invoked at most once per confirmed action and
/// its outcome is not observed.
#[cfg_attr(test, mockall::automock)]
pub trait EventSink {
    fn on_event_add(&mut self, event: CalendarEvent);
    fn on_event_update(&mut self, id: String, changes: EventUpdate);
    fn on_event_delete(&mut self, id: String);
}

impl EventIntent {
    /// Deliver this intent to the matching sink callback.
    pub fn dispatch(self, sink: &mut dyn EventSink) {
        match self {
            EventIntent::Add(event) => sink.on_event_add(event),
            EventIntent::Update { id, changes } => sink.on_event_update(id, changes),
            EventIntent::Delete { id } => sink.on_event_delete(id),
        }
    }

    /// Apply this intent to an event list the way a simple host would.
    pub fn apply(&self, events: &mut Vec<CalendarEvent>) {
        match self {
            EventIntent::Add(event) => events.push(event.clone()),
            EventIntent::Update { id, changes } => {
                if let Some(event) = events.iter_mut().find(|e| &e.id == id) {
                    changes.apply_to(event);
                }
            }
            EventIntent::Delete { id } => events.retain(|e| &e.id != id),
        }
    }
}

/// Recording sink: collects intents in order.
impl EventSink for Vec<EventIntent> {
    fn on_event_add(&mut self, event: CalendarEvent) {
        self.push(EventIntent::Add(event));
    }

    fn on_event_update(&mut self, id: String, changes: EventUpdate) {
        self.push(EventIntent::Update { id, changes });
    }

    fn on_event_delete(&mut self, id: String) {
        self.push(EventIntent::Delete { id });
    }
}

/// Adapts a single closure into an [`EventSink`].
pub struct FnSink<F>(pub F);

impl<F: FnMut(EventIntent)> EventSink for FnSink<F> {
    fn on_event_add(&mut self, event: CalendarEvent) {
        (self.0)(EventIntent::Add(event));
    }

    fn on_event_update(&mut self, id: String, changes: EventUpdate) {
        (self.0)(EventIntent::Update { id, changes });
    }

    fn on_event_delete(&mut self, id: String) {
        (self.0)(EventIntent::Delete { id });
    }
}
