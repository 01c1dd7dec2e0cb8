use super::{EventIntent, EventSink};
use crate::event_dialog::{EventFormState, FormField, FormMode, ValidDraft};
use crate::models::event::{CalendarEvent, EventUpdate};

/// Result of a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// An add intent was emitted for the new event id
    Added(String),
    /// An update intent was emitted for this id
    Updated(String),
    /// Validation failed; the form stays open with field errors
    Invalid,
    /// The form was closed; nothing happened
    NotOpen,
}

/// Validates form state and emits CRUD intents to the host.
///
/// Holds no event data of its own, only the id generator for new events.
pub struct EventManager {
    id_generator: Box<dyn FnMut() -> String>,
}

impl EventManager {
    /// Manager generating UUID v4 ids for new events.
    pub fn new() -> Self {
        Self::with_id_generator(|| uuid::Uuid::new_v4().to_string())
    }

    pub fn with_id_generator(generator: impl FnMut() -> String + 'static) -> Self {
        Self {
            id_generator: Box::new(generator),
        }
    }

    /// Validate the open form and emit exactly one add or update intent.
    ///
    /// On success the form closes. On failure it stays open with its errors
    /// and no callback fires. `known_events` is only consulted to keep
    /// generated ids unique.
    pub fn submit(
        &mut self,
        form: &mut EventFormState,
        known_events: &[CalendarEvent],
        sink: &mut dyn EventSink,
    ) -> SubmitOutcome {
        let Some(mode) = form.mode() else {
            log::debug!("Submit ignored: event form is closed");
            return SubmitOutcome::NotOpen;
        };
        let Some(valid) = form.validate() else {
            return SubmitOutcome::Invalid;
        };

        let (intent, outcome) = match (mode, form.original()) {
            (FormMode::Edit, Some(original)) => {
                let changes = edited_changes(original, &form.changed_fields(), &valid);
                let id = original.id.clone();
                (
                    EventIntent::Update {
                        id: id.clone(),
                        changes,
                    },
                    SubmitOutcome::Updated(id),
                )
            }
            _ => {
                let id = self.unique_id(known_events);
                (
                    EventIntent::Add(new_event(id.clone(), valid)),
                    SubmitOutcome::Added(id),
                )
            }
        };

        form.close();
        log::info!("Emitting {:?}", intent);
        intent.dispatch(sink);
        outcome
    }

    /// Emit a delete for the event being edited and close the form.
    ///
    /// Returns `false`, leaving the form untouched, unless the form is in edit mode.
    pub fn delete_current(&mut self, form: &mut EventFormState, sink: &mut dyn EventSink) -> bool {
        let Some(id) = form.original_id().map(str::to_string) else {
            log::debug!("Delete ignored: no event is being edited");
            return false;
        };
        form.close();
        log::info!("Emitting delete for {}", id);
        EventIntent::Delete { id }.dispatch(sink);
        true
    }

    /// Close the form without emitting anything.
    pub fn cancel(&mut self, form: &mut EventFormState) {
        form.cancel();
    }

    fn unique_id(&mut self, known_events: &[CalendarEvent]) -> String {
        let taken = |id: &str| known_events.iter().any(|event| event.id == id);
        let base = (self.id_generator)();
        let mut candidate = base.clone();
        let mut suffix = 2;
        while taken(&candidate) {
            candidate = format!("{}-{}", base, suffix);
            suffix += 1;
        }
        candidate
    }
}

impl Default for EventManager {
    fn default() -> Self {
        Self::new()
    }
}

fn new_event(id: String, valid: ValidDraft) -> CalendarEvent {
    CalendarEvent {
        id,
        title: valid.title,
        description: valid.description,
        start: valid.start,
        end: valid.end,
        color: valid.color,
        category: valid.category,
    }
}

/// Only fields the user touched are considered, so an untouched form yields
/// an empty update even when the host's values would not round-trip exactly.
fn edited_changes(original: &CalendarEvent, touched: &[FormField], valid: &ValidDraft) -> EventUpdate {
    let mut edited = original.clone();
    for field in touched {
        match field {
            FormField::Title => edited.title = valid.title.clone(),
            FormField::Description => edited.description = valid.description.clone(),
            FormField::Start => edited.start = valid.start,
            FormField::End => edited.end = valid.end,
            FormField::Color => edited.color = valid.color,
            FormField::Category => edited.category = valid.category.clone(),
        }
    }
    EventUpdate::between(original, &edited)
}
