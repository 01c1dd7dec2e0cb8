use chrono::{NaiveDate, NaiveDateTime};

use super::validation::{EventDraft, FieldErrors, FormField, ValidDraft};
use crate::models::event::CalendarEvent;
use crate::models::settings::Settings;
use crate::utils::date::{add_saturating, format_datetime};

static NO_ERRORS: FieldErrors = FieldErrors::new();

/// Whether the open form creates a new event or edits an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct OpenForm {
    mode: FormMode,
    /// Event being edited, `None` when creating
    original: Option<CalendarEvent>,
    /// Draft as it was when the form opened
    initial: EventDraft,
    draft: EventDraft,
    errors: FieldErrors,
}

/// State of the event create/edit modal: `Closed`, `Open(create)` or `Open(edit)`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EventFormState {
    open: Option<OpenForm>,
}

impl EventFormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a create form starting at `start` with the default duration.
    pub fn open_for_create(&mut self, start: NaiveDateTime, settings: &Settings) {
        let end = add_saturating(start, settings.default_duration());
        log::debug!("Event form: create at {}", start);
        self.open(FormMode::Create, None, EventDraft::spanning(start, end));
    }

    /// Open a create form for a whole-day cell, starting at the configured default time.
    pub fn open_for_create_on_day(&mut self, date: NaiveDate, settings: &Settings) {
        self.open_for_create(date.and_time(settings.default_start_time()), settings);
    }

    pub fn open_for_edit(&mut self, event: &CalendarEvent) {
        log::debug!("Event form: edit {}", event.id);
        self.open(FormMode::Edit, Some(event.clone()), EventDraft::from_event(event));
    }

    fn open(&mut self, mode: FormMode, original: Option<CalendarEvent>, draft: EventDraft) {
        if self.is_open() {
            log::debug!("Event form: discarding open draft");
        }
        self.open = Some(OpenForm {
            mode,
            original,
            initial: draft.clone(),
            draft,
            errors: FieldErrors::new(),
        });
    }

    /// Set one field and recompute the field errors. Ignored while closed.
    pub fn update_field(&mut self, field: FormField, value: impl Into<String>) {
        let Some(form) = self.open.as_mut() else {
            log::debug!("Event form: ignoring update to {} while closed", field);
            return;
        };
        form.draft.set(field, value.into());
        form.errors = form.draft.validate().err().unwrap_or_default();
    }

    pub fn update_datetime(&mut self, field: FormField, value: NaiveDateTime) {
        self.update_field(field, format_datetime(value));
    }

    /// Validate the draft, storing the errors. `None` when closed or invalid.
    pub fn validate(&mut self) -> Option<ValidDraft> {
        let form = self.open.as_mut()?;
        match form.draft.validate() {
            Ok(valid) => {
                form.errors.clear();
                Some(valid)
            }
            Err(errors) => {
                log::debug!("Event form: {} validation error(s)", errors.len());
                form.errors = errors;
                None
            }
        }
    }

    /// Discard the draft. No intent is produced.
    pub fn cancel(&mut self) {
        if self.open.take().is_some() {
            log::debug!("Event form: cancelled");
        }
    }

    pub(crate) fn close(&mut self) {
        self.open = None;
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    pub fn mode(&self) -> Option<FormMode> {
        self.open.as_ref().map(|form| form.mode)
    }

    pub fn draft(&self) -> Option<&EventDraft> {
        self.open.as_ref().map(|form| &form.draft)
    }

    pub fn errors(&self) -> &FieldErrors {
        self.open.as_ref().map_or(&NO_ERRORS, |form| &form.errors)
    }

    /// Message for `field`, if it currently fails validation.
    pub fn error_message(&self, field: FormField) -> Option<String> {
        self.errors().get(&field).map(|err| err.to_string())
    }

    pub fn original(&self) -> Option<&CalendarEvent> {
        self.open.as_ref().and_then(|form| form.original.as_ref())
    }

    pub fn original_id(&self) -> Option<&str> {
        self.original().map(|event| event.id.as_str())
    }

    /// Fields whose text differs from what the form opened with.
    pub fn changed_fields(&self) -> Vec<FormField> {
        let Some(form) = self.open.as_ref() else {
            return Vec::new();
        };
        FormField::ALL
            .into_iter()
            .filter(|field| form.draft.get(*field) != form.initial.get(*field))
            .collect()
    }
}
