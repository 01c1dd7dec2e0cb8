//! Event form state: modal visibility, draft field values and validation.

mod state;
mod validation;

pub use state::{EventFormState, FormMode};
pub use validation::{
    EventDraft, FieldErrors, FormField, UnknownField, ValidDraft, ValidationError,
};
