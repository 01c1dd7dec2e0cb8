// Rust Calendar Engine
// Calendar state and layout: grids, event indexing, lanes, navigation and the event form

pub mod app;
pub mod event_dialog;
pub mod models;
pub mod services;
pub mod utils;
pub mod views;

pub use app::{CalendarSession, NavigationState};
pub use event_dialog::{EventFormState, FormField, FormMode};
pub use models::event::{CalendarEvent, EventColor, EventUpdate};
pub use models::settings::{Settings, SettingsError};
pub use models::ui::ViewType;
pub use services::event::{EventIntent, EventManager, EventSink, FnSink, SubmitOutcome};
