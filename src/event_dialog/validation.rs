use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use thiserror::Error;

use crate::models::event::{CalendarEvent, EventColor};
use crate::utils::date::{format_datetime, parse_datetime};

/// Editable fields of the event form, named as the host names them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    Title,
    Description,
    Start,
    End,
    Color,
    Category,
}

impl FormField {
    pub const ALL: [FormField; 6] = [
        FormField::Title,
        FormField::Description,
        FormField::Start,
        FormField::End,
        FormField::Color,
        FormField::Category,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            FormField::Title => "title",
            FormField::Description => "description",
            FormField::Start => "startDate",
            FormField::End => "endDate",
            FormField::Color => "color",
            FormField::Category => "category",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown form field '{0}'")]
pub struct UnknownField(pub String);

impl FromStr for FormField {
    type Err = UnknownField;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "title" => Ok(FormField::Title),
            "description" => Ok(FormField::Description),
            "startDate" | "start" => Ok(FormField::Start),
            "endDate" | "end" => Ok(FormField::End),
            "color" => Ok(FormField::Color),
            "category" => Ok(FormField::Category),
            other => Err(UnknownField(other.to_string())),
        }
    }
}

/// A user-correctable problem with one form field. `Display` is the message shown.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Event title is required")]
    TitleRequired,
    #[error("Start date is not a valid date and time")]
    InvalidStart,
    #[error("End date is not a valid date and time")]
    InvalidEnd,
    #[error("Event must end after it starts")]
    EndNotAfterStart,
    #[error("Color must be one of: blue, green, red, yellow, purple, pink")]
    UnknownColor,
}

pub type FieldErrors = BTreeMap<FormField, ValidationError>;

/// Form field values as typed by the user. Dates hold `YYYY-MM-DDTHH:MM` text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EventDraft {
    pub title: String,
    pub description: String,
    pub start: String,
    pub end: String,
    pub color: String,
    pub category: String,
}

/// Draft that passed validation, with parsed values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidDraft {
    pub title: String,
    pub description: Option<String>,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub color: EventColor,
    pub category: Option<String>,
}

impl EventDraft {
    pub fn spanning(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self {
            start: format_datetime(start),
            end: format_datetime(end),
            color: EventColor::default().name().to_string(),
            ..Self::default()
        }
    }

    pub fn from_event(event: &CalendarEvent) -> Self {
        Self {
            title: event.title.clone(),
            description: event.description.clone().unwrap_or_default(),
            start: format_datetime(event.start),
            end: format_datetime(event.end),
            color: event.color.name().to_string(),
            category: event.category.clone().unwrap_or_default(),
        }
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Title => &self.title,
            FormField::Description => &self.description,
            FormField::Start => &self.start,
            FormField::End => &self.end,
            FormField::Color => &self.color,
            FormField::Category => &self.category,
        }
    }

    pub fn set(&mut self, field: FormField, value: String) {
        let slot = match field {
            FormField::Title => &mut self.title,
            FormField::Description => &mut self.description,
            FormField::Start => &mut self.start,
            FormField::End => &mut self.end,
            FormField::Color => &mut self.color,
            FormField::Category => &mut self.category,
        };
        *slot = value;
    }

    /// Check every rule, collecting one error per failing field.
    ///
    /// Unparseable dates are reported on their own field and skip the
    /// start/end ordering check.
    pub fn validate(&self) -> Result<ValidDraft, FieldErrors> {
        let mut errors = FieldErrors::new();

        let title = self.title.trim();
        if title.is_empty() {
            errors.insert(FormField::Title, ValidationError::TitleRequired);
        }

        let start = parse_datetime(&self.start);
        if start.is_none() {
            errors.insert(FormField::Start, ValidationError::InvalidStart);
        }
        let end = parse_datetime(&self.end);
        if end.is_none() {
            errors.insert(FormField::End, ValidationError::InvalidEnd);
        }
        if let (Some(start), Some(end)) = (start, end) {
            if end <= start {
                errors.insert(FormField::End, ValidationError::EndNotAfterStart);
            }
        }

        let color = self.color.parse::<EventColor>().ok();
        if color.is_none() {
            errors.insert(FormField::Color, ValidationError::UnknownColor);
        }

        match (start, end, color) {
            (Some(start), Some(end), Some(color)) if errors.is_empty() => Ok(ValidDraft {
                title: title.to_string(),
                description: non_empty(&self.description),
                start,
                end,
                color,
                category: non_empty(&self.category),
            }),
            _ => Err(errors),
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn at(h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 10, 29)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    fn valid_draft() -> EventDraft {
        EventDraft {
            title: "Planning".to_string(),
            ..EventDraft::spanning(at(9), at(10))
        }
    }

    #[test]
    fn test_valid_draft_parses() {
        let valid = valid_draft().validate().unwrap();
        assert_eq!(valid.start, at(9));
        assert_eq!(valid.end, at(10));
        assert_eq!(valid.color, EventColor::Blue);
        assert_eq!(valid.description, None);
    }

    #[test]
    fn test_blank_title_rejected() {
        let mut draft = valid_draft();
        draft.title = "   ".to_string();
        let errors = draft.validate().unwrap_err();
        assert_eq!(errors.get(&FormField::Title), Some(&ValidationError::TitleRequired));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_equal_and_inverted_ranges_rejected() {
        let mut draft = valid_draft();
        draft.end = draft.start.clone();
        assert_eq!(
            draft.validate().unwrap_err().get(&FormField::End),
            Some(&ValidationError::EndNotAfterStart)
        );

        draft.end = format_datetime(at(8));
        assert!(draft.validate().is_err());
    }

    #[test]
    fn test_malformed_date_skips_range_check() {
        let mut draft = valid_draft();
        draft.start = "2025-13-40T09:00".to_string();
        let errors = draft.validate().unwrap_err();
        assert_eq!(errors.get(&FormField::Start), Some(&ValidationError::InvalidStart));
        assert_eq!(errors.get(&FormField::End), None);
    }

    #[test]
    fn test_off_palette_color_rejected() {
        let mut draft = valid_draft();
        draft.color = "#123456".to_string();
        let errors = draft.validate().unwrap_err();
        assert_eq!(errors.get(&FormField::Color), Some(&ValidationError::UnknownColor));
    }

    #[test]
    fn test_collects_all_errors() {
        let draft = EventDraft::default();
        let errors = draft.validate().unwrap_err();
        let fields: Vec<_> = errors.keys().copied().collect();
        assert_eq!(
            fields,
            vec![FormField::Title, FormField::Start, FormField::End, FormField::Color]
        );
    }

    #[test]
    fn test_optional_text_trimmed_to_none() {
        let mut draft = valid_draft();
        draft.description = "  ".to_string();
        draft.category = " Work ".to_string();
        let valid = draft.validate().unwrap();
        assert_eq!(valid.description, None);
        assert_eq!(valid.category.as_deref(), Some("Work"));
    }

    #[test]
    fn test_field_names_round_trip() {
        for field in FormField::ALL {
            assert_eq!(field.name().parse::<FormField>(), Ok(field));
        }
        assert!("location".parse::<FormField>().is_err());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(ValidationError::TitleRequired.to_string(), "Event title is required");
        assert_eq!(
            ValidationError::EndNotAfterStart.to_string(),
            "Event must end after it starts"
        );
    }
}
