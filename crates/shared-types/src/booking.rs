use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::AppError;

/// Inputs of the booking form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BookingField {
    Title,
    Counselor,
    Date,
    Time,
    Duration,
    Location,
    Description,
}

impl BookingField {
    /// Name used for the input element and the error map.
    pub fn key(&self) -> &'static str {
        match self {
            BookingField::Title => "title",
            BookingField::Counselor => "counselorId",
            BookingField::Date => "date",
            BookingField::Time => "time",
            BookingField::Duration => "duration",
            BookingField::Location => "location",
            BookingField::Description => "description",
        }
    }

    fn required_message(&self) -> Option<&'static str> {
        match self {
            BookingField::Title => Some("Title is required"),
            BookingField::Counselor => Some("Please select a counselor"),
            BookingField::Date => Some("Date is required"),
            BookingField::Time => Some("Time is required"),
            BookingField::Duration | BookingField::Location | BookingField::Description => None,
        }
    }
}

pub const REQUIRED_FIELDS: [BookingField; 4] = [
    BookingField::Title,
    BookingField::Counselor,
    BookingField::Date,
    BookingField::Time,
];

/// Duration choices in minutes.
pub const DURATION_OPTIONS: &[(&str, &str)] = &[
    ("15", "15 minutes"),
    ("30", "30 minutes"),
    ("45", "45 minutes"),
    ("60", "60 minutes"),
];

/// Location choices as (stored value, label).
pub const LOCATION_OPTIONS: &[(&str, &str)] = &[
    ("Online", "Online Meeting"),
    ("Office", "Faculty Office"),
    ("Library", "Library"),
    ("Study Room", "Study Room"),
];

/// Raw, possibly incomplete form state plus per-field errors.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingDraft {
    pub title: String,
    pub counselor_id: String,
    pub date: String,
    pub time: String,
    pub duration: String,
    pub location: String,
    pub description: String,
    errors: HashMap<String, String>,
}

impl Default for BookingDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            counselor_id: String::new(),
            date: String::new(),
            time: String::new(),
            duration: "30".to_string(),
            location: "Online".to_string(),
            description: String::new(),
            errors: HashMap::new(),
        }
    }
}

/// Booking values that passed validation; the only input `SessionBook::book` accepts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidBooking {
    pub title: String,
    pub counselor_id: String,
    pub date: String,
    pub time: String,
    pub duration: String,
    pub location: String,
    pub description: String,
}

impl BookingDraft {
    pub fn get(&self, field: BookingField) -> &str {
        match field {
            BookingField::Title => &self.title,
            BookingField::Counselor => &self.counselor_id,
            BookingField::Date => &self.date,
            BookingField::Time => &self.time,
            BookingField::Duration => &self.duration,
            BookingField::Location => &self.location,
            BookingField::Description => &self.description,
        }
    }

    /// Update one field and clear any error it was showing.
    pub fn set(&mut self, field: BookingField, value: impl Into<String>) {
        let value = value.into();
        match field {
            BookingField::Title => self.title = value,
            BookingField::Counselor => self.counselor_id = value,
            BookingField::Date => self.date = value,
            BookingField::Time => self.time = value,
            BookingField::Duration => self.duration = value,
            BookingField::Location => self.location = value,
            BookingField::Description => self.description = value,
        }
        self.errors.remove(field.key());
    }

    pub fn error(&self, field: BookingField) -> Option<&str> {
        self.errors.get(field.key()).map(String::as_str)
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Check the four required fields.
    ///
    /// Only emptiness is checked: no future-date, duplicate or conflict checks.
    pub fn validate(&self) -> Result<ValidBooking, AppError> {
        let field_errors: HashMap<String, String> = REQUIRED_FIELDS
            .iter()
            .filter(|f| self.get(**f).trim().is_empty())
            .filter_map(|f| f.required_message().map(|m| (f.key().to_string(), m.to_string())))
            .collect();

        if !field_errors.is_empty() {
            return Err(AppError::validation("Validation failed", field_errors));
        }

        Ok(ValidBooking {
            title: self.title.clone(),
            counselor_id: self.counselor_id.clone(),
            date: self.date.clone(),
            time: self.time.clone(),
            duration: self.duration.clone(),
            location: self.location.clone(),
            description: self.description.clone(),
        })
    }

    /// Validate and remember the resulting field errors for inline display.
    pub fn submit(&mut self) -> Result<ValidBooking, AppError> {
        match self.validate() {
            Ok(valid) => {
                self.errors.clear();
                Ok(valid)
            }
            Err(err) => {
                self.errors = err.field_errors.clone();
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AppErrorKind;

    fn filled() -> BookingDraft {
        let mut draft = BookingDraft::default();
        draft.set(BookingField::Title, "Career guidance");
        draft.set(BookingField::Counselor, "1");
        draft.set(BookingField::Date, "2023-05-30");
        draft.set(BookingField::Time, "10:00");
        draft
    }

    #[test]
    fn defaults_match_form_initial_state() {
        let draft = BookingDraft::default();
        assert_eq!(draft.duration, "30");
        assert_eq!(draft.location, "Online");
        assert!(!draft.has_errors());
    }

    #[test]
    fn empty_draft_reports_every_required_field() {
        let err = BookingDraft::default().validate().unwrap_err();
        assert_eq!(err.kind, AppErrorKind::ValidationError);
        assert_eq!(err.field_errors.len(), 4);
        assert_eq!(err.field("title"), Some("Title is required"));
        assert_eq!(err.field("counselorId"), Some("Please select a counselor"));
        assert_eq!(err.field("date"), Some("Date is required"));
        assert_eq!(err.field("time"), Some("Time is required"));
    }

    #[test]
    fn whitespace_title_is_missing() {
        let mut draft = filled();
        draft.set(BookingField::Title, "   ");
        let err = draft.validate().unwrap_err();
        assert_eq!(err.field_errors.len(), 1);
        assert!(err.field("title").is_some());
    }

    #[test]
    fn optional_fields_are_never_required() {
        let mut draft = filled();
        draft.set(BookingField::Description, "");
        draft.set(BookingField::Location, "");
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn submit_stores_errors_and_set_clears_them() {
        let mut draft = BookingDraft::default();
        assert!(draft.submit().is_err());
        assert_eq!(draft.error(BookingField::Date), Some("Date is required"));

        draft.set(BookingField::Date, "2023-05-30");
        assert_eq!(draft.error(BookingField::Date), None);
        assert_eq!(draft.error(BookingField::Time), Some("Time is required"));
    }

    #[test]
    fn successful_submit_returns_raw_values() {
        let mut draft = filled();
        let valid = draft.submit().unwrap();
        assert_eq!(valid.title, "Career guidance");
        assert_eq!(valid.counselor_id, "1");
        assert_eq!(valid.date, "2023-05-30");
        assert_eq!(valid.duration, "30");
        assert!(!draft.has_errors());
    }
}
