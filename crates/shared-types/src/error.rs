use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Categorization of application errors.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AppErrorKind {
    NotFound,
    ValidationError,
    Conflict,
    Storage,
}

impl fmt::Display for AppErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppErrorKind::NotFound => write!(f, "NotFound"),
            AppErrorKind::ValidationError => write!(f, "ValidationError"),
            AppErrorKind::Conflict => write!(f, "Conflict"),
            AppErrorKind::Storage => write!(f, "Storage"),
        }
    }
}

/// Structured error returned by every fallible state transition.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppError {
    pub kind: AppErrorKind,
    pub message: String,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub field_errors: HashMap<String, String>,
}

impl AppError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::NotFound,
            message: message.into(),
            field_errors: HashMap::new(),
        }
    }

    pub fn validation(message: impl Into<String>, field_errors: HashMap<String, String>) -> Self {
        Self {
            kind: AppErrorKind::ValidationError,
            message: message.into(),
            field_errors,
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::Conflict,
            message: message.into(),
            field_errors: HashMap::new(),
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::Storage,
            message: message.into(),
            field_errors: HashMap::new(),
        }
    }

    /// Message for a single field, if validation flagged it.
    pub fn field(&self, key: &str) -> Option<&str> {
        self.field_errors.get(key).map(String::as_str)
    }

    /// User-facing text for a toast: the message, or a generic fallback when empty.
    pub fn friendly_message(&self) -> String {
        if self.message.trim().is_empty() {
            "Something went wrong. Please try again.".to_string()
        } else {
            self.message.clone()
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for AppError {}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::storage(format!("Malformed stored record: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_error_has_correct_kind() {
        let err = AppError::not_found("missing session");
        assert_eq!(err.kind, AppErrorKind::NotFound);
        assert_eq!(err.message, "missing session");
        assert!(err.field_errors.is_empty());
    }

    #[test]
    fn validation_error_includes_field_errors() {
        let mut fields = HashMap::new();
        fields.insert("title".to_string(), "Title is required".to_string());
        let err = AppError::validation("Validation failed", fields);
        assert_eq!(err.kind, AppErrorKind::ValidationError);
        assert_eq!(err.field("title"), Some("Title is required"));
        assert_eq!(err.field("date"), None);
    }

    #[test]
    fn display_impl_formats_correctly() {
        let err = AppError::conflict("session already completed");
        assert_eq!(format!("{}", err), "Conflict: session already completed");
    }

    #[test]
    fn friendly_message_falls_back_when_blank() {
        assert_eq!(
            AppError::storage("  ").friendly_message(),
            "Something went wrong. Please try again."
        );
        assert_eq!(AppError::not_found("Gone").friendly_message(), "Gone");
    }

    #[test]
    fn json_errors_become_storage_errors() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: AppError = parse_err.into();
        assert_eq!(err.kind, AppErrorKind::Storage);
        assert!(err.message.starts_with("Malformed stored record"));
    }

    #[test]
    fn field_errors_are_omitted_from_json_when_empty() {
        let json = serde_json::to_string(&AppError::not_found("x")).unwrap();
        assert!(!json.contains("field_errors"));
    }
}
