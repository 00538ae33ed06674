use serde::{Deserialize, Serialize};

use crate::booking::ValidBooking;
use crate::format::{format_date_long, format_duration_minutes, format_time_12h};
use crate::AppError;

/// Lifecycle of a counselling appointment.
///
/// `Upcoming → Cancelled` is the only transition the UI can trigger;
/// `Completed` sessions come from seed data.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    Upcoming,
    Completed,
    Cancelled,
}

impl SessionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionStatus::Upcoming => "upcoming",
            SessionStatus::Completed => "completed",
            SessionStatus::Cancelled => "cancelled",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SessionStatus::Upcoming => "Upcoming",
            SessionStatus::Completed => "Completed",
            SessionStatus::Cancelled => "Cancelled",
        }
    }

    /// Cancel and Reschedule are only offered for upcoming sessions.
    pub fn is_upcoming(&self) -> bool {
        matches!(self, SessionStatus::Upcoming)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Counselor {
    pub name: String,
    pub department: String,
}

/// A selectable counselor in the booking form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CounselorOption {
    pub id: String,
    pub name: String,
    pub department: String,
}

impl CounselorOption {
    pub fn label(&self) -> String {
        format!("{} - {}", self.name, self.department)
    }

    pub fn to_counselor(&self) -> Counselor {
        Counselor {
            name: self.name.clone(),
            department: self.department.clone(),
        }
    }
}

/// A counselling appointment. Display fields are stored pre-formatted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Session {
    pub id: String,
    pub title: String,
    pub date: String,
    pub time: String,
    pub duration: String,
    pub counselor: Counselor,
    pub location: String,
    pub status: SessionStatus,
    pub description: String,
}

/// In-memory, newest-first list of sessions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionBook {
    sessions: Vec<Session>,
}

impl SessionBook {
    pub fn new(sessions: Vec<Session>) -> Self {
        Self { sessions }
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Session> {
        self.sessions.iter()
    }

    pub fn get(&self, id: &str) -> Option<&Session> {
        self.sessions.iter().find(|s| s.id == id)
    }

    pub fn upcoming(&self) -> impl Iterator<Item = &Session> {
        self.sessions.iter().filter(|s| s.status.is_upcoming())
    }

    /// Create an upcoming session from a validated booking and put it first.
    ///
    /// The id is derived from `now_millis`; a numeric suffix keeps it unique
    /// when two bookings land in the same millisecond.
    pub fn book(
        &mut self,
        booking: &ValidBooking,
        counselors: &[CounselorOption],
        now_millis: i64,
    ) -> Result<&Session, AppError> {
        let counselor = counselors
            .iter()
            .find(|c| c.id == booking.counselor_id)
            .ok_or_else(|| AppError::not_found("Selected counselor is no longer available"))?;

        let session = Session {
            id: self.next_id(now_millis),
            title: booking.title.trim().to_string(),
            date: format_date_long(&booking.date),
            time: format_time_12h(&booking.time),
            duration: format_duration_minutes(&booking.duration),
            counselor: counselor.to_counselor(),
            location: booking.location.clone(),
            status: SessionStatus::Upcoming,
            description: booking.description.clone(),
        };
        self.sessions.insert(0, session);
        Ok(&self.sessions[0])
    }

    /// Mark a session cancelled in place. No other field changes.
    pub fn cancel(&mut self, id: &str) -> Result<(), AppError> {
        let session = self
            .sessions
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| AppError::not_found(format!("No session with id {id}")))?;

        match session.status {
            SessionStatus::Upcoming => {
                session.status = SessionStatus::Cancelled;
                Ok(())
            }
            SessionStatus::Cancelled => Ok(()),
            SessionStatus::Completed => Err(AppError::conflict(
                "Completed sessions cannot be cancelled",
            )),
        }
    }

    fn next_id(&self, now_millis: i64) -> String {
        let base = format!("session-{now_millis}");
        if self.get(&base).is_none() {
            return base;
        }
        (1..)
            .map(|n| format!("{base}-{n}"))
            .find(|candidate| self.get(candidate).is_none())
            .unwrap_or(base)
    }
}

impl From<Vec<Session>> for SessionBook {
    fn from(sessions: Vec<Session>) -> Self {
        Self::new(sessions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::{BookingDraft, BookingField};
    use crate::fixtures;
    use pretty_assertions::assert_eq;

    fn valid_booking() -> ValidBooking {
        let mut draft = BookingDraft::default();
        draft.set(BookingField::Title, "Exam stress");
        draft.set(BookingField::Counselor, "2");
        draft.set(BookingField::Date, "2023-06-01");
        draft.set(BookingField::Time, "14:30");
        draft.set(BookingField::Duration, "45");
        draft.set(BookingField::Location, "Library");
        draft.validate().unwrap()
    }

    #[test]
    fn book_prepends_upcoming_session() {
        let mut book = SessionBook::new(fixtures::student_sessions());
        let before = book.len();

        let created = book
            .book(&valid_booking(), &fixtures::counselors(), 1_700_000_000_000)
            .unwrap()
            .clone();

        assert_eq!(book.len(), before + 1);
        assert_eq!(book.iter().next(), Some(&created));
        assert_eq!(created.id, "session-1700000000000");
        assert_eq!(created.status, SessionStatus::Upcoming);
        assert_eq!(created.date, "June 1, 2023");
        assert_eq!(created.time, "2:30 PM");
        assert_eq!(created.duration, "45 mins");
        assert_eq!(created.location, "Library");
        assert_eq!(created.counselor.name, "Dr. Lakshmi Menon");
    }

    #[test]
    fn book_with_unknown_counselor_leaves_list_unchanged() {
        let mut book = SessionBook::new(fixtures::student_sessions());
        let snapshot = book.clone();
        let mut booking = valid_booking();
        booking.counselor_id = "99".into();

        let err = book.book(&booking, &fixtures::counselors(), 1).unwrap_err();
        assert_eq!(err.kind, crate::AppErrorKind::NotFound);
        assert_eq!(book, snapshot);
    }

    #[test]
    fn ids_stay_unique_within_one_millisecond() {
        let mut book = SessionBook::default();
        let counselors = fixtures::counselors();
        book.book(&valid_booking(), &counselors, 42).unwrap();
        book.book(&valid_booking(), &counselors, 42).unwrap();
        book.book(&valid_booking(), &counselors, 42).unwrap();
        let ids: Vec<_> = book.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["session-42-2", "session-42-1", "session-42"]);
    }

    #[test]
    fn cancel_changes_only_status() {
        let mut book = SessionBook::new(fixtures::student_sessions());
        let before = book.clone();

        book.cancel("1").unwrap();

        let cancelled = book.get("1").unwrap();
        let mut expected = before.get("1").unwrap().clone();
        expected.status = SessionStatus::Cancelled;
        assert_eq!(cancelled, &expected);
        assert_eq!(book.get("2"), before.get("2"));
    }

    #[test]
    fn cancel_is_idempotent_and_terminal() {
        let mut book = SessionBook::new(fixtures::student_sessions());
        book.cancel("1").unwrap();
        book.cancel("1").unwrap();
        assert_eq!(book.get("1").unwrap().status, SessionStatus::Cancelled);
    }

    #[test]
    fn cancel_rejects_completed_and_unknown() {
        let mut book = SessionBook::new(fixtures::student_sessions());
        let completed = book.cancel("2").unwrap_err();
        assert_eq!(completed.kind, crate::AppErrorKind::Conflict);
        assert_eq!(book.get("2").unwrap().status, SessionStatus::Completed);

        let missing = book.cancel("nope").unwrap_err();
        assert_eq!(missing.kind, crate::AppErrorKind::NotFound);
    }

    #[test]
    fn upcoming_filters_by_status() {
        let book = SessionBook::new(fixtures::student_sessions());
        let titles: Vec<_> = book.upcoming().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["Academic Performance Review"]);
    }

    #[test]
    fn status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&SessionStatus::Cancelled).unwrap(),
            "\"cancelled\""
        );
    }
}
