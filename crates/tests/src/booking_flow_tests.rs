use pretty_assertions::assert_eq;
use shared_types::{
    fixtures, AppErrorKind, BookingDraft, BookingField, SessionStatus, REQUIRED_FIELDS,
};

use crate::common::{filled_draft, student_book, valid_booking, NOW_MILLIS};

#[test]
fn valid_booking_is_prepended_as_upcoming() {
    let mut book = student_book();
    let before = book.len();

    let created = book
        .book(&valid_booking(), &fixtures::counselors(), NOW_MILLIS)
        .expect("booking succeeds")
        .clone();

    assert_eq!(book.len(), before + 1);
    assert_eq!(book.iter().next(), Some(&created));
    assert_eq!(created.id, format!("session-{NOW_MILLIS}"));
    assert_eq!(created.status, SessionStatus::Upcoming);
    assert_eq!(created.title, "Internship planning");
    assert_eq!(created.date, "June 2, 2023");
    assert_eq!(created.time, "2:30 PM");
    assert_eq!(created.duration, "30 mins");
    assert_eq!(created.location, "Online");
    assert_eq!(created.counselor.name, "Dr. Srinivas Rao");
    assert_eq!(created.counselor.department, "Computer Science");
}

#[test]
fn empty_form_reports_every_required_field() {
    let mut draft = BookingDraft::default();
    let err = draft.submit().unwrap_err();

    assert_eq!(err.kind, AppErrorKind::ValidationError);
    assert_eq!(err.field_errors.len(), REQUIRED_FIELDS.len());
    assert_eq!(draft.error(BookingField::Title), Some("Title is required"));
    assert_eq!(draft.error(BookingField::Counselor), Some("Please select a counselor"));
    assert_eq!(draft.error(BookingField::Date), Some("Date is required"));
    assert_eq!(draft.error(BookingField::Time), Some("Time is required"));
}

#[test]
fn each_blank_required_field_is_reported_alone() {
    for field in REQUIRED_FIELDS {
        let mut draft = filled_draft();
        draft.set(field, "   ");

        let err = draft.submit().unwrap_err();
        assert_eq!(err.kind, AppErrorKind::ValidationError);
        assert_eq!(err.field_errors.len(), 1, "blanked {field:?}");
        assert!(err.field_errors.contains_key(field.key()), "blanked {field:?}");
        assert!(draft.error(field).is_some_and(|msg| !msg.is_empty()), "blanked {field:?}");
        for other in REQUIRED_FIELDS.iter().filter(|f| **f != field) {
            assert_eq!(draft.error(*other), None, "blanked {field:?}");
        }
    }
}

#[test]
fn editing_a_field_clears_only_its_error() {
    let mut draft = BookingDraft::default();
    let _ = draft.submit();

    draft.set(BookingField::Date, "2023-06-02");
    assert_eq!(draft.error(BookingField::Date), None);
    assert_eq!(draft.error(BookingField::Time), Some("Time is required"));
}

#[test]
fn two_bookings_in_the_same_millisecond_get_distinct_ids() {
    let mut book = student_book();
    let counselors = fixtures::counselors();
    let first = book.book(&valid_booking(), &counselors, NOW_MILLIS).unwrap().id.clone();
    let second = book.book(&valid_booking(), &counselors, NOW_MILLIS).unwrap().id.clone();
    assert_ne!(first, second);
}

#[test]
fn unknown_counselor_is_not_found() {
    let mut book = student_book();
    let mut draft = filled_draft();
    draft.set(BookingField::Counselor, "99");
    let booking = draft.validate().unwrap();

    let err = book.book(&booking, &fixtures::counselors(), NOW_MILLIS).unwrap_err();
    assert_eq!(err.kind, AppErrorKind::NotFound);
    assert_eq!(book, student_book());
}
