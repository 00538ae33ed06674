use pretty_assertions::assert_eq;
use shared_types::{AppErrorKind, SessionStatus};

use crate::common::student_book;

fn first_with(status: SessionStatus) -> String {
    student_book()
        .iter()
        .find(|s| s.status == status)
        .map(|s| s.id.clone())
        .expect("seed data has a session with this status")
}

#[test]
fn cancel_changes_only_the_status() {
    let mut book = student_book();
    let id = first_with(SessionStatus::Upcoming);
    let before = book.get(&id).cloned().unwrap();

    book.cancel(&id).unwrap();

    let after = book.get(&id).cloned().unwrap();
    assert_eq!(after.status, SessionStatus::Cancelled);
    let mut expected = before;
    expected.status = SessionStatus::Cancelled;
    assert_eq!(after, expected);
}

#[test]
fn cancel_keeps_order_and_length() {
    let mut book = student_book();
    let ids: Vec<String> = book.iter().map(|s| s.id.clone()).collect();

    book.cancel(&first_with(SessionStatus::Upcoming)).unwrap();

    let after: Vec<String> = book.iter().map(|s| s.id.clone()).collect();
    assert_eq!(after, ids);
}

#[test]
fn cancelled_session_drops_out_of_upcoming() {
    let mut book = student_book();
    let id = first_with(SessionStatus::Upcoming);
    book.cancel(&id).unwrap();
    assert!(book.upcoming().all(|s| s.id != id));
}

#[test]
fn completed_session_cannot_be_cancelled() {
    let mut book = student_book();
    let err = book.cancel(&first_with(SessionStatus::Completed)).unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Conflict);
}

#[test]
fn unknown_id_is_not_found() {
    let mut book = student_book();
    let err = book.cancel("missing").unwrap_err();
    assert_eq!(err.kind, AppErrorKind::NotFound);
    assert_eq!(book, student_book());
}
