use shared_types::{
    fixtures, AuthSession, BookingDraft, BookingField, SessionBook, UserRole, ValidBooking,
};

/// Fixed clock value used for booking ids.
pub const NOW_MILLIS: i64 = 1_684_999_999_000;

pub fn signed_in(role: UserRole) -> AuthSession {
    let mut session = AuthSession::default();
    session.sign_in(role);
    session
}

/// Draft with every required field filled for the first seeded counselor.
pub fn filled_draft() -> BookingDraft {
    let mut draft = BookingDraft::default();
    draft.set(BookingField::Title, "Internship planning");
    draft.set(BookingField::Counselor, "1");
    draft.set(BookingField::Date, "2023-06-02");
    draft.set(BookingField::Time, "14:30");
    draft
}

pub fn valid_booking() -> ValidBooking {
    filled_draft()
        .validate()
        .expect("filled draft should validate")
}

pub fn student_book() -> SessionBook {
    SessionBook::new(fixtures::student_sessions())
}

/// Parse a stored auth value the way the browser would hand it back.
pub fn stored_json(session: &AuthSession) -> serde_json::Value {
    serde_json::to_value(session.to_record()).expect("record serializes")
}
