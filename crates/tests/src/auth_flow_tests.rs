use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::{AuthSession, Hydration, UserRole};

use crate::common::{signed_in, stored_json};

#[test]
fn sign_in_then_out_leaves_no_role() {
    let mut session = signed_in(UserRole::Teacher);
    assert_eq!(stored_json(&session), json!({ "isLoggedIn": true, "role": "teacher" }));

    session.sign_out();
    assert_eq!(stored_json(&session), json!({ "isLoggedIn": false, "role": null }));
    assert_eq!(session.to_stored(), None);
}

#[test]
fn stored_record_survives_reload() {
    for role in [UserRole::Student, UserRole::Teacher] {
        let stored = signed_in(role).to_stored();
        let restored = AuthSession::from_stored(stored.as_deref());
        assert_eq!(restored, AuthSession::SignedIn(role));
    }
}

#[test]
fn switching_roles_replaces_the_previous_one() {
    let mut session = signed_in(UserRole::Student);
    session.sign_in(UserRole::Teacher);
    assert_eq!(session.role(), Some(UserRole::Teacher));
}

#[test]
fn damaged_records_restore_signed_out() {
    let cases = [
        None,
        Some(""),
        Some("not json"),
        Some(r#"{"isLoggedIn":true,"role":null}"#),
        Some(r#"{"isLoggedIn":false,"role":"student"}"#),
        Some(r#"{"isLoggedIn":true,"role":"admin"}"#),
    ];
    for raw in cases {
        assert_eq!(AuthSession::from_stored(raw), AuthSession::SignedOut, "input: {raw:?}");
    }
}

#[test]
fn malformed_record_reports_an_error() {
    assert!(AuthSession::parse_stored(r#"{"isLoggedIn":true}"#).is_err());
}

#[test]
fn sign_in_during_hydration_beats_the_stored_record() {
    let stored = AuthSession::from_stored(Some(r#"{"isLoggedIn":true,"role":"student"}"#));
    // Header sign-in lands before the storage read resolves and settles hydration.
    let live = signed_in(UserRole::Teacher);
    let mut hydration = Hydration::Ready;

    assert_eq!(hydration.settle(live, stored), AuthSession::SignedIn(UserRole::Teacher));
}

#[test]
fn sign_out_during_hydration_is_not_undone() {
    let stored = AuthSession::SignedIn(UserRole::Student);
    let mut hydration = Hydration::Ready;
    assert_eq!(hydration.settle(AuthSession::SignedOut, stored), AuthSession::SignedOut);
}

#[test]
fn untouched_session_adopts_the_stored_record() {
    let stored = AuthSession::SignedIn(UserRole::Student);
    let mut hydration = Hydration::default();
    assert_eq!(hydration.settle(AuthSession::SignedOut, stored), stored);
    assert_eq!(hydration, Hydration::Ready);
}
