use pretty_assertions::assert_eq;
use shared_types::{guard, Access, AuthSession, RedirectTarget, UserRole};

use crate::common::signed_in;

#[test]
fn signed_out_visitors_are_sent_home_from_both_portals() {
    for required in [UserRole::Student, UserRole::Teacher] {
        assert_eq!(
            guard(&AuthSession::SignedOut, required),
            Access::Redirect(RedirectTarget::Home)
        );
    }
}

#[test]
fn wrong_role_is_sent_home() {
    assert_eq!(
        guard(&signed_in(UserRole::Teacher), UserRole::Student),
        Access::Redirect(RedirectTarget::Home)
    );
    assert_eq!(
        guard(&signed_in(UserRole::Student), UserRole::Teacher),
        Access::Redirect(RedirectTarget::Home)
    );
}

#[test]
fn matching_role_is_granted() {
    for role in [UserRole::Student, UserRole::Teacher] {
        assert_eq!(guard(&signed_in(role), role), Access::Granted);
    }
}

#[test]
fn redirect_target_is_the_landing_page() {
    assert_eq!(RedirectTarget::Home.path(), "/");
}
