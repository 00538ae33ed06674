use serde::{Deserialize, Serialize};

use crate::AppError;

/// Role claimed at sign-in. Client-supplied and never verified.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Student,
    Teacher,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Student => "student",
            UserRole::Teacher => "teacher",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            UserRole::Student => "Student",
            UserRole::Teacher => "Teacher",
        }
    }

    /// Landing route of the role's portal.
    pub fn portal_path(&self) -> &'static str {
        match self {
            UserRole::Student => "/student",
            UserRole::Teacher => "/teacher",
        }
    }
}

/// Client-side sign-in state.
///
/// A role exists exactly when the visitor is signed in, so the pair
/// `{isLoggedIn, role}` can never disagree in memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthSession {
    #[default]
    SignedOut,
    SignedIn(UserRole),
}

/// Serialized echo kept in browser storage under [`AUTH_STORAGE_KEY`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AuthRecord {
    pub is_logged_in: bool,
    pub role: Option<UserRole>,
}

pub const AUTH_STORAGE_KEY: &str = "auth";

impl AuthSession {
    pub fn is_logged_in(&self) -> bool {
        matches!(self, AuthSession::SignedIn(_))
    }

    pub fn role(&self) -> Option<UserRole> {
        match self {
            AuthSession::SignedIn(role) => Some(*role),
            AuthSession::SignedOut => None,
        }
    }

    pub fn sign_in(&mut self, role: UserRole) {
        *self = AuthSession::SignedIn(role);
    }

    pub fn sign_out(&mut self) {
        *self = AuthSession::SignedOut;
    }

    pub fn to_record(&self) -> AuthRecord {
        AuthRecord {
            is_logged_in: self.is_logged_in(),
            role: self.role(),
        }
    }

    /// Strict conversion from a stored record; contradictory records are rejected.
    pub fn try_from_record(record: &AuthRecord) -> Result<Self, AppError> {
        match (record.is_logged_in, record.role) {
            (true, Some(role)) => Ok(AuthSession::SignedIn(role)),
            (false, None) => Ok(AuthSession::SignedOut),
            (true, None) => Err(AppError::storage("Signed-in record without a role")),
            (false, Some(_)) => Err(AppError::storage("Signed-out record carries a role")),
        }
    }

    /// Parse the raw stored value.
    pub fn parse_stored(raw: &str) -> Result<Self, AppError> {
        let record: AuthRecord = serde_json::from_str(raw)?;
        Self::try_from_record(&record)
    }

    /// Restore from storage. Missing or malformed values mean signed out.
    pub fn from_stored(raw: Option<&str>) -> Self {
        raw.and_then(|s| Self::parse_stored(s).ok())
            .unwrap_or_default()
    }

    /// Value to write back to storage, or `None` when the key should be removed.
    pub fn to_stored(&self) -> Option<String> {
        if !self.is_logged_in() {
            return None;
        }
        serde_json::to_string(&self.to_record()).ok()
    }
}

/// Whether the stored auth record has been read yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Hydration {
    #[default]
    Pending,
    Ready,
}

impl Hydration {
    /// Pick the session to keep once the stored record arrives, and mark
    /// hydration complete.
    ///
    /// A sign-in or sign-out made during the read settles hydration early;
    /// a record arriving after that is stale and `live` is kept.
    pub fn settle(&mut self, live: AuthSession, stored: AuthSession) -> AuthSession {
        let kept = match self {
            Hydration::Pending => stored,
            Hydration::Ready => live,
        };
        *self = Hydration::Ready;
        kept
    }
}

/// Where a refused visitor is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectTarget {
    Home,
}

impl RedirectTarget {
    pub fn path(&self) -> &'static str {
        match self {
            RedirectTarget::Home => "/",
        }
    }
}

/// Outcome of a route guard evaluated before a page is constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Granted,
    Redirect(RedirectTarget),
}

/// Decide whether `session` may enter a page reserved for `required`.
///
/// This is a navigation convenience, not an access-control boundary: the
/// role it checks was never authenticated.
pub fn guard(session: &AuthSession, required: UserRole) -> Access {
    match session {
        AuthSession::SignedIn(role) if *role == required => Access::Granted,
        AuthSession::SignedIn(_) | AuthSession::SignedOut => Access::Redirect(RedirectTarget::Home),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_session_is_signed_out() {
        let session = AuthSession::default();
        assert!(!session.is_logged_in());
        assert_eq!(session.role(), None);
    }

    #[test]
    fn sign_in_sets_both_fields() {
        let mut session = AuthSession::default();
        session.sign_in(UserRole::Teacher);
        assert_eq!(
            session.to_record(),
            AuthRecord {
                is_logged_in: true,
                role: Some(UserRole::Teacher)
            }
        );
    }

    #[test]
    fn sign_out_clears_both_fields() {
        let mut session = AuthSession::SignedIn(UserRole::Student);
        session.sign_out();
        assert_eq!(
            session.to_record(),
            AuthRecord {
                is_logged_in: false,
                role: None
            }
        );
        assert_eq!(session.to_stored(), None);
    }

    #[test]
    fn stored_record_uses_camel_case_keys() {
        let stored = AuthSession::SignedIn(UserRole::Student).to_stored().unwrap();
        assert_eq!(stored, r#"{"isLoggedIn":true,"role":"student"}"#);
    }

    #[test]
    fn from_stored_restores_signed_in_session() {
        let restored = AuthSession::from_stored(Some(r#"{"isLoggedIn":true,"role":"teacher"}"#));
        assert_eq!(restored, AuthSession::SignedIn(UserRole::Teacher));
    }

    #[test]
    fn from_stored_defaults_on_missing_or_malformed() {
        assert_eq!(AuthSession::from_stored(None), AuthSession::SignedOut);
        assert_eq!(AuthSession::from_stored(Some("not json")), AuthSession::SignedOut);
        assert_eq!(
            AuthSession::from_stored(Some(r#"{"isLoggedIn":true,"role":"admin"}"#)),
            AuthSession::SignedOut
        );
    }

    #[test]
    fn contradictory_records_are_rejected() {
        assert!(AuthSession::parse_stored(r#"{"isLoggedIn":true,"role":null}"#).is_err());
        assert!(AuthSession::parse_stored(r#"{"isLoggedIn":false,"role":"student"}"#).is_err());
        assert_eq!(
            AuthSession::from_stored(Some(r#"{"isLoggedIn":false,"role":"student"}"#)),
            AuthSession::SignedOut
        );
    }

    #[test]
    fn guard_grants_matching_role_only() {
        let student = AuthSession::SignedIn(UserRole::Student);
        let teacher = AuthSession::SignedIn(UserRole::Teacher);
        assert_eq!(guard(&student, UserRole::Student), Access::Granted);
        assert_eq!(guard(&teacher, UserRole::Teacher), Access::Granted);
        assert_eq!(
            guard(&teacher, UserRole::Student),
            Access::Redirect(RedirectTarget::Home)
        );
        assert_eq!(
            guard(&AuthSession::SignedOut, UserRole::Teacher),
            Access::Redirect(RedirectTarget::Home)
        );
    }

    #[test]
    fn pending_hydration_adopts_stored_record() {
        let mut hydration = Hydration::default();
        let kept = hydration.settle(AuthSession::SignedOut, AuthSession::SignedIn(UserRole::Student));
        assert_eq!(kept, AuthSession::SignedIn(UserRole::Student));
        assert_eq!(hydration, Hydration::Ready);
    }

    #[test]
    fn role_paths() {
        assert_eq!(UserRole::Student.portal_path(), "/student");
        assert_eq!(UserRole::Teacher.portal_path(), "/teacher");
        assert_eq!(RedirectTarget::Home.path(), "/");
    }
}
