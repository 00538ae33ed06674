use dioxus::prelude::*;
use shared_types::{AuthSession, Hydration, UserRole, AUTH_STORAGE_KEY};

use crate::storage;

/// Global sign-in state, provided once by `App`.
///
/// Every mutation is echoed to storage under `"auth"` before returning.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AuthContext {
    pub session: Signal<AuthSession>,
    pub hydration: Signal<Hydration>,
}

impl AuthContext {
    pub fn new() -> Self {
        Self {
            session: Signal::new(AuthSession::SignedOut),
            hydration: Signal::new(Hydration::default()),
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.session.read().is_logged_in()
    }

    pub fn role(&self) -> Option<UserRole> {
        self.session.read().role()
    }

    pub fn is_ready(&self) -> bool {
        *self.hydration.read() == Hydration::Ready
    }

    pub fn sign_in(&mut self, role: UserRole) {
        self.session.write().sign_in(role);
        persist(&self.session.read());
        self.settle_early();
        tracing::info!(role = role.as_str(), "signed in");
    }

    pub fn sign_out(&mut self) {
        let previous = self.role();
        self.session.write().sign_out();
        persist(&self.session.read());
        self.settle_early();
        tracing::info!(role = previous.map(|r| r.as_str()), "signed out");
    }

    // A choice made before the stored record arrives wins over it.
    fn settle_early(&mut self) {
        if *self.hydration.peek() == Hydration::Pending {
            self.hydration.set(Hydration::Ready);
        }
    }

    /// Apply the raw stored record and mark hydration complete.
    pub fn restore(&mut self, raw: Option<String>) {
        let stored = match raw.as_deref() {
            Some(raw) => AuthSession::parse_stored(raw).unwrap_or_else(|err| {
                tracing::warn!(error = %err, "ignoring malformed stored auth record");
                AuthSession::SignedOut
            }),
            None => AuthSession::from_stored(None),
        };
        let live = *self.session.peek();
        let kept = self.hydration.write().settle(live, stored);
        if kept != stored {
            tracing::debug!("session changed during hydration; stored record ignored");
            return;
        }
        if let Some(role) = kept.role() {
            tracing::debug!(role = role.as_str(), "restored session");
        }
        self.session.set(kept);
    }
}

fn persist(session: &AuthSession) {
    match session.to_stored() {
        Some(value) => storage::write(AUTH_STORAGE_KEY, &value),
        None => storage::remove(AUTH_STORAGE_KEY),
    }
}

/// Hook to access auth state.
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>()
}

/// Read the stored record once on mount and hydrate the context.
pub fn use_restore_auth() {
    let mut auth = use_auth();
    use_hook(move || {
        spawn(async move {
            let raw = storage::read(AUTH_STORAGE_KEY).await;
            auth.restore(raw);
        });
    });
}
