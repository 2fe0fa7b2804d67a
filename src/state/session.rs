//! Session store: the single owner of authentication state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Login, registration, user refresh, and logout all funnel through
//! [`SessionStore`]. The navigation guard and user-aware components read
//! snapshots; nothing outside this module mutates the session.
//!
//! ERROR HANDLING
//! ==============
//! Every network or decoding failure is absorbed here: `login`/`register`
//! return an [`ActionOutcome`] for the form to display, `fetch_user` and
//! `initialize` normalize to the anonymous state. Nothing propagates to
//! callers as a fault.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::atomic::{AtomicU64, Ordering};

use leptos::prelude::*;

use crate::net::api::{self, AuthError};
use crate::net::types::{Credentials, Registration, User};
use crate::util::token;

const LOGIN_OK: &str = "Вхід успішний";
const LOGIN_FAILED: &str = "Вхід не вдалося. Спробуйте ще раз.";
const REGISTER_OK: &str = "Реєстрація успішна";
const REGISTER_FAILED: &str = "Реєстрація не вдалася. Спробуйте ще раз.";
const UNEXPECTED_RESPONSE: &str = "Несподівана відповідь від сервера";

/// In-memory authentication state for the current browser tab.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    pub is_authenticated: bool,
    pub user: Option<User>,
}

impl Session {
    /// Collapse a user-fetch completion into the session.
    ///
    /// Any failure lands on exactly the cleared state; no partial fields
    /// survive a failed fetch.
    pub fn apply_fetch(&mut self, fetched: Option<User>) {
        match fetched {
            Some(user) => {
                self.is_authenticated = true;
                self.user = Some(user);
            }
            None => self.reset(),
        }
    }

    /// Mark the session authenticated before the user record arrives.
    pub fn mark_authenticated(&mut self) {
        self.is_authenticated = true;
    }

    /// Return to the anonymous state.
    pub fn reset(&mut self) {
        self.is_authenticated = false;
        self.user = None;
    }

    /// Whether the current user carries the admin flag.
    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(|u| u.is_admin)
    }
}

/// Monotonic ticket counter used to discard stale async completions.
///
/// Every session-mutating round-trip takes a ticket before it starts; its
/// completion is applied only while that ticket is still the newest. A slow
/// earlier call can never overwrite state written by a later one.
#[derive(Debug, Default)]
pub struct StaleGuard {
    latest: AtomicU64,
}

impl StaleGuard {
    /// Take the next ticket.
    pub fn issue(&self) -> u64 {
        self.latest.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Whether `ticket` is still the newest one issued.
    pub fn admits(&self, ticket: u64) -> bool {
        self.latest.load(Ordering::Relaxed) == ticket
    }
}

/// Result surfaced to the login and registration forms.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionOutcome {
    pub success: bool,
    pub message: String,
}

impl ActionOutcome {
    fn ok(message: &str) -> Self {
        Self {
            success: true,
            message: message.to_owned(),
        }
    }

    fn failed(error: &AuthError, fallback: &'static str) -> Self {
        Self {
            success: false,
            message: outcome_message(error, fallback),
        }
    }
}

/// Translate an auth failure into the message shown to the user.
fn outcome_message(error: &AuthError, fallback: &'static str) -> String {
    match error {
        AuthError::MissingToken => UNEXPECTED_RESPONSE.to_owned(),
        AuthError::Rejected(Some(msg)) => msg.clone(),
        AuthError::Rejected(None) | AuthError::Network => fallback.to_owned(),
    }
}

/// Reactive session store provided once as context from the app root.
///
/// The four actions below are the only writers of [`Session`]; components
/// observe via [`SessionStore::snapshot`] and the convenience getters.
#[derive(Clone, Copy)]
pub struct SessionStore {
    session: RwSignal<Session>,
    requests: StoredValue<StaleGuard>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            session: RwSignal::new(Session::default()),
            requests: StoredValue::new(StaleGuard::default()),
        }
    }

    /// Reactive read of the whole session.
    pub fn snapshot(&self) -> Session {
        self.session.get()
    }

    /// Reactive read of the authentication flag.
    pub fn is_authenticated(&self) -> bool {
        self.session.get().is_authenticated
    }

    /// Reactive read of the current user record.
    pub fn user(&self) -> Option<User> {
        self.session.get().user
    }

    /// Authenticate against `/auth/login`.
    ///
    /// On success the token is persisted before this future resolves, the
    /// session flips to authenticated, and the user record is refreshed.
    pub async fn login(&self, credentials: &Credentials) -> ActionOutcome {
        let ticket = self.requests.with_value(StaleGuard::issue);
        match api::login(credentials).await {
            Ok(access_token) => {
                token::store(&access_token);
                if self.requests.with_value(|r| r.admits(ticket)) {
                    self.session.update(Session::mark_authenticated);
                }
                self.fetch_user().await;
                ActionOutcome::ok(LOGIN_OK)
            }
            Err(error) => ActionOutcome::failed(&error, LOGIN_FAILED),
        }
    }

    /// Create an account against `/auth/register`; same contract as
    /// [`SessionStore::login`] with a 201 success status.
    pub async fn register(&self, data: &Registration) -> ActionOutcome {
        let ticket = self.requests.with_value(StaleGuard::issue);
        match api::register(data).await {
            Ok(access_token) => {
                token::store(&access_token);
                if self.requests.with_value(|r| r.admits(ticket)) {
                    self.session.update(Session::mark_authenticated);
                }
                self.fetch_user().await;
                ActionOutcome::ok(REGISTER_OK)
            }
            Err(error) => ActionOutcome::failed(&error, REGISTER_FAILED),
        }
    }

    /// Refresh the user record from `/auth/me`.
    ///
    /// Any failure leaves exactly the anonymous state. Never fails outward.
    pub async fn fetch_user(&self) {
        let ticket = self.requests.with_value(StaleGuard::issue);
        let fetched = api::fetch_me().await;
        if !self.requests.with_value(|r| r.admits(ticket)) {
            // A later action owns the session now; drop this completion.
            return;
        }
        self.session.update(|s| s.apply_fetch(fetched));
    }

    /// Drop the persisted token and return to the anonymous state.
    ///
    /// Cleanup is unconditional: there is no fallible step ahead of it, and
    /// issuing a fresh ticket discards any in-flight completion.
    pub fn logout(&self) {
        self.requests.with_value(StaleGuard::issue);
        token::clear();
        self.session.update(Session::reset);
    }

    /// Restore the session from the persisted token at startup.
    ///
    /// Without a token the session stays anonymous and no request is made.
    pub async fn initialize(&self) {
        if token::load().is_none() {
            return;
        }
        self.fetch_user().await;
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}
